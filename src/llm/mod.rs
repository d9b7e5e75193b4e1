mod client;
mod types;

pub use client::{ModelClient, OllamaClient};
pub use types::{GenerateRequest, GenerateResponse};
