pub mod assessment;
pub mod config;
pub mod error;
pub mod llm;
pub mod parser;
pub mod scoring;
pub mod server;
pub mod store;
pub mod submission;

pub use error::{Error, Result};
