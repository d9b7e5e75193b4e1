mod prompts;
mod service;

pub use prompts::{evaluation_prompt, viva_prompt};
pub use service::AssessmentService;
