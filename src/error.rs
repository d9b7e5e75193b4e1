use axum::http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Submission not found: {submission_id}")]
    NotFound { submission_id: String },

    #[error("Inference backend unavailable: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Inference backend timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Inference backend returned status {status}")]
    BackendStatus { status: u16 },

    #[error("Inference backend returned a non-JSON body: {0}")]
    Decode(String),

    #[error("Inference response is missing field '{field}'")]
    MissingField { field: String },

    #[error("Invalid JSON from model: {0}")]
    BraceNotFound(String),

    #[error("Invalid JSON from model: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Model output does not match {expected}: {reason}")]
    InvalidOutput { expected: String, reason: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn not_found(submission_id: impl Into<String>) -> Self {
        Self::NotFound {
            submission_id: submission_id.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn invalid_output(expected: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOutput {
            expected: expected.into(),
            reason: reason.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status the server reports for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
