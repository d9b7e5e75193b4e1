use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub submission_id: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct VivaAnswerRequest {
    /// Accepted for client compatibility; scoring does not read it.
    #[serde(default)]
    pub submission_id: Option<String>,
    pub answer: String,
    pub attention_score: f64,
    pub risk_score: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
