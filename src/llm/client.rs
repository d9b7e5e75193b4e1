use super::types::{GenerateRequest, GenerateResponse};
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Sends a prompt to a language model and returns its raw text output.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Client for an Ollama-compatible `/api/generate` endpoint.
pub struct OllamaClient {
    client: Client,
    endpoint: String,
    model: String,
    timeout_secs: u64,
}

impl OllamaClient {
    pub fn new(config: InferenceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let endpoint = format!("{}/api/generate", config.base_url.trim_end_matches('/'));

        Ok(Self {
            client,
            endpoint,
            model: config.model,
            timeout_secs: config.timeout_secs,
        })
    }

    fn map_send_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout {
                seconds: self.timeout_secs,
            }
        } else {
            Error::Network(e)
        }
    }
}

#[async_trait]
impl ModelClient for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "Sending generate request to {}",
            self.endpoint
        );

        let request = GenerateRequest::new(&self.model, prompt);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Inference backend responded with status {}", status);
            return Err(Error::BackendStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| self.map_send_error(e))?;
        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| Error::Decode(e.to_string()))?;

        let output = parsed.response.ok_or_else(|| Error::missing_field("response"))?;

        debug!("Received {} characters from model", output.len());
        Ok(output)
    }
}
