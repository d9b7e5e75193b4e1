use async_trait::async_trait;
use viva_backend::{Error, Result, llm::ModelClient};
use std::sync::{Arc, Mutex};

/// Mock model client for testing
#[derive(Debug)]
pub struct MockModelClient {
    pub responses: Arc<Mutex<Vec<String>>>,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
}

impl MockModelClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<&str>) -> Self {
        *self.responses.lock().unwrap() = responses.into_iter().map(String::from).collect();
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for MockModelClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::Decode(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::internal("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockModelClient {
    fn default() -> Self {
        Self::new()
    }
}
