mod types;

pub use types::*;

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Checks that parsed model output has the shape `T` and converts it.
fn validate<T: DeserializeOwned>(value: Value, expected: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| Error::invalid_output(expected, e.to_string()))
}

impl Evaluation {
    pub fn from_model_output(value: Value) -> Result<Self> {
        validate(value, "evaluation")
    }
}

impl VivaQuestions {
    pub fn from_model_output(value: Value) -> Result<Self> {
        let parsed: Self = validate(value, "viva questions")?;
        if parsed.questions.is_empty() {
            return Err(Error::invalid_output(
                "viva questions",
                "`questions` is empty",
            ));
        }
        Ok(parsed)
    }
}
