//! Extraction of a JSON object embedded in free-form model output.
//!
//! Models tend to wrap the object in prose or code fences. The object is
//! taken to span from the first `{` to the last `}` inclusive.

use crate::{Error, Result};
use serde_json::Value;

pub fn extract_json(output: &str) -> Result<Value> {
    let start = output
        .find('{')
        .ok_or_else(|| Error::BraceNotFound("no '{' in model output".to_string()))?;
    let end = output
        .rfind('}')
        .ok_or_else(|| Error::BraceNotFound("no '}' in model output".to_string()))?;

    if end < start {
        return Err(Error::BraceNotFound(
            "last '}' precedes first '{' in model output".to_string(),
        ));
    }

    let value = serde_json::from_str(&output[start..=end])?;
    Ok(value)
}
