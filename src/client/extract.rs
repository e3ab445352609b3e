use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;

use crate::errors::{AppError, AppResult};

// Greedy first-to-last brace match. Models often wrap the object in prose or
// a code fence, so anything outside the outermost braces is discarded.
static JSON_OBJECT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[\s\S]*\}").expect("JSON_OBJECT_PATTERN is a valid regex pattern"));

pub fn extract_first_json_object(content: &str) -> Option<&str> {
    JSON_OBJECT_PATTERN.find(content).map(|m| m.as_str())
}

/// Pull the embedded JSON object out of model output and deserialize it.
/// No object or a shape mismatch fails the whole operation; callers never see
/// partial data.
pub fn parse_embedded_json<T: DeserializeOwned>(content: &str) -> AppResult<T> {
    let object = extract_first_json_object(content).ok_or_else(|| {
        AppError::MalformedResponse("no JSON object found in model output".to_string())
    })?;

    serde_json::from_str(object).map_err(|e| AppError::MalformedResponse(e.to_string()))
}
