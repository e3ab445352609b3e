use serde::{Deserialize, Serialize};

/// Success body of the tutor endpoint: the raw model text for the request.
/// Failures are carried by `crate::errors::ErrorResponse` instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentResponse {
    pub content: String,
}

impl From<String> for ContentResponse {
    fn from(content: String) -> Self {
        ContentResponse { content }
    }
}
