//! HTTP client for the tutor endpoint: doubt submission with retry and a
//! fixed fallback, puzzle and quiz generation with strict parse-or-fail
//! handling, and the in-memory quiz session.

pub mod doubt;
pub mod extract;
pub mod puzzle;
pub mod quiz;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::{
    errors::{AppError, AppResult},
    models::dto::{request::TutorRequest, response::ContentResponse},
};

pub use doubt::FALLBACK_MESSAGE;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct TutorClient {
    http: reqwest::Client,
    base_url: String,
}

impl TutorClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// One round trip to the tutor endpoint. Success yields the raw model
    /// content; non-success statuses are mapped back onto the same error
    /// taxonomy the server uses.
    pub(crate) async fn invoke(&self, request: &TutorRequest) -> AppResult<String> {
        let url = format!("{}/api/tutor", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::TransportError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("tutor endpoint returned {}", status));

            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => AppError::RateLimited,
                StatusCode::PAYMENT_REQUIRED => AppError::ServiceUnavailable,
                StatusCode::BAD_REQUEST => AppError::ValidationError(error),
                _ => {
                    log::warn!("Tutor endpoint error: {} {}", status, error);
                    AppError::UpstreamError
                }
            });
        }

        let body: ContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::MalformedResponse(e.to_string()))?;

        Ok(body.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = TutorClient::new("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
