use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,

    #[error("Service temporarily unavailable. Please try again later.")]
    ServiceUnavailable,

    /// Upstream returned a non-success status other than 429/402. The raw
    /// status and body are logged where the failure is observed; clients only
    /// ever see this fixed message.
    #[error("Failed to get AI response")]
    UpstreamError,

    #[error("Request failed: {0}")]
    TransportError(String),

    #[error("Malformed model output: {0}")]
    MalformedResponse(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::ServiceUnavailable => StatusCode::PAYMENT_REQUIRED,
            AppError::UpstreamError => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::TransportError(_) => StatusCode::BAD_GATEWAY,
            AppError::MalformedResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

pub type AppResult<T> = Result<T, AppError>;
