use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Seam to the external chat-completion API. One synchronous (non-streaming)
/// exchange per call; implementations normalize upstream failures into
/// `AppError` so callers never see raw gateway responses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatCompletionGateway: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

pub struct HttpChatGateway {
    http: reqwest::Client,
    config: Arc<Config>,
}

impl HttpChatGateway {
    pub fn new(config: Arc<Config>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }
}

#[async_trait]
impl ChatCompletionGateway for HttpChatGateway {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String> {
        let request = ChatCompletionRequest {
            model: &self.config.ai_model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            stream: false,
        };

        let response = self
            .http
            .post(&self.config.ai_gateway_url)
            .bearer_auth(self.config.ai_api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                log::error!("Failed to reach AI gateway: {}", e);
                AppError::InternalError(format!("Failed to reach AI gateway: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(AppError::RateLimited);
            }
            if status == StatusCode::PAYMENT_REQUIRED {
                return Err(AppError::ServiceUnavailable);
            }

            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read response body".to_string());
            log::error!("AI gateway error: {} {}", status, body);
            return Err(AppError::UpstreamError);
        }

        let body: ChatCompletionResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse AI gateway response: {}", e);
            AppError::InternalError(format!("Failed to parse AI gateway response: {}", e))
        })?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        Ok(content)
    }
}
