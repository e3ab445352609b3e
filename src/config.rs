use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub ai_gateway_url: String,
    pub ai_api_key: SecretString,
    pub ai_model: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub upstream_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            ai_gateway_url: env::var("AI_GATEWAY_URL").unwrap_or_else(|_| {
                "https://ai.gateway.lovable.dev/v1/chat/completions".to_string()
            }),
            ai_api_key: SecretString::from(env::var("AI_GATEWAY_API_KEY").unwrap_or_default()),
            ai_model: env::var("AI_MODEL")
                .unwrap_or_else(|_| "google/gemini-3-flash-preview".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Validate that the upstream credential is set before serving traffic.
    /// Panics so a misconfigured deployment fails at startup rather than
    /// answering every request with a 500.
    pub fn validate_at_startup(&self) {
        use secrecy::ExposeSecret;

        if self.ai_api_key.expose_secret().is_empty() {
            panic!(
                "FATAL: AI_GATEWAY_API_KEY is not configured! Set AI_GATEWAY_API_KEY to the gateway bearer credential."
            );
        }

        if self.ai_gateway_url.is_empty() {
            panic!("FATAL: AI_GATEWAY_URL is empty! Set AI_GATEWAY_URL to the chat-completion endpoint.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            ai_gateway_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            ai_api_key: SecretString::from("test_api_key".to_string()),
            ai_model: "test-model".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            upstream_timeout_secs: 5,
        }
    }
}
