use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{chat_gateway::HttpChatGateway, tutor_service::TutorService},
};

#[derive(Clone)]
pub struct AppState {
    pub tutor_service: Arc<TutorService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let config = Arc::new(config);

        let gateway = Arc::new(HttpChatGateway::new(Arc::clone(&config))?);
        let tutor_service = Arc::new(TutorService::new(gateway));

        Ok(Self {
            tutor_service,
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_builds_from_test_config() {
        let state = AppState::new(Config::test_config()).unwrap();
        assert_eq!(state.config.ai_model, "test-model");
    }
}
