use std::sync::Arc;

use crate::{
    constants::prompts,
    errors::AppResult,
    models::dto::request::{effective_question_count, TutorRequest},
    services::chat_gateway::ChatCompletionGateway,
};

/// Builds the prompt pair for a request and relays it through the gateway.
/// Stateless; one gateway call per request, nothing retained across calls.
pub struct TutorService {
    gateway: Arc<dyn ChatCompletionGateway>,
}

impl TutorService {
    pub fn new(gateway: Arc<dyn ChatCompletionGateway>) -> Self {
        Self { gateway }
    }

    pub async fn answer(&self, request: TutorRequest) -> AppResult<String> {
        let (system_prompt, user_prompt) = match &request {
            TutorRequest::Doubt {
                question,
                subject,
                level,
                simplify,
            } => prompts::doubt_prompts(question, subject, level, *simplify),
            TutorRequest::Puzzle { puzzle_difficulty } => {
                prompts::puzzle_prompts(puzzle_difficulty)
            }
            TutorRequest::Quiz {
                quiz_subject,
                quiz_question_count,
            } => prompts::quiz_prompts(
                quiz_subject,
                effective_question_count(*quiz_question_count),
            ),
        };

        log::info!("Forwarding {} request to the AI gateway", request.task_name());

        self.gateway.complete(&system_prompt, &user_prompt).await
    }
}
