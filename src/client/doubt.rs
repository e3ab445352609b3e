use std::time::Duration;

use crate::{
    client::TutorClient,
    errors::{AppError, AppResult},
    models::dto::request::TutorRequest,
};

/// Shown verbatim when both attempts fail; the underlying error never reaches
/// the end user on this path.
pub const FALLBACK_MESSAGE: &str = "I'm having trouble generating an answer right now.\nPlease try rephrasing your question or try again in a moment.";

pub const SCHOOL_LEVEL: &str = "School Level";
pub const COLLEGE_LEVEL: &str = "College Level";

const SIMPLIFY_PREFIX: &str = "Please simplify this explanation in very simple terms: ";

const MAX_RETRIES: u32 = 1;
const RETRY_DELAY: Duration = Duration::from_secs(1);

impl TutorClient {
    /// Submit an academic question. A blank question is rejected before any
    /// network call. A failed attempt (transport error, error response, or
    /// empty content) is retried once after a one-second delay; when both
    /// attempts fail the fixed fallback message is returned as the answer.
    pub async fn answer_doubt(
        &self,
        question: &str,
        subject: &str,
        level: &str,
    ) -> AppResult<String> {
        if question.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Please enter a question before submitting.".to_string(),
            ));
        }

        let request = TutorRequest::Doubt {
            question: question.to_string(),
            subject: subject.to_string(),
            level: level.to_string(),
            simplify: false,
        };

        let mut attempt = 0;
        loop {
            match self.invoke(&request).await {
                Ok(content) if !content.trim().is_empty() => return Ok(content),
                Ok(_) => log::warn!("Attempt {} returned an empty answer", attempt + 1),
                Err(e) => log::warn!("Attempt {} failed: {}", attempt + 1, e),
            }

            attempt += 1;
            if attempt > MAX_RETRIES {
                return Ok(FALLBACK_MESSAGE.to_string());
            }
            tokio::time::sleep(RETRY_DELAY).await;
        }
    }

    /// Re-ask for the currently displayed answer in simpler terms. Always
    /// sent at school level with the simplify flag set; no retry, so a
    /// failure leaves the caller's previous answer untouched.
    pub async fn simplify_answer(&self, current_answer: &str, subject: &str) -> AppResult<String> {
        let request = TutorRequest::Doubt {
            question: format!("{}{}", SIMPLIFY_PREFIX, current_answer),
            subject: subject.to_string(),
            level: SCHOOL_LEVEL.to_string(),
            simplify: true,
        };

        self.invoke(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_blank_question_is_rejected_without_network() {
        // Port 9 is unroutable; reaching the network would surface as the
        // fallback answer instead of a validation error.
        let client = TutorClient::new("http://127.0.0.1:9");

        for question in ["", "   ", "\n\t"] {
            let result = client.answer_doubt(question, "science", SCHOOL_LEVEL).await;
            match result {
                Err(AppError::ValidationError(message)) => {
                    assert_eq!(message, "Please enter a question before submitting.");
                }
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_fallback_message_is_fixed() {
        assert!(FALLBACK_MESSAGE.starts_with("I'm having trouble generating an answer"));
        assert!(FALLBACK_MESSAGE.contains('\n'));
    }

    #[test]
    fn test_level_tiers() {
        assert_ne!(SCHOOL_LEVEL, COLLEGE_LEVEL);
    }
}
