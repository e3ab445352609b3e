use crate::{
    client::{extract::parse_embedded_json, TutorClient},
    errors::AppResult,
    models::domain::quiz::{QuizData, QuizSession},
    models::dto::request::TutorRequest,
};

impl TutorClient {
    /// Fetch a fresh quiz and open a session over it. Parsing follows the
    /// same extract-or-fail policy as puzzles; `correctIndex` values are
    /// trusted as-is from the model.
    pub async fn start_quiz(&self, subject: &str, question_count: u32) -> AppResult<QuizSession> {
        let request = TutorRequest::Quiz {
            quiz_subject: subject.to_string(),
            quiz_question_count: Some(question_count),
        };

        let content = self.invoke(&request).await?;
        let quiz: QuizData = parse_embedded_json(&content)?;

        Ok(QuizSession::new(quiz))
    }
}
