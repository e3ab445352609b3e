use crate::{
    client::{extract::parse_embedded_json, TutorClient},
    errors::AppResult,
    models::domain::puzzle::PuzzleData,
    models::dto::request::TutorRequest,
};

impl TutorClient {
    /// Request one puzzle of the given difficulty. Single attempt; a failed
    /// request or unparsable content fails the whole call so no partial
    /// puzzle is ever surfaced.
    pub async fn generate_puzzle(&self, difficulty: &str) -> AppResult<PuzzleData> {
        let request = TutorRequest::Puzzle {
            puzzle_difficulty: difficulty.to_string(),
        };

        let content = self.invoke(&request).await?;
        parse_embedded_json(&content)
    }
}
