use serde::{Deserialize, Serialize};

/// A generated puzzle, parsed from the JSON object the model is instructed to
/// emit. All four fields must be present; a puzzle is never shown partially.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleData {
    pub puzzle: String,
    pub hint: String,
    pub solution: String,
    pub explanation: String,
}
