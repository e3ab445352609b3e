pub mod puzzle;
pub mod quiz;

pub use puzzle::PuzzleData;
pub use quiz::{AnswerOutcome, QuizData, QuizPhase, QuizQuestion, QuizSession};
