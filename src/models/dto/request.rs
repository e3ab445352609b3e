use serde::{Deserialize, Serialize};

pub const DEFAULT_QUIZ_QUESTION_COUNT: u32 = 5;

/// Task payload accepted by the tutor endpoint. The wire format uses
/// camelCase field names; the `type` tag selects the variant, and an
/// unrecognized tag fails deserialization instead of falling through to an
/// empty prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TutorRequest {
    Doubt {
        question: String,
        #[serde(default)]
        subject: String,
        #[serde(default)]
        level: String,
        #[serde(default)]
        simplify: bool,
    },
    Puzzle {
        #[serde(rename = "puzzleDifficulty")]
        puzzle_difficulty: String,
    },
    Quiz {
        #[serde(rename = "quizSubject")]
        quiz_subject: String,
        #[serde(
            rename = "quizQuestionCount",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        quiz_question_count: Option<u32>,
    },
}

impl TutorRequest {
    pub fn task_name(&self) -> &'static str {
        match self {
            TutorRequest::Doubt { .. } => "doubt",
            TutorRequest::Puzzle { .. } => "puzzle",
            TutorRequest::Quiz { .. } => "quiz",
        }
    }
}

/// Effective question count for a quiz request. Absent or zero falls back to
/// the default of 5.
pub fn effective_question_count(count: Option<u32>) -> u32 {
    match count {
        Some(n) if n > 0 => n,
        _ => DEFAULT_QUIZ_QUESTION_COUNT,
    }
}
