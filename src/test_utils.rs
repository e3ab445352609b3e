use crate::models::domain::quiz::{QuizData, QuizQuestion};
