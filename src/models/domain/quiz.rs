use serde::{Deserialize, Serialize};

/// One multiple-choice question as emitted by the model. `correct_index` is
/// trusted model output; it is compared against selections but never range
/// checked against `options`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctIndex")]
    pub correct_index: usize,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizData {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    InProgress,
    Completed,
}

/// Result of answering the current question.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_index: usize,
    pub explanation: String,
}

/// Turn-by-turn state for one quiz run. Selecting an option locks the current
/// question, advancing past the last question completes the session, and
/// `reset` replays the same questions from the start without re-fetching.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: QuizData,
    phase: QuizPhase,
    current_index: usize,
    score: u32,
    answers: Vec<Option<usize>>,
}

impl QuizSession {
    pub fn new(quiz: QuizData) -> Self {
        let answers = vec![None; quiz.questions.len()];
        let phase = if quiz.questions.is_empty() {
            QuizPhase::Completed
        } else {
            QuizPhase::InProgress
        };
        Self {
            quiz,
            phase,
            current_index: 0,
            score: 0,
            answers,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.phase == QuizPhase::Completed
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn question_count(&self) -> usize {
        self.quiz.questions.len()
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.quiz.questions
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.is_completed() {
            return None;
        }
        self.quiz.questions.get(self.current_index)
    }

    /// The option picked for the current question, if it has been answered.
    pub fn selected_answer(&self) -> Option<usize> {
        self.answers.get(self.current_index).copied().flatten()
    }

    /// Record an answer for the current question. The first selection locks
    /// the question and scores it; repeated selections (or selections after
    /// completion) are ignored and return `None`.
    pub fn select_answer(&mut self, option_index: usize) -> Option<AnswerOutcome> {
        if self.is_completed() {
            return None;
        }
        if self.answers[self.current_index].is_some() {
            return None;
        }

        let question = &self.quiz.questions[self.current_index];
        self.answers[self.current_index] = Some(option_index);

        let correct = option_index == question.correct_index;
        if correct {
            self.score += 1;
        }

        Some(AnswerOutcome {
            correct,
            correct_index: question.correct_index,
            explanation: question.explanation.clone(),
        })
    }

    /// Move on from the current question. Advancing from the last question
    /// completes the session.
    pub fn advance(&mut self) {
        if self.is_completed() {
            return;
        }
        if self.current_index + 1 < self.quiz.questions.len() {
            self.current_index += 1;
        } else {
            self.phase = QuizPhase::Completed;
        }
    }

    /// Restart the run over the same questions: index 0, score 0, every
    /// question unanswered.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.answers = vec![None; self.quiz.questions.len()];
        self.phase = if self.quiz.questions.is_empty() {
            QuizPhase::Completed
        } else {
            QuizPhase::InProgress
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_question_quiz() -> QuizData {
        QuizData {
            questions: vec![
                QuizQuestion {
                    question: "2 + 2 = ?".to_string(),
                    options: vec!["3".into(), "4".into(), "5".into(), "6".into()],
                    correct_index: 1,
                    explanation: "2 + 2 equals 4.".to_string(),
                },
                QuizQuestion {
                    question: "10 / 2 = ?".to_string(),
                    options: vec!["2".into(), "4".into(), "5".into(), "10".into()],
                    correct_index: 2,
                    explanation: "Ten divided by two is five.".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_new_session_starts_at_first_question() {
        let session = QuizSession::new(two_question_quiz());

        assert_eq!(session.phase(), QuizPhase::InProgress);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.question_count(), 2);
        assert_eq!(session.current_question().unwrap().question, "2 + 2 = ?");
    }

    #[test]
    fn test_correct_answer_increments_score() {
        let mut session = QuizSession::new(two_question_quiz());

        let outcome = session.select_answer(1).unwrap();
        assert!(outcome.correct);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_wrong_answer_reveals_explanation_without_scoring() {
        let mut session = QuizSession::new(two_question_quiz());

        let outcome = session.select_answer(0).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.correct_index, 1);
        assert_eq!(outcome.explanation, "2 + 2 equals 4.");
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_second_selection_on_same_question_is_locked_out() {
        let mut session = QuizSession::new(two_question_quiz());

        assert!(session.select_answer(0).is_some());
        assert!(session.select_answer(1).is_none());
        assert_eq!(session.selected_answer(), Some(0));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_advancing_past_last_question_completes_session() {
        let mut session = QuizSession::new(two_question_quiz());

        session.select_answer(1);
        session.advance();
        assert_eq!(session.phase(), QuizPhase::InProgress);
        assert_eq!(session.current_index(), 1);

        session.select_answer(2);
        session.advance();
        assert_eq!(session.phase(), QuizPhase::Completed);
        assert_eq!(session.score(), 2);
        assert!(session.current_question().is_none());
        assert!(session.select_answer(0).is_none());
    }

    #[test]
    fn test_score_stays_within_bounds() {
        let mut session = QuizSession::new(two_question_quiz());

        for _ in 0..2 {
            session.select_answer(1);
            session.advance();
        }

        assert!(session.score() as usize <= session.question_count());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session = QuizSession::new(two_question_quiz());

        session.select_answer(1);
        session.advance();
        session.select_answer(2);
        session.advance();
        assert!(session.is_completed());

        session.reset();
        assert_eq!(session.phase(), QuizPhase::InProgress);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.selected_answer(), None);
    }

    #[test]
    fn test_empty_quiz_starts_completed() {
        let session = QuizSession::new(QuizData { questions: vec![] });
        assert!(session.is_completed());
        assert_eq!(session.score(), 0);
    }
}
