use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scored submission. Written once, never updated.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizAttempt {
    pub id: String,
    pub quiz_id: String,
    pub student_id: String,
    pub score: u32,
    pub total_questions: u32,
    pub passed: bool,
    pub answers: Vec<QuizAttemptAnswer>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizAttemptAnswer {
    pub question_id: String,
    pub selected_option_id: Option<String>,
    pub is_correct: bool,
}
