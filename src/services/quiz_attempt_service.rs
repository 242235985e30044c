use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Question, QuestionType, QuizAttempt, QuizAttemptAnswer},
        dto::request::StudentAnswerInput,
    },
    repositories::QuizAttemptRepository,
};

pub const PASS_THRESHOLD_PERCENT: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeOutcome {
    pub score: u32,
    pub total_questions: u32,
    pub passed: bool,
    pub answers: Vec<QuizAttemptAnswer>,
}

pub struct QuizAttemptService {
    repository: Arc<dyn QuizAttemptRepository>,
}

impl QuizAttemptService {
    pub fn new(repository: Arc<dyn QuizAttemptRepository>) -> Self {
        Self { repository }
    }

    /// Grade a submission against the quiz's active questions.
    ///
    /// Every active question counts toward the total; answers for questions
    /// outside that set are ignored. A question with no selection scores zero.
    pub fn grade_submission(
        questions: &[Question],
        answers: &[StudentAnswerInput],
    ) -> AppResult<GradeOutcome> {
        let mut seen = HashSet::new();
        for answer in answers {
            if !seen.insert(answer.question_id.as_str()) {
                return Err(AppError::ValidationFailed(format!(
                    "Question '{}' was answered more than once.",
                    answer.question_id
                )));
            }
        }

        let selections: HashMap<&str, Option<&str>> = answers
            .iter()
            .map(|a| (a.question_id.as_str(), a.selected_option_id.as_deref()))
            .collect();

        let mut score = 0;
        let mut graded = Vec::new();

        for question in questions.iter().filter(|q| q.is_active()) {
            let selected = selections.get(question.id.as_str()).copied().flatten();
            let is_correct = selected
                .map(|option_id| Self::grade_question(question, option_id))
                .unwrap_or(false);

            if is_correct {
                score += 1;
            }

            graded.push(QuizAttemptAnswer {
                question_id: question.id.clone(),
                selected_option_id: selected.map(str::to_string),
                is_correct,
            });
        }

        let total_questions = graded.len() as u32;

        Ok(GradeOutcome {
            score,
            total_questions,
            passed: Self::has_passed(score, total_questions),
            answers: graded,
        })
    }

    fn grade_question(question: &Question, selected_option_id: &str) -> bool {
        match question.question_type {
            QuestionType::SingleChoice => {
                let mut correct = question.correct_option_ids();
                match (correct.next(), correct.next()) {
                    (Some(correct_id), None) => correct_id == selected_option_id,
                    _ => false,
                }
            }
            // One selection per question: it scores when it is one of the keyed options.
            QuestionType::MultipleChoice => question
                .correct_option_ids()
                .any(|correct_id| correct_id == selected_option_id),
        }
    }

    pub fn has_passed(score: u32, total_questions: u32) -> bool {
        total_questions > 0 && score * 100 >= total_questions * PASS_THRESHOLD_PERCENT
    }

    /// Append one immutable attempt. Storage errors propagate as-is.
    pub async fn record_attempt(
        &self,
        quiz_id: &str,
        student_id: &str,
        outcome: GradeOutcome,
    ) -> AppResult<QuizAttempt> {
        let attempt = QuizAttempt {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz_id.to_string(),
            student_id: student_id.to_string(),
            score: outcome.score,
            total_questions: outcome.total_questions,
            passed: outcome.passed,
            answers: outcome.answers,
            created_at: Utc::now(),
        };

        let attempt = self.repository.create(attempt).await?;
        log::info!(
            "Recorded attempt {} for quiz {} by {}: {}/{}",
            attempt.id,
            attempt.quiz_id,
            attempt.student_id,
            attempt.score,
            attempt.total_questions
        );
        Ok(attempt)
    }

    pub async fn attempts_for_student(
        &self,
        student_id: &str,
        quiz_id: Option<&str>,
    ) -> AppResult<Vec<QuizAttempt>> {
        match quiz_id {
            Some(quiz_id) => {
                self.repository
                    .find_by_student_and_quiz(student_id, quiz_id)
                    .await
            }
            None => self.repository.find_by_student(student_id).await,
        }
    }
}
