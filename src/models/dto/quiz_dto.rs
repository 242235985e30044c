use serde::Serialize;

use crate::models::domain::{Question, QuestionOption, QuestionType, Quiz};

/// What a test-taker sees: active questions only, no answer key.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizForStudentDto {
    pub quiz_id: String,
    pub title: String,
    pub time_limit_minutes: u32,
    pub questions: Vec<QuestionForStudentDto>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionForStudentDto {
    pub question_id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub options: Vec<OptionForStudentDto>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionForStudentDto {
    pub option_id: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResultDto {
    pub attempt_id: String,
    pub score: u32,
    pub total_questions: u32,
    pub passed: bool,
}

impl QuizForStudentDto {
    pub fn project(quiz: &Quiz, questions: &[Question]) -> Self {
        QuizForStudentDto {
            quiz_id: quiz.id.clone(),
            title: quiz.title.clone(),
            time_limit_minutes: quiz.time_limit_minutes,
            questions: questions
                .iter()
                .filter(|q| q.quiz_id == quiz.id && q.is_active())
                .map(QuestionForStudentDto::from)
                .collect(),
        }
    }
}

impl From<&Question> for QuestionForStudentDto {
    fn from(question: &Question) -> Self {
        QuestionForStudentDto {
            question_id: question.id.clone(),
            text: question.text.clone(),
            question_type: question.question_type,
            options: question.options.iter().map(OptionForStudentDto::from).collect(),
        }
    }
}

impl From<&QuestionOption> for OptionForStudentDto {
    fn from(option: &QuestionOption) -> Self {
        OptionForStudentDto {
            option_id: option.id.clone(),
            text: option.text.clone(),
        }
    }
}
