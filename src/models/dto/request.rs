use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{Difficulty, QuestionType};

const OPTION_TEXT_MAX: usize = 500;
const QUESTION_TEXT_MAX: usize = 2000;

fn max_chars(value: &str, max: usize, message: &'static str) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::new("length").with_message(message.into()));
    }
    Ok(())
}

fn option_text_max(text: &str) -> Result<(), ValidationError> {
    max_chars(text, OPTION_TEXT_MAX, "Option text must be at most 500 characters.")
}

fn question_text_max(text: &str) -> Result<(), ValidationError> {
    max_chars(text, QUESTION_TEXT_MAX, "Question text must be at most 2000 characters.")
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOptionRequest {
    #[validate(
        length(min = 1, message = "Option text is required."),
        custom(function = "option_text_max")
    )]
    pub text: String,

    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, message = "Quiz id is required."))]
    pub quiz_id: String,

    #[validate(
        length(min = 1, message = "Question text is required."),
        custom(function = "question_text_max")
    )]
    pub text: String,

    #[serde(rename = "type")]
    pub question_type: QuestionType,

    #[validate(length(min = 1, message = "Options are required."), nested)]
    pub options: Vec<CreateOptionRequest>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, message = "Course id is required."))]
    pub course_id: String,

    #[validate(range(min = 1, message = "Time limit must be at least one minute."))]
    pub time_limit_minutes: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(range(min = 1, message = "Time limit must be at least one minute."))]
    pub time_limit_minutes: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAnswerInput {
    pub question_id: String,
    #[serde(default)]
    pub selected_option_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizRequest {
    #[validate(length(min = 1, message = "Quiz id is required."))]
    pub quiz_id: String,

    #[serde(default)]
    pub answers: Vec<StudentAnswerInput>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 5000))]
    pub description: String,

    #[validate(length(min = 1, max = 100, message = "Category is required."))]
    pub category: String,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default)]
    pub estimated_duration: u32,

    #[validate(length(max = 2048))]
    #[serde(default)]
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 5000))]
    pub description: String,

    #[validate(length(min = 1, max = 100, message = "Category is required."))]
    pub category: String,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default)]
    pub estimated_duration: u32,

    #[validate(length(max = 2048))]
    #[serde(default)]
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptQuery {
    pub quiz_id: Option<String>,
}
