use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::dto::request::{CreateOptionRequest, CreateQuestionRequest},
};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub quiz_id: String,
    pub text: String,
    pub question_type: QuestionType,
    pub status: QuestionStatus,
    pub options: Vec<QuestionOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionOption {
    pub id: String,
    pub question_id: String,
    pub text: String,
    pub is_correct: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum QuestionType {
    SingleChoice,
    MultipleChoice,
}

/// Draft -> Active -> (Active <-> Inactive). Deletion removes the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum QuestionStatus {
    Draft,
    Active,
    Inactive,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::SingleChoice => write!(f, "SingleChoice"),
            QuestionType::MultipleChoice => write!(f, "MultipleChoice"),
        }
    }
}

impl FromStr for QuestionType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized: String = value
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "singlechoice" | "single" => Ok(QuestionType::SingleChoice),
            "multiplechoice" | "multiple" | "multi" => Ok(QuestionType::MultipleChoice),
            other => Err(AppError::ValidationFailed(format!(
                "Unknown question type '{}'.",
                other
            ))),
        }
    }
}

impl QuestionOption {
    pub fn new(question_id: &str, text: &str, is_correct: bool) -> Self {
        QuestionOption {
            id: Uuid::new_v4().to_string(),
            question_id: question_id.to_string(),
            text: text.to_string(),
            is_correct,
        }
    }
}

impl Question {
    pub fn new_draft(quiz_id: &str, text: &str, question_type: QuestionType) -> Self {
        Question {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz_id.to_string(),
            text: text.to_string(),
            question_type,
            status: QuestionStatus::Draft,
            options: Vec::new(),
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }

    pub fn from_request(request: CreateQuestionRequest) -> Self {
        let mut question = Question::new_draft(&request.quiz_id, &request.text, request.question_type);
        question.options = build_options(&question.id, &request.options);
        question
    }

    pub fn is_active(&self) -> bool {
        self.status == QuestionStatus::Active
    }

    pub fn correct_option_ids(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .filter(|o| o.is_correct)
            .map(|o| o.id.as_str())
    }

    /// Checks the answer-key invariants for this question's type.
    pub fn validate(&self) -> AppResult<()> {
        check_content(&self.text, self.question_type, &self.options)
    }

    /// Promotes a draft to Active once it passes validation.
    pub fn activate(&mut self) -> AppResult<()> {
        if self.status != QuestionStatus::Draft {
            return Err(AppError::ValidationFailed(
                "Only draft questions can be activated.".to_string(),
            ));
        }
        self.validate()?;
        self.status = QuestionStatus::Active;
        self.modified_at = Some(Utc::now());
        Ok(())
    }

    pub fn toggle_status(&mut self) -> AppResult<QuestionStatus> {
        self.status = match self.status {
            QuestionStatus::Active => QuestionStatus::Inactive,
            QuestionStatus::Inactive => QuestionStatus::Active,
            QuestionStatus::Draft => {
                return Err(AppError::ValidationFailed(
                    "Draft questions cannot be toggled.".to_string(),
                ))
            }
        };
        self.modified_at = Some(Utc::now());
        Ok(self.status)
    }

    /// Replaces text, type and options. Nothing changes if the new content is invalid.
    pub fn replace_content(&mut self, request: &CreateQuestionRequest) -> AppResult<()> {
        let options = build_options(&self.id, &request.options);
        check_content(&request.text, request.question_type, &options)?;

        self.text = request.text.clone();
        self.question_type = request.question_type;
        self.options = options;
        self.modified_at = Some(Utc::now());
        Ok(())
    }
}

fn build_options(question_id: &str, options: &[CreateOptionRequest]) -> Vec<QuestionOption> {
    options
        .iter()
        .map(|o| QuestionOption::new(question_id, &o.text, o.is_correct))
        .collect()
}

fn check_content(text: &str, question_type: QuestionType, options: &[QuestionOption]) -> AppResult<()> {
    if text.trim().is_empty() {
        return Err(AppError::ValidationFailed(
            "Question text is required.".to_string(),
        ));
    }

    if options.is_empty() {
        return Err(AppError::ValidationFailed("Options are required.".to_string()));
    }

    if options.iter().any(|o| o.text.trim().is_empty()) {
        return Err(AppError::ValidationFailed(
            "Option text is required.".to_string(),
        ));
    }

    let correct_count = options.iter().filter(|o| o.is_correct).count();

    match question_type {
        QuestionType::SingleChoice if correct_count != 1 => Err(AppError::ValidationFailed(
            "Single choice must have exactly one correct answer.".to_string(),
        )),
        QuestionType::MultipleChoice if correct_count < 1 => Err(AppError::ValidationFailed(
            "Multiple choice must have at least one correct answer.".to_string(),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(question_type: QuestionType, flags: &[bool]) -> CreateQuestionRequest {
        CreateQuestionRequest {
            quiz_id: "quiz-1".to_string(),
            text: "Which keyword declares an immutable binding?".to_string(),
            question_type,
            options: flags
                .iter()
                .enumerate()
                .map(|(i, correct)| CreateOptionRequest {
                    text: format!("option {}", i + 1),
                    is_correct: *correct,
                })
                .collect(),
        }
    }

    #[test]
    fn single_choice_requires_exactly_one_correct_option() {
        for flags in [&[false, false][..], &[true, true], &[true, true, false]] {
            let mut question = Question::from_request(request(QuestionType::SingleChoice, flags));
            let result = question.activate();
            assert!(matches!(result, Err(AppError::ValidationFailed(_))), "{:?}", flags);
            assert_eq!(question.status, QuestionStatus::Draft);
        }

        let mut question = Question::from_request(request(QuestionType::SingleChoice, &[false, true]));
        question.activate().expect("one correct option is valid");
        assert!(question.is_active());
    }

    #[test]
    fn multiple_choice_requires_at_least_one_correct_option() {
        let mut none = Question::from_request(request(QuestionType::MultipleChoice, &[false, false]));
        assert!(matches!(none.activate(), Err(AppError::ValidationFailed(_))));

        let mut two = Question::from_request(request(QuestionType::MultipleChoice, &[true, false, true]));
        two.activate().expect("two correct options are valid for multiple choice");
        assert_eq!(two.correct_option_ids().count(), 2);
    }

    #[test]
    fn question_without_options_is_rejected() {
        let question = Question::from_request(request(QuestionType::SingleChoice, &[]));
        let err = question.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: Options are required.");
    }

    #[test]
    fn options_reference_their_question() {
        let question = Question::from_request(request(QuestionType::SingleChoice, &[true, false]));
        assert!(question.options.iter().all(|o| o.question_id == question.id));
    }

    #[test]
    fn toggle_flips_between_active_and_inactive_only() {
        let mut question = Question::from_request(request(QuestionType::SingleChoice, &[true]));
        assert!(question.toggle_status().is_err());

        question.activate().unwrap();
        assert_eq!(question.toggle_status().unwrap(), QuestionStatus::Inactive);
        assert!(!question.is_active());
        assert_eq!(question.toggle_status().unwrap(), QuestionStatus::Active);
        assert!(question.activate().is_err());
    }

    #[test]
    fn invalid_replacement_leaves_question_untouched() {
        let mut question = Question::from_request(request(QuestionType::SingleChoice, &[true, false]));
        question.activate().unwrap();
        let before = question.clone();

        let result = question.replace_content(&request(QuestionType::SingleChoice, &[true, true]));
        assert!(matches!(result, Err(AppError::ValidationFailed(_))));
        assert_eq!(question, before);

        question
            .replace_content(&request(QuestionType::MultipleChoice, &[true, true]))
            .expect("valid replacement");
        assert_eq!(question.question_type, QuestionType::MultipleChoice);
        assert!(question.is_active());
    }

    #[test]
    fn question_type_parses_spreadsheet_spellings() {
        assert_eq!("SingleChoice".parse::<QuestionType>().unwrap(), QuestionType::SingleChoice);
        assert_eq!(" single ".parse::<QuestionType>().unwrap(), QuestionType::SingleChoice);
        assert_eq!("Multiple Choice".parse::<QuestionType>().unwrap(), QuestionType::MultipleChoice);
        assert!("essay".parse::<QuestionType>().is_err());
    }
}
