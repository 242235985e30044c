#[cfg(test)]
pub mod fixtures {
    use crate::{
        auth::Claims,
        models::{
            domain::{QuestionType, UserRole},
            dto::request::{CreateOptionRequest, CreateQuestionRequest},
        },
    };

    pub fn student_claims() -> Claims {
        Claims::new("student-1", UserRole::User, 1)
    }

    pub fn instructor_claims() -> Claims {
        Claims::new("instructor-1", UserRole::Instructor, 1)
    }

    pub fn admin_claims() -> Claims {
        Claims::new("admin-1", UserRole::Admin, 1)
    }

    pub fn option(text: &str, is_correct: bool) -> CreateOptionRequest {
        CreateOptionRequest {
            text: text.to_string(),
            is_correct,
        }
    }

    /// Single-choice question whose first option is the right one.
    pub fn single_choice_request(quiz_id: &str, text: &str) -> CreateQuestionRequest {
        CreateQuestionRequest {
            quiz_id: quiz_id.to_string(),
            text: text.to_string(),
            question_type: QuestionType::SingleChoice,
            options: vec![option("A", true), option("B", false), option("C", false)],
        }
    }

    pub fn multiple_choice_request(quiz_id: &str, text: &str) -> CreateQuestionRequest {
        CreateQuestionRequest {
            quiz_id: quiz_id.to_string(),
            text: text.to_string(),
            question_type: QuestionType::MultipleChoice,
            options: vec![option("A", true), option("B", true), option("C", false)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::UserRole;

    #[test]
    fn test_fixture_roles() {
        assert_eq!(student_claims().role, UserRole::User);
        assert_eq!(instructor_claims().role, UserRole::Instructor);
        assert_eq!(admin_claims().role, UserRole::Admin);
    }

    #[test]
    fn test_single_choice_fixture_has_one_correct_option() {
        let request = single_choice_request("quiz-1", "Q");
        assert_eq!(request.options.iter().filter(|o| o.is_correct).count(), 1);
    }
}
