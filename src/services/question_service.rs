use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{require_author, require_role, Claims},
    errors::{AppError, AppResult},
    models::{
        domain::{Question, UserRole},
        dto::{request::CreateQuestionRequest, response::BulkUploadResultDto},
    },
    repositories::{QuestionRepository, QuizRepository},
    services::bulk_upload::parse_question_rows,
};

pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
    quizzes: Arc<dyn QuizRepository>,
}

impl QuestionService {
    pub fn new(questions: Arc<dyn QuestionRepository>, quizzes: Arc<dyn QuizRepository>) -> Self {
        Self { questions, quizzes }
    }

    pub async fn create_question(
        &self,
        claims: &Claims,
        request: CreateQuestionRequest,
    ) -> AppResult<Question> {
        require_author(claims)?;
        self.ensure_quiz_exists(&request.quiz_id).await?;

        let question = Self::build_active_question(request)?;
        let question = self.questions.create(question).await?;

        log::info!("Created question {} in quiz {}", question.id, question.quiz_id);
        Ok(question)
    }

    pub async fn list_by_quiz(&self, claims: &Claims, quiz_id: &str) -> AppResult<Vec<Question>> {
        require_author(claims)?;
        self.ensure_quiz_exists(quiz_id).await?;
        self.questions.find_by_quiz(quiz_id).await
    }

    pub async fn update_question(
        &self,
        claims: &Claims,
        id: &str,
        request: CreateQuestionRequest,
    ) -> AppResult<Question> {
        require_author(claims)?;
        request.validate()?;

        let mut question = self.get_question(id).await?;
        if request.quiz_id != question.quiz_id {
            return Err(AppError::ValidationFailed(
                "A question cannot be moved to another quiz.".to_string(),
            ));
        }

        question.replace_content(&request)?;
        self.questions.update(question).await
    }

    pub async fn delete_question(&self, claims: &Claims, id: &str) -> AppResult<()> {
        require_author(claims)?;
        self.questions.delete(id).await?;
        log::info!("Deleted question {}", id);
        Ok(())
    }

    pub async fn toggle_status(&self, claims: &Claims, id: &str) -> AppResult<Question> {
        require_author(claims)?;

        let mut question = self.get_question(id).await?;
        let status = question.toggle_status()?;
        let question = self.questions.update(question).await?;

        log::info!("Question {} is now {:?}", question.id, status);
        Ok(question)
    }

    /// Imports questions from CSV. Each row stands alone: a bad row is
    /// reported and skipped, and all good rows are stored together at the end.
    pub async fn upload_questions(
        &self,
        claims: &Claims,
        quiz_id: &str,
        data: &[u8],
    ) -> AppResult<BulkUploadResultDto> {
        require_role(claims, &[UserRole::Instructor])?;
        self.ensure_quiz_exists(quiz_id).await?;

        let rows = parse_question_rows(quiz_id, data)?;
        let mut result = BulkUploadResultDto {
            total_rows: rows.len(),
            ..Default::default()
        };
        let mut accepted = Vec::new();

        for row in rows {
            let built = row
                .outcome
                .and_then(|request| Self::build_active_question(request).map_err(|e| e.message().to_string()));

            match built {
                Ok(question) => accepted.push(question),
                Err(reason) => {
                    log::warn!("Bulk upload for quiz {} rejected row {}: {}", quiz_id, row.row_number, reason);
                    result.errors.push(format!("Row {}: {}", row.row_number, reason));
                }
            }
        }

        result.valid_questions = accepted.len();
        result.invalid_questions = result.errors.len();
        self.questions.create_many(accepted).await?;

        log::info!(
            "Bulk upload for quiz {}: {} of {} rows imported",
            quiz_id,
            result.valid_questions,
            result.total_rows
        );
        Ok(result)
    }

    fn build_active_question(request: CreateQuestionRequest) -> AppResult<Question> {
        request.validate()?;
        let mut question = Question::from_request(request);
        question.activate()?;
        Ok(question)
    }

    async fn get_question(&self, id: &str) -> AppResult<Question> {
        self.questions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))
    }

    async fn ensure_quiz_exists(&self, quiz_id: &str) -> AppResult<()> {
        match self.quizzes.find_by_id(quiz_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id))),
        }
    }
}
