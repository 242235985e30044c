use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{require_author, require_role, require_student, Claims},
    errors::{AppError, AppResult},
    models::{
        domain::{Quiz, QuizAttempt, UserRole},
        dto::{
            quiz_dto::{QuizForStudentDto, QuizResultDto},
            request::{CreateQuizRequest, SubmitQuizRequest, UpdateQuizRequest},
        },
    },
    repositories::{CourseRepository, QuestionRepository, QuizRepository},
    services::{enrollment_service::EnrollmentService, quiz_attempt_service::QuizAttemptService},
};

pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    questions: Arc<dyn QuestionRepository>,
    courses: Arc<dyn CourseRepository>,
    enrollments: Arc<EnrollmentService>,
    attempts: Arc<QuizAttemptService>,
}

impl QuizService {
    pub fn new(
        quizzes: Arc<dyn QuizRepository>,
        questions: Arc<dyn QuestionRepository>,
        courses: Arc<dyn CourseRepository>,
        enrollments: Arc<EnrollmentService>,
        attempts: Arc<QuizAttemptService>,
    ) -> Self {
        Self {
            quizzes,
            questions,
            courses,
            enrollments,
            attempts,
        }
    }

    pub async fn create_quiz(&self, claims: &Claims, request: CreateQuizRequest) -> AppResult<Quiz> {
        require_role(claims, &[UserRole::Instructor])?;
        request.validate()?;

        if self.courses.find_by_id(&request.course_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Course with id '{}' not found",
                request.course_id
            )));
        }

        let quiz = self.quizzes.create(Quiz::from_request(&request)).await?;
        log::info!("Created quiz {} for course {}", quiz.id, quiz.course_id);
        Ok(quiz)
    }

    pub async fn list_by_course(&self, claims: &Claims, course_id: &str) -> AppResult<Vec<Quiz>> {
        require_author(claims)?;
        self.quizzes.find_by_course(course_id).await
    }

    pub async fn update_quiz(
        &self,
        claims: &Claims,
        id: &str,
        request: UpdateQuizRequest,
    ) -> AppResult<Quiz> {
        require_author(claims)?;
        request.validate()?;

        let mut quiz = self.get_quiz(id).await?;
        quiz.apply_update(&request);
        self.quizzes.update(quiz).await
    }

    /// Removes the quiz together with its questions and their options.
    pub async fn delete_quiz(&self, claims: &Claims, id: &str) -> AppResult<()> {
        require_author(claims)?;

        let quiz = self.get_quiz(id).await?;
        let removed = self.questions.delete_by_quiz(&quiz.id).await?;
        self.quizzes.delete(&quiz.id).await?;

        log::info!("Deleted quiz {} and {} question(s)", quiz.id, removed);
        Ok(())
    }

    pub async fn get_quiz_for_student(
        &self,
        claims: &Claims,
        quiz_id: &str,
    ) -> AppResult<QuizForStudentDto> {
        require_student(claims)?;

        let quiz = self.get_quiz(quiz_id).await?;
        self.enrollments
            .ensure_enrolled(claims.user_id(), &quiz.course_id)
            .await?;

        let questions = self.questions.find_active_by_quiz(&quiz.id).await?;
        Ok(QuizForStudentDto::project(&quiz, &questions))
    }

    pub async fn submit_quiz(
        &self,
        claims: &Claims,
        request: SubmitQuizRequest,
    ) -> AppResult<QuizResultDto> {
        require_student(claims)?;
        request.validate()?;

        let quiz = self.get_quiz(&request.quiz_id).await?;
        self.enrollments
            .ensure_enrolled(claims.user_id(), &quiz.course_id)
            .await?;

        let questions = self.questions.find_active_by_quiz(&quiz.id).await?;
        let outcome = QuizAttemptService::grade_submission(&questions, &request.answers)?;
        let attempt = self
            .attempts
            .record_attempt(&quiz.id, claims.user_id(), outcome)
            .await?;

        Ok(QuizResultDto {
            attempt_id: attempt.id,
            score: attempt.score,
            total_questions: attempt.total_questions,
            passed: attempt.passed,
        })
    }

    pub async fn list_my_attempts(
        &self,
        claims: &Claims,
        quiz_id: Option<&str>,
    ) -> AppResult<Vec<QuizAttempt>> {
        require_student(claims)?;
        self.attempts
            .attempts_for_student(claims.user_id(), quiz_id)
            .await
    }

    async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        self.quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found.".to_string()))
    }
}
