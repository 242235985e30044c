#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use educore_server::{
    app_state::{AppState, Repositories},
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{CatalogFilter, Course, Enrollment, Question, QuestionStatus, Quiz, QuizAttempt},
    repositories::{
        CourseRepository, EnrollmentRepository, QuestionRepository, QuizAttemptRepository,
        QuizRepository,
    },
};

/// Vec-backed stores keep insertion order, which stands in for `created_at` ordering.
#[derive(Default)]
pub struct InMemoryQuestionRepository {
    questions: RwLock<Vec<Question>>,
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn create(&self, question: Question) -> AppResult<Question> {
        let mut questions = self.questions.write().await;
        if questions.iter().any(|q| q.id == question.id) {
            return Err(AppError::Conflict(format!("Question '{}' already exists", question.id)));
        }
        questions.push(question.clone());
        Ok(question)
    }

    async fn create_many(&self, batch: Vec<Question>) -> AppResult<usize> {
        let mut questions = self.questions.write().await;
        let inserted = batch.len();
        questions.extend(batch);
        Ok(inserted)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        let questions = self.questions.read().await;
        Ok(questions.iter().find(|q| q.id == id).cloned())
    }

    async fn find_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        Ok(questions.iter().filter(|q| q.quiz_id == quiz_id).cloned().collect())
    }

    async fn find_active_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        Ok(questions
            .iter()
            .filter(|q| q.quiz_id == quiz_id && q.status == QuestionStatus::Active)
            .cloned()
            .collect())
    }

    async fn update(&self, question: Question) -> AppResult<Question> {
        let mut questions = self.questions.write().await;
        let slot = questions
            .iter_mut()
            .find(|q| q.id == question.id)
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", question.id)))?;
        *slot = question.clone();
        Ok(question)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut questions = self.questions.write().await;
        let before = questions.len();
        questions.retain(|q| q.id != id);
        if questions.len() == before {
            return Err(AppError::NotFound(format!("Question with id '{}' not found", id)));
        }
        Ok(())
    }

    async fn delete_by_quiz(&self, quiz_id: &str) -> AppResult<u64> {
        let mut questions = self.questions.write().await;
        let before = questions.len();
        questions.retain(|q| q.quiz_id != quiz_id);
        Ok((before - questions.len()) as u64)
    }
}

#[derive(Default)]
pub struct InMemoryQuizRepository {
    quizzes: RwLock<Vec<Quiz>>,
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.iter().any(|q| q.id == quiz.id) {
            return Err(AppError::Conflict(format!("Quiz '{}' already exists", quiz.id)));
        }
        quizzes.push(quiz.clone());
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.iter().find(|q| q.id == id).cloned())
    }

    async fn find_by_course(&self, course_id: &str) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.iter().filter(|q| q.course_id == course_id).cloned().collect())
    }

    async fn update(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        let slot = quizzes
            .iter_mut()
            .find(|q| q.id == quiz.id)
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz.id)))?;
        *slot = quiz.clone();
        Ok(quiz)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut quizzes = self.quizzes.write().await;
        let before = quizzes.len();
        quizzes.retain(|q| q.id != id);
        if quizzes.len() == before {
            return Err(AppError::NotFound(format!("Quiz with id '{}' not found", id)));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryQuizAttemptRepository {
    attempts: RwLock<Vec<QuizAttempt>>,
}

#[async_trait]
impl QuizAttemptRepository for InMemoryQuizAttemptRepository {
    async fn create(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt> {
        let mut attempts = self.attempts.write().await;
        if attempts.iter().any(|a| a.id == attempt.id) {
            return Err(AppError::Conflict(format!("Attempt '{}' already exists", attempt.id)));
        }
        attempts.push(attempt.clone());
        Ok(attempt)
    }

    async fn find_by_student_and_quiz(
        &self,
        student_id: &str,
        quiz_id: &str,
    ) -> AppResult<Vec<QuizAttempt>> {
        let attempts = self.attempts.read().await;
        Ok(attempts
            .iter()
            .rev()
            .filter(|a| a.student_id == student_id && a.quiz_id == quiz_id)
            .cloned()
            .collect())
    }

    async fn find_by_student(&self, student_id: &str) -> AppResult<Vec<QuizAttempt>> {
        let attempts = self.attempts.read().await;
        Ok(attempts
            .iter()
            .rev()
            .filter(|a| a.student_id == student_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryCourseRepository {
    courses: RwLock<Vec<Course>>,
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn create(&self, course: Course) -> AppResult<Course> {
        let mut courses = self.courses.write().await;
        if courses.iter().any(|c| c.id == course.id) {
            return Err(AppError::Conflict(format!("Course '{}' already exists", course.id)));
        }
        courses.push(course.clone());
        Ok(course)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        let courses = self.courses.read().await;
        Ok(courses.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Course>> {
        let courses = self.courses.read().await;
        Ok(courses.iter().filter(|c| ids.contains(&c.id)).cloned().collect())
    }

    async fn find_published(&self, filter: &CatalogFilter) -> AppResult<Vec<Course>> {
        let search = filter.search().map(str::to_lowercase);
        let courses = self.courses.read().await;
        Ok(courses
            .iter()
            .filter(|c| c.is_published())
            .filter(|c| filter.category().map_or(true, |cat| c.category == cat))
            .filter(|c| {
                search
                    .as_deref()
                    .map_or(true, |s| c.title.to_lowercase().contains(s))
            })
            .cloned()
            .collect())
    }

    async fn find_by_instructor(&self, instructor_id: &str) -> AppResult<Vec<Course>> {
        let courses = self.courses.read().await;
        Ok(courses
            .iter()
            .filter(|c| c.instructor_id == instructor_id)
            .cloned()
            .collect())
    }

    async fn update(&self, course: Course) -> AppResult<Course> {
        let mut courses = self.courses.write().await;
        let slot = courses
            .iter_mut()
            .find(|c| c.id == course.id)
            .ok_or_else(|| AppError::NotFound(format!("Course with id '{}' not found", course.id)))?;
        *slot = course.clone();
        Ok(course)
    }
}

#[derive(Default)]
pub struct InMemoryEnrollmentRepository {
    enrollments: RwLock<Vec<Enrollment>>,
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentRepository {
    async fn create(&self, enrollment: Enrollment) -> AppResult<Enrollment> {
        let mut enrollments = self.enrollments.write().await;
        let taken = enrollments
            .iter()
            .any(|e| e.student_id == enrollment.student_id && e.course_id == enrollment.course_id);
        if taken {
            return Err(AppError::Conflict("Already enrolled.".to_string()));
        }
        enrollments.push(enrollment.clone());
        Ok(enrollment)
    }

    async fn exists(&self, student_id: &str, course_id: &str) -> AppResult<bool> {
        let enrollments = self.enrollments.read().await;
        Ok(enrollments
            .iter()
            .any(|e| e.student_id == student_id && e.course_id == course_id))
    }

    async fn find_by_student(&self, student_id: &str) -> AppResult<Vec<Enrollment>> {
        let enrollments = self.enrollments.read().await;
        Ok(enrollments
            .iter()
            .filter(|e| e.student_id == student_id)
            .cloned()
            .collect())
    }
}

pub fn in_memory_repositories() -> Repositories {
    Repositories {
        questions: Arc::new(InMemoryQuestionRepository::default()),
        quizzes: Arc::new(InMemoryQuizRepository::default()),
        attempts: Arc::new(InMemoryQuizAttemptRepository::default()),
        courses: Arc::new(InMemoryCourseRepository::default()),
        enrollments: Arc::new(InMemoryEnrollmentRepository::default()),
    }
}

/// Full application state over fresh in-memory stores.
pub fn test_state() -> AppState {
    AppState::with_repositories(&Config::test_config(), in_memory_repositories())
}
