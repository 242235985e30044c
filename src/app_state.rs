use std::sync::Arc;

use serde::Serialize;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        CourseRepository, EnrollmentRepository, MongoCourseRepository, MongoEnrollmentRepository,
        MongoQuestionRepository, MongoQuizAttemptRepository, MongoQuizRepository, QuestionRepository,
        QuizAttemptRepository, QuizRepository,
    },
    services::{
        course_service::CourseService, enrollment_service::EnrollmentService,
        question_service::QuestionService, quiz_attempt_service::QuizAttemptService,
        quiz_service::QuizService,
    },
};

/// One handle per aggregate store.
#[derive(Clone)]
pub struct Repositories {
    pub questions: Arc<dyn QuestionRepository>,
    pub quizzes: Arc<dyn QuizRepository>,
    pub attempts: Arc<dyn QuizAttemptRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub enrollments: Arc<dyn EnrollmentRepository>,
}

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub quiz_service: Arc<QuizService>,
    pub course_service: Arc<CourseService>,
    pub enrollment_service: Arc<EnrollmentService>,
    pub jwt_service: JwtService,
    pub db: Option<Database>,
}

/// Backing-store checks behind `/health/ready`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Readiness {
    pub database: bool,
    pub indexes: bool,
}

impl Readiness {
    pub fn is_ready(&self) -> bool {
        self.database && self.indexes
    }
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;
        db.ensure_indexes().await?;

        let repositories = Repositories {
            questions: Arc::new(MongoQuestionRepository::new(&db)),
            quizzes: Arc::new(MongoQuizRepository::new(&db)),
            attempts: Arc::new(MongoQuizAttemptRepository::new(&db)),
            courses: Arc::new(MongoCourseRepository::new(&db)),
            enrollments: Arc::new(MongoEnrollmentRepository::new(&db)),
        };

        let mut state = Self::with_repositories(&config, repositories);
        state.db = Some(db);
        Ok(state)
    }

    /// Wires the services over the given stores. No database handle is attached.
    pub fn with_repositories(config: &Config, repositories: Repositories) -> Self {
        let attempt_service = Arc::new(QuizAttemptService::new(repositories.attempts));

        let question_service = Arc::new(QuestionService::new(
            repositories.questions.clone(),
            repositories.quizzes.clone(),
        ));
        let enrollment_service = Arc::new(EnrollmentService::new(
            repositories.enrollments,
            repositories.courses.clone(),
        ));
        let quiz_service = Arc::new(QuizService::new(
            repositories.quizzes,
            repositories.questions,
            repositories.courses.clone(),
            enrollment_service.clone(),
            attempt_service,
        ));
        let course_service = Arc::new(CourseService::new(repositories.courses));

        let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);

        Self {
            question_service,
            quiz_service,
            course_service,
            enrollment_service,
            jwt_service,
            db: None,
        }
    }

    /// Without a database handle the in-process stores are always ready.
    pub async fn readiness(&self) -> Readiness {
        match &self.db {
            Some(db) => Readiness {
                database: db.ping().await.is_ok(),
                indexes: db.indexes_ready(),
            },
            None => Readiness {
                database: true,
                indexes: true,
            },
        }
    }
}
