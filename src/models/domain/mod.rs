pub mod course;
pub mod enrollment;
pub mod question;
pub mod quiz;
pub mod quiz_attempt;
pub mod user;
pub use course::{CatalogFilter, Course, CourseStatus, Difficulty};
pub use enrollment::Enrollment;
pub use question::{Question, QuestionOption, QuestionStatus, QuestionType};
pub use quiz::Quiz;
pub use quiz_attempt::{QuizAttempt, QuizAttemptAnswer};
pub use user::UserRole;
