pub mod bulk_upload;
pub mod course_service;
pub mod enrollment_service;
pub mod question_service;
pub mod quiz_attempt_service;
pub mod quiz_service;
