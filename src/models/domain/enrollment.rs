use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Grants a student access to a course's quizzes. (student_id, course_id) is unique.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Enrollment {
    pub id: String,
    pub student_id: String,
    pub course_id: String,
    pub created_at: DateTime<Utc>,
}

impl Enrollment {
    pub fn new(student_id: &str, course_id: &str) -> Self {
        Enrollment {
            id: Uuid::new_v4().to_string(),
            student_id: student_id.to_string(),
            course_id: course_id.to_string(),
            created_at: Utc::now(),
        }
    }
}
