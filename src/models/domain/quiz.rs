use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::dto::request::{CreateQuizRequest, UpdateQuizRequest};

/// A timed collection of questions scoped to one course. Questions live in
/// their own collection and point back here through `quiz_id`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub course_id: String,
    pub time_limit_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn new(title: &str, course_id: &str, time_limit_minutes: u32) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            course_id: course_id.to_string(),
            time_limit_minutes,
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }

    pub fn from_request(request: &CreateQuizRequest) -> Self {
        Quiz::new(&request.title, &request.course_id, request.time_limit_minutes)
    }

    pub fn apply_update(&mut self, request: &UpdateQuizRequest) {
        self.title = request.title.clone();
        self.time_limit_minutes = request.time_limit_minutes;
        self.modified_at = Some(Utc::now());
    }
}
