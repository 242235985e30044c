use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::dto::request::{CreateCourseRequest, UpdateCourseRequest};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Expected study time in hours.
    #[serde(default)]
    pub estimated_duration: u32,
    #[serde(default)]
    pub thumbnail_url: String,
    pub instructor_id: String,
    pub status: CourseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum CourseStatus {
    Draft,
    Published,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// Student catalog filters. Blank values mean "no filter".
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogFilter {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl CatalogFilter {
    pub fn category(&self) -> Option<&str> {
        non_blank(&self.category)
    }

    /// Case-insensitive substring of the course title.
    pub fn search(&self) -> Option<&str> {
        non_blank(&self.search)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl Course {
    pub fn new(title: &str, description: &str, instructor_id: &str) -> Self {
        Course {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category: String::new(),
            difficulty: Difficulty::default(),
            estimated_duration: 0,
            thumbnail_url: String::new(),
            instructor_id: instructor_id.to_string(),
            status: CourseStatus::Draft,
            created_at: Some(Utc::now()),
            modified_at: None,
        }
    }

    pub fn from_request(request: &CreateCourseRequest, instructor_id: &str) -> Self {
        let mut course = Course::new(&request.title, &request.description, instructor_id);
        course.category = request.category.clone();
        course.difficulty = request.difficulty;
        course.estimated_duration = request.estimated_duration;
        course.thumbnail_url = request.thumbnail_url.clone();
        course
    }

    /// Replaces the descriptive fields. Status and owner are untouched.
    pub fn apply_update(&mut self, request: &UpdateCourseRequest) {
        self.title = request.title.clone();
        self.description = request.description.clone();
        self.category = request.category.clone();
        self.difficulty = request.difficulty;
        self.estimated_duration = request.estimated_duration;
        self.thumbnail_url = request.thumbnail_url.clone();
        self.modified_at = Some(Utc::now());
    }

    pub fn is_published(&self) -> bool {
        self.status == CourseStatus::Published
    }
}
