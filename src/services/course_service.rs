use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{require_author, require_owner_or_admin, Claims},
    errors::{AppError, AppResult},
    models::{
        domain::{CatalogFilter, Course, CourseStatus},
        dto::request::{CreateCourseRequest, UpdateCourseRequest},
    },
    repositories::CourseRepository,
};

pub struct CourseService {
    repository: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_course(&self, claims: &Claims, request: CreateCourseRequest) -> AppResult<Course> {
        require_author(claims)?;
        request.validate()?;

        let course = Course::from_request(&request, claims.user_id());
        let course = self.repository.create(course).await?;
        log::info!("Course {} created by {}", course.id, course.instructor_id);
        Ok(course)
    }

    pub async fn get_course(&self, id: &str) -> AppResult<Course> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course with id '{}' not found", id)))
    }

    /// Published courses visible to every signed-in user.
    pub async fn list_published(&self, filter: &CatalogFilter) -> AppResult<Vec<Course>> {
        self.repository.find_published(filter).await
    }

    pub async fn instructor_courses(&self, claims: &Claims) -> AppResult<Vec<Course>> {
        require_author(claims)?;
        self.repository.find_by_instructor(claims.user_id()).await
    }

    pub async fn update_course(
        &self,
        claims: &Claims,
        id: &str,
        request: UpdateCourseRequest,
    ) -> AppResult<Course> {
        require_author(claims)?;
        request.validate()?;

        let mut course = self.get_course(id).await?;
        require_owner_or_admin(claims, &course.instructor_id)?;

        course.apply_update(&request);
        let course = self.repository.update(course).await?;
        log::info!("Course {} updated by {}", course.id, claims.user_id());
        Ok(course)
    }

    pub async fn publish_course(&self, claims: &Claims, id: &str) -> AppResult<Course> {
        require_author(claims)?;

        let mut course = self.get_course(id).await?;
        require_owner_or_admin(claims, &course.instructor_id)?;

        if course.is_published() {
            return Ok(course);
        }
        course.status = CourseStatus::Published;
        self.repository.update(course).await
    }
}
