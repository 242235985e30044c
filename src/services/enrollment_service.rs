use std::sync::Arc;

use crate::{
    auth::{require_student, Claims},
    errors::{AppError, AppResult},
    models::domain::{Course, Enrollment},
    repositories::{CourseRepository, EnrollmentRepository},
};

pub struct EnrollmentService {
    enrollments: Arc<dyn EnrollmentRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl EnrollmentService {
    pub fn new(enrollments: Arc<dyn EnrollmentRepository>, courses: Arc<dyn CourseRepository>) -> Self {
        Self {
            enrollments,
            courses,
        }
    }

    pub async fn enroll(&self, claims: &Claims, course_id: &str) -> AppResult<Enrollment> {
        require_student(claims)?;

        let published = self
            .courses
            .find_by_id(course_id)
            .await?
            .filter(Course::is_published);
        if published.is_none() {
            return Err(AppError::NotFound(
                "Course not found or not published.".to_string(),
            ));
        }

        let student_id = claims.user_id();
        if self.enrollments.exists(student_id, course_id).await? {
            return Err(AppError::Conflict("Already enrolled.".to_string()));
        }

        let enrollment = self
            .enrollments
            .create(Enrollment::new(student_id, course_id))
            .await?;
        log::info!("Student {} enrolled in course {}", student_id, course_id);
        Ok(enrollment)
    }

    pub async fn enrolled_courses(&self, claims: &Claims) -> AppResult<Vec<Course>> {
        require_student(claims)?;

        let course_ids: Vec<String> = self
            .enrollments
            .find_by_student(claims.user_id())
            .await?
            .into_iter()
            .map(|e| e.course_id)
            .collect();

        self.courses.find_by_ids(&course_ids).await
    }

    /// Gate for quiz access. Only an existing enrollment lets a student in.
    pub async fn ensure_enrolled(&self, student_id: &str, course_id: &str) -> AppResult<()> {
        if !self.enrollments.exists(student_id, course_id).await? {
            log::warn!("Student {} is not enrolled in course {}", student_id, course_id);
            return Err(AppError::Forbidden(
                "You are not enrolled in this course.".to_string(),
            ));
        }
        Ok(())
    }
}
