use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

#[cfg(test)]
use mockall::automock;

use crate::{
    db::{Database, ENROLLMENTS},
    errors::AppResult,
    models::domain::Enrollment,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Fails with `Conflict` when the (student, course) pair already exists.
    async fn create(&self, enrollment: Enrollment) -> AppResult<Enrollment>;
    async fn exists(&self, student_id: &str, course_id: &str) -> AppResult<bool>;
    async fn find_by_student(&self, student_id: &str) -> AppResult<Vec<Enrollment>>;
}

pub struct MongoEnrollmentRepository {
    collection: Collection<Enrollment>,
}

impl MongoEnrollmentRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection(ENROLLMENTS);
        Self { collection }
    }
}

#[async_trait]
impl EnrollmentRepository for MongoEnrollmentRepository {
    async fn create(&self, enrollment: Enrollment) -> AppResult<Enrollment> {
        // Duplicate-key errors from the unique index surface as AppError::Conflict.
        self.collection.insert_one(&enrollment).await?;
        Ok(enrollment)
    }

    async fn exists(&self, student_id: &str, course_id: &str) -> AppResult<bool> {
        let enrollment = self
            .collection
            .find_one(doc! {
                "student_id": student_id,
                "course_id": course_id
            })
            .await?;
        Ok(enrollment.is_some())
    }

    async fn find_by_student(&self, student_id: &str) -> AppResult<Vec<Enrollment>> {
        let enrollments = self
            .collection
            .find(doc! { "student_id": student_id })
            .await?
            .try_collect()
            .await?;
        Ok(enrollments)
    }
}
