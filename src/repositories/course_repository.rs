use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

#[cfg(test)]
use mockall::automock;

use crate::{
    db::{Database, COURSES},
    errors::{AppError, AppResult},
    models::domain::{CatalogFilter, Course},
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, course: Course) -> AppResult<Course>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>>;
    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Course>>;
    async fn find_published(&self, filter: &CatalogFilter) -> AppResult<Vec<Course>>;
    async fn find_by_instructor(&self, instructor_id: &str) -> AppResult<Vec<Course>>;
    async fn update(&self, course: Course) -> AppResult<Course>;
}

pub struct MongoCourseRepository {
    collection: Collection<Course>,
}

impl MongoCourseRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection(COURSES);
        Self { collection }
    }
}

#[async_trait]
impl CourseRepository for MongoCourseRepository {
    async fn create(&self, course: Course) -> AppResult<Course> {
        self.collection.insert_one(&course).await?;
        Ok(course)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        let course = self.collection.find_one(doc! { "id": id }).await?;
        Ok(course)
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Course>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let courses = self
            .collection
            .find(doc! { "id": { "$in": ids.to_vec() } })
            .await?
            .try_collect()
            .await?;
        Ok(courses)
    }

    async fn find_published(&self, filter: &CatalogFilter) -> AppResult<Vec<Course>> {
        let mut query = doc! { "status": "Published" };
        if let Some(category) = filter.category() {
            query.insert("category", category);
        }
        if let Some(search) = filter.search() {
            query.insert(
                "title",
                doc! { "$regex": regex::escape(search), "$options": "i" },
            );
        }

        let courses = self
            .collection
            .find(query)
            .sort(doc! { "created_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(courses)
    }

    async fn find_by_instructor(&self, instructor_id: &str) -> AppResult<Vec<Course>> {
        let courses = self
            .collection
            .find(doc! { "instructor_id": instructor_id })
            .sort(doc! { "created_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(courses)
    }

    async fn update(&self, course: Course) -> AppResult<Course> {
        let result = self
            .collection
            .replace_one(doc! { "id": &course.id }, &course)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Course with id '{}' not found",
                course.id
            )));
        }
        Ok(course)
    }
}
