use mongodb::{
    bson::{Bson, Document},
    options::IndexOptions,
    IndexModel,
};

pub const QUESTIONS: &str = "questions";
pub const QUIZZES: &str = "quizzes";
pub const QUIZ_ATTEMPTS: &str = "quiz_attempts";
pub const COURSES: &str = "courses";
pub const ENROLLMENTS: &str = "enrollments";

/// Ascending index over `keys`, created at startup.
pub(crate) struct IndexSpec {
    pub collection: &'static str,
    pub name: &'static str,
    pub keys: &'static [&'static str],
    pub unique: bool,
}

impl IndexSpec {
    const fn unique(collection: &'static str, name: &'static str, keys: &'static [&'static str]) -> Self {
        Self {
            collection,
            name,
            keys,
            unique: true,
        }
    }

    const fn lookup(collection: &'static str, name: &'static str, keys: &'static [&'static str]) -> Self {
        Self {
            collection,
            name,
            keys,
            unique: false,
        }
    }

    pub fn model(&self) -> IndexModel {
        let keys: Document = self
            .keys
            .iter()
            .map(|key| (key.to_string(), Bson::Int32(1)))
            .collect();

        IndexModel::builder()
            .keys(keys)
            .options(
                IndexOptions::builder()
                    .name(self.name.to_string())
                    .unique(self.unique)
                    .build(),
            )
            .build()
    }
}

pub(crate) const INDEXES: &[IndexSpec] = &[
    IndexSpec::unique(QUESTIONS, "id_unique", &["id"]),
    // find_active_by_quiz filters on both
    IndexSpec::lookup(QUESTIONS, "quiz_status", &["quiz_id", "status"]),
    IndexSpec::unique(QUIZZES, "id_unique", &["id"]),
    IndexSpec::lookup(QUIZZES, "course_id", &["course_id"]),
    IndexSpec::unique(QUIZ_ATTEMPTS, "id_unique", &["id"]),
    IndexSpec::lookup(QUIZ_ATTEMPTS, "student_quiz", &["student_id", "quiz_id"]),
    IndexSpec::unique(COURSES, "id_unique", &["id"]),
    IndexSpec::lookup(COURSES, "instructor_id", &["instructor_id"]),
    IndexSpec::lookup(COURSES, "status_category", &["status", "category"]),
    IndexSpec::unique(ENROLLMENTS, "id_unique", &["id"]),
    // A second enrollment for the same pair fails with a duplicate key error.
    IndexSpec::unique(ENROLLMENTS, "student_course_unique", &["student_id", "course_id"]),
];
