use serde::{Deserialize, Serialize};

/// Role claim carried in the bearer token. `User` is a student.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum UserRole {
    #[default]
    User,
    Instructor,
    Admin,
}
