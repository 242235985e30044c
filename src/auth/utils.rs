use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
    models::domain::UserRole,
};

/// Capability check run at the top of every use case.
pub fn require_role(claims: &Claims, allowed: &[UserRole]) -> AppResult<()> {
    if !allowed.contains(&claims.role) {
        log::warn!(
            "Denied {:?} '{}': requires one of {:?}",
            claims.role,
            claims.sub,
            allowed
        );
        return Err(AppError::Forbidden(
            "You do not have permission to perform this action".to_string(),
        ));
    }
    Ok(())
}

pub fn require_student(claims: &Claims) -> AppResult<()> {
    require_role(claims, &[UserRole::User])
}

pub fn require_author(claims: &Claims) -> AppResult<()> {
    require_role(claims, &[UserRole::Instructor, UserRole::Admin])
}

pub fn require_owner_or_admin(claims: &Claims, resource_owner: &str) -> AppResult<()> {
    if claims.role != UserRole::Admin && claims.sub != resource_owner {
        return Err(AppError::Forbidden(
            "You can only modify your own resources".to_string(),
        ));
    }
    Ok(())
}
