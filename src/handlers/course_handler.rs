use std::sync::Arc;

use actix_web::{get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::{
        domain::CatalogFilter,
        dto::request::{CreateCourseRequest, UpdateCourseRequest},
    },
};

#[post("/courses")]
pub async fn create_course(
    state: web::Data<Arc<AppState>>,
    request: web::Json<CreateCourseRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let course = state
        .course_service
        .create_course(&auth.0, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(course))
}

#[get("/courses/published")]
pub async fn published_courses(
    state: web::Data<Arc<AppState>>,
    filter: web::Query<CatalogFilter>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let courses = state.course_service.list_published(&filter).await?;
    Ok(HttpResponse::Ok().json(courses))
}

#[get("/courses/my-courses")]
pub async fn instructor_courses(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let courses = state.course_service.instructor_courses(&auth.0).await?;
    Ok(HttpResponse::Ok().json(courses))
}

#[get("/courses/{id}")]
pub async fn get_course(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.get_course(&id).await?;
    Ok(HttpResponse::Ok().json(course))
}

#[put("/courses/{id}")]
pub async fn update_course(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    request: web::Json<UpdateCourseRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let course = state
        .course_service
        .update_course(&auth.0, &id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(course))
}

#[put("/courses/{id}/publish")]
pub async fn publish_course(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.publish_course(&auth.0, &id).await?;
    Ok(HttpResponse::Ok().json(course))
}

#[post("/enrollments/{course_id}")]
pub async fn enroll(
    state: web::Data<Arc<AppState>>,
    course_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let enrollment = state.enrollment_service.enroll(&auth.0, &course_id).await?;
    Ok(HttpResponse::Created().json(enrollment))
}

#[get("/enrollments/my")]
pub async fn my_courses(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let courses = state.enrollment_service.enrolled_courses(&auth.0).await?;
    Ok(HttpResponse::Ok().json(courses))
}
