use std::sync::Arc;

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::{AttemptQuery, CreateQuizRequest, SubmitQuizRequest, UpdateQuizRequest},
        response::DeleteResponse,
    },
};

#[post("/quizzes")]
pub async fn create_quiz(
    state: web::Data<Arc<AppState>>,
    request: web::Json<CreateQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.create_quiz(&auth.0, request.into_inner()).await?;
    Ok(HttpResponse::Created().json(quiz))
}

#[get("/quizzes/course/{course_id}")]
pub async fn list_quizzes(
    state: web::Data<Arc<AppState>>,
    course_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_service.list_by_course(&auth.0, &course_id).await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

#[put("/quizzes/{id}")]
pub async fn update_quiz(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    request: web::Json<UpdateQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .update_quiz(&auth.0, &id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[delete("/quizzes/{id}")]
pub async fn delete_quiz(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.quiz_service.delete_quiz(&auth.0, &id).await?;
    Ok(HttpResponse::Ok().json(DeleteResponse {
        message: "Quiz deleted.".to_string(),
    }))
}

#[get("/quizzes/{id}/start")]
pub async fn start_quiz(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz_for_student(&auth.0, &id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/quizzes/submit")]
pub async fn submit_quiz(
    state: web::Data<Arc<AppState>>,
    request: web::Json<SubmitQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let result = state.quiz_service.submit_quiz(&auth.0, request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[get("/quizzes/attempts/my")]
pub async fn my_attempts(
    state: web::Data<Arc<AppState>>,
    query: web::Query<AttemptQuery>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let attempts = state
        .quiz_service
        .list_my_attempts(&auth.0, query.quiz_id.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(attempts))
}
