use std::sync::Arc;

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{request::CreateQuestionRequest, response::DeleteResponse},
};

#[post("/questions")]
pub async fn create_question(
    state: web::Data<Arc<AppState>>,
    request: web::Json<CreateQuestionRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let question = state
        .question_service
        .create_question(&auth.0, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(question))
}

#[get("/questions/quiz/{quiz_id}")]
pub async fn list_questions(
    state: web::Data<Arc<AppState>>,
    quiz_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let questions = state.question_service.list_by_quiz(&auth.0, &quiz_id).await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[put("/questions/{id}")]
pub async fn update_question(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    request: web::Json<CreateQuestionRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let question = state
        .question_service
        .update_question(&auth.0, &id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(question))
}

#[delete("/questions/{id}")]
pub async fn delete_question(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.question_service.delete_question(&auth.0, &id).await?;
    Ok(HttpResponse::Ok().json(DeleteResponse {
        message: "Question deleted.".to_string(),
    }))
}

#[put("/questions/{id}/toggle-status")]
pub async fn toggle_question_status(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let question = state.question_service.toggle_status(&auth.0, &id).await?;
    Ok(HttpResponse::Ok().json(question))
}

/// Body is the raw CSV file; size is capped by the app's `PayloadConfig`.
#[post("/questions/bulk-upload/{quiz_id}")]
pub async fn bulk_upload_questions(
    state: web::Data<Arc<AppState>>,
    quiz_id: web::Path<String>,
    body: web::Bytes,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let result = state
        .question_service
        .upload_questions(&auth.0, &quiz_id, &body)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}
