pub mod course_handler;
pub mod health_handler;
pub mod question_handler;
pub mod quiz_handler;

use actix_web::web;

/// Health endpoints that stay reachable without a token.
pub fn configure_health(cfg: &mut web::ServiceConfig) {
    cfg.service(health_handler::service_status)
        .service(health_handler::liveness)
        .service(health_handler::readiness);
}

/// Routes mounted under the authenticated `/api` scope.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(question_handler::create_question)
        .service(question_handler::list_questions)
        .service(question_handler::update_question)
        .service(question_handler::delete_question)
        .service(question_handler::toggle_question_status)
        .service(question_handler::bulk_upload_questions)
        .service(quiz_handler::create_quiz)
        .service(quiz_handler::list_quizzes)
        .service(quiz_handler::submit_quiz)
        .service(quiz_handler::my_attempts)
        .service(quiz_handler::start_quiz)
        .service(quiz_handler::update_quiz)
        .service(quiz_handler::delete_quiz)
        .service(course_handler::create_course)
        .service(course_handler::published_courses)
        .service(course_handler::instructor_courses)
        .service(course_handler::publish_course)
        .service(course_handler::get_course)
        .service(course_handler::update_course)
        .service(course_handler::enroll)
        .service(course_handler::my_courses);
}
