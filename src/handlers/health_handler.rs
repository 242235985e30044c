use std::sync::Arc;

use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::app_state::{AppState, Readiness};

#[derive(Debug, Serialize)]
struct HealthReport {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    checks: Option<Readiness>,
}

impl HealthReport {
    fn new(status: &'static str) -> Self {
        Self {
            status,
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            checks: None,
        }
    }
}

#[get("/health")]
pub async fn service_status() -> HttpResponse {
    HttpResponse::Ok().json(HealthReport::new("healthy"))
}

/// 503 until MongoDB answers and the startup indexes exist.
#[get("/health/ready")]
pub async fn readiness(state: web::Data<Arc<AppState>>) -> HttpResponse {
    let checks = state.readiness().await;
    if checks.is_ready() {
        HttpResponse::Ok().json(HealthReport {
            checks: Some(checks),
            ..HealthReport::new("ready")
        })
    } else {
        log::warn!("Readiness check failed: {:?}", checks);
        HttpResponse::ServiceUnavailable().json(HealthReport {
            checks: Some(checks),
            ..HealthReport::new("not_ready")
        })
    }
}

#[get("/health/live")]
pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok().json(HealthReport::new("alive"))
}
