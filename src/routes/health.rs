use axum::{response::IntoResponse, Json};
use chrono::Utc;
use utoipa::OpenApi;

use crate::models::dto::HealthResponse;

#[derive(OpenApi)]
#[openapi(paths(health_checker_handler))]
/// Defines the OpenAPI spec for the health endpoint
pub struct HealthApi;

#[utoipa::path(
    get,
    path = "/health",
    tag = "HEALTH",
    responses(
        (status = 200, description = "Application is healthy", body = HealthResponse)
    )
)]
pub async fn health_checker_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    })
}
