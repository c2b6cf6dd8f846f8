pub mod extract_handler;
pub mod presign_handler;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use crate::models::ocr_model::HealthResponse;
use crate::utils::api_response::ResponseBuilder;

pub async fn health_check_handler() -> impl IntoResponse {
    ResponseBuilder::success(HealthResponse {
        status: "up".to_string(),
        server_time: Utc::now().to_rfc3339(),
    })
}

pub async fn method_not_allowed_handler() -> impl IntoResponse {
    ResponseBuilder::error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
