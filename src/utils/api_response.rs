use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::models::ocr_model::ErrorResponse;

pub enum ApiBody<T> {
    Data(T),
    Error(ErrorResponse),
    Empty,
}

// Wrapper to combine StatusCode and the Body
pub struct ApiResponseResult<T>(pub StatusCode, pub ApiBody<T>);

impl<T> IntoResponse for ApiResponseResult<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match self.1 {
            ApiBody::Data(data) => (self.0, Json(data)).into_response(),
            ApiBody::Error(err) => (self.0, Json(err)).into_response(),
            ApiBody::Empty => self.0.into_response(),
        }
    }
}

pub struct ResponseBuilder;

impl ResponseBuilder {
    pub fn success<T: Serialize>(data: T) -> ApiResponseResult<T> {
        ApiResponseResult(StatusCode::OK, ApiBody::Data(data))
    }

    pub fn error(status_code: StatusCode, message: &str) -> ApiResponseResult<()> {
        ApiResponseResult(
            status_code,
            ApiBody::Error(ErrorResponse {
                error: message.to_string(),
            }),
        )
    }

    /// Bare status with no body, used when relaying upstream failures.
    pub fn status(status_code: StatusCode) -> ApiResponseResult<()> {
        ApiResponseResult(status_code, ApiBody::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn error_uses_uniform_envelope() {
        let response = ResponseBuilder::error(StatusCode::BAD_REQUEST, "Missing fileId").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, serde_json::json!({ "error": "Missing fileId" }));
    }

    #[tokio::test]
    async fn status_has_empty_body() {
        let response = ResponseBuilder::status(StatusCode::UNAUTHORIZED).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }
}
