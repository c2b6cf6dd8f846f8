use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use crate::models::ocr_model::PresignedUrlRequest;
use crate::services::backend_service::BackendService;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::validated_wrapper::ValidatedJson;

pub async fn get_presigned_url_handler(
    State(backend): State<BackendService>,
    ValidatedJson(payload): ValidatedJson<PresignedUrlRequest>,
) -> Response {
    match backend.get_presigned_url(&payload.file_name).await {
        Ok(data) => ResponseBuilder::success(data).into_response(),
        Err(e) => e.into_response(),
    }
}
