use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use crate::models::ocr_model::ExtractTextRequest;
use crate::services::backend_service::BackendService;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::validated_wrapper::ValidatedJson;

pub async fn extract_text_handler(
    State(backend): State<BackendService>,
    ValidatedJson(payload): ValidatedJson<ExtractTextRequest>,
) -> Response {
    match backend.extract_text(&payload.file_id).await {
        Ok(data) => {
            tracing::debug!("Extraction finished for {}", payload.file_id);
            ResponseBuilder::success(data).into_response()
        }
        Err(e) => e.into_response(),
    }
}
