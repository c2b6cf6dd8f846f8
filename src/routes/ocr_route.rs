use axum::{routing::post, Router};
use crate::config::AppState;
use crate::handlers::extract_handler::extract_text_handler;
use crate::handlers::method_not_allowed_handler;
use crate::handlers::presign_handler::get_presigned_url_handler;

pub fn ocr_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/get-presigned-url",
            post(get_presigned_url_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/extract-text",
            post(extract_text_handler).fallback(method_not_allowed_handler),
        )
}
