use crate::config::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

pub mod ocr_route;

// OPTIONS must reach the 405 fallback, so no CORS layer here
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .nest("/api", ocr_route::ocr_routes())
        .route("/api/health", axum::routing::get(crate::handlers::health_check_handler))
        .layer(TraceLayer::new_for_http())
}
