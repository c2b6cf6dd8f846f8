pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use axum::Router;
use config::AppState;

/// Full HTTP application with state attached.
pub fn build_app(state: AppState) -> Router {
    routes::create_routes().with_state(state)
}
