#![allow(dead_code)]

use axum_test::TestServer;
use imgtext::config::{AppState, Config};

pub const AUTH_USER: &str = "user";
pub const AUTH_PASSWORD: &str = "secret";
/// base64("user:secret")
pub const BASIC_AUTH_HEADER: &str = "Basic dXNlcjpzZWNyZXQ=";

pub fn test_config(backend_host: &str) -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        backend_host: backend_host.to_string(),
        auth_user: AUTH_USER.to_string(),
        auth_password: AUTH_PASSWORD.to_string(),
    }
}

pub fn test_server(backend_host: &str) -> TestServer {
    let app = imgtext::build_app(AppState::new(test_config(backend_host)));
    TestServer::new(app).expect("Failed to build test server")
}
