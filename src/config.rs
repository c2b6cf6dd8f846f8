use std::env;
use crate::error::ConfigError;
use crate::services::backend_service::BackendService;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub backend_host: String,
    pub auth_user: String,
    pub auth_password: String,
}

#[derive(Clone, axum::extract::FromRef)]
pub struct AppState {
    pub backend_service: BackendService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            backend_service: BackendService::new(config),
        }
    }
}

impl Config {
    pub fn init() -> Result<Config, ConfigError> {
        let server_host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port_raw = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let server_port = port_raw
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port_raw))?;

        let backend_host = required("BACKEND_HOST")?;
        let auth_user = required("AUTH_USER")?;
        let auth_password = required("AUTH_PASSWORD")?;

        Ok(Config {
            server_host,
            server_port,
            backend_host,
            auth_user,
            auth_password,
        })
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}
