use crate::config::Config;
use crate::error::BackendError;
use reqwest::Client;
use serde_json::Value;

#[derive(Clone)]
pub struct BackendService {
    config: Config,
    client: Client,
}

impl BackendService {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.backend_host.trim_end_matches('/'), path)
    }

    pub async fn get_presigned_url(
        &self,
        file_name: &str,
    ) -> Result<Value, BackendError> {
        self.post_with_query("/s3/pre-signed-url", "filename", file_name)
            .await
    }

    pub async fn extract_text(
        &self,
        file_id: &str,
    ) -> Result<Value, BackendError> {
        self.post_with_query("/api/extract/text-from-image", "fileId", file_id)
            .await
    }

    /// Returns the backend's JSON body untouched so the proxy can relay it as-is.
    async fn post_with_query(
        &self,
        path: &str,
        key: &str,
        value: &str,
    ) -> Result<Value, BackendError> {
        let url = self.endpoint(path);

        let response = self
            .client
            .post(&url)
            .query(&[(key, value)])
            .basic_auth(&self.config.auth_user, Some(&self.config.auth_password))
            .send()
            .await
            .map_err(BackendError::Transport)?;

        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }

        tracing::debug!("Backend {} answered {}", path, response.status());

        response.json::<Value>().await.map_err(BackendError::Decode)
    }
}
