//! Client side of the extraction flow: pick an image, upload it through a
//! pre-signed URL issued via the proxy, then ask the proxy for its text.

use std::io::Write;
use std::path::{Path, PathBuf};

use reqwest::Client;
use uuid::Uuid;

use crate::error::ClientError;
use crate::models::ocr_model::{
    ExtractTextRequest, PreSignedUrlResponse, PresignedUrlRequest, TextFromImageResponse,
};
use crate::utils::image_url::is_image_url;

/// Where the image comes from.
#[derive(Debug, Clone)]
pub enum ImageSource {
    File(PathBuf),
    Url(String),
}

#[derive(Clone)]
pub struct OcrClient {
    server_url: String,
    client: Client,
}

impl OcrClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Runs the whole sequence and returns the extracted text.
    pub async fn run(&self, source: &ImageSource) -> Result<String, ClientError> {
        let file_id = match source {
            ImageSource::File(path) => {
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|source| ClientError::ReadFile {
                        path: path.display().to_string(),
                        source,
                    })?;
                if bytes.is_empty() {
                    return Err(ClientError::NothingToUpload);
                }
                self.upload_image(bytes, &file_name_of(path)).await?
            }
            ImageSource::Url(url) if url.trim().is_empty() => {
                return Err(ClientError::NothingToUpload);
            }
            ImageSource::Url(url) => {
                if !is_image_url(url) {
                    return Err(ClientError::InvalidImageUrl);
                }
                let bytes = self.fetch_remote_image(url.trim()).await?;
                let name = format!("image-from-url-{}", Uuid::new_v4());
                self.upload_image(bytes, &name).await?
            }
        };

        self.extract_text(&file_id).await
    }

    async fn upload_image(&self, bytes: Vec<u8>, file_name: &str) -> Result<String, ClientError> {
        let PreSignedUrlResponse { file_id, url } = self.request_presigned_url(file_name).await?;
        self.upload(&url, bytes).await?;
        tracing::debug!("Uploaded {} as {}", file_name, file_id);
        Ok(file_id)
    }

    pub async fn request_presigned_url(
        &self,
        file_name: &str,
    ) -> Result<PreSignedUrlResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/get-presigned-url", self.server_url))
            .json(&PresignedUrlRequest {
                file_name: file_name.to_string(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::ServerStatus(response.status()));
        }

        Ok(response.json::<PreSignedUrlResponse>().await?)
    }

    /// PUTs the raw bytes to a pre-signed upload URL.
    pub async fn upload(&self, url: &str, bytes: Vec<u8>) -> Result<(), ClientError> {
        let response = self.client.put(url).body(bytes).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::UploadFailed);
        }
        Ok(())
    }

    pub async fn extract_text(&self, file_id: &str) -> Result<String, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/extract-text", self.server_url))
            .json(&ExtractTextRequest {
                file_id: file_id.to_string(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::ServerStatus(response.status()));
        }

        let body = response.json::<TextFromImageResponse>().await?;
        Ok(body.text)
    }

    pub async fn fetch_remote_image(&self, url: &str) -> Result<Vec<u8>, ClientError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// One-line "busy" status. Writes nothing unless `active`, so piped
/// output never sees terminal escape codes.
pub struct LoadingIndicator<W: Write> {
    out: W,
    active: bool,
}

impl<W: Write> LoadingIndicator<W> {
    pub fn start(mut out: W, active: bool) -> Self {
        if active {
            let _ = write!(out, "Extracting text...");
            let _ = out.flush();
        }
        Self { out, active }
    }

    /// Clears the status line and hands the writer back.
    pub fn finish(mut self) -> W {
        if self.active {
            let _ = write!(self.out, "\r\x1b[2K");
            let _ = self.out.flush();
        }
        self.out
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| format!("image-{}", Uuid::new_v4()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_last_component() {
        assert_eq!(file_name_of(Path::new("/tmp/scans/receipt.png")), "receipt.png");
    }

    #[test]
    fn server_url_trailing_slash_is_dropped() {
        let client = OcrClient::new("http://localhost:3000/");
        assert_eq!(client.server_url, "http://localhost:3000");
    }

    #[test]
    fn inactive_indicator_writes_nothing() {
        let out = LoadingIndicator::start(Vec::new(), false).finish();
        assert!(out.is_empty());
    }

    #[test]
    fn active_indicator_clears_its_line() {
        let out = LoadingIndicator::start(Vec::new(), true).finish();
        assert_eq!(String::from_utf8(out).unwrap(), "Extracting text...\r\x1b[2K");
    }

    #[tokio::test]
    async fn rejects_non_image_url_before_any_request() {
        // Port 9 is never contacted; validation fails first
        let client = OcrClient::new("http://127.0.0.1:9");
        let err = client
            .run(&ImageSource::Url("https://cdn.test/doc.pdf".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidImageUrl));
        assert_eq!(err.to_string(), "Please enter a valid image URL (jpg, png, webp)");
    }

    #[tokio::test]
    async fn blank_url_is_nothing_to_upload() {
        let client = OcrClient::new("http://127.0.0.1:9");
        let err = client.run(&ImageSource::Url("   ".to_string())).await.unwrap_err();
        assert!(matches!(err, ClientError::NothingToUpload));
    }
}
