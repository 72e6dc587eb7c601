use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;

use crate::config::ImageHostConfig;
use crate::error::ApiError;

/// Client for the external image host.
///
/// Built once at startup so the underlying connection pool is shared. When no
/// host is configured, stored images are returned as inline `data:` URLs,
/// which keeps local development working with zero credentials.
pub struct ImageHost {
    client: reqwest::Client,
    config: Option<ImageHostConfig>,
}

#[derive(Debug, Deserialize)]
struct HostedImage {
    url: String,
}

impl ImageHost {
    pub fn new(config: Option<ImageHostConfig>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Store one image and return the URL clients should embed.
    pub async fn store(
        &self,
        data: Vec<u8>,
        mime: &str,
        file_name: &str,
    ) -> Result<String, ApiError> {
        match &self.config {
            Some(host) => self.forward(host, data, mime, file_name).await,
            None => Ok(data_url(&data, mime)),
        }
    }

    async fn forward(
        &self,
        host: &ImageHostConfig,
        data: Vec<u8>,
        mime: &str,
        file_name: &str,
    ) -> Result<String, ApiError> {
        let part = reqwest::multipart::Part::bytes(data)
            .file_name(file_name.to_owned())
            .mime_str(mime)
            .map_err(|e| ApiError::Validation(format!("Unsupported content type: {e}")))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&host.upload_url)
            .bearer_auth(&host.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Internal(format!("Image host request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Internal(format!(
                "Image host returned HTTP {status}"
            )));
        }

        let hosted: HostedImage = response
            .json()
            .await
            .map_err(|e| ApiError::Internal(format!("Image host response unreadable: {e}")))?;

        Ok(hosted.url)
    }
}

/// Inline fallback: the image itself, base64-encoded into a `data:` URL.
fn data_url(data: &[u8], mime: &str) -> String {
    format!("data:{mime};base64,{}", BASE64.encode(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_carries_mime_and_payload() {
        let url = data_url(&[137, 80, 78, 71], "image/png");
        assert!(url.starts_with("data:image/png;base64,"));

        let encoded = url.strip_prefix("data:image/png;base64,").unwrap();
        assert_eq!(BASE64.decode(encoded).unwrap(), vec![137, 80, 78, 71]);
    }

    #[actix_web::test]
    async fn unconfigured_host_falls_back_to_data_url() {
        let host = ImageHost::new(None);
        assert!(!host.is_configured());

        let url = host
            .store(b"fake-jpeg-bytes".to_vec(), "image/jpeg", "photo.jpg")
            .await
            .unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }
}
