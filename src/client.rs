use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::rest_types::{UploadSlotRequest, UploadSlotResponse};

const UPLOAD_SLOT_ROUTE: &str = "images/upload-url";

/// The two exchanges the upload protocol needs from the remote service.
#[async_trait]
pub trait UploadEndpoint: Send + Sync {
    /// Ask the service for a presigned `{uploadUrl, viewUrl}` pair.
    async fn request_slot(
        &self,
        filename: &str,
        content_type: &str,
    ) -> Result<UploadSlotResponse>;

    /// PUT the raw payload to a previously issued upload URL.
    async fn transfer(&self, upload_url: &str, content_type: &str, data: Vec<u8>) -> Result<()>;
}

pub struct StorageClient {
    client: Client,
    api_base: Url,
}

impl StorageClient {
    pub fn new(api_base: Url) -> Self {
        Self {
            client: Client::new(),
            api_base,
        }
    }
}

#[async_trait]
impl UploadEndpoint for StorageClient {
    async fn request_slot(
        &self,
        filename: &str,
        content_type: &str,
    ) -> Result<UploadSlotResponse> {
        let url = self
            .api_base
            .join(UPLOAD_SLOT_ROUTE)
            .context("Failed to construct upload slot URL")?;

        let request = UploadSlotRequest {
            filename: filename.to_string(),
            content_type: content_type.to_string(),
        };

        debug!(filename, content_type, "Requesting upload slot");

        let response = self.client.post(url).json(&request).send().await?;

        if !response.status().is_success() {
            bail!(
                "Failed to get upload URL: {} - {}",
                response.status(),
                response.text().await.unwrap_or_default()
            );
        }

        let slot: UploadSlotResponse = response.json().await?;
        Ok(slot)
    }

    async fn transfer(&self, upload_url: &str, content_type: &str, data: Vec<u8>) -> Result<()> {
        debug!(upload_url, bytes = data.len(), "Transferring payload");

        let response = self
            .client
            .put(upload_url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(data)
            .send()
            .await?;

        if !response.status().is_success() {
            bail!(
                "Failed to upload file to storage: {} - {}",
                response.status(),
                response.text().await.unwrap_or_default()
            );
        }

        Ok(())
    }
}
