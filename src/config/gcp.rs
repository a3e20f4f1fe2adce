use crate::domain::ports::TokenProvider;
use crate::utils::error::{Result, SyncError};
use async_trait::async_trait;
use serde::Deserialize;

const METADATA_TOKEN_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";

#[derive(Debug, Deserialize)]
struct MetadataToken {
    access_token: String,
}

/// Fetches access tokens for the runtime service account from the GCE/Cloud
/// Run metadata server. Token refresh stays with the metadata server; one
/// token is requested per run.
pub struct MetadataTokenProvider {
    client: reqwest::Client,
    token_url: String,
}

impl MetadataTokenProvider {
    pub fn new() -> Self {
        Self::with_token_url(METADATA_TOKEN_URL.to_string())
    }

    pub fn with_token_url(token_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token_url,
        }
    }
}

impl Default for MetadataTokenProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenProvider for MetadataTokenProvider {
    async fn access_token(&self) -> Result<String> {
        tracing::debug!("Requesting access token from metadata server");
        let response = self
            .client
            .get(&self.token_url)
            .header("Metadata-Flavor", "Google")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Service {
                status: status.as_u16(),
                message: "metadata server refused the token request".to_string(),
            });
        }

        let token: MetadataToken = response.json().await?;
        Ok(token.access_token)
    }
}

/// Wraps a pre-issued token, for local runs (GOOGLE_ACCESS_TOKEN) and tests.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: String) -> Self {
        Self { token }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}
