use crate::domain::model::{Row, UpdatePayload};
use crate::domain::ports::{ConfigProvider, RowSource};
use crate::utils::error::{Result, SyncError};
use async_trait::async_trait;
use reqwest::Client;

pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Fetches source records over HTTP and maps them into sheet rows. One GET
/// per run; the whole data set is expected to fit in one response.
pub struct ApiRowFetcher<C: ConfigProvider> {
    client: Client,
    config: C,
}

impl<C: ConfigProvider> ApiRowFetcher<C> {
    pub fn new(config: C) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl<C: ConfigProvider> RowSource for ApiRowFetcher<C> {
    async fn fetch_rows(&self) -> Result<UpdatePayload> {
        tracing::debug!("GET {}", self.config.source_api_url());
        let response = self
            .client
            .get(self.config.source_api_url())
            .header(reqwest::header::ACCEPT, "application/json")
            .header(API_KEY_HEADER, self.config.source_api_key())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Source API response status: {}", status);
        if !status.is_success() {
            return Err(SyncError::Transport {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response.json().await.map_err(|e| SyncError::Shape {
            reason: format!("response body is not JSON: {}", e),
        })?;

        // Guard against upstream contract changes silently corrupting the
        // sheet: the data field must be an array.
        let items = body
            .get("data")
            .ok_or_else(|| SyncError::Shape {
                reason: "missing data field".to_string(),
            })?
            .as_array()
            .ok_or_else(|| SyncError::Shape {
                reason: "data field is not an array".to_string(),
            })?;

        // Source order determines on-sheet row position; never resequence.
        let rows: Vec<Row> = items.iter().map(Row::from_record).collect();

        Ok(UpdatePayload {
            range: self.config.write_range().to_string(),
            rows,
        })
    }
}
