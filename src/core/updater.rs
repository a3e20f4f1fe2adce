use crate::domain::model::UpdatePayload;
use crate::domain::ports::{SheetSink, TokenProvider};
use crate::utils::error::{Result, SyncError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com";

/// Writes an update payload to the Google Sheets v4 values endpoints:
/// an unconditional clear of the configured range, then a RAW-semantics
/// write at the payload's range. There is no transactional guarantee
/// between the two calls; a failure in between leaves the range cleared
/// until the next run.
pub struct SheetsClient<T: TokenProvider> {
    client: Client,
    tokens: T,
    base_url: String,
    sheet_id: String,
    clear_range: String,
}

impl<T: TokenProvider> SheetsClient<T> {
    pub fn new(tokens: T, sheet_id: String, clear_range: String) -> Self {
        Self::with_base_url(tokens, sheet_id, clear_range, SHEETS_API_BASE.to_string())
    }

    pub fn with_base_url(
        tokens: T,
        sheet_id: String,
        clear_range: String,
        base_url: String,
    ) -> Self {
        Self {
            client: Client::new(),
            tokens,
            base_url,
            sheet_id,
            clear_range,
        }
    }

    fn values_url(&self, range: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url, self.sheet_id, range
        )
    }

    async fn check(response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        // The service's own error text is surfaced untranslated.
        let message = response.text().await.unwrap_or_default();
        Err(SyncError::Service {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl<T: TokenProvider> SheetSink for SheetsClient<T> {
    async fn update_sheet(&self, payload: &UpdatePayload) -> Result<()> {
        let token = self.tokens.access_token().await?;

        // (1) Clear old contents. Always the full configured range, so rows
        // left over from a previous, larger run are removed.
        let clear_url = format!("{}:clear", self.values_url(&self.clear_range));
        tracing::debug!("POST {}", clear_url);
        let response = self
            .client
            .post(&clear_url)
            .bearer_auth(&token)
            .json(&json!({}))
            .send()
            .await?;
        Self::check(response).await?;

        // (2) Write new rows.
        let update_url = self.values_url(&payload.range);
        tracing::debug!("PUT {} ({} rows)", update_url, payload.rows.len());
        let response = self
            .client
            .put(&update_url)
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(&token)
            .json(&json!({ "values": payload.rows }))
            .send()
            .await?;
        Self::check(response).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::gcp::StaticTokenProvider;
    use crate::domain::model::Row;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> SheetsClient<StaticTokenProvider> {
        SheetsClient::with_base_url(
            StaticTokenProvider::new("test-token".to_string()),
            "test-sheet".to_string(),
            "Sheet1!A12:Z2000".to_string(),
            server.base_url(),
        )
    }

    fn payload_of(rows: Vec<Row>) -> UpdatePayload {
        UpdatePayload {
            range: "Sheet1!A2".to_string(),
            rows,
        }
    }

    #[tokio::test]
    async fn test_clear_then_write() {
        let server = MockServer::start();
        let clear_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v4/spreadsheets/test-sheet/values/Sheet1!A12:Z2000:clear")
                .header("Authorization", "Bearer test-token");
            then.status(200).json_body(json!({
                "spreadsheetId": "test-sheet",
                "clearedRange": "Sheet1!A12:Z2000"
            }));
        });
        let update_mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/v4/spreadsheets/test-sheet/values/Sheet1!A2")
                .query_param("valueInputOption", "RAW")
                .header("Authorization", "Bearer test-token")
                .json_body(json!({
                    "values": [["A", 1], ["B", 2]]
                }));
            then.status(200).json_body(json!({
                "spreadsheetId": "test-sheet",
                "updatedRows": 2
            }));
        });

        let sink = client_for(&server);
        let payload = payload_of(vec![
            Row(vec![json!("A"), json!(1)]),
            Row(vec![json!("B"), json!(2)]),
        ]);

        sink.update_sheet(&payload).await.unwrap();

        clear_mock.assert();
        update_mock.assert();
    }

    #[tokio::test]
    async fn test_clear_failure_suppresses_write() {
        let server = MockServer::start();
        let clear_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v4/spreadsheets/test-sheet/values/Sheet1!A12:Z2000:clear");
            then.status(403).body("The caller does not have permission");
        });
        let update_mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/v4/spreadsheets/test-sheet/values/Sheet1!A2");
            then.status(200);
        });

        let sink = client_for(&server);
        let err = sink
            .update_sheet(&payload_of(vec![Row(vec![json!("A")])]))
            .await
            .unwrap_err();

        clear_mock.assert();
        update_mock.assert_hits(0);
        match err {
            SyncError::Service { status, message } => {
                assert_eq!(status, 403);
                assert!(message.contains("permission"));
            }
            other => panic!("expected Service error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_write_failure_is_service_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST)
                .path("/v4/spreadsheets/test-sheet/values/Sheet1!A12:Z2000:clear");
            then.status(200);
        });
        server.mock(|when, then| {
            when.method(PUT)
                .path("/v4/spreadsheets/test-sheet/values/Sheet1!A2");
            then.status(429).body("Quota exceeded");
        });

        let sink = client_for(&server);
        let err = sink
            .update_sheet(&payload_of(vec![Row(vec![json!("A")])]))
            .await
            .unwrap_err();

        assert!(matches!(err, SyncError::Service { status: 429, .. }));
    }

    #[tokio::test]
    async fn test_zero_rows_still_clears_and_writes() {
        let server = MockServer::start();
        let clear_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v4/spreadsheets/test-sheet/values/Sheet1!A12:Z2000:clear");
            then.status(200);
        });
        let update_mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/v4/spreadsheets/test-sheet/values/Sheet1!A2")
                .json_body(json!({ "values": [] }));
            then.status(200);
        });

        let sink = client_for(&server);
        sink.update_sheet(&payload_of(vec![])).await.unwrap();

        clear_mock.assert();
        update_mock.assert();
    }
}
