use crate::domain::ports::{RowSource, SheetSink};
use crate::utils::error::Result;

/// Sequences the pipeline: fetch, then clear-and-write. Strictly one pass,
/// no retries anywhere; any stage error aborts the run.
pub struct SyncEngine<S: RowSource, K: SheetSink> {
    source: S,
    sink: K,
    dry_run: bool,
}

impl<S: RowSource, K: SheetSink> SyncEngine<S, K> {
    pub fn new(source: S, sink: K) -> Self {
        Self::with_dry_run(source, sink, false)
    }

    pub fn with_dry_run(source: S, sink: K, dry_run: bool) -> Self {
        Self {
            source,
            sink,
            dry_run,
        }
    }

    /// Runs one fetch-and-update pass and returns the number of rows written.
    pub async fn run(&self) -> Result<usize> {
        tracing::info!("Fetching rows from source API...");
        let payload = self.source.fetch_rows().await?;
        tracing::info!("Fetched {} rows", payload.rows.len());

        if self.dry_run {
            tracing::info!("Dry run: skipping sheet update");
            return Ok(payload.rows.len());
        }

        tracing::info!("Updating sheet range {}...", payload.range);
        self.sink.update_sheet(&payload).await?;
        tracing::info!("Sheet update complete");

        Ok(payload.rows.len())
    }
}
