pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::gcp::{MetadataTokenProvider, StaticTokenProvider};
pub use crate::config::SyncConfig;
pub use crate::core::{engine::SyncEngine, fetcher::ApiRowFetcher, updater::SheetsClient};
pub use crate::utils::error::{Result, SyncError};
