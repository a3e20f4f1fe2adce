pub mod gcp;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SyncError};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use std::env;

pub const DEFAULT_WRITE_RANGE: &str = "シート!A2";
pub const DEFAULT_CLEAR_RANGE: &str = "シート!A12:Z2000";

/// Process configuration, resolved once at startup and passed by reference
/// into each component. Never read from the environment after construction.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub sheet_id: String,
    pub source_api_url: String,
    pub source_api_key: String,
    pub write_range: String,
    pub clear_range: String,
}

impl SyncConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any name-to-value lookup, so tests can
    /// supply a synthetic environment. Empty and whitespace-only values
    /// count as unset, for required and optional variables alike.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require = |name: &str| {
            get(name).ok_or_else(|| SyncError::MissingConfig {
                field: name.to_string(),
            })
        };

        Ok(Self {
            sheet_id: require("SHEET_ID")?,
            source_api_url: require("SOURCE_API_URL")?,
            source_api_key: require("SOURCE_API_KEY")?,
            write_range: get("WRITE_RANGE").unwrap_or_else(|| DEFAULT_WRITE_RANGE.to_string()),
            clear_range: get("CLEAR_RANGE").unwrap_or_else(|| DEFAULT_CLEAR_RANGE.to_string()),
        })
    }
}

impl ConfigProvider for SyncConfig {
    fn sheet_id(&self) -> &str {
        &self.sheet_id
    }

    fn source_api_url(&self) -> &str {
        &self.source_api_url
    }

    fn source_api_key(&self) -> &str {
        &self.source_api_key
    }

    fn write_range(&self) -> &str {
        &self.write_range
    }

    fn clear_range(&self) -> &str {
        &self.clear_range
    }
}

impl Validate for SyncConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("SHEET_ID", &self.sheet_id)?;
        validate_url("SOURCE_API_URL", &self.source_api_url)?;
        validate_non_empty_string("WRITE_RANGE", &self.write_range)?;
        validate_non_empty_string("CLEAR_RANGE", &self.clear_range)?;
        Ok(())
    }
}
