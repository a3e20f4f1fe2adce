use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Source API HTTP {status}")]
    Transport { status: u16 },

    #[error("Invalid API response shape: {reason}")]
    Shape { reason: String },

    #[error("Sheets service error (HTTP {status}): {message}")]
    Service { status: u16, message: String },
}

impl SyncError {
    /// Process exit status for this error: 1 for configuration problems
    /// (caught before any network activity), 2 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            SyncError::MissingConfig { .. } | SyncError::InvalidConfigValue { .. } => 1,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
