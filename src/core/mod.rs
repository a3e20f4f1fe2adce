pub mod engine;
pub mod fetcher;
pub mod updater;

pub use crate::domain::model::{Row, UpdatePayload};
pub use crate::domain::ports::{ConfigProvider, RowSource, SheetSink, TokenProvider};
pub use crate::utils::error::Result;
