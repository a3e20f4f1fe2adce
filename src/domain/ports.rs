use crate::domain::model::UpdatePayload;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn sheet_id(&self) -> &str;
    fn source_api_url(&self) -> &str;
    fn source_api_key(&self) -> &str;
    fn write_range(&self) -> &str;
    fn clear_range(&self) -> &str;
}

#[async_trait]
pub trait RowSource: Send + Sync {
    async fn fetch_rows(&self) -> Result<UpdatePayload>;
}

#[async_trait]
pub trait SheetSink: Send + Sync {
    async fn update_sheet(&self, payload: &UpdatePayload) -> Result<()>;
}

#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String>;
}

#[async_trait]
impl TokenProvider for Box<dyn TokenProvider> {
    async fn access_token(&self) -> Result<String> {
        (**self).access_token().await
    }
}
