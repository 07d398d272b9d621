use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolves the `ip` field for `discord_id`. A non-200 response surfaces as
    /// `LookupError::RequestFailed`.
    async fn lookup_ip(&self, discord_id: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
}
