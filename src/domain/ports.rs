use crate::domain::queries::ContentQuery;
use crate::utils::error::Result;
use async_trait::async_trait;

/// A remote document store answering parameterized read expressions.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Returns the raw decoded `result` of the query; `Value::Null` when a
    /// single-record lookup matched nothing.
    async fn fetch(&self, query: &ContentQuery) -> Result<serde_json::Value>;
}

pub trait ConfigProvider: Send + Sync {
    fn project_id(&self) -> Option<&str>;
    fn dataset(&self) -> &str;
    fn api_version(&self) -> &str;
    fn use_cdn(&self) -> bool;
    fn api_host(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> Option<u64>;
    fn bind_address(&self) -> &str;
    fn site_name(&self) -> &str;
    fn cart_api_key(&self) -> Option<&str>;
}
