use crate::core::{ContentQuery, ContentSource};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Request-facing wrapper around the content source.
///
/// Never fails: an unconfigured source, a transport error or a decode error
/// all come back as an empty list or `None`, so pages always render.
#[derive(Clone)]
pub struct ContentClient {
    source: Option<Arc<dyn ContentSource>>,
}

impl ContentClient {
    pub fn new(source: Option<Arc<dyn ContentSource>>) -> Self {
        Self { source }
    }

    pub fn unconfigured() -> Self {
        Self { source: None }
    }

    pub fn is_configured(&self) -> bool {
        self.source.is_some()
    }

    /// Records that fail to decode are skipped and logged; the rest are kept.
    pub async fn fetch_list<T: DeserializeOwned>(&self, query: &ContentQuery) -> Vec<T> {
        let items = match self.fetch_raw(query).await {
            Some(serde_json::Value::Null) | None => return Vec::new(),
            Some(serde_json::Value::Array(items)) => items,
            Some(other) => {
                tracing::error!(
                    "❌ Content decode error (tags: {:?}): expected a list, got {}",
                    query.tags(),
                    json_kind(&other)
                );
                return Vec::new();
            }
        };

        let total = items.len();
        let records: Vec<T> = items
            .into_iter()
            .filter_map(|item| {
                let id = item
                    .get("_id")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("<no id>")
                    .to_string();
                match serde_json::from_value::<T>(item) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        tracing::warn!("⚠️ Skipping record {} (tags: {:?}): {}", id, query.tags(), e);
                        None
                    }
                }
            })
            .collect();

        tracing::debug!(
            "📥 Fetched {} of {} records (tags: {:?})",
            records.len(),
            total,
            query.tags()
        );
        records
    }

    pub async fn fetch_one<T: DeserializeOwned>(&self, query: &ContentQuery) -> Option<T> {
        match self.fetch_raw(query).await? {
            serde_json::Value::Null => None,
            value => match serde_json::from_value::<T>(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::error!("❌ Content decode error (tags: {:?}): {}", query.tags(), e);
                    None
                }
            },
        }
    }

    async fn fetch_raw(&self, query: &ContentQuery) -> Option<serde_json::Value> {
        let Some(source) = &self.source else {
            tracing::warn!("Content source not configured - using placeholder data");
            return None;
        };

        match source.fetch(query).await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("❌ Content fetch error (tags: {:?}): {}", query.tags(), e);
                None
            }
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Product;
    use crate::domain::queries;
    use crate::utils::error::{Result, StorefrontError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ContentSource for FailingSource {
        async fn fetch(&self, _query: &ContentQuery) -> Result<serde_json::Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(StorefrontError::ContentSourceError {
                status: 500,
                message: "boom".to_string(),
            })
        }
    }

    struct StaticSource(serde_json::Value);

    #[async_trait]
    impl ContentSource for StaticSource {
        async fn fetch(&self, _query: &ContentQuery) -> Result<serde_json::Value> {
            Ok(self.0.clone())
        }
    }

    fn client_with(source: impl ContentSource + 'static) -> ContentClient {
        ContentClient::new(Some(Arc::new(source)))
    }

    #[tokio::test]
    async fn test_failing_source_yields_empty_results() {
        let source = Arc::new(FailingSource {
            calls: AtomicUsize::new(0),
        });
        let client = ContentClient::new(Some(source.clone()));

        let list: Vec<Product> = client.fetch_list(&queries::all_products()).await;
        let one: Option<Product> = client.fetch_one(&queries::product_by_slug("x")).await;

        assert!(list.is_empty());
        assert!(one.is_none());
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unconfigured_client_never_calls_out() {
        let client = ContentClient::unconfigured();
        assert!(!client.is_configured());

        let list: Vec<Product> = tokio_test::block_on(client.fetch_list(&queries::all_products()));
        let one: Option<Product> =
            tokio_test::block_on(client.fetch_one(&queries::product_by_slug("x")));
        assert!(list.is_empty());
        assert!(one.is_none());
    }

    #[tokio::test]
    async fn test_decode_error_yields_empty_list() {
        let client = client_with(StaticSource(serde_json::json!([{"unexpected": true}])));
        let list: Vec<Product> = client.fetch_list(&queries::all_products()).await;
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn test_bad_record_is_skipped_not_the_whole_list() {
        let client = client_with(StaticSource(serde_json::json!([
            {"_id": "a", "title": "Ring", "slug": {"current": "ring"}, "price": 50},
            {"_id": "b", "title": "Cuff", "slug": {"current": "cuff"}, "price": 80,
             "category": {"title": null, "slug": {"current": "bracelets"}}},
            {"_id": "c", "title": "Pendant", "slug": {"current": "pendant"}, "price": 120}
        ])));
        let list: Vec<Product> = client.fetch_list(&queries::all_products()).await;
        let ids: Vec<&str> = list.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[tokio::test]
    async fn test_non_list_result_yields_empty_list() {
        let client = client_with(StaticSource(serde_json::json!({"_id": "a"})));
        let list: Vec<Product> = client.fetch_list(&queries::all_products()).await;
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn test_null_single_record_is_not_found() {
        let client = client_with(StaticSource(serde_json::Value::Null));
        let one: Option<Product> = client.fetch_one(&queries::product_by_slug("x")).await;
        assert!(one.is_none());
    }

    #[tokio::test]
    async fn test_decodes_live_records() {
        let client = client_with(StaticSource(serde_json::json!([
            {"_id": "a", "title": "Ring", "slug": {"current": "ring"}, "price": 50}
        ])));
        let list: Vec<Product> = client.fetch_list(&queries::all_products()).await;
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].slug.current, "ring");
    }
}
