use crate::config::settings::ContentSourceSettings;
use crate::core::{ContentQuery, ContentSource};
use crate::utils::error::{Result, StorefrontError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: serde_json::Value,
}

/// Content source backed by the hosted query HTTP API.
pub struct HttpContentSource {
    client: Client,
    endpoint: String,
}

impl HttpContentSource {
    pub fn new(settings: &ContentSourceSettings) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: settings.query_url(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request tags only allow `[A-Za-z0-9._-]`; the cache tags are joined with `.`.
    fn request_tag(tags: &[String]) -> Option<String> {
        let tag: String = tags
            .iter()
            .map(|t| {
                t.chars()
                    .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
                    .collect::<String>()
            })
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(".");

        if tag.is_empty() {
            None
        } else {
            Some(tag.chars().take(75).collect())
        }
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch(&self, query: &ContentQuery) -> Result<serde_json::Value> {
        let mut request = self
            .client
            .get(&self.endpoint)
            .query(&[("query", query.expression())]);

        for (name, value) in query.params() {
            let encoded = serde_json::to_string(value)?;
            request = request.query(&[(format!("${}", name), encoded)]);
        }

        if let Some(tag) = Self::request_tag(query.tags()) {
            request = request.query(&[("tag", tag)]);
        }

        tracing::debug!("📡 Content query to {} (tags: {:?})", self.endpoint, query.tags());
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("📡 Content API response status: {}", status);

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StorefrontError::ContentSourceError {
                status: status.as_u16(),
                message,
            });
        }

        let body: QueryResponse = response.json().await?;
        Ok(body.result)
    }
}
