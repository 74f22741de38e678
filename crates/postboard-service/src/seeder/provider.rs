//! Content providers - sources of snippet text for the seeder

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use postboard_common::{ProviderEndpoint, SnippetFormat};
use serde_json::Value;
use thiserror::Error;
use tracing::instrument;

/// Why a provider produced nothing
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed payload: missing {0}")]
    Malformed(&'static str),
}

/// A source of raw snippet text
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Short name used in logs and tick outcomes
    fn name(&self) -> &str;

    /// Fetch one raw snippet
    async fn fetch_snippet(&self) -> Result<String, ProviderError>;
}

/// A provider backed by a public JSON endpoint
pub struct HttpContentProvider {
    endpoint: ProviderEndpoint,
    client: reqwest::Client,
}

impl HttpContentProvider {
    pub fn new(endpoint: ProviderEndpoint, client: reqwest::Client) -> Self {
        Self { endpoint, client }
    }

    /// Build one provider per endpoint, sharing a client with the given timeout
    pub fn from_endpoints(
        endpoints: &[ProviderEndpoint],
        timeout: Duration,
    ) -> Result<Vec<Arc<dyn ContentProvider>>, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("postboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(endpoints
            .iter()
            .cloned()
            .map(|endpoint| Arc::new(Self::new(endpoint, client.clone())) as Arc<dyn ContentProvider>)
            .collect())
    }
}

#[async_trait]
impl ContentProvider for HttpContentProvider {
    fn name(&self) -> &str {
        &self.endpoint.name
    }

    #[instrument(skip(self), fields(provider = %self.endpoint.name))]
    async fn fetch_snippet(&self) -> Result<String, ProviderError> {
        let response = self.client.get(&self.endpoint.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        extract_snippet(self.endpoint.format, &body)
    }
}

fn text_at<'a>(body: &'a Value, pointer: &'static str) -> Result<&'a str, ProviderError> {
    body.pointer(pointer)
        .and_then(Value::as_str)
        .ok_or(ProviderError::Malformed(pointer))
}

/// Render a provider payload as snippet text
pub fn extract_snippet(format: SnippetFormat, body: &Value) -> Result<String, ProviderError> {
    let snippet = match format {
        SnippetFormat::Quote => format!(
            "\"{}\" - {}",
            text_at(body, "/content")?,
            text_at(body, "/author")?
        ),
        SnippetFormat::Text => text_at(body, "/text")?.to_string(),
        SnippetFormat::Activity => format!("Try this activity: {}", text_at(body, "/activity")?),
        SnippetFormat::Joke => format!("\"{}\"", text_at(body, "/joke")?),
        SnippetFormat::ArticleList => format!(
            "{}\nURL: {}",
            text_at(body, "/articles/0/title")?,
            text_at(body, "/articles/0/url")?
        ),
        SnippetFormat::WordPressPost => format!(
            "{}\nURL: {}",
            text_at(body, "/0/title/rendered")?,
            text_at(body, "/0/link")?
        ),
    };
    Ok(snippet)
}
