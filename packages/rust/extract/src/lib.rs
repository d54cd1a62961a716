//! Tavily extraction API client.
//!
//! clipmark does not fetch or parse pages itself: the Tavily `/extract`
//! endpoint is handed a URL and returns the page title plus the main content
//! already converted to Markdown. This crate wraps that one call and maps the
//! provider's response shape onto [`ExtractedPage`].

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use clipmark_shared::{ClipmarkError, DEFAULT_TITLE, ExtractedPage, Result, TavilyConfig};

/// Production endpoint base.
const DEFAULT_BASE_URL: &str = "https://api.tavily.com";

/// Request timeout in seconds.
const TIMEOUT_SECS: u64 = 30;

/// Maximum number of redirects to follow.
const MAX_REDIRECTS: usize = 3;

/// User-Agent string for provider requests.
const USER_AGENT: &str = concat!("clipmark/", env!("CARGO_PKG_VERSION"));

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Body of a `/extract` request.
#[derive(Debug, Serialize)]
struct ExtractRequest<'a> {
    urls: Vec<&'a str>,
    extract_depth: &'a str,
    format: &'a str,
}

/// Response shape of `/extract`.
#[derive(Debug, Deserialize)]
struct ExtractResponse {
    #[serde(default)]
    results: Vec<ExtractResult>,
    #[serde(default)]
    failed_results: Vec<serde_json::Value>,
}

/// One extracted page within a `/extract` response.
#[derive(Debug, Deserialize)]
struct ExtractResult {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    raw_content: Option<String>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Client for the Tavily extraction provider.
#[derive(Debug, Clone)]
pub struct TavilyClient {
    http: Client,
    api_key: String,
    base_url: String,
    extract_depth: String,
    format: String,
}

impl TavilyClient {
    /// Build a client from the resolved API key and provider settings.
    pub fn new(api_key: impl Into<String>, config: &TavilyConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .timeout(std::time::Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(|e| ClipmarkError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            extract_depth: config.extract_depth.clone(),
            format: config.format.clone(),
        })
    }

    /// Override the endpoint base URL (mock servers in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Extract the title and Markdown content of a single page.
    ///
    /// Returns `Ok(None)` when the provider produced no result or no content
    /// for the URL — a recoverable no-op for that request, not an error. A
    /// missing title falls back to [`DEFAULT_TITLE`].
    #[instrument(skip(self), fields(url = %url))]
    pub async fn extract(&self, url: &str) -> Result<Option<ExtractedPage>> {
        let endpoint = format!("{}/extract", self.base_url);
        let body = ExtractRequest {
            urls: vec![url],
            extract_depth: &self.extract_depth,
            format: &self.format,
        };

        info!(depth = %self.extract_depth, "extracting content");

        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClipmarkError::Network(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClipmarkError::Network(format!(
                "{url}: provider returned HTTP {status}"
            )));
        }

        let parsed: ExtractResponse = response
            .json()
            .await
            .map_err(|e| ClipmarkError::Extraction(format!("{url}: malformed response: {e}")))?;

        if !parsed.failed_results.is_empty() {
            debug!(failed = parsed.failed_results.len(), "provider reported failed results");
        }

        let Some(first) = parsed.results.into_iter().next() else {
            warn!("no results found for URL");
            return Ok(None);
        };

        let raw_content = match first.raw_content {
            Some(content) if !content.is_empty() => content,
            _ => {
                warn!("no content extracted from the page");
                return Ok(None);
            }
        };

        let title = first
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        Ok(Some(ExtractedPage { title, raw_content }))
    }
}
