//! Remote model discovery against OpenAI-compatible `/v1/models` endpoints.

use std::time::Duration;

use {serde::Deserialize, tracing::debug};

use {
    crate::error::{FetchError, Result},
    victor_config::ProxySettings,
};

/// Default per-request timeout. Discovery runs while the settings dialog is
/// open, so the bound stays short.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    data: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    id: String,
}

/// One-shot client for the OpenAI models-list convention.
///
/// The timeout is applied per request, so discovery can never block the
/// settings flow indefinitely.
#[derive(Debug, Clone)]
pub struct ModelFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl Default for ModelFetcher {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ModelFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }

    /// Build a fetcher honoring the global proxy toggle. Fails with
    /// [`FetchError::Endpoint`] when a configured proxy URL is invalid.
    pub fn with_settings(timeout: Duration, proxy: &ProxySettings) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(url) = proxy.http_url() {
            let proxy = reqwest::Proxy::http(url)
                .map_err(|e| FetchError::endpoint(format!("invalid HTTP proxy '{url}': {e}")))?;
            builder = builder.proxy(proxy);
        }
        if let Some(url) = proxy.https_url() {
            let proxy = reqwest::Proxy::https(url)
                .map_err(|e| FetchError::endpoint(format!("invalid HTTPS proxy '{url}': {e}")))?;
            builder = builder.proxy(proxy);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::endpoint(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, timeout })
    }

    /// Fetch the model listing for an endpoint.
    ///
    /// Issues `GET {base}/v1/models` with `Authorization: Bearer {credential}`
    /// and returns the model IDs in the order the endpoint listed them.
    pub async fn fetch(&self, credential: &str, base_url: &str) -> Result<Vec<String>> {
        let url = models_url(base_url);
        debug!(%url, "fetching model list");

        let response = self
            .client
            .get(&url)
            .bearer_auth(credential)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::endpoint(format!("request to {url} timed out"))
                } else {
                    FetchError::endpoint(format!("request to {url} failed: {e}"))
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(FetchError::Auth {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            return Err(FetchError::endpoint(format!("HTTP {status} from {url}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::endpoint(format!("failed to read body from {url}: {e}")))?;
        let payload: ModelsResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::parse(e.to_string()))?;

        Ok(payload.data.into_iter().map(|m| m.id).collect())
    }
}

/// Resolve the models-list URL for a base URL: trailing slashes are trimmed
/// and `/v1` is appended unless already present.
fn models_url(base_url: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    if base.ends_with("/v1") {
        format!("{base}/models")
    } else {
        format!("{base}/v1/models")
    }
}
