//! Discovery orchestration: cache, then remote, then static fallback.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use {
    tokio::sync::oneshot,
    tracing::{debug, info, warn},
};

use crate::{
    cache::ModelCache,
    catalog::default_models,
    error::FetchError,
    family::ServiceFamily,
    fetch::ModelFetcher,
};

/// Where a resolved model list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelSource {
    /// Served from the validity window without a network call.
    Cached,
    /// Fresh listing from the endpoint.
    Remote,
    /// Static catalog defaults for the detected family. The list may not
    /// reflect what the endpoint actually serves; the UI should say so.
    Fallback { family: ServiceFamily },
}

impl ModelSource {
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// A resolved model list with its provenance.
#[derive(Debug)]
pub struct Resolution {
    pub models: Vec<String>,
    pub source: ModelSource,
    /// The failure that forced a fallback; `None` for cached and remote
    /// results, and for fallbacks taken without attempting the network
    /// (missing credential or base URL).
    pub error: Option<FetchError>,
}

/// Outcome of a one-off connection probe.
#[derive(Debug)]
pub struct ConnectionTestReport {
    pub success: bool,
    pub response_time: Duration,
    pub model_count: Option<usize>,
    pub error: Option<FetchError>,
}

/// Resolves model lists for (credential, base URL) endpoints.
///
/// Remote listings are cached for the validity window; fallback lists never
/// are, so the next call retries the endpoint instead of pinning a stale
/// default.
#[derive(Debug)]
pub struct ModelResolver {
    cache: ModelCache,
    fetcher: ModelFetcher,
}

impl Default for ModelResolver {
    fn default() -> Self {
        Self::new(ModelFetcher::new())
    }
}

impl ModelResolver {
    #[must_use]
    pub fn new(fetcher: ModelFetcher) -> Self {
        Self {
            cache: ModelCache::default(),
            fetcher,
        }
    }

    #[must_use]
    pub fn with_cache_validity(fetcher: ModelFetcher, validity: Duration) -> Self {
        Self {
            cache: ModelCache::new(validity),
            fetcher,
        }
    }

    /// Resolve the model list for an endpoint: cache, then remote, then
    /// static fallback.
    pub async fn resolve(&self, credential: &str, base_url: &str) -> Resolution {
        if credential.trim().is_empty() || base_url.trim().is_empty() {
            debug!("credential or base URL missing, using catalog defaults");
            return self.fallback(base_url, None);
        }

        if let Some(models) = self.cache.get(credential, base_url) {
            debug!(count = models.len(), "model list served from cache");
            return Resolution {
                models,
                source: ModelSource::Cached,
                error: None,
            };
        }

        match self.fetcher.fetch(credential, base_url).await {
            Ok(models) if models.is_empty() => {
                // An endpoint answering with zero models is not usable for
                // selection; offer the defaults and retry next time.
                warn!(%base_url, "endpoint returned an empty model list");
                self.fallback(base_url, None)
            },
            Ok(models) => {
                info!(count = models.len(), "model list discovered");
                self.cache.put(credential, base_url, models.clone());
                Resolution {
                    models,
                    source: ModelSource::Remote,
                    error: None,
                }
            },
            Err(error) => {
                match &error {
                    FetchError::Parse { message } => {
                        warn!(%base_url, %message, "models response did not parse; API contract may have changed");
                    },
                    FetchError::Auth { status } => {
                        info!(%base_url, status, "credential rejected during discovery");
                    },
                    FetchError::Endpoint { message } => {
                        info!(%base_url, %message, "endpoint unreachable during discovery");
                    },
                }
                self.fallback(base_url, Some(error))
            },
        }
    }

    fn fallback(&self, base_url: &str, error: Option<FetchError>) -> Resolution {
        let family = ServiceFamily::detect(base_url);
        let models = default_models(family)
            .iter()
            .map(ToString::to_string)
            .collect();
        info!(%family, "using catalog defaults");
        Resolution {
            models,
            source: ModelSource::Fallback { family },
            error,
        }
    }

    /// Run [`resolve`](Self::resolve) on the runtime without blocking the
    /// caller. The result arrives on the returned channel; dropping the
    /// receiver abandons the result (the only side effect is a cache write).
    pub fn resolve_in_background(
        self: Arc<Self>,
        credential: impl Into<String>,
        base_url: impl Into<String>,
    ) -> oneshot::Receiver<Resolution> {
        let (tx, rx) = oneshot::channel();
        let credential = credential.into();
        let base_url = base_url.into();
        tokio::spawn(async move {
            let resolution = self.resolve(&credential, &base_url).await;
            let _ = tx.send(resolution);
        });
        rx
    }

    /// Probe an endpoint once and report timing and model count. Never
    /// consults or populates the cache.
    pub async fn test_connection(&self, credential: &str, base_url: &str) -> ConnectionTestReport {
        let started = Instant::now();
        match self.fetcher.fetch(credential, base_url).await {
            Ok(models) => ConnectionTestReport {
                success: true,
                response_time: started.elapsed(),
                model_count: Some(models.len()),
                error: None,
            },
            Err(error) => ConnectionTestReport {
                success: false,
                response_time: started.elapsed(),
                model_count: None,
                error: Some(error),
            },
        }
    }

    /// Drop all cached discovery results.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
