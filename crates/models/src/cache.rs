//! Time-boxed in-memory cache for discovery results.

use std::{
    collections::HashMap,
    sync::Mutex,
    time::{Duration, Instant},
};

/// How long a discovery result stays valid.
pub const DEFAULT_VALIDITY_WINDOW: Duration = Duration::from_secs(300);

/// Cache identity is the (credential, base URL) pair exactly as supplied;
/// no normalization, so two spellings of one endpoint are distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    credential: String,
    base_url: String,
}

#[derive(Debug)]
struct CacheEntry {
    models: Vec<String>,
    inserted_at: Instant,
}

/// In-memory model-list cache.
///
/// A single mutex guards the whole map, so `put` is an atomic
/// read-modify-write and concurrent cold lookups cannot corrupt an entry;
/// they may at worst both fetch and the later write wins. Expired entries
/// are dropped lazily on `get` — there is no background sweep, and no size
/// bound beyond staleness.
#[derive(Debug)]
pub struct ModelCache {
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
    validity: Duration,
}

impl Default for ModelCache {
    fn default() -> Self {
        Self::new(DEFAULT_VALIDITY_WINDOW)
    }
}

impl ModelCache {
    #[must_use]
    pub fn new(validity: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            validity,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<CacheKey, CacheEntry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Cached models for an endpoint, or `None` when absent or expired.
    #[must_use]
    pub fn get(&self, credential: &str, base_url: &str) -> Option<Vec<String>> {
        let key = CacheKey {
            credential: credential.to_string(),
            base_url: base_url.to_string(),
        };
        let mut entries = self.lock();
        if let Some(entry) = entries.get(&key) {
            if entry.inserted_at.elapsed() < self.validity {
                return Some(entry.models.clone());
            }
            entries.remove(&key);
        }
        None
    }

    /// Store a discovery result with the current timestamp, replacing any
    /// previous entry for the endpoint.
    pub fn put(&self, credential: &str, base_url: &str, models: Vec<String>) {
        let key = CacheKey {
            credential: credential.to_string(),
            base_url: base_url.to_string(),
        };
        self.lock().insert(key, CacheEntry {
            models,
            inserted_at: Instant::now(),
        });
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
