use lru::LruCache;
use std::num::NonZeroUsize;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::types::CachedHttpResponse;
use crate::constants::cache_size;

/// LRU cache of raw response bodies keyed by URL, with per-entry TTL.
///
/// Each [`PlayerClient`](crate::data_fetcher::api::PlayerClient) owns one;
/// nothing is shared between clients.
#[derive(Debug)]
pub struct HttpResponseCache {
    entries: RwLock<LruCache<String, CachedHttpResponse>>,
}

impl Default for HttpResponseCache {
    fn default() -> Self {
        Self::new(cache_size::HTTP_RESPONSES)
    }
}

impl HttpResponseCache {
    /// Creates a cache holding at most `capacity` responses (minimum one)
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: RwLock::new(LruCache::new(capacity)),
        }
    }

    /// Caches a response body with TTL
    #[instrument(skip(self, url, data), fields(url = %url))]
    pub async fn insert(&self, url: String, data: String, ttl_seconds: u64) {
        debug!(
            "Caching HTTP response: url={}, data_size={}, ttl={}s",
            url,
            data.len(),
            ttl_seconds
        );
        let mut entries = self.entries.write().await;
        entries.put(url, CachedHttpResponse::new(data, ttl_seconds));
    }

    /// Returns the cached body if present and not expired.
    ///
    /// Expired entries are evicted on access.
    #[instrument(skip(self, url), fields(url = %url))]
    pub async fn get(&self, url: &str) -> Option<String> {
        let mut entries = self.entries.write().await;

        let Some(entry) = entries.get(url) else {
            debug!("Cache miss for HTTP response: url={}", url);
            return None;
        };

        if entry.is_expired() {
            warn!(
                "Removing expired HTTP response cache entry: url={}, age={:?}, ttl={:?}",
                url,
                entry.cached_at.elapsed(),
                Duration::from_secs(entry.ttl_seconds)
            );
            entries.pop(url);
            return None;
        }

        debug!(
            "Cache hit for HTTP response: url={}, data_size={}",
            url,
            entry.data.len()
        );
        Some(entry.data.clone())
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn capacity(&self) -> usize {
        self.entries.read().await.cap().get()
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}
