//! Range-aware response cache.
//!
//! Maps `(resource path, byte range)` to the decoded JSON record fetched for
//! that range. A request is served without network access when the exact
//! range, or any cached range on the same path that contains it, is present.
//! Entries live for the lifetime of the cache and are never evicted.

mod ranges;

pub use ranges::PathRanges;

use crate::config::ExplorerConfig;
use crate::fetch::{CurlFetcher, FetchError, RangeFetch};
use crate::range::ByteRange;
use crate::resolve::{DeploymentResolver, ResolvePath};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Session cache of range responses, keyed by resource path.
///
/// Only [`RangeCache::get`] writes entries, and only after the fetch and the
/// JSON decode both succeeded. Concurrent misses for the same range are not
/// coalesced: each fetches, and the later write replaces the earlier value.
pub struct RangeCache<F: RangeFetch = CurlFetcher> {
    fetcher: Arc<F>,
    resolver: Box<dyn ResolvePath>,
    paths: Mutex<HashMap<String, PathRanges>>,
}

impl RangeCache<CurlFetcher> {
    /// Curl transport plus the deployment path policy from `cfg`.
    pub fn from_config(cfg: &ExplorerConfig) -> Self {
        Self::new(
            CurlFetcher::from_config(cfg),
            DeploymentResolver::from_config(cfg),
        )
    }
}

impl<F: RangeFetch> RangeCache<F> {
    pub fn new(fetcher: F, resolver: impl ResolvePath + 'static) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            resolver: Box::new(resolver),
            paths: Mutex::new(HashMap::new()),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, PathRanges>> {
        self.paths.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Total number of cached ranges across all paths.
    pub fn len(&self) -> usize {
        self.lock().values().map(PathRanges::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cached ranges for `path`, in insertion order.
    pub fn ranges(&self, path: &str) -> Vec<ByteRange> {
        self.lock()
            .get(path)
            .map(|r| r.ranges().collect())
            .unwrap_or_default()
    }

    /// Cache lookup without fetching: exact key first, then the containment scan.
    pub fn cached(&self, path: &str, start: u64, end: u64) -> Option<Arc<Value>> {
        let range = ByteRange::new(start, end);
        self.lock()
            .get(path)
            .and_then(|r| r.lookup(&range))
            .map(Arc::clone)
    }

    /// Returns the record for `[start, end]` of `path`, fetching it on a miss.
    ///
    /// A hit may be a larger cached range that contains the request; its full
    /// payload is returned as-is. A `null` body is returned but not cached.
    pub async fn get(&self, path: &str, start: u64, end: u64) -> Result<Arc<Value>, FetchError> {
        let range = ByteRange::new(start, end);

        if let Some(hit) = self.cached(path, start, end) {
            tracing::debug!(path, range = %range, "range cache hit");
            return Ok(hit);
        }

        let url = self.resolver.resolve(path);
        tracing::debug!(path, url = %url, range = %range, "range cache miss");

        let fetcher = Arc::clone(&self.fetcher);
        let body = tokio::task::spawn_blocking({
            let url = url.clone();
            move || fetcher.fetch(&url, range)
        })
        .await
        .map_err(|source| FetchError::Task {
            url: url.clone(),
            source,
        })?
        .map_err(|e| {
            tracing::warn!("range fetch failed: {}", e);
            e
        })?;

        let value: Value = serde_json::from_slice(&body).map_err(|source| FetchError::Parse {
            url: url.clone(),
            source,
        })?;
        let value = Arc::new(value);

        if !value.is_null() {
            self.lock()
                .entry(path.to_string())
                .or_default()
                .insert(range, Arc::clone(&value));
        }

        Ok(value)
    }

    /// Like [`RangeCache::get`], decoding the record into `T`.
    pub async fn get_as<T: DeserializeOwned>(
        &self,
        path: &str,
        start: u64,
        end: u64,
    ) -> Result<T, FetchError> {
        let value = self.get(path, start, end).await?;
        T::deserialize(value.as_ref()).map_err(|source| FetchError::Parse {
            url: self.resolver.resolve(path),
            source,
        })
    }
}
