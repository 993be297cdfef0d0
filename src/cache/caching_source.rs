//! Caching decorator for breed sources
//!
//! Provides a `CachingBreedSource` that memoizes successful sub-breed lookups
//! in memory, keyed by the normalized breed name, and counts how many lookups
//! actually reached the wrapped source.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use moka::sync::Cache;
use tracing::debug;

use crate::data::{normalize_breed_name, BreedNotFound, BreedSource, SubBreeds};

/// Message used when the breed argument itself is unusable
const INVALID_BREED_MESSAGE: &str = "breed";

/// A `BreedSource` that remembers successful lookups
///
/// Names that differ only in case or surrounding whitespace share one cache
/// entry. Failed lookups are never stored, so asking again for an unknown
/// breed reaches the wrapped source again.
///
/// The cache has no eviction policy and lives as long as the instance. It is
/// safe to share between tasks, but there is no single-flight guarantee: two
/// concurrent misses for the same breed may both reach the wrapped source and
/// both count as calls.
pub struct CachingBreedSource<S: ?Sized> {
    /// The wrapped source, shared with whoever else holds it
    delegate: Arc<S>,
    /// Normalized breed name to immutable sub-breed snapshot
    entries: Cache<String, Arc<[String]>>,
    /// Lookups that reached `delegate`, successful or not
    calls_made: AtomicU64,
}

impl<S: BreedSource + ?Sized> CachingBreedSource<S> {
    /// Creates a caching wrapper around `delegate`
    pub fn new(delegate: Arc<S>) -> Self {
        Self {
            delegate,
            entries: Cache::builder().build(),
            calls_made: AtomicU64::new(0),
        }
    }

    /// Number of lookups that reached the wrapped source
    ///
    /// Cache hits and blank names are not counted; failed lookups are.
    pub fn calls_made(&self) -> u64 {
        self.calls_made.load(Ordering::SeqCst)
    }

    /// Number of breeds currently cached
    pub fn cached_breeds(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    /// Whether a lookup for `breed` would be served from the cache
    pub fn is_cached(&self, breed: &str) -> bool {
        normalize_breed_name(breed).is_some_and(|key| self.entries.contains_key(&key))
    }

    /// The wrapped source
    pub fn delegate(&self) -> &Arc<S> {
        &self.delegate
    }
}

#[async_trait]
impl<S: BreedSource + ?Sized> BreedSource for CachingBreedSource<S> {
    /// Fetches sub-breeds, consulting the cache first
    ///
    /// On a miss the wrapped source receives `breed` exactly as given, not
    /// the normalized key. Errors from the wrapped source are returned
    /// unchanged and leave the cache untouched.
    async fn get_sub_breeds(&self, breed: &str) -> Result<SubBreeds, BreedNotFound> {
        let key = normalize_breed_name(breed)
            .ok_or_else(|| BreedNotFound::new(INVALID_BREED_MESSAGE))?;

        if let Some(cached) = self.entries.get(&key) {
            debug!(breed = %key, "sub-breed cache hit");
            return Ok(cached.to_vec());
        }

        // Counted before delegating so failures still register as a call
        let calls = self.calls_made.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(breed = %key, calls, "sub-breed cache miss");

        let fetched = self.delegate.get_sub_breeds(breed).await.map_err(|e| {
            debug!(breed = %key, error = %e, "sub-breed lookup failed, not caching");
            e
        })?;

        let snapshot: Arc<[String]> = fetched.into();
        self.entries.insert(key, Arc::clone(&snapshot));
        Ok(snapshot.to_vec())
    }
}
