//! Content-keyed read-through cache for derived results
//!
//! Entries are keyed by a hash of the exact input bytes and confirmed with a
//! full byte comparison, so a hit always corresponds to identical input.
//! Eviction is least-recently-used with a fixed capacity; a capacity of zero
//! disables caching.

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::debug;

use crate::Result;

struct CacheEntry<V> {
    hash: u64,
    content: Vec<u8>,
    value: Arc<V>,
}

/// LRU cache of values computed from byte content
pub struct SnapshotCache<V> {
    capacity: usize,
    // Least recently used at the front
    entries: VecDeque<CacheEntry<V>>,
    hits: u64,
    misses: u64,
}

impl<V> SnapshotCache<V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Hash used to key content
    pub fn content_hash(content: &[u8]) -> u64 {
        let mut hasher = DefaultHasher::new();
        content.hash(&mut hasher);
        hasher.finish()
    }

    /// Return the cached value for `content`, computing and storing it on a miss
    ///
    /// Errors from `compute` are returned as-is and nothing is cached.
    pub fn get_or_try_insert_with<F>(&mut self, content: &[u8], compute: F) -> Result<Arc<V>>
    where
        F: FnOnce() -> Result<V>,
    {
        let hash = Self::content_hash(content);

        if let Some(position) = self
            .entries
            .iter()
            .position(|e| e.hash == hash && e.content == content)
        {
            self.hits += 1;
            debug!("Snapshot cache hit ({:016x})", hash);
            if let Some(entry) = self.entries.remove(position) {
                let value = Arc::clone(&entry.value);
                self.entries.push_back(entry);
                return Ok(value);
            }
        }

        self.misses += 1;
        debug!("Snapshot cache miss ({:016x})", hash);
        let value = Arc::new(compute()?);

        if self.capacity > 0 {
            while self.entries.len() >= self.capacity {
                self.entries.pop_front();
            }
            self.entries.push_back(CacheEntry {
                hash,
                content: content.to_vec(),
                value: Arc::clone(&value),
            });
        }

        Ok(value)
    }

    /// Whether `content` currently has a cached value
    pub fn contains(&self, content: &[u8]) -> bool {
        let hash = Self::content_hash(content);
        self.entries
            .iter()
            .any(|e| e.hash == hash && e.content == content)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<V> std::fmt::Debug for SnapshotCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotCache")
            .field("capacity", &self.capacity)
            .field("entries", &self.entries.len())
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::cell::Cell;

    #[test]
    fn test_identical_content_hits() {
        let mut cache = SnapshotCache::new(1);
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            Ok(42)
        };

        let first = cache.get_or_try_insert_with(b"abc", compute).unwrap();
        let second = cache
            .get_or_try_insert_with(b"abc", || {
                calls.set(calls.get() + 1);
                Ok(0)
            })
            .unwrap();

        assert_eq!(*first, 42);
        assert_eq!(*second, 42);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn test_capacity_one_evicts_previous_content() {
        let mut cache = SnapshotCache::new(1);
        cache.get_or_try_insert_with(b"first", || Ok(1)).unwrap();
        cache.get_or_try_insert_with(b"second", || Ok(2)).unwrap();

        assert_eq!(cache.len(), 1);
        assert!(!cache.contains(b"first"));
        assert!(cache.contains(b"second"));
    }

    #[test]
    fn test_least_recently_used_is_evicted() {
        let mut cache = SnapshotCache::new(2);
        cache.get_or_try_insert_with(b"a", || Ok(1)).unwrap();
        cache.get_or_try_insert_with(b"b", || Ok(2)).unwrap();
        // touch "a" so "b" becomes the oldest
        cache.get_or_try_insert_with(b"a", || Ok(0)).unwrap();
        cache.get_or_try_insert_with(b"c", || Ok(3)).unwrap();

        assert!(cache.contains(b"a"));
        assert!(!cache.contains(b"b"));
        assert!(cache.contains(b"c"));
    }

    #[test]
    fn test_errors_are_not_cached() {
        let mut cache: SnapshotCache<i32> = SnapshotCache::new(1);
        let result = cache.get_or_try_insert_with(b"", || Err(Error::EmptyDataset));

        assert!(matches!(result, Err(Error::EmptyDataset)));
        assert!(cache.is_empty());
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn test_zero_capacity_never_stores() {
        let mut cache = SnapshotCache::new(0);
        cache.get_or_try_insert_with(b"abc", || Ok(1)).unwrap();
        cache.get_or_try_insert_with(b"abc", || Ok(2)).unwrap();

        assert!(cache.is_empty());
        assert_eq!(cache.hits(), 0);
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn test_clear() {
        let mut cache = SnapshotCache::new(3);
        cache.get_or_try_insert_with(b"abc", || Ok(1)).unwrap();
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 3);
    }
}
