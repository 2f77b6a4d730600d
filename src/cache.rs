//! Memoizing cache for rendered icons.
//!
//! Rendering is a pure function of `(kind, input, size, style)`, so a cached
//! entry never goes stale. The cache is shared across batch workers.

use crate::kind::IconKind;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Everything that influences the rendered bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub kind: IconKind,
    pub input: String,
    pub size: u32,
    /// Style or format fingerprint; empty when not applicable.
    pub style: String,
}

impl CacheKey {
    pub fn new(kind: IconKind, input: impl Into<String>, size: u32, style: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
            size,
            style: style.into(),
        }
    }
}

/// Thread-safe map from [`CacheKey`] to encoded icon bytes.
pub struct IconCache {
    entries: DashMap<CacheKey, Arc<[u8]>, FxBuildHasher>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl IconCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    pub fn get(&self, key: &CacheKey) -> Option<Arc<[u8]>> {
        let found = self.entries.get(key).map(|r| Arc::clone(&r));
        let counter = if found.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    pub fn insert(&self, key: CacheKey, bytes: impl Into<Arc<[u8]>>) -> Arc<[u8]> {
        let bytes = bytes.into();
        self.entries.insert(key, Arc::clone(&bytes));
        bytes
    }

    /// Return the cached bytes for `key`, rendering them with `render` on a miss.
    ///
    /// Failed renders are not cached.
    pub fn get_or_try_insert_with<E>(
        &self,
        key: CacheKey,
        render: impl FnOnce() -> Result<Vec<u8>, E>,
    ) -> Result<Arc<[u8]>, E> {
        if let Some(bytes) = self.get(&key) {
            return Ok(bytes);
        }
        crate::debug!("cache"; "miss for {} {}px", key.kind, key.size);
        let bytes = render()?;
        Ok(self.insert(key, bytes))
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl Default for IconCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(input: &str, size: u32) -> CacheKey {
        CacheKey::new(IconKind::Grid, input, size, "")
    }

    #[test]
    fn test_cache_get_insert() {
        let cache = IconCache::new();
        assert!(cache.get(&key("Alice", 64)).is_none());

        cache.insert(key("Alice", 64), b"<svg/>".to_vec());
        assert_eq!(cache.get(&key("Alice", 64)).as_deref(), Some(&b"<svg/>"[..]));
        assert!(cache.get(&key("Alice", 32)).is_none());

        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn test_get_or_try_insert_with_renders_once() {
        let cache = IconCache::new();
        let mut calls = 0;
        for _ in 0..3 {
            let bytes = cache
                .get_or_try_insert_with(key("Bob", 16), || {
                    calls += 1;
                    Ok::<_, ()>(vec![1, 2, 3])
                })
                .unwrap();
            assert_eq!(&*bytes, &[1, 2, 3]);
        }
        assert_eq!(calls, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_failed_render_not_cached() {
        let cache = IconCache::new();
        let result = cache.get_or_try_insert_with(key("bad", 16), || Err("boom"));
        assert_eq!(result.unwrap_err(), "boom");
        assert!(cache.is_empty());
    }

    #[test]
    fn test_kind_and_style_are_part_of_key() {
        let cache = IconCache::new();
        cache.insert(key("Alice", 64), vec![0]);
        assert!(cache.get(&CacheKey::new(IconKind::Dots, "Alice", 64, "")).is_none());
        assert!(cache.get(&CacheKey::new(IconKind::Grid, "Alice", 64, "pad")).is_none());

        cache.clear();
        assert_eq!(cache.len(), 0);
    }
}
