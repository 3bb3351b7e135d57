use std::collections::{HashMap, VecDeque};

use crate::{
    eval::fingerprint::OverlayFingerprint,
    foundation::core::OverlayMap,
    foundation::error::{PixelseqError, PixelseqResult},
};

/// Hit/miss counters for an [`OverlayCache`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to generate.
    pub misses: u64,
}

/// Bounded memo of generated overlays, evicting the oldest insertion first.
#[derive(Debug)]
pub struct OverlayCache {
    capacity: usize,
    entries: HashMap<OverlayFingerprint, OverlayMap>,
    order: VecDeque<OverlayFingerprint>,
    stats: CacheStats,
}

impl OverlayCache {
    /// A cache holding at most `capacity` overlays.
    pub fn new(capacity: usize) -> PixelseqResult<Self> {
        if capacity == 0 {
            return Err(PixelseqError::validation(
                "overlay cache capacity must be >= 1",
            ));
        }
        Ok(Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            stats: CacheStats::default(),
        })
    }

    /// A copy of the stored overlay for `key`, if any.
    pub fn get(&mut self, key: &OverlayFingerprint) -> Option<OverlayMap> {
        match self.entries.get(key) {
            Some(map) => {
                self.stats.hits += 1;
                Some(map.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Store `map` under `key`, evicting the oldest entry when full.
    pub fn insert(&mut self, key: OverlayFingerprint, map: OverlayMap) {
        if self.entries.insert(key, map).is_some() {
            return;
        }
        self.order.push_back(key);
        while self.order.len() > self.capacity {
            if let Some(old) = self.order.pop_front() {
                self.entries.remove(&old);
                tracing::trace!(hi = old.hi, lo = old.lo, "overlay cache eviction");
            }
        }
    }

    /// Number of stored overlays.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of stored overlays.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Hit/miss counters since creation.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
