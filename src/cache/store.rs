//! Cache Store Module
//!
//! TTL cache guarding warehouse queries and route lookups. Eviction is lazy:
//! an expired entry is only removed when its exact key is read again or the
//! whole cache is cleared. There is no size bound and no background sweep;
//! the key space is small and enumerable.

use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::{CacheEntry, CacheStats, CacheValue, Clock, SystemClock};

// == TTL Cache ==
/// In-process cache keyed by caller-chosen strings.
pub struct TtlCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// Time source, injectable for deterministic expiry tests
    clock: Arc<dyn Clock>,
}

impl TtlCache {
    // == Constructors ==
    /// Creates an empty cache using the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty cache using the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            clock,
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value if present and fresh. An expired entry is removed
    /// and reported as absent. Absent keys have no side effect beyond the
    /// miss counter.
    pub fn get(&mut self, key: &str) -> Option<CacheValue> {
        let now = self.clock.now_ms();

        match self.entries.get(key) {
            Some(entry) if entry.is_expired(now) => {
                self.entries.remove(key);
                self.stats.record_expired();
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                None
            }
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a value under `key`, expiring `ttl_seconds` from now.
    ///
    /// Any existing entry for the key is overwritten and its expiry replaced.
    pub fn set(&mut self, key: String, value: CacheValue, ttl_seconds: u64) {
        let now = self.clock.now_ms();
        self.entries
            .insert(key, CacheEntry::new(value, ttl_seconds, now));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Clear ==
    /// Removes all entries unconditionally. Used for administrative reset.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries, expired-but-unread included.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TtlCache {
    fn default() -> Self {
        Self::new()
    }
}
