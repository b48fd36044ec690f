//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use crate::routing::GeoPoint;
use crate::warehouse::Row;

// == Cache Value ==
/// Payload stored in the cache.
///
/// The key space is small and enumerable (product list, batch list,
/// per-batch, per-route-pair), so two payload shapes cover every entry.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheValue {
    /// Tabular warehouse rows
    Rows(Vec<Row>),
    /// Route path as (latitude, longitude) pairs
    Route(Vec<GeoPoint>),
}

// == Cache Entry ==
/// Represents a single cache entry with value and expiry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    pub value: CacheValue,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_seconds` after `now_ms`.
    pub fn new(value: CacheValue, ttl_seconds: u64, now_ms: u64) -> Self {
        Self {
            value,
            expires_at: now_ms + ttl_seconds * 1000,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now_ms`.
    ///
    /// An entry is valid while `now <= expires_at`; it expires strictly after
    /// the expiry instant.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms > self.expires_at
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn route_value() -> CacheValue {
        CacheValue::Route(vec![(10.0, 20.0), (30.0, 40.0)])
    }

    #[test]
    fn test_entry_expiry_math() {
        let entry = CacheEntry::new(route_value(), 300, 1_000);
        assert_eq!(entry.expires_at, 301_000);
    }

    #[test]
    fn test_entry_fresh_before_expiry() {
        let entry = CacheEntry::new(route_value(), 300, 1_000);
        assert!(!entry.is_expired(1_000));
        assert!(!entry.is_expired(300_999));
    }

    #[test]
    fn test_entry_valid_at_exact_expiry_instant() {
        let entry = CacheEntry::new(route_value(), 300, 1_000);
        assert!(!entry.is_expired(301_000));
        assert!(entry.is_expired(301_001));
    }

    #[test]
    fn test_zero_ttl_expires_after_same_instant() {
        let entry = CacheEntry::new(route_value(), 0, 1_000);
        assert!(!entry.is_expired(1_000));
        assert!(entry.is_expired(1_001));
    }
}
