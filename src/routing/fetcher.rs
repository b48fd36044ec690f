//! Route Fetcher Module
//!
//! Composes the TTL cache with the routing client. Lookups are bounded at
//! five seconds; any failure degrades to a two-point straight line. Both
//! outcomes are cached, so a transient routing outage serves straight lines
//! for that coordinate pair until the fallback entry expires.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::{CacheValue, TtlCache};
use crate::routing::client::{GeoPoint, RoutingApi};

/// Bound on a single routing lookup.
const ROUTE_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

// == Route Fetcher ==
/// Cached route lookups with a straight-line fallback.
pub struct RouteFetcher {
    cache: Arc<RwLock<TtlCache>>,
    client: Arc<dyn RoutingApi>,
    route_ttl: u64,
    fallback_ttl: u64,
}

impl RouteFetcher {
    /// Creates a fetcher over the shared cache and a routing client.
    pub fn new(
        cache: Arc<RwLock<TtlCache>>,
        client: Arc<dyn RoutingApi>,
        route_ttl: u64,
        fallback_ttl: u64,
    ) -> Self {
        Self {
            cache,
            client,
            route_ttl,
            fallback_ttl,
        }
    }

    // == Get Route ==
    /// Returns a path between two points as (latitude, longitude) pairs.
    ///
    /// The cache key is the exact coordinate 4-tuple; requests differing by
    /// floating-point noise are cache-distinct.
    pub async fn get_route(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Vec<GeoPoint> {
        let key = format!("route_{lat1}_{lon1}_{lat2}_{lon2}");

        {
            let mut cache = self.cache.write().await;
            if let Some(CacheValue::Route(points)) = cache.get(&key) {
                debug!(%key, "route cache hit");
                return points;
            }
        }

        match self
            .client
            .fetch_route(lon1, lat1, lon2, lat2, ROUTE_REQUEST_TIMEOUT)
            .await
        {
            Ok(raw) => {
                // The service answers in (lon, lat); flip at the boundary.
                let points: Vec<GeoPoint> = raw.into_iter().map(|(lon, lat)| (lat, lon)).collect();
                let mut cache = self.cache.write().await;
                cache.set(key, CacheValue::Route(points.clone()), self.route_ttl);
                points
            }
            Err(err) => {
                warn!(%err, "route lookup failed, falling back to straight line");
                let fallback = vec![(lat1, lon1), (lat2, lon2)];
                let mut cache = self.cache.write().await;
                cache.set(key, CacheValue::Route(fallback.clone()), self.fallback_ttl);
                fallback
            }
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use crate::routing::client::RouteError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubRoutingApi {
        calls: AtomicUsize,
        result: Option<Vec<GeoPoint>>,
    }

    impl StubRoutingApi {
        fn succeeding(raw: Vec<GeoPoint>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                result: Some(raw),
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                result: None,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RoutingApi for StubRoutingApi {
        async fn fetch_route(
            &self,
            _lon1: f64,
            _lat1: f64,
            _lon2: f64,
            _lat2: f64,
            _timeout: Duration,
        ) -> std::result::Result<Vec<GeoPoint>, RouteError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.result {
                Some(raw) => Ok(raw.clone()),
                None => Err(RouteError::Empty),
            }
        }
    }

    fn fetcher_with(
        client: Arc<StubRoutingApi>,
        clock: Arc<ManualClock>,
        route_ttl: u64,
        fallback_ttl: u64,
    ) -> RouteFetcher {
        let cache = Arc::new(RwLock::new(TtlCache::with_clock(clock)));
        RouteFetcher::new(cache, client, route_ttl, fallback_ttl)
    }

    #[tokio::test]
    async fn test_successful_route_flips_to_lat_lon() {
        // Raw service coordinates are (lon, lat).
        let client = Arc::new(StubRoutingApi::succeeding(vec![(20.0, 10.0), (40.0, 30.0)]));
        let clock = Arc::new(ManualClock::new(0));
        let fetcher = fetcher_with(client, clock, 600, 600);

        let route = fetcher.get_route(10.0, 20.0, 30.0, 40.0).await;

        assert_eq!(route, vec![(10.0, 20.0), (30.0, 40.0)]);
    }

    #[tokio::test]
    async fn test_failure_degrades_to_straight_line() {
        let client = Arc::new(StubRoutingApi::failing());
        let clock = Arc::new(ManualClock::new(0));
        let fetcher = fetcher_with(client, clock, 600, 600);

        let route = fetcher.get_route(10.0, 20.0, 30.0, 40.0).await;

        assert_eq!(route, vec![(10.0, 20.0), (30.0, 40.0)]);
    }

    #[tokio::test]
    async fn test_successful_route_is_memoized() {
        let client = Arc::new(StubRoutingApi::succeeding(vec![(5.0, 1.0), (6.0, 2.0)]));
        let clock = Arc::new(ManualClock::new(0));
        let fetcher = fetcher_with(client.clone(), clock, 600, 600);

        let first = fetcher.get_route(1.0, 5.0, 2.0, 6.0).await;
        let second = fetcher.get_route(1.0, 5.0, 2.0, 6.0).await;

        assert_eq!(client.calls(), 1);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_fallback_is_memoized_just_as_eagerly() {
        let client = Arc::new(StubRoutingApi::failing());
        let clock = Arc::new(ManualClock::new(0));
        let fetcher = fetcher_with(client.clone(), clock, 600, 600);

        let first = fetcher.get_route(10.0, 20.0, 30.0, 40.0).await;
        let second = fetcher.get_route(10.0, 20.0, 30.0, 40.0).await;

        assert_eq!(client.calls(), 1);
        assert_eq!(first, second);
        assert_eq!(second, vec![(10.0, 20.0), (30.0, 40.0)]);
    }

    #[tokio::test]
    async fn test_fallback_expires_on_its_own_ttl() {
        let client = Arc::new(StubRoutingApi::failing());
        let clock = Arc::new(ManualClock::new(0));
        // Fallback entries live 60s, successes would live 600s.
        let fetcher = fetcher_with(client.clone(), clock.clone(), 600, 60);

        fetcher.get_route(10.0, 20.0, 30.0, 40.0).await;
        clock.advance_secs(61);
        fetcher.get_route(10.0, 20.0, 30.0, 40.0).await;

        assert_eq!(client.calls(), 2);
    }

    #[tokio::test]
    async fn test_float_noise_makes_distinct_keys() {
        let client = Arc::new(StubRoutingApi::failing());
        let clock = Arc::new(ManualClock::new(0));
        let fetcher = fetcher_with(client.clone(), clock, 600, 600);

        fetcher.get_route(10.0, 20.0, 30.0, 40.0).await;
        fetcher.get_route(10.000000001, 20.0, 30.0, 40.0).await;

        assert_eq!(client.calls(), 2);
    }
}
