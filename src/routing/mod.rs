//! Routing Module
//!
//! Road-route lookups with caching and a straight-line fallback.

mod client;
mod fetcher;

pub use client::{GeoPoint, OsrmClient, RouteError, RoutingApi};
pub use fetcher::RouteFetcher;
