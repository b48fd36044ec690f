//! Routing Client Module
//!
//! Seam over the external road-routing service. The service speaks
//! (longitude, latitude) ordered pairs; callers above this module only ever
//! see (latitude, longitude).

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

// == Geo Point ==
/// A coordinate pair. Ordering is positional and context-dependent: raw
/// client results are (longitude, latitude), fetcher results are
/// (latitude, longitude).
pub type GeoPoint = (f64, f64);

// == Route Error ==
/// Routing lookup failure. Internal only: the route fetcher absorbs every
/// variant into the straight-line fallback.
#[derive(Error, Debug)]
pub enum RouteError {
    #[error("routing request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("routing service returned HTTP {0}")]
    Status(u16),

    #[error("routing service rejected request: {0}")]
    Rejected(String),

    #[error("routing response contained no routes")]
    Empty,
}

// == Routing Api Trait ==
/// Fetches a driving route between two points.
///
/// Coordinates are passed and returned in the external service's
/// (longitude, latitude) order.
#[async_trait]
pub trait RoutingApi: Send + Sync {
    async fn fetch_route(
        &self,
        lon1: f64,
        lat1: f64,
        lon2: f64,
        lat2: f64,
        timeout: Duration,
    ) -> std::result::Result<Vec<GeoPoint>, RouteError>;
}

// == OSRM Client ==
/// Routing client for an OSRM-compatible HTTP service.
pub struct OsrmClient {
    http: reqwest::Client,
    base_url: String,
}

impl OsrmClient {
    /// Creates a client against the given base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RoutingApi for OsrmClient {
    async fn fetch_route(
        &self,
        lon1: f64,
        lat1: f64,
        lon2: f64,
        lat2: f64,
        timeout: Duration,
    ) -> std::result::Result<Vec<GeoPoint>, RouteError> {
        let url = format!(
            "{}/route/v1/driving/{lon1},{lat1};{lon2},{lat2}?overview=full&geometries=geojson",
            self.base_url
        );

        let response = self.http.get(&url).timeout(timeout).send().await?;
        if !response.status().is_success() {
            return Err(RouteError::Status(response.status().as_u16()));
        }

        let body: OsrmResponse = response.json().await?;
        extract_coordinates(body)
    }
}

// == Response Shapes ==
#[derive(Debug, Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<GeoPoint>,
}

/// Pulls the first route's geometry out of a decoded OSRM payload.
fn extract_coordinates(body: OsrmResponse) -> std::result::Result<Vec<GeoPoint>, RouteError> {
    if body.code != "Ok" {
        return Err(RouteError::Rejected(body.code));
    }
    body.routes
        .into_iter()
        .next()
        .map(|route| route.geometry.coordinates)
        .ok_or(RouteError::Empty)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> OsrmResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_extract_coordinates_from_ok_payload() {
        let body = decode(
            r#"{
                "code": "Ok",
                "routes": [
                    {"geometry": {"type": "LineString", "coordinates": [[20.0, 10.0], [40.0, 30.0]]}}
                ]
            }"#,
        );

        let coords = extract_coordinates(body).unwrap();
        assert_eq!(coords, vec![(20.0, 10.0), (40.0, 30.0)]);
    }

    #[test]
    fn test_rejected_code_is_an_error() {
        let body = decode(r#"{"code": "NoRoute", "routes": []}"#);

        let result = extract_coordinates(body);
        assert!(matches!(result, Err(RouteError::Rejected(code)) if code == "NoRoute"));
    }

    #[test]
    fn test_ok_without_routes_is_an_error() {
        let body = decode(r#"{"code": "Ok", "routes": []}"#);

        assert!(matches!(extract_coordinates(body), Err(RouteError::Empty)));
    }

    #[test]
    fn test_missing_routes_field_tolerated() {
        let body = decode(r#"{"code": "Ok"}"#);

        assert!(matches!(extract_coordinates(body), Err(RouteError::Empty)));
    }
}
