//! Chaintrack - supply chain tracking API
//!
//! Serves warehouse-backed inventory and batch-tracking data with an
//! in-process TTL cache and cached road-route lookups.

pub mod api;
pub mod cache;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod routing;
pub mod warehouse;

pub use api::AppState;
pub use config::Config;
