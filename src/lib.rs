//! # Stellium
//!
//! REST API facade over an astrology calculation engine.
//!
//! The service accepts birth data (date, time, latitude, longitude, IANA
//! timezone) and returns planetary positions, house cusps, aspects and
//! transit data, either in a normalized custom schema or in the engine's
//! native JSON shape. All ephemeris work happens behind the
//! [`provider::EphemerisProvider`] port; the service's own logic is limited
//! to validation, orb-threshold filtering and response assembly.
//!
//! ## Architecture
//!
//! - [`models`]: domain types - birth data, celestial points, aspects
//! - [`provider`]: ephemeris port and the built-in analytic adapter
//! - [`services`]: orchestration, orb policy, response assembly
//! - [`http`]: axum-based HTTP server and request handlers
//! - [`config`]: environment-driven settings

pub mod config;
pub mod http;
pub mod models;
pub mod provider;
pub mod services;
