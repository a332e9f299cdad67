//! Data Transfer Objects for the HTTP API.
//!
//! Request bodies deserialize into these DTOs and are range-validated before
//! anything touches the ephemeris provider. Response DTOs for the chart
//! endpoints are re-exported from the assembler, which owns both wire
//! shapes.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::models::BirthData;

// Response shapes owned by the assembler.
pub use crate::services::assembler::{
    NatalChartBody, NormalizedAspect, NormalizedChart, NormalizedHouse, NormalizedPlanet,
    ProfileResponse,
};

/// Request body for the natal chart endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NatalChartRequest {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

impl NatalChartRequest {
    pub fn into_birth_data(self) -> BirthData {
        BirthData {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            latitude: self.latitude,
            longitude: self.longitude,
            timezone: self.timezone,
        }
    }
}

/// Request body for the profile endpoint: birth data plus an optional
/// transit instant (RFC 3339; defaults to the current time).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRequest {
    #[serde(flatten)]
    pub birth: NatalChartRequest,
    #[serde(default)]
    pub transit_date: Option<DateTime<FixedOffset>>,
}

/// Request body for the planet-house endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetHouseRequest {
    #[serde(flatten)]
    pub birth: NatalChartRequest,
    /// Planet name, case-insensitive (e.g. "sun", "Mars").
    pub planet: String,
}

/// Response for the style chart endpoint: natal placements (planets plus
/// chart angles) without aspects or houses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleChartResponse {
    pub planets: Vec<crate::models::CelestialPoint>,
    pub points: Vec<crate::models::CelestialPoint>,
}

/// Response for the planet-house endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetHouseResponse {
    pub planet: String,
    /// House number, 1-12.
    pub house: u8,
    pub sign: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub environment: String,
}

/// Root banner response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub service: String,
    pub version: String,
    pub health: String,
    pub api: String,
}
