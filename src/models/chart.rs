//! Chart domain types: celestial points, house cusps, aspect records and the
//! aggregates built from them.
//!
//! These structs are also the native wire format of the profile endpoint, so
//! field names here are a public contract.

use serde::{Deserialize, Serialize};

/// A planet or chart angle positioned on the ecliptic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialPoint {
    pub name: String,
    /// Zodiac sign the point occupies.
    pub sign: String,
    /// Sign index, 0 = Aries .. 11 = Pisces.
    pub sign_num: u8,
    /// Degrees within the sign, [0, 30).
    pub position: f64,
    /// Absolute ecliptic longitude, [0, 360).
    pub abs_pos: f64,
    /// House the point falls in (1-12), when a house frame is available.
    pub house: Option<u8>,
    pub retrograde: bool,
    /// Ecliptic longitude speed in degrees per day; negative when retrograde.
    pub speed: f64,
    /// Equatorial declination in degrees.
    pub declination: f64,
}

/// One house cusp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// House number, 1-12.
    pub house: u8,
    pub sign: String,
    /// Degrees within the sign, [0, 30).
    pub position: f64,
    /// Absolute ecliptic longitude of the cusp, [0, 360).
    pub abs_pos: f64,
}

/// An angular relationship between two celestial points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectRecord {
    pub p1_name: String,
    pub p2_name: String,
    /// Aspect name: conjunction, sextile, square, trine, opposition.
    pub aspect: String,
    /// Exact angle of the aspect in degrees (0, 60, 90, 120, 180).
    pub aspect_degrees: f64,
    /// Signed deviation from the exact angle. The orb filter compares its
    /// absolute value.
    pub orbit: f64,
    /// Actual angular separation between the two points, [0, 180].
    pub diff: f64,
    pub p1_abs_pos: f64,
    pub p2_abs_pos: f64,
    /// True when the separation is still closing toward exact.
    pub applying: bool,
}

/// Birth metadata echoed back with a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInfo {
    /// Local birth datetime, RFC 3339 with the birth-zone offset.
    pub date: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

/// Raw output of one ephemeris computation: positioned points plus the
/// twelve house cusps. Planets come first, chart angles (Ascendant,
/// Medium_Coeli) last.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBundle {
    pub points: Vec<CelestialPoint>,
    pub houses: Vec<HouseCusp>,
}

/// A complete natal chart with orb-filtered aspects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    pub birth_data: BirthInfo,
    pub planets: Vec<CelestialPoint>,
    /// Chart angles: Ascendant and Medium_Coeli.
    pub points: Vec<CelestialPoint>,
    pub houses: Vec<HouseCusp>,
    pub aspects: Vec<AspectRecord>,
}

/// Transit positions and filtered aspects at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitSnapshot {
    /// Transit instant, RFC 3339 in the subject's birth timezone.
    pub date: String,
    pub planets: Vec<CelestialPoint>,
    pub aspects_to_natal: Vec<AspectRecord>,
    pub current_sky_aspects: Vec<AspectRecord>,
}

/// Natal chart plus current transits; input to the native-mode assembler.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub natal: NatalChart,
    pub transits: TransitSnapshot,
}

/// Chart angle names, as distinguished from planets in a `ChartBundle`.
pub const ANGLE_NAMES: [&str; 2] = ["Ascendant", "Medium_Coeli"];

/// True when the point is a chart angle rather than a planet.
pub fn is_angle(name: &str) -> bool {
    ANGLE_NAMES.contains(&name)
}
