//! Response assembly.
//!
//! Two output modes over the same domain data:
//!
//! - **Normalized**: a stable custom schema for the natal endpoint, with
//!   field names owned by this service (plus derived `element`/`quality`),
//!   so API consumers are decoupled from engine schema churn.
//! - **Native**: near-passthrough serialization of the domain structs for
//!   the profile endpoint; only orb filtering has been applied upstream.

use serde::{Deserialize, Serialize};

use crate::models::zodiac;
use crate::models::{
    AspectRecord, BirthInfo, CelestialPoint, HouseCusp, NatalChart, Profile, TransitSnapshot,
};

// =============================================================================
// Normalized mode
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPlanet {
    pub name: String,
    pub sign: String,
    pub element: String,
    pub quality: String,
    /// Degrees within the sign, [0, 30).
    pub degree: f64,
    /// Absolute ecliptic longitude, [0, 360).
    pub absolute_degree: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house: Option<u8>,
    pub retrograde: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedHouse {
    pub house: u8,
    pub sign: String,
    pub degree: f64,
    pub absolute_degree: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedAspect {
    pub point1: String,
    pub point2: String,
    pub aspect: String,
    /// Absolute deviation from the exact angle, degrees.
    pub orb: f64,
    pub exact_angle: f64,
    pub applying: bool,
}

/// Normalized natal chart: the stable public schema of the natal endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedChart {
    pub chart_type: String,
    pub birth_data: BirthInfo,
    pub planets: Vec<NormalizedPlanet>,
    pub houses: Vec<NormalizedHouse>,
    pub aspects: Vec<NormalizedAspect>,
    pub ascendant: NormalizedPlanet,
    pub midheaven: NormalizedPlanet,
}

fn normalize_point(point: &CelestialPoint) -> NormalizedPlanet {
    NormalizedPlanet {
        name: point.name.clone(),
        sign: point.sign.clone(),
        element: zodiac::element(point.sign_num).to_string(),
        quality: zodiac::quality(point.sign_num).to_string(),
        degree: point.position,
        absolute_degree: point.abs_pos,
        house: point.house,
        retrograde: point.retrograde,
    }
}

fn normalize_house(cusp: &HouseCusp) -> NormalizedHouse {
    NormalizedHouse {
        house: cusp.house,
        sign: cusp.sign.clone(),
        degree: cusp.position,
        absolute_degree: cusp.abs_pos,
    }
}

fn normalize_aspect(aspect: &AspectRecord) -> NormalizedAspect {
    NormalizedAspect {
        point1: aspect.p1_name.clone(),
        point2: aspect.p2_name.clone(),
        aspect: aspect.aspect.clone(),
        orb: aspect.orbit.abs(),
        exact_angle: aspect.aspect_degrees,
        applying: aspect.applying,
    }
}

/// Assemble the normalized natal response.
pub fn normalized_chart(chart: &NatalChart) -> NormalizedChart {
    let find_angle = |name: &str| {
        chart
            .points
            .iter()
            .find(|p| p.name == name)
            .map(normalize_point)
            // Providers emit both angles; the 0° Aries placeholder only
            // exists to keep this total.
            .unwrap_or_else(|| normalize_point(&placeholder_angle(name)))
    };

    NormalizedChart {
        chart_type: "natal".to_string(),
        birth_data: chart.birth_data.clone(),
        planets: chart.planets.iter().map(normalize_point).collect(),
        houses: chart.houses.iter().map(normalize_house).collect(),
        aspects: chart.aspects.iter().map(normalize_aspect).collect(),
        ascendant: find_angle("Ascendant"),
        midheaven: find_angle("Medium_Coeli"),
    }
}

fn placeholder_angle(name: &str) -> CelestialPoint {
    CelestialPoint {
        name: name.to_string(),
        sign: zodiac::sign_name(0.0).to_string(),
        sign_num: 0,
        position: 0.0,
        abs_pos: 0.0,
        house: None,
        retrograde: false,
        speed: 0.0,
        declination: 0.0,
    }
}

// =============================================================================
// Native mode
// =============================================================================

/// Natal chart body in the native profile response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChartBody {
    pub birth_data: BirthInfo,
    pub planets: Vec<CelestialPoint>,
    pub houses: Vec<HouseCusp>,
    pub points: Vec<CelestialPoint>,
}

/// Native profile response: domain serialization with filtering applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub natal_chart: NatalChartBody,
    pub natal_aspects: Vec<AspectRecord>,
    pub current_transits: TransitSnapshot,
}

/// Assemble the native profile response.
pub fn native_profile(profile: Profile) -> ProfileResponse {
    let Profile { natal, transits } = profile;
    ProfileResponse {
        natal_chart: NatalChartBody {
            birth_data: natal.birth_data,
            planets: natal.planets,
            houses: natal.houses,
            points: natal.points,
        },
        natal_aspects: natal.aspects,
        current_transits: transits,
    }
}
