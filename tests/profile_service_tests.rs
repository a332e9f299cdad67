//! Profile service tests against a scripted provider.
//!
//! The scripted provider returns known aspect orbits per category, which
//! pins down exactly which threshold the service applies where.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

use stellium::models::{
    AspectRecord, BirthData, CelestialPoint, ChartBundle, HouseCusp,
};
use stellium::provider::{EphemerisProvider, ProviderError};
use stellium::services::ProfileService;

fn point(name: &str, abs_pos: f64) -> CelestialPoint {
    CelestialPoint {
        name: name.to_string(),
        sign: "Aries".to_string(),
        sign_num: 0,
        position: abs_pos % 30.0,
        abs_pos,
        house: Some(1),
        retrograde: false,
        speed: 1.0,
        declination: 0.0,
    }
}

fn record(p1: &str, p2: &str, orbit: f64) -> AspectRecord {
    AspectRecord {
        p1_name: p1.to_string(),
        p2_name: p2.to_string(),
        aspect: "conjunction".to_string(),
        aspect_degrees: 0.0,
        orbit,
        diff: orbit.abs(),
        p1_abs_pos: 0.0,
        p2_abs_pos: orbit,
        applying: false,
    }
}

/// Provider with canned output. Aspect orbits straddle every policy
/// threshold so the filtered survivors identify the threshold used.
struct ScriptedProvider;

impl EphemerisProvider for ScriptedProvider {
    fn compute_chart(
        &self,
        _when: DateTime<Utc>,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<ChartBundle, ProviderError> {
        let points = vec![
            point("Sun", 10.0),
            point("Moon", 100.0),
            point("Ascendant", 200.0),
            point("Medium_Coeli", 290.0),
        ];
        let houses = (1..=12)
            .map(|n| HouseCusp {
                house: n,
                sign: "Aries".to_string(),
                position: 0.0,
                abs_pos: (n as f64 - 1.0) * 30.0,
            })
            .collect();
        Ok(ChartBundle { points, houses })
    }

    fn single_chart_aspects(&self, points: &[CelestialPoint]) -> Vec<AspectRecord> {
        if points.len() == 4 {
            // Natal chart: planets plus angles.
            vec![
                record("Sun", "Moon", 5.5),
                record("Sun", "Ascendant", 6.0),
                record("Moon", "Ascendant", -7.0),
            ]
        } else {
            // Current sky: planets only.
            vec![record("Sun", "Moon", 5.9), record("Sun", "Moon", 6.1)]
        }
    }

    fn dual_chart_aspects(
        &self,
        _a: &[CelestialPoint],
        _b: &[CelestialPoint],
    ) -> Vec<AspectRecord> {
        vec![
            record("Sun", "Sun", 7.9),
            record("Sun", "Moon", 8.0),
            record("Moon", "Sun", -8.5),
        ]
    }
}

fn birth() -> BirthData {
    BirthData {
        year: 1990,
        month: 3,
        day: 15,
        hour: 14,
        minute: 30,
        latitude: 40.7128,
        longitude: -74.0060,
        timezone: "America/New_York".to_string(),
    }
}

fn service() -> ProfileService {
    ProfileService::new(Arc::new(ScriptedProvider))
}

#[test]
fn test_natal_aspects_use_six_degree_threshold() {
    let chart = service().natal_chart(&birth()).unwrap();
    // 5.5 survives; 6.0 is exactly on the threshold and drops; -7.0 drops.
    assert_eq!(chart.aspects.len(), 1);
    assert_eq!(chart.aspects[0].orbit, 5.5);
}

#[test]
fn test_transit_to_natal_uses_eight_degree_threshold() {
    let profile = service()
        .profile(&birth(), Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()))
        .unwrap();
    // 7.9 survives; 8.0 and -8.5 drop.
    assert_eq!(profile.transits.aspects_to_natal.len(), 1);
    assert_eq!(profile.transits.aspects_to_natal[0].orbit, 7.9);
}

#[test]
fn test_current_sky_uses_six_degree_threshold() {
    let profile = service()
        .profile(&birth(), Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()))
        .unwrap();
    // 5.9 survives; 6.1 drops.
    assert_eq!(profile.transits.current_sky_aspects.len(), 1);
    assert_eq!(profile.transits.current_sky_aspects[0].orbit, 5.9);
}

#[test]
fn test_angles_partitioned_out_of_planets() {
    let chart = service().natal_chart(&birth()).unwrap();
    assert_eq!(chart.planets.len(), 2);
    assert_eq!(chart.points.len(), 2);
    assert!(chart.points.iter().any(|p| p.name == "Ascendant"));
    assert!(chart.points.iter().any(|p| p.name == "Medium_Coeli"));
}

#[test]
fn test_default_transit_date_comes_from_clock() {
    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, 4, 16, 0, 0).unwrap()
    }
    let svc = service().with_clock(fixed_now);
    let profile = svc.profile(&birth(), None).unwrap();
    // Reported in the birth timezone (EDT, UTC-4 in July).
    assert!(profile.transits.date.starts_with("2026-07-04T12:00:00"));
}

#[test]
fn test_transit_snapshot_date_in_birth_timezone() {
    let profile = service()
        .profile(
            &birth(),
            Some(Utc.with_ymd_and_hms(2026, 1, 1, 3, 0, 0).unwrap()),
        )
        .unwrap();
    // EST is UTC-5 in January; 03:00 UTC is the previous evening.
    assert!(profile.transits.date.starts_with("2025-12-31T22:00:00"));
}
