//! Built-in ephemeris adapter.
//!
//! Assembles chart bundles from the analytic series in [`kepler`]: geocentric
//! positions with speeds and declinations, Ascendant and Midheaven from local
//! sidereal time, and Porphyry house cusps (each quadrant between the angles
//! trisected). Cusp 1 is always the Ascendant and cusp 10 the Midheaven.

use chrono::{DateTime, Utc};

use super::aspects;
use super::kepler::{self, Body};
use super::{EphemerisProvider, ProviderError};
use crate::models::zodiac;
use crate::models::{AspectRecord, CelestialPoint, ChartBundle, HouseCusp};

/// Latitudes closer to the poles than this leave the Ascendant undefined for
/// part of the day; reject rather than return garbage cusps.
const MAX_HOUSE_LATITUDE: f64 = 89.5;

/// Half-step used for the numeric longitude-speed derivative, days.
const SPEED_HALF_STEP: f64 = 0.5;

#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinProvider;

impl BuiltinProvider {
    pub fn new() -> Self {
        Self
    }
}

impl EphemerisProvider for BuiltinProvider {
    fn compute_chart(
        &self,
        when: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
    ) -> Result<ChartBundle, ProviderError> {
        if latitude.abs() > MAX_HOUSE_LATITUDE {
            return Err(ProviderError::InvalidInput(format!(
                "latitude {latitude} is too close to the pole for house calculation"
            )));
        }

        let d = kepler::days_since_epoch(when);
        let eps = kepler::obliquity(d);

        // Angles and house cusps first so planets can be assigned houses.
        let ramc = kepler::rev(kepler::gmst_deg(kepler::julian_day(when)) + longitude);
        let asc = kepler::ascendant(ramc, eps, latitude);
        let mc = kepler::midheaven(ramc, eps);
        let cusps = porphyry_cusps(asc, mc);

        let mut points: Vec<CelestialPoint> = Body::ALL
            .iter()
            .map(|&body| {
                let state = kepler::body_state(body, d);
                let before = kepler::body_state(body, d - SPEED_HALF_STEP).lon;
                let after = kepler::body_state(body, d + SPEED_HALF_STEP).lon;
                let speed = signed_arc(before, after);
                make_point(
                    body.name(),
                    state.lon,
                    speed,
                    kepler::declination(state.lon, state.lat, eps),
                    Some(house_of(state.lon, &cusps)),
                )
            })
            .collect();

        // Chart angles carry no speed or retrograde state.
        points.push(make_point(
            "Ascendant",
            asc,
            0.0,
            kepler::declination(asc, 0.0, eps),
            Some(1),
        ));
        points.push(make_point(
            "Medium_Coeli",
            mc,
            0.0,
            kepler::declination(mc, 0.0, eps),
            Some(10),
        ));

        let houses = cusps
            .iter()
            .enumerate()
            .map(|(i, &abs_pos)| HouseCusp {
                house: (i + 1) as u8,
                sign: zodiac::sign_name(abs_pos).to_string(),
                position: zodiac::degrees_in_sign(abs_pos),
                abs_pos,
            })
            .collect();

        Ok(ChartBundle { points, houses })
    }

    fn single_chart_aspects(&self, points: &[CelestialPoint]) -> Vec<AspectRecord> {
        aspects::single_chart_aspects(points)
    }

    fn dual_chart_aspects(
        &self,
        a: &[CelestialPoint],
        b: &[CelestialPoint],
    ) -> Vec<AspectRecord> {
        aspects::dual_chart_aspects(a, b)
    }
}

fn make_point(
    name: &str,
    abs_pos: f64,
    speed: f64,
    declination: f64,
    house: Option<u8>,
) -> CelestialPoint {
    let abs_pos = zodiac::normalize_degrees(abs_pos);
    CelestialPoint {
        name: name.to_string(),
        sign: zodiac::sign_name(abs_pos).to_string(),
        sign_num: zodiac::sign_index(abs_pos),
        position: zodiac::degrees_in_sign(abs_pos),
        abs_pos,
        house,
        retrograde: speed < 0.0,
        speed,
        declination,
    }
}

/// Signed arc from `from` to `to`, shortest way, degrees.
fn signed_arc(from: f64, to: f64) -> f64 {
    kepler::rev(to - from + 180.0) - 180.0
}

/// Porphyry cusps: angles fixed, each quadrant trisected.
fn porphyry_cusps(asc: f64, mc: f64) -> [f64; 12] {
    let ic = kepler::rev(mc + 180.0);
    let desc = kepler::rev(asc + 180.0);

    // Arc from Ascendant down to the IC (houses 1-3), and from the IC up to
    // the Descendant (houses 4-6); the rest are opposites.
    let q1 = kepler::rev(ic - asc);
    let q2 = kepler::rev(desc - ic);

    let mut cusps = [0.0; 12];
    cusps[0] = asc;
    cusps[1] = kepler::rev(asc + q1 / 3.0);
    cusps[2] = kepler::rev(asc + 2.0 * q1 / 3.0);
    cusps[3] = ic;
    cusps[4] = kepler::rev(ic + q2 / 3.0);
    cusps[5] = kepler::rev(ic + 2.0 * q2 / 3.0);
    for i in 6..12 {
        cusps[i] = kepler::rev(cusps[i - 6] + 180.0);
    }
    cusps
}

/// House containing an ecliptic longitude: the cusp interval the position
/// falls into, wrapping at 360°.
fn house_of(abs_pos: f64, cusps: &[f64; 12]) -> u8 {
    for i in 0..12 {
        let start = cusps[i];
        let end = cusps[(i + 1) % 12];
        let span = kepler::rev(end - start);
        if kepler::rev(abs_pos - start) < span {
            return (i + 1) as u8;
        }
    }
    // Unreachable: the twelve intervals tile the full circle.
    12
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_instant() -> DateTime<Utc> {
        // 1990-03-15 14:30 America/New_York == 19:30 UTC.
        Utc.with_ymd_and_hms(1990, 3, 15, 19, 30, 0).unwrap()
    }

    #[test]
    fn test_chart_has_ten_planets_two_angles_twelve_houses() {
        let bundle = BuiltinProvider::new()
            .compute_chart(sample_instant(), 40.7128, -74.0060)
            .unwrap();
        assert_eq!(bundle.points.len(), 12);
        assert_eq!(bundle.houses.len(), 12);
        assert_eq!(bundle.points[0].name, "Sun");
        assert_eq!(bundle.points[10].name, "Ascendant");
        assert_eq!(bundle.points[11].name, "Medium_Coeli");
    }

    #[test]
    fn test_point_invariants() {
        let bundle = BuiltinProvider::new()
            .compute_chart(sample_instant(), 40.7128, -74.0060)
            .unwrap();
        for p in &bundle.points {
            assert!((0.0..360.0).contains(&p.abs_pos), "{} abs_pos", p.name);
            assert!((0.0..30.0).contains(&p.position), "{} position", p.name);
            assert!((1..=12).contains(&p.house.unwrap()), "{} house", p.name);
            assert_eq!(p.retrograde, p.speed < 0.0, "{} retrograde flag", p.name);
            assert_eq!(
                p.sign,
                zodiac::sign_name(p.abs_pos),
                "{} sign matches longitude",
                p.name
            );
        }
    }

    #[test]
    fn test_sun_in_pisces_mid_march() {
        let bundle = BuiltinProvider::new()
            .compute_chart(sample_instant(), 40.7128, -74.0060)
            .unwrap();
        let sun = &bundle.points[0];
        assert_eq!(sun.sign, "Pisces");
        assert!(!sun.retrograde);
    }

    #[test]
    fn test_angles_anchor_cusps() {
        let bundle = BuiltinProvider::new()
            .compute_chart(sample_instant(), 40.7128, -74.0060)
            .unwrap();
        let asc = bundle.points.iter().find(|p| p.name == "Ascendant").unwrap();
        let mc = bundle
            .points
            .iter()
            .find(|p| p.name == "Medium_Coeli")
            .unwrap();
        assert!((bundle.houses[0].abs_pos - asc.abs_pos).abs() < 1e-9);
        assert!((bundle.houses[9].abs_pos - mc.abs_pos).abs() < 1e-9);
        assert_eq!(asc.house, Some(1));
        assert_eq!(mc.house, Some(10));
    }

    #[test]
    fn test_cusps_tile_the_circle() {
        let bundle = BuiltinProvider::new()
            .compute_chart(sample_instant(), 40.7128, -74.0060)
            .unwrap();
        let cusps: Vec<f64> = bundle.houses.iter().map(|h| h.abs_pos).collect();
        let total: f64 = (0..12)
            .map(|i| kepler::rev(cusps[(i + 1) % 12] - cusps[i]))
            .sum();
        assert!((total - 360.0).abs() < 1e-6);
    }

    #[test]
    fn test_determinism() {
        let provider = BuiltinProvider::new();
        let a = provider
            .compute_chart(sample_instant(), 40.7128, -74.0060)
            .unwrap();
        let b = provider
            .compute_chart(sample_instant(), 40.7128, -74.0060)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_polar_latitude_rejected() {
        let err = BuiltinProvider::new()
            .compute_chart(sample_instant(), 89.9, 0.0)
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidInput(_)));
    }

    #[test]
    fn test_house_of_wrapping_interval() {
        let cusps = porphyry_cusps(350.0, 260.0);
        // A point just past the Ascendant sits in house 1 even across 0°.
        assert_eq!(house_of(355.0, &cusps), 1);
        assert_eq!(house_of(5.0, &cusps), 1);
    }
}
