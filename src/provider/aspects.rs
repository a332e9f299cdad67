//! Aspect detection between positioned celestial points.
//!
//! Detection uses orbs wider than any response-policy threshold, so the orb
//! filter in the service layer is the only place that decides what a client
//! sees.

use crate::models::{AspectRecord, CelestialPoint};

/// Major aspects: name, exact angle, detection orb.
pub const MAJOR_ASPECTS: [(&str, f64, f64); 5] = [
    ("conjunction", 0.0, 10.0),
    ("sextile", 60.0, 6.0),
    ("square", 90.0, 8.0),
    ("trine", 120.0, 8.0),
    ("opposition", 180.0, 10.0),
];

/// Angular separation between two ecliptic longitudes, [0, 180].
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(360.0);
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// True when the separation between the two points is still closing toward
/// the exact aspect angle. Judged by stepping both points forward along
/// their current speeds.
fn is_applying(p1: &CelestialPoint, p2: &CelestialPoint, exact_angle: f64) -> bool {
    const STEP_DAYS: f64 = 0.01;
    let now = angular_separation(p1.abs_pos, p2.abs_pos);
    let later = angular_separation(
        p1.abs_pos + p1.speed * STEP_DAYS,
        p2.abs_pos + p2.speed * STEP_DAYS,
    );
    (later - exact_angle).abs() < (now - exact_angle).abs()
}

/// Detect the aspect (if any) between two points.
///
/// The aspect table is ordered and detection orbs do not overlap between
/// neighboring angles, so at most one aspect matches.
pub fn detect(p1: &CelestialPoint, p2: &CelestialPoint) -> Option<AspectRecord> {
    let diff = angular_separation(p1.abs_pos, p2.abs_pos);
    for (name, angle, orb) in MAJOR_ASPECTS {
        let orbit = diff - angle;
        if orbit.abs() < orb {
            return Some(AspectRecord {
                p1_name: p1.name.clone(),
                p2_name: p2.name.clone(),
                aspect: name.to_string(),
                aspect_degrees: angle,
                orbit,
                diff,
                p1_abs_pos: p1.abs_pos,
                p2_abs_pos: p2.abs_pos,
                applying: is_applying(p1, p2, angle),
            });
        }
    }
    None
}

/// Aspects within one chart: each unordered pair once, input order kept.
pub fn single_chart_aspects(points: &[CelestialPoint]) -> Vec<AspectRecord> {
    let mut aspects = Vec::new();
    for (i, p1) in points.iter().enumerate() {
        for p2 in &points[i + 1..] {
            if let Some(record) = detect(p1, p2) {
                aspects.push(record);
            }
        }
    }
    aspects
}

/// Aspects across two charts: full cross product, first chart first.
pub fn dual_chart_aspects(a: &[CelestialPoint], b: &[CelestialPoint]) -> Vec<AspectRecord> {
    let mut aspects = Vec::new();
    for p1 in a {
        for p2 in b {
            if let Some(record) = detect(p1, p2) {
                aspects.push(record);
            }
        }
    }
    aspects
}
