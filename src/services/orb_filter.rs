//! Orb-threshold aspect filtering.
//!
//! The one piece of response policy this service owns. Thresholds are part
//! of the public compatibility contract and must not drift.

use crate::models::AspectRecord;

/// Maximum orbs per aspect category, degrees. Comparison is strict: a
/// record sitting exactly on the threshold is excluded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbPolicy {
    /// Natal-to-natal aspects.
    pub natal: f64,
    /// Transiting points against the natal chart.
    pub transit_to_natal: f64,
    /// Transiting points against each other (current sky).
    pub current_sky: f64,
}

impl Default for OrbPolicy {
    fn default() -> Self {
        Self {
            natal: 6.0,
            transit_to_natal: 8.0,
            current_sky: 6.0,
        }
    }
}

/// Keep aspects with `|orbit| < max_orb`, preserving input order.
pub fn filter_aspects_by_orb(aspects: Vec<AspectRecord>, max_orb: f64) -> Vec<AspectRecord> {
    aspects
        .into_iter()
        .filter(|a| a.orbit.abs() < max_orb)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

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

    #[test]
    fn test_default_policy_thresholds() {
        let policy = OrbPolicy::default();
        assert_eq!(policy.natal, 6.0);
        assert_eq!(policy.transit_to_natal, 8.0);
        assert_eq!(policy.current_sky, 6.0);
    }

    #[test]
    fn test_strict_boundary_at_six_degrees() {
        let aspects = vec![record("Sun", "Moon", 5.999), record("Sun", "Mars", 6.0)];
        let kept = filter_aspects_by_orb(aspects, 6.0);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].p2_name, "Moon");
    }

    #[test]
    fn test_strict_boundary_at_eight_degrees() {
        let aspects = vec![record("Mars", "Sun", 8.0), record("Mars", "Moon", 7.999)];
        let kept = filter_aspects_by_orb(aspects, 8.0);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].p2_name, "Moon");
    }

    #[test]
    fn test_negative_orbit_compared_by_magnitude() {
        let aspects = vec![record("Sun", "Venus", -5.5), record("Sun", "Pluto", -6.5)];
        let kept = filter_aspects_by_orb(aspects, 6.0);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].p2_name, "Venus");
    }

    #[test]
    fn test_empty_and_all_excluded_yield_empty() {
        assert!(filter_aspects_by_orb(vec![], 6.0).is_empty());
        let aspects = vec![record("Sun", "Moon", 9.0)];
        assert!(filter_aspects_by_orb(aspects, 6.0).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let aspects = vec![
            record("Sun", "Moon", 1.0),
            record("Sun", "Mars", 7.0),
            record("Moon", "Venus", 2.0),
            record("Venus", "Mars", 0.5),
        ];
        let kept = filter_aspects_by_orb(aspects, 6.0);
        let pairs: Vec<_> = kept.iter().map(|a| a.p2_name.as_str()).collect();
        assert_eq!(pairs, vec!["Moon", "Venus", "Mars"]);
    }

    proptest! {
        #[test]
        fn prop_filter_is_idempotent(orbits in prop::collection::vec(-12.0f64..12.0, 0..40),
                                     threshold in 0.0f64..10.0) {
            let aspects: Vec<AspectRecord> = orbits
                .iter()
                .map(|&o| record("A", "B", o))
                .collect();
            let once = filter_aspects_by_orb(aspects, threshold);
            let twice = filter_aspects_by_orb(once.clone(), threshold);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_kept_records_within_threshold(orbits in prop::collection::vec(-12.0f64..12.0, 0..40),
                                              threshold in 0.0f64..10.0) {
            let aspects: Vec<AspectRecord> = orbits
                .iter()
                .map(|&o| record("A", "B", o))
                .collect();
            for kept in filter_aspects_by_orb(aspects, threshold) {
                prop_assert!(kept.orbit.abs() < threshold);
            }
        }
    }
}
