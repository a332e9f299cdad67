//! Ephemeris provider port.
//!
//! The HTTP and service layers never compute positions themselves; they talk
//! to this trait. The built-in adapter lives in [`builtin`]; a Swiss
//! Ephemeris adapter could slot in behind the same seam.

pub mod aspects;
pub mod builtin;
pub mod kepler;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{AspectRecord, CelestialPoint, ChartBundle};

pub use builtin::BuiltinProvider;

/// Errors surfaced by an ephemeris provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request asked for something no engine can compute; maps to a
    /// client error.
    #[error("invalid astronomical input: {0}")]
    InvalidInput(String),
    /// The engine itself failed; maps to an internal error.
    #[error("chart calculation failed: {0}")]
    Calculation(String),
}

/// Calculation engine behind the service.
///
/// Implementations must be deterministic: the same instant and place always
/// produce the same bundle.
pub trait EphemerisProvider: Send + Sync {
    /// Planetary positions, chart angles and house cusps for an instant and
    /// place.
    fn compute_chart(
        &self,
        when: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
    ) -> Result<ChartBundle, ProviderError>;

    /// Pairwise aspects within one chart.
    fn single_chart_aspects(&self, points: &[CelestialPoint]) -> Vec<AspectRecord>;

    /// Aspects between two charts (e.g. transiting points against natal
    /// points).
    fn dual_chart_aspects(&self, a: &[CelestialPoint], b: &[CelestialPoint])
        -> Vec<AspectRecord>;
}
