//! Profile service: orchestrates natal chart and transit calculations.
//!
//! The service owns no astronomy; it validates input, drives the ephemeris
//! provider (once for natal data, once for the transit instant) and applies
//! the orb policy to every aspect category.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::orb_filter::{filter_aspects_by_orb, OrbPolicy};
use crate::models::{
    is_angle, BirthData, BirthDataError, BirthInfo, CelestialPoint, NatalChart, Profile,
    TransitSnapshot,
};
use crate::provider::{EphemerisProvider, ProviderError};

/// Wall-clock source; injectable so the default-transit-date path is
/// testable.
pub type Clock = fn() -> DateTime<Utc>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Birth(#[from] BirthDataError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

pub struct ProfileService {
    provider: Arc<dyn EphemerisProvider>,
    policy: OrbPolicy,
    clock: Clock,
}

impl ProfileService {
    pub fn new(provider: Arc<dyn EphemerisProvider>) -> Self {
        Self {
            provider,
            policy: OrbPolicy::default(),
            clock: Utc::now,
        }
    }

    /// Replace the wall-clock source (tests).
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the orb policy. The defaults are the compatibility contract;
    /// overriding is for tests and experiments, not endpoints.
    pub fn with_policy(mut self, policy: OrbPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Compute a natal chart with orb-filtered natal aspects.
    pub fn natal_chart(&self, birth: &BirthData) -> Result<NatalChart, ServiceError> {
        let instant = birth.birth_instant()?;
        let tz = birth.resolve_timezone()?;

        let bundle = self
            .provider
            .compute_chart(instant, birth.latitude, birth.longitude)?;

        let aspects = filter_aspects_by_orb(
            self.provider.single_chart_aspects(&bundle.points),
            self.policy.natal,
        );

        let (angles, planets): (Vec<CelestialPoint>, Vec<CelestialPoint>) = bundle
            .points
            .into_iter()
            .partition(|p| is_angle(&p.name));

        Ok(NatalChart {
            birth_data: BirthInfo {
                date: instant.with_timezone(&tz).to_rfc3339(),
                latitude: birth.latitude,
                longitude: birth.longitude,
                timezone: birth.timezone.clone(),
            },
            planets,
            points: angles,
            houses: bundle.houses,
            aspects,
        })
    }

    /// Compute a full profile: natal chart plus transits at `transit_date`
    /// (defaulting to the current wall-clock time).
    pub fn profile(
        &self,
        birth: &BirthData,
        transit_date: Option<DateTime<Utc>>,
    ) -> Result<Profile, ServiceError> {
        let natal = self.natal_chart(birth)?;
        let tz = birth.resolve_timezone()?;
        let transit_instant = transit_date.unwrap_or_else(self.clock);

        // Transits happen overhead at the subject's location.
        let bundle = self
            .provider
            .compute_chart(transit_instant, birth.latitude, birth.longitude)?;
        let transit_planets: Vec<CelestialPoint> = bundle
            .points
            .into_iter()
            .filter(|p| !is_angle(&p.name))
            .collect();

        let natal_targets: Vec<CelestialPoint> = natal
            .planets
            .iter()
            .chain(natal.points.iter())
            .cloned()
            .collect();

        let aspects_to_natal = filter_aspects_by_orb(
            self.provider
                .dual_chart_aspects(&transit_planets, &natal_targets),
            self.policy.transit_to_natal,
        );
        let current_sky_aspects = filter_aspects_by_orb(
            self.provider.single_chart_aspects(&transit_planets),
            self.policy.current_sky,
        );

        Ok(Profile {
            natal,
            transits: TransitSnapshot {
                date: transit_instant.with_timezone(&tz).to_rfc3339(),
                planets: transit_planets,
                aspects_to_natal,
                current_sky_aspects,
            },
        })
    }
}
