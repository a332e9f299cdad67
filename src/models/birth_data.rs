//! Birth data value object.
//!
//! Single source of truth for birth information: every calculation starts
//! from a validated `BirthData`. Out-of-range fields are rejected, never
//! clamped.

use chrono::{DateTime, LocalResult, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Errors raised when turning birth data into a concrete UTC instant.
#[derive(Debug, Error)]
pub enum BirthDataError {
    #[error("invalid birth data: {0:?}")]
    Validation(Vec<FieldError>),
    #[error("unknown timezone '{0}', expected an IANA name like 'America/New_York'")]
    UnknownTimezone(String),
    #[error("local time {0} does not exist in timezone {1} (DST gap)")]
    NonexistentLocalTime(String, String),
}

/// Birth query: date, time, geographic coordinates and IANA timezone.
///
/// All fields are required; defaults belong to the caller, not to this
/// service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

impl BirthData {
    /// Validate field ranges and the calendar date itself.
    ///
    /// Returns every failing field, not just the first one.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if !(1900..=2100).contains(&self.year) {
            errors.push(FieldError::new("year", "must be between 1900 and 2100"));
        }
        if !(1..=12).contains(&self.month) {
            errors.push(FieldError::new("month", "must be between 1 and 12"));
        }
        if !(1..=31).contains(&self.day) {
            errors.push(FieldError::new("day", "must be between 1 and 31"));
        }
        if self.hour > 23 {
            errors.push(FieldError::new("hour", "must be between 0 and 23"));
        }
        if self.minute > 59 {
            errors.push(FieldError::new("minute", "must be between 0 and 59"));
        }
        if !(-90.0..=90.0).contains(&self.latitude) || !self.latitude.is_finite() {
            errors.push(FieldError::new("latitude", "must be between -90 and 90"));
        }
        if !(-180.0..=180.0).contains(&self.longitude) || !self.longitude.is_finite() {
            errors.push(FieldError::new("longitude", "must be between -180 and 180"));
        }
        if !self.timezone.contains('/') {
            errors.push(FieldError::new(
                "timezone",
                "must be an IANA name like 'America/New_York'",
            ));
        }

        // Only check the calendar once the individual ranges pass.
        if errors.is_empty() && NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_none() {
            errors.push(FieldError::new("day", "no such calendar date"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Resolve the IANA timezone name.
    pub fn resolve_timezone(&self) -> Result<Tz, BirthDataError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| BirthDataError::UnknownTimezone(self.timezone.clone()))
    }

    /// Convert the local birth datetime to a UTC instant.
    ///
    /// Ambiguous local times (DST fold) resolve to the earlier instant;
    /// nonexistent local times (DST gap) are an error.
    pub fn birth_instant(&self) -> Result<DateTime<Utc>, BirthDataError> {
        self.validate().map_err(BirthDataError::Validation)?;
        let tz = self.resolve_timezone()?;

        let naive = NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_opt(self.hour, self.minute, 0))
            .ok_or_else(|| {
                BirthDataError::Validation(vec![FieldError::new("day", "no such calendar date")])
            })?;

        match tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(earlier, _later) => Ok(earlier.with_timezone(&Utc)),
            LocalResult::None => Err(BirthDataError::NonexistentLocalTime(
                naive.to_string(),
                self.timezone.clone(),
            )),
        }
    }
}
