//! Service layer: orchestration and response policy.
//!
//! Services sit between the HTTP handlers and the ephemeris provider. They
//! own the only original logic in this repository: orb-threshold filtering
//! and response shaping.

pub mod assembler;
pub mod orb_filter;
pub mod profile;

pub use orb_filter::{filter_aspects_by_orb, OrbPolicy};
pub use profile::{ProfileService, ServiceError};
