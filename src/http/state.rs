//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::Settings;
use crate::services::ProfileService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Profile service wrapping the ephemeris provider.
    pub service: Arc<ProfileService>,
    /// Static service settings, reported by the health endpoint.
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(service: Arc<ProfileService>, settings: Arc<Settings>) -> Self {
        Self { service, settings }
    }
}
