//! Environment-driven service settings.

use std::env;

/// Static service settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub service_name: String,
    pub version: String,
    /// Deployment environment label, reported by the health endpoint.
    pub env: String,
    pub debug: bool,
    pub host: String,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_name: "stellium".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            env: "dev".to_string(),
            debug: false,
            host: "0.0.0.0".to_string(),
            port: 8001,
        }
    }
}

impl Settings {
    /// Read settings from the environment: `ENV`, `DEBUG`, `HOST`, `PORT`.
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let mut settings = Settings::default();
        if let Ok(v) = env::var("ENV") {
            settings.env = v;
        }
        if let Some(v) = env::var("DEBUG").ok().and_then(|s| s.parse().ok()) {
            settings.debug = v;
        }
        if let Ok(v) = env::var("HOST") {
            settings.host = v;
        }
        if let Some(v) = env::var("PORT").ok().and_then(|s| s.parse().ok()) {
            settings.port = v;
        }
        settings
    }
}
