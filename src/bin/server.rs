//! Stellium HTTP Server Binary
//!
//! Entry point for the astrology REST API server: initializes logging,
//! wires the ephemeris provider into the profile service, and starts
//! serving requests.
//!
//! # Environment Variables
//!
//! - `ENV`: Deployment environment label (default: dev)
//! - `DEBUG`: Verbose logging when RUST_LOG is unset (default: false)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8001)
//! - `RUST_LOG`: Log filter (overrides DEBUG)

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use stellium::config::Settings;
use stellium::http::{create_router, AppState};
use stellium::provider::BuiltinProvider;
use stellium::services::ProfileService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    // Initialize logging; DEBUG only applies when RUST_LOG says nothing.
    let default_filter = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(true)
        .init();

    info!(
        service = %settings.service_name,
        version = %settings.version,
        environment = %settings.env,
        "Starting astrology service"
    );

    // Wire the provider into the service and build shared state.
    let provider = Arc::new(BuiltinProvider::new());
    let service = Arc::new(ProfileService::new(provider));
    let state = AppState::new(service, Arc::new(settings.clone()));

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
