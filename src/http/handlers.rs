//! HTTP handlers for the REST API.
//!
//! Each handler validates its request, delegates to the profile service on a
//! blocking task (chart computation is CPU-bound) and assembles the
//! response.

use axum::{extract::State, Json};
use chrono::Utc;

use super::dto::{
    HealthResponse, NatalChartRequest, NormalizedChart, PlanetHouseRequest, PlanetHouseResponse,
    ProfileRequest, ProfileResponse, RootResponse, StyleChartResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{BirthData, NatalChart};
use crate::services::assembler;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health and root
// =============================================================================

/// GET /health
///
/// Static service metadata; nothing to probe, the service holds no
/// connections.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.settings.service_name.clone(),
        version: state.settings.version.clone(),
        environment: state.settings.env.clone(),
    }))
}

/// GET /
///
/// API banner.
pub async fn root(State(state): State<AppState>) -> HandlerResult<RootResponse> {
    Ok(Json(RootResponse {
        service: state.settings.service_name.clone(),
        version: state.settings.version.clone(),
        health: "/health".to_string(),
        api: "/api/v1".to_string(),
    }))
}

// =============================================================================
// Chart endpoints
// =============================================================================

/// Validate and run a natal chart computation off the async runtime.
async fn natal_chart_blocking(
    state: &AppState,
    birth: BirthData,
) -> Result<NatalChart, AppError> {
    birth.validate().map_err(AppError::Validation)?;

    let service = state.service.clone();
    tokio::task::spawn_blocking(move || service.natal_chart(&birth))
        .await
        .map_err(|e| AppError::Internal(format!("task join error: {e}")))?
        .map_err(Into::into)
}

/// POST /api/v1/natal/calculate
///
/// Natal chart in the normalized custom schema.
pub async fn calculate_natal(
    State(state): State<AppState>,
    Json(request): Json<NatalChartRequest>,
) -> HandlerResult<NormalizedChart> {
    let chart = natal_chart_blocking(&state, request.into_birth_data()).await?;
    Ok(Json(assembler::normalized_chart(&chart)))
}

/// POST /api/v1/astrology/profile
///
/// Natal chart plus current transits in the native schema. `transit_date`
/// defaults to the current time.
pub async fn astrology_profile(
    State(state): State<AppState>,
    Json(request): Json<ProfileRequest>,
) -> HandlerResult<ProfileResponse> {
    let birth = request.birth.into_birth_data();
    birth.validate().map_err(AppError::Validation)?;
    let transit_date = request.transit_date.map(|dt| dt.with_timezone(&Utc));

    let service = state.service.clone();
    let profile = tokio::task::spawn_blocking(move || service.profile(&birth, transit_date))
        .await
        .map_err(|e| AppError::Internal(format!("task join error: {e}")))??;

    Ok(Json(assembler::native_profile(profile)))
}

/// POST /api/v1/astrology/style/chart
///
/// Natal placements for style-feature generation: the planets (for element
/// distribution) and the chart angles, without houses or aspects.
pub async fn style_chart(
    State(state): State<AppState>,
    Json(request): Json<NatalChartRequest>,
) -> HandlerResult<StyleChartResponse> {
    let chart = natal_chart_blocking(&state, request.into_birth_data()).await?;
    Ok(Json(StyleChartResponse {
        planets: chart.planets,
        points: chart.points,
    }))
}

/// POST /api/v1/astrology/planet-house
///
/// House position and sign of a single named planet in the natal chart.
pub async fn planet_house(
    State(state): State<AppState>,
    Json(request): Json<PlanetHouseRequest>,
) -> HandlerResult<PlanetHouseResponse> {
    let chart = natal_chart_blocking(&state, request.birth.into_birth_data()).await?;

    let planet = chart
        .planets
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(&request.planet))
        .ok_or_else(|| {
            let available: Vec<&str> = chart.planets.iter().map(|p| p.name.as_str()).collect();
            AppError::NotFound(format!(
                "Planet '{}' not found in natal chart. Available planets: {:?}",
                request.planet, available
            ))
        })?;

    let house = planet.house.ok_or_else(|| {
        AppError::Internal(format!(
            "house position not available for planet '{}'",
            planet.name
        ))
    })?;

    Ok(Json(PlanetHouseResponse {
        planet: planet.name.clone(),
        house,
        sign: planet.sign.clone(),
    }))
}
