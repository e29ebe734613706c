//! # REST API for Growth Records
//!
//! Endpoints for recording measurements and reading derived summaries.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::AppState;
use shared::AddGrowthRecordRequest;

/// Record a new measurement
pub async fn add_growth_record(
    State(state): State<AppState>,
    Json(request): Json<AddGrowthRecordRequest>,
) -> impl IntoResponse {
    info!("POST /api/growth-records - request: {:?}", request);

    match state.growth_service.add_growth_record(request).await {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to add growth record: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// Get the full growth history in insertion order
pub async fn list_growth_records(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/growth-records");

    match state.growth_service.history_response().await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to list growth records: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing growth records").into_response()
        }
    }
}

/// Get the current growth status (age, latest measurement, median
/// comparison)
pub async fn get_growth_status(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/growth/status");

    let profile = match state.profile_service.get_profile().await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            return (StatusCode::NOT_FOUND, "Profile not set up yet").into_response();
        }
        Err(e) => {
            error!("Failed to load profile: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error loading profile").into_response();
        }
    };

    match state.growth_service.growth_status(&profile).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to compute growth status: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error computing growth status").into_response()
        }
    }
}

/// Get the chartable growth trend
pub async fn get_growth_trend(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/growth/trend");

    let profile = match state.profile_service.get_profile().await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            return (StatusCode::NOT_FOUND, "Profile not set up yet").into_response();
        }
        Err(e) => {
            error!("Failed to load profile: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error loading profile").into_response();
        }
    };

    match state.growth_service.growth_trend(&profile).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to compute growth trend: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error computing growth trend").into_response()
        }
    }
}
