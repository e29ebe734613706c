//! # REST API for the Child Profile
//!
//! Endpoints for onboarding and reading the singleton profile.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::AppState;
use shared::CreateProfileRequest;

/// Create (or replace) the child profile
pub async fn set_profile(
    State(state): State<AppState>,
    Json(request): Json<CreateProfileRequest>,
) -> impl IntoResponse {
    info!("POST /api/profile - request: {:?}", request);

    match state.profile_service.set_profile(request).await {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to set profile: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// Get the profile, if one has been created
pub async fn get_profile(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/profile");

    match state.profile_service.get_profile_response().await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to get profile: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving profile").into_response()
        }
    }
}
