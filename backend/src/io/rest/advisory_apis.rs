//! # REST API for AI Advisory Features
//!
//! The presentation layer calls these endpoints explicitly after each
//! profile or record mutation; there is no implicit dependency tracking.
//! Both operations are fail-soft and always answer 200 once a profile
//! exists.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::AppState;

/// Fetch a fresh batch of meal suggestions.
///
/// Responds with an empty list when the AI endpoint fails or another fetch
/// is in flight, never an error status.
pub async fn get_meal_suggestions(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/advisory/meal-suggestions");

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

    let latest_growth = match state.growth_service.latest().await {
        Ok(latest) => latest,
        Err(e) => {
            error!("Failed to load latest growth record: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error loading growth records")
                .into_response();
        }
    };

    let recent_meals = match state.meal_service.recent_meals(5).await {
        Ok(meals) => meals,
        Err(e) => {
            error!("Failed to load recent meals: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error loading meals").into_response();
        }
    };

    let response = state
        .advisory_service
        .suggest_meals(&profile, latest_growth.as_ref(), &recent_meals)
        .await;

    (StatusCode::OK, Json(response)).into_response()
}

/// Produce growth commentary for the current history.
///
/// Always answers 200 with commentary text once a profile exists; an empty
/// history or a failing AI endpoint yields the documented fixed strings.
pub async fn get_growth_analysis(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/advisory/growth-analysis");

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

    let records = match state.growth_service.list_records().await {
        Ok(records) => records,
        Err(e) => {
            error!("Failed to load growth records: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error loading growth records")
                .into_response();
        }
    };

    let response = state.advisory_service.analyze_growth(&profile, &records).await;

    (StatusCode::OK, Json(response)).into_response()
}
