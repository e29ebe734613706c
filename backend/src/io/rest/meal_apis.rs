//! # REST API for the Meal Diary
//!
//! Endpoints for logging, listing, and deleting meals.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::AppState;
use shared::AddMealRecordRequest;

/// Log a meal
pub async fn add_meal_record(
    State(state): State<AppState>,
    Json(request): Json<AddMealRecordRequest>,
) -> impl IntoResponse {
    info!("POST /api/meals - request: {:?}", request);

    match state.meal_service.add_meal_record(request).await {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to add meal record: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// List all logged meals in insertion order
pub async fn list_meal_records(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/meals");

    match state.meal_service.meal_list_response().await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to list meal records: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing meals").into_response()
        }
    }
}

/// Remove a meal by ID. Removing an unknown ID is a no-op, not an error.
pub async fn remove_meal_record(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/meals/{}", record_id);

    match state.meal_service.remove_meal_record(&record_id).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to remove meal record: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
