//! # Growth Tracker Backend
//!
//! Layered backend for a personal child-growth and meal-tracking app:
//!
//! ```text
//! Presentation layer (external)
//!     ↓
//! IO layer (REST API, mappers)
//!     ↓
//! Domain layer (services, growth metrics, reference standards)
//!     ↓
//! Storage layer (JSON documents, write-through)
//! ```
//!
//! The AI advisory endpoint sits beside the storage layer as a second
//! external collaborator; its failures never reach the caller (fail-soft).

pub mod ai;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::{delete, get},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::ai::GeminiClient;
use crate::domain::{AdvisoryService, GrowthService, MealService, ProfileService};
use crate::storage::{
    GrowthRepository, JsonConnection, MealRepository, ProfileRepository,
};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub profile_service: ProfileService,
    pub growth_service: GrowthService,
    pub meal_service: MealService,
    pub advisory_service: AdvisoryService,
}

/// Initialize the backend with all required services
pub fn initialize_backend() -> Result<AppState> {
    info!("Setting up storage");
    let connection = JsonConnection::new_default()?;
    initialize_backend_with(connection, Arc::new(GeminiClient::from_env()))
}

/// Initialize the backend against a specific storage connection and
/// advisory provider (tests use a temp directory and a mock provider).
pub fn initialize_backend_with(
    connection: JsonConnection,
    advisory_provider: Arc<dyn ai::AdvisoryProvider>,
) -> Result<AppState> {
    info!("Setting up domain services");
    let profile_service =
        ProfileService::new(Arc::new(ProfileRepository::new(connection.clone())));
    let growth_service = GrowthService::new(Arc::new(GrowthRepository::new(connection.clone())));
    let meal_service = MealService::new(Arc::new(MealRepository::new(connection)));
    let advisory_service = AdvisoryService::new(advisory_provider);

    Ok(AppState {
        profile_service,
        growth_service,
        meal_service,
        advisory_service,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow the frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/profile",
            get(io::rest::get_profile).post(io::rest::set_profile),
        )
        .route(
            "/growth-records",
            get(io::rest::list_growth_records).post(io::rest::add_growth_record),
        )
        .route("/growth/status", get(io::rest::get_growth_status))
        .route("/growth/trend", get(io::rest::get_growth_trend))
        .route(
            "/meals",
            get(io::rest::list_meal_records).post(io::rest::add_meal_record),
        )
        .route("/meals/:record_id", delete(io::rest::remove_meal_record))
        .route(
            "/advisory/meal-suggestions",
            get(io::rest::get_meal_suggestions),
        )
        .route(
            "/advisory/growth-analysis",
            get(io::rest::get_growth_analysis),
        )
        .route("/advisory/loading", get(advisory_loading));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}

/// Whether a suggestion fetch is currently in flight (drives the refresh
/// button's loading state).
async fn advisory_loading(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> axum::Json<bool> {
    axum::Json(state.advisory_service.is_fetching_suggestions())
}
