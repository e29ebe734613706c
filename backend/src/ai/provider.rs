//! Provider abstraction for the generative-AI endpoint.
//!
//! The advisory service depends on this trait rather than on a concrete
//! HTTP client, so tests can substitute a mock that never touches the
//! network.

use async_trait::async_trait;
use shared::{MealSuggestion, Sex};
use thiserror::Error;

/// Errors from the advisory endpoint. Callers never propagate these to the
/// user; each advisory operation has a documented fallback value.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("No API key configured for the advisory endpoint")]
    MissingApiKey,

    #[error("Network error talking to the advisory endpoint: {0}")]
    Network(String),

    #[error("Advisory endpoint returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Failed to parse advisory response: {0}")]
    Parse(String),

    #[error("Advisory endpoint returned an empty response")]
    EmptyResponse,
}

pub type AdvisoryResult<T> = Result<T, AdvisoryError>;

/// One measurement, as much as the analysis prompt needs.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthSnapshot {
    /// ISO date of the measurement
    pub date: String,
    pub weight_kg: f64,
    pub height_cm: f64,
}

/// Everything the meal-suggestion prompt is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct MealSuggestionContext {
    pub child_name: String,
    pub age_months: u32,
    pub sex: Sex,
    /// Most recent weight, if any measurement has been recorded
    pub latest_weight_kg: Option<f64>,
    /// Descriptions of the five most recently logged meals
    pub recent_meal_descriptions: Vec<String>,
}

/// Everything the growth-analysis prompt is built from. Only built for a
/// non-empty history; the empty-history fallback never reaches the
/// provider.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthAnalysisContext {
    pub child_name: String,
    pub age_months: u32,
    pub sex: Sex,
    pub latest: GrowthSnapshot,
    /// Up to the last three measurements, oldest first
    pub history_tail: Vec<GrowthSnapshot>,
}

/// Interface to the generative-AI endpoint.
#[async_trait]
pub trait AdvisoryProvider: Send + Sync {
    /// Ask for one dish suggestion per main meal slot.
    async fn suggest_meals(
        &self,
        context: &MealSuggestionContext,
    ) -> AdvisoryResult<Vec<MealSuggestion>>;

    /// Ask for short free-text commentary on the growth history.
    async fn analyze_growth(&self, context: &GrowthAnalysisContext) -> AdvisoryResult<String>;
}
