use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

use crate::ai::{
    AdvisoryProvider, GrowthAnalysisContext, GrowthSnapshot, MealSuggestionContext,
};
use shared::{GrowthAnalysisResponse, MealSuggestionsResponse};

use super::growth_metrics;
use super::models::{ChildProfile, GrowthRecord, MealRecord};

/// Fixed message returned when there is no growth history to analyze. No
/// network call is made in that case.
pub const EMPTY_HISTORY_MESSAGE: &str =
    "Add your child's weight and height measurements and I'll analyze their growth!";

/// Fixed placeholder returned when the analysis call fails for any reason.
pub const ANALYSIS_FALLBACK_MESSAGE: &str = "Growth analysis is still updating...";

/// How many recent meals are sent as suggestion context.
const RECENT_MEALS_FOR_CONTEXT: usize = 5;

/// How many trailing measurements are sent as analysis context.
const HISTORY_TAIL_FOR_ANALYSIS: usize = 3;

/// Orchestrates the AI advisory calls.
///
/// Both operations are fail-soft: an error from the provider is logged and
/// replaced with a fallback value (empty suggestion list, fixed placeholder
/// string), never surfaced to the caller. A genuine in-flight guard ensures
/// only one suggestion fetch runs at a time; a fetch requested while one is
/// in flight is skipped.
#[derive(Clone)]
pub struct AdvisoryService {
    provider: Arc<dyn AdvisoryProvider>,
    suggestions_in_flight: Arc<AtomicBool>,
}

impl AdvisoryService {
    pub fn new(provider: Arc<dyn AdvisoryProvider>) -> Self {
        Self {
            provider,
            suggestions_in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a suggestion fetch is currently in flight (drives the UI's
    /// loading state).
    pub fn is_fetching_suggestions(&self) -> bool {
        self.suggestions_in_flight.load(Ordering::SeqCst)
    }

    /// Fetch a fresh batch of meal suggestions.
    ///
    /// Returns an empty list when the provider fails or when another fetch
    /// is already in flight; callers treat empty as "no suggestions
    /// available", never as an error.
    pub async fn suggest_meals(
        &self,
        profile: &ChildProfile,
        latest_growth: Option<&GrowthRecord>,
        recent_meals: &[MealRecord],
    ) -> MealSuggestionsResponse {
        if self
            .suggestions_in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            info!("Suggestion fetch already in flight, skipping");
            return MealSuggestionsResponse {
                suggestions: Vec::new(),
            };
        }

        let start = recent_meals.len().saturating_sub(RECENT_MEALS_FOR_CONTEXT);
        let context = MealSuggestionContext {
            child_name: profile.name.clone(),
            age_months: growth_metrics::age_in_months(profile.birth_date, Utc::now().date_naive()),
            sex: profile.sex,
            latest_weight_kg: latest_growth.map(|record| record.weight_kg),
            recent_meal_descriptions: recent_meals[start..]
                .iter()
                .map(|meal| meal.description.clone())
                .collect(),
        };

        let suggestions = match self.provider.suggest_meals(&context).await {
            Ok(suggestions) => {
                info!("Received {} meal suggestions", suggestions.len());
                suggestions
            }
            Err(e) => {
                warn!("Meal suggestion fetch failed, returning none: {}", e);
                Vec::new()
            }
        };

        self.suggestions_in_flight.store(false, Ordering::SeqCst);

        MealSuggestionsResponse { suggestions }
    }

    /// Produce growth commentary for the current history.
    ///
    /// An empty history returns the fixed prompt-to-add-data message
    /// without touching the provider; a provider failure returns the fixed
    /// placeholder.
    pub async fn analyze_growth(
        &self,
        profile: &ChildProfile,
        records: &[GrowthRecord],
    ) -> GrowthAnalysisResponse {
        let Some(latest) = growth_metrics::latest_of(records) else {
            return GrowthAnalysisResponse {
                commentary: EMPTY_HISTORY_MESSAGE.to_string(),
            };
        };

        let tail_start = records.len().saturating_sub(HISTORY_TAIL_FOR_ANALYSIS);
        let context = GrowthAnalysisContext {
            child_name: profile.name.clone(),
            age_months: growth_metrics::age_in_months(profile.birth_date, Utc::now().date_naive()),
            sex: profile.sex,
            latest: snapshot(latest),
            history_tail: records[tail_start..].iter().map(snapshot).collect(),
        };

        let commentary = match self.provider.analyze_growth(&context).await {
            Ok(commentary) => commentary,
            Err(e) => {
                warn!("Growth analysis failed, using placeholder: {}", e);
                ANALYSIS_FALLBACK_MESSAGE.to_string()
            }
        };

        GrowthAnalysisResponse { commentary }
    }
}

fn snapshot(record: &GrowthRecord) -> GrowthSnapshot {
    GrowthSnapshot {
        date: record.date.date_naive().to_string(),
        weight_kg: record.weight_kg,
        height_cm: record.height_cm,
    }
}
