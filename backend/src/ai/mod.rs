//! # AI Advisory Client
//!
//! Thin client for the external generative-AI endpoint. The advisory
//! features are best-effort: every error surfaced here is absorbed by the
//! advisory service and replaced with a documented fallback value, so
//! nothing in this module may ever block core record-keeping.

pub mod provider;
pub mod gemini;

pub use provider::{
    AdvisoryError, AdvisoryProvider, AdvisoryResult, GrowthAnalysisContext, GrowthSnapshot,
    MealSuggestionContext,
};
pub use gemini::GeminiClient;
