//! Gemini Provider
//!
//! Implementation of the AdvisoryProvider trait against the Gemini
//! `generateContent` REST API. Meal suggestions are requested with a JSON
//! response schema; growth commentary comes back as plain text.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::provider::{
    AdvisoryError, AdvisoryProvider, AdvisoryResult, GrowthAnalysisContext, MealSuggestionContext,
};
use shared::MealSuggestion;

/// Default Gemini API endpoint
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default model used for both advisory operations
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Request timeout; a timed-out call takes the same fallback path as any
/// other failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Gemini advisory provider
pub struct GeminiClient {
    api_key: Option<String>,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a client reading the API key from `GEMINI_API_KEY`.
    pub fn from_env() -> Self {
        Self::new(std::env::var("GEMINI_API_KEY").ok())
    }

    pub fn new(api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_API_URL.to_string(),
            client,
        }
    }

    /// Override the endpoint base URL (tests point this at a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> AdvisoryResult<String> {
        let api_key = self.api_key.as_ref().ok_or(AdvisoryError::MissingApiKey)?;
        Ok(format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        ))
    }

    async fn generate_content(&self, body: serde_json::Value) -> AdvisoryResult<String> {
        let response = self
            .client
            .post(self.endpoint()?)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AdvisoryError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body_text = response
            .text()
            .await
            .map_err(|e| AdvisoryError::Network(e.to_string()))?;

        if status != 200 {
            return Err(AdvisoryError::Http {
                status,
                message: body_text,
            });
        }

        let parsed: GeminiResponse = serde_json::from_str(&body_text)
            .map_err(|e| AdvisoryError::Parse(format!("Failed to parse response: {}", e)))?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(AdvisoryError::EmptyResponse)
    }

    fn suggestion_prompt(context: &MealSuggestionContext) -> String {
        let weight_info = match context.latest_weight_kg {
            Some(weight) => format!("{}kg", weight),
            None => "not yet recorded".to_string(),
        };

        format!(
            "You are a pediatric nutrition expert.\n\
             Suggest nutritious porridge/soup dishes for this child:\n\
             - Name: {}\n\
             - Age: {} months ({})\n\
             - Weight: {}\n\
             - Recently eaten: {}\n\n\
             Requirements:\n\
             1. Only suggest porridge or soup dishes appropriate for the age.\n\
             2. Use everyday, easy-to-find ingredients.\n\
             3. Avoid repeating dishes the child ate recently.\n\
             4. Keep cooking instructions extremely short (under 50 words).\n\n\
             Return a list of exactly 3 dishes, one each for: Breakfast, Lunch, Dinner.",
            context.child_name,
            context.age_months,
            context.sex,
            weight_info,
            context.recent_meal_descriptions.join(", "),
        )
    }

    fn analysis_prompt(context: &GrowthAnalysisContext) -> String {
        let history: Vec<String> = context
            .history_tail
            .iter()
            .map(|s| format!("{}: {}kg, {}cm", s.date, s.weight_kg, s.height_cm))
            .collect();

        format!(
            "Analyze the growth of the child {}:\n\
             - Age: {} months.\n\
             - Sex: {}.\n\
             - Weight: {}kg, Height: {}cm.\n\
             - Recent history: {}\n\n\
             Give short, warm, encouraging commentary for the parent.\n\
             If the child appears underweight or short for age against the WHO \
             median, give 2 concrete nutrition tips.",
            context.child_name,
            context.age_months,
            context.sex,
            context.latest.weight_kg,
            context.latest.height_cm,
            history.join("; "),
        )
    }

    /// JSON schema the endpoint is asked to conform suggestion output to.
    fn suggestion_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "suggested_for": { "type": "STRING" },
                    "dish_name": { "type": "STRING" },
                    "description": { "type": "STRING" },
                    "ingredients": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "instructions": { "type": "STRING" },
                    "nutritional_benefits": { "type": "STRING" }
                },
                "required": [
                    "suggested_for",
                    "dish_name",
                    "description",
                    "ingredients",
                    "instructions",
                    "nutritional_benefits"
                ]
            }
        })
    }
}

#[async_trait]
impl AdvisoryProvider for GeminiClient {
    async fn suggest_meals(
        &self,
        context: &MealSuggestionContext,
    ) -> AdvisoryResult<Vec<MealSuggestion>> {
        let body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": Self::suggestion_prompt(context) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": Self::suggestion_schema()
            }
        });

        let text = self.generate_content(body).await?;

        serde_json::from_str(&text)
            .map_err(|e| AdvisoryError::Parse(format!("Malformed suggestion list: {}", e)))
    }

    async fn analyze_growth(&self, context: &GrowthAnalysisContext) -> AdvisoryResult<String> {
        let body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": Self::analysis_prompt(context) }]
            }]
        });

        self.generate_content(body).await
    }
}

/// Gemini API response format
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}
