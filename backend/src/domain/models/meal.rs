//! Domain model for a meal diary entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::MealType;

/// A logged meal. Deletable by ID; never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    pub id: String,
    pub date: DateTime<Utc>,
    pub meal_type: MealType,
    pub description: String,
    pub image_url: Option<String>,
}
