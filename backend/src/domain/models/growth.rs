//! Domain model for a weight/height measurement.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single measurement of the child's weight and height.
///
/// Records are append-only. The collection is kept in insertion order, and
/// the last element is treated as the current status for summaries even
/// when measurements were entered with out-of-order dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRecord {
    pub id: String,
    pub date: DateTime<Utc>,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub notes: Option<String>,
}
