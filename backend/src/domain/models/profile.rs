//! Domain model for the child profile.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::Sex;

/// Domain model representing the tracked child.
///
/// At most one profile exists per data directory; it is created once at
/// onboarding and replaced wholesale if set again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildProfile {
    pub id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub sex: Sex,
    pub created_at: DateTime<Utc>,
}
