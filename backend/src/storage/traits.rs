//! # Storage Traits
//!
//! Abstraction over the persistence backend so the domain layer can work
//! against any durable key→document mapping. Every mutation writes the
//! whole record set back through the store (write-through, no batching).

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::{ChildProfile, GrowthRecord, MealRecord};

/// Interface for profile storage operations.
#[async_trait]
pub trait ProfileStorage: Send + Sync {
    /// Load the profile, if one has been created. A missing or undecodable
    /// document loads as `None` (fail-open), never as an error.
    async fn get_profile(&self) -> Result<Option<ChildProfile>>;

    /// Replace the stored profile wholesale.
    async fn set_profile(&self, profile: &ChildProfile) -> Result<()>;
}

/// Interface for growth record storage operations.
#[async_trait]
pub trait GrowthRecordStorage: Send + Sync {
    /// Load all growth records in insertion order. A missing or
    /// undecodable document loads as an empty collection.
    async fn list_growth_records(&self) -> Result<Vec<GrowthRecord>>;

    /// Append a record and write the collection through.
    async fn append_growth_record(&self, record: &GrowthRecord) -> Result<()>;
}

/// Interface for meal record storage operations.
#[async_trait]
pub trait MealRecordStorage: Send + Sync {
    /// Load all meal records in insertion order. A missing or undecodable
    /// document loads as an empty collection.
    async fn list_meal_records(&self) -> Result<Vec<MealRecord>>;

    /// Append a record and write the collection through.
    async fn append_meal_record(&self, record: &MealRecord) -> Result<()>;

    /// Remove a record by ID and write the collection through.
    /// Returns false when the ID was not present (a no-op, not an error).
    async fn remove_meal_record(&self, record_id: &str) -> Result<bool>;
}
