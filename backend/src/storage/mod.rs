//! # Storage Module
//!
//! Durable persistence for the three record sets (profile, growth records,
//! meal records). The domain layer depends only on the traits in
//! [`traits`]; the [`json`] backend keeps one JSON document per record set
//! in the data directory and mirrors every mutation to disk immediately.

pub mod traits;
pub mod json;

pub use traits::{GrowthRecordStorage, MealRecordStorage, ProfileStorage};
pub use json::{GrowthRepository, JsonConnection, MealRepository, ProfileRepository};
