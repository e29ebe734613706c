//! JSON-document storage backend.
//!
//! One document per record set in the data directory, rewritten in full on
//! every mutation and loaded fail-open (a missing or corrupt document reads
//! as empty).

pub mod connection;
pub mod profile_repository;
pub mod growth_repository;
pub mod meal_repository;

pub use connection::JsonConnection;
pub use profile_repository::ProfileRepository;
pub use growth_repository::GrowthRepository;
pub use meal_repository::MealRepository;
