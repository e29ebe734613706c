//! # REST API Interface Layer
//!
//! HTTP endpoints for the growth tracker. This layer handles request and
//! response serialization, translation of domain errors to HTTP status
//! codes, and request logging; business logic stays in the domain layer.

pub mod profile_apis;
pub mod growth_apis;
pub mod meal_apis;
pub mod advisory_apis;
pub mod mappers;

pub use profile_apis::*;
pub use growth_apis::*;
pub use meal_apis::*;
pub use advisory_apis::*;
