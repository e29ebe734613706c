//! # IO Module
//!
//! Interface layer that exposes the backend to the presentation layer.
//! Currently a single REST surface; the domain layer underneath is
//! transport-agnostic.

pub mod rest;
