//! # Domain Module
//!
//! Business logic for the growth tracker.
//!
//! ## Module Organization
//!
//! - **standards**: static reference growth standards (WHO P50 medians)
//! - **growth_metrics**: age-in-months, "latest" selection, and median
//!   comparison
//! - **profile_service / growth_service / meal_service**: record-keeping
//!   operations over the storage layer (write-through on every mutation)
//! - **advisory_service**: fail-soft orchestration of the AI advisory
//!   calls
//!
//! ## Business Rules
//!
//! - At most one child profile exists; records are meaningless without it
//! - Growth records are append-only; "latest" means last appended
//! - Meal records are deletable by ID; deleting an unknown ID is a no-op
//! - Advisory failures never block record-keeping

pub mod standards;
pub mod growth_metrics;
pub mod profile_service;
pub mod growth_service;
pub mod meal_service;
pub mod advisory_service;
pub mod models;

pub use profile_service::*;
pub use growth_service::*;
pub use meal_service::*;
pub use advisory_service::*;

use std::sync::atomic::{AtomicU64, Ordering};

/// Epoch milliseconds for record IDs, nudged forward on collision so two
/// records created within the same millisecond still get distinct IDs.
pub(crate) fn next_record_timestamp(now_millis: u64) -> u64 {
    static LAST: AtomicU64 = AtomicU64::new(0);
    let mut candidate = now_millis;
    loop {
        let last = LAST.load(Ordering::SeqCst);
        if candidate <= last {
            candidate = last + 1;
        }
        if LAST
            .compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::next_record_timestamp;

    #[test]
    fn test_record_timestamps_are_strictly_increasing() {
        let first = next_record_timestamp(1000);
        let second = next_record_timestamp(1000);
        let third = next_record_timestamp(1000);
        assert!(first < second);
        assert!(second < third);
    }
}
