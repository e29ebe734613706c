//! Reference growth standards.
//!
//! Simplified WHO growth standards: the population median (P50) for weight
//! and height, tabulated by age in months for each sex. Pure data; callers
//! interpolate or clamp (see `growth_metrics`).

use shared::Sex;

/// Which measurement a standards lookup refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Weight in kilograms
    Weight,
    /// Height in centimeters
    Height,
}

/// One `(age_months, median_value)` breakpoint of a standards curve.
pub type ReferenceStandardPoint = (u32, f64);

const BOYS_WEIGHT_KG: &[ReferenceStandardPoint] = &[
    (0, 3.3),
    (3, 6.4),
    (6, 7.9),
    (12, 9.6),
    (24, 12.2),
    (36, 14.3),
    (48, 16.3),
    (60, 18.3),
];

const BOYS_HEIGHT_CM: &[ReferenceStandardPoint] = &[
    (0, 49.9),
    (3, 61.4),
    (6, 67.6),
    (12, 75.7),
    (24, 87.8),
    (36, 96.1),
    (48, 103.3),
    (60, 110.0),
];

const GIRLS_WEIGHT_KG: &[ReferenceStandardPoint] = &[
    (0, 3.2),
    (3, 5.8),
    (6, 7.3),
    (12, 8.9),
    (24, 11.5),
    (36, 13.9),
    (48, 15.5),
    (60, 17.4),
];

const GIRLS_HEIGHT_CM: &[ReferenceStandardPoint] = &[
    (0, 49.1),
    (3, 59.8),
    (6, 65.7),
    (12, 74.0),
    (24, 86.4),
    (36, 95.1),
    (48, 102.7),
    (60, 109.4),
];

/// Ordered median breakpoints for a sex and metric.
///
/// Age breakpoints are strictly increasing; the table covers ages 0 through
/// 60 months.
pub fn breakpoints(sex: Sex, metric: Metric) -> &'static [ReferenceStandardPoint] {
    match (sex, metric) {
        (Sex::Male, Metric::Weight) => BOYS_WEIGHT_KG,
        (Sex::Male, Metric::Height) => BOYS_HEIGHT_CM,
        (Sex::Female, Metric::Weight) => GIRLS_WEIGHT_KG,
        (Sex::Female, Metric::Height) => GIRLS_HEIGHT_CM,
    }
}
