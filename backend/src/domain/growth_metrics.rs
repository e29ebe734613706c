//! Growth metrics engine.
//!
//! Derives the age-in-months time axis from the birth date, selects the
//! "current" measurement, and compares measurements against the reference
//! standards table.

use chrono::{Datelike, NaiveDate};
use shared::{MedianComparison, Sex};

use super::models::GrowthRecord;
use super::standards::{self, Metric};

/// Whole calendar months elapsed between `birth_date` and `as_of`, clamped
/// to zero.
///
/// A month counts once `as_of` has reached the same day-of-month as the
/// birth date: born 2023-01-15, asked on 2024-07-01, the child is 17 months
/// old (the 18th month completes on 2024-07-15). Birth dates in the future
/// or in the current month yield 0.
pub fn age_in_months(birth_date: NaiveDate, as_of: NaiveDate) -> u32 {
    let mut months = (as_of.year() - birth_date.year()) * 12 + as_of.month() as i32
        - birth_date.month() as i32;
    if as_of.day() < birth_date.day() {
        months -= 1;
    }
    months.max(0) as u32
}

/// The record treated as "current status" for summaries: the last element
/// in insertion order, not the chronologically latest. Backdated records
/// therefore become "latest" until the next append.
pub fn latest_of(records: &[GrowthRecord]) -> Option<&GrowthRecord> {
    records.last()
}

/// Reference median for a sex and metric at the given age.
///
/// Linearly interpolates between the two bracketing breakpoints. Ages below
/// the first breakpoint return the first median; ages above the last
/// breakpoint (60 months) return the last median. Never extrapolates.
pub fn median_for(sex: Sex, metric: Metric, age_months: u32) -> f64 {
    let points = standards::breakpoints(sex, metric);

    let first = points[0];
    if age_months <= first.0 {
        return first.1;
    }
    let last = points[points.len() - 1];
    if age_months >= last.0 {
        return last.1;
    }

    for pair in points.windows(2) {
        let (lo_age, lo_val) = pair[0];
        let (hi_age, hi_val) = pair[1];
        if age_months >= lo_age && age_months <= hi_age {
            let span = (hi_age - lo_age) as f64;
            let offset = (age_months - lo_age) as f64;
            return lo_val + (hi_val - lo_val) * (offset / span);
        }
    }

    // Unreachable: ages between the first and last breakpoint always fall
    // into one of the windows above.
    last.1
}

/// Compare a measurement against the reference medians for the given age.
pub fn compare_to_standard(
    sex: Sex,
    age_months: u32,
    weight_kg: f64,
    height_cm: f64,
) -> MedianComparison {
    let median_weight_kg = median_for(sex, Metric::Weight, age_months);
    let median_height_cm = median_for(sex, Metric::Height, age_months);

    MedianComparison {
        median_weight_kg,
        median_height_cm,
        weight_percent_of_median: weight_kg / median_weight_kg * 100.0,
        height_percent_of_median: height_cm / median_height_cm * 100.0,
        below_median_weight: weight_kg < median_weight_kg,
        below_median_height: height_cm < median_height_cm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(id: &str, weight_kg: f64, height_cm: f64, recorded: NaiveDate) -> GrowthRecord {
        GrowthRecord {
            id: id.to_string(),
            date: recorded.and_hms_opt(12, 0, 0).unwrap().and_utc(),
            weight_kg,
            height_cm,
            notes: None,
        }
    }

    #[test]
    fn test_age_in_months_reference_scenario() {
        assert_eq!(age_in_months(date(2023, 1, 15), date(2024, 7, 1)), 17);
    }

    #[test]
    fn test_age_in_months_same_month_is_zero() {
        assert_eq!(age_in_months(date(2023, 1, 15), date(2023, 1, 15)), 0);
        assert_eq!(age_in_months(date(2023, 1, 15), date(2023, 1, 31)), 0);
    }

    #[test]
    fn test_age_in_months_less_than_a_full_month_is_zero() {
        assert_eq!(age_in_months(date(2023, 1, 15), date(2023, 2, 14)), 0);
        assert_eq!(age_in_months(date(2023, 1, 15), date(2023, 2, 15)), 1);
    }

    #[test]
    fn test_age_in_months_future_birth_date_clamps_to_zero() {
        assert_eq!(age_in_months(date(2025, 6, 1), date(2024, 7, 1)), 0);
    }

    #[test]
    fn test_age_in_months_year_boundaries() {
        assert_eq!(age_in_months(date(2023, 12, 31), date(2024, 1, 31)), 1);
        assert_eq!(age_in_months(date(2020, 2, 29), date(2025, 2, 28)), 59);
        assert_eq!(age_in_months(date(2020, 2, 29), date(2025, 3, 1)), 60);
    }

    #[test]
    fn test_age_in_months_monotone_in_as_of() {
        let birth = date(2023, 1, 15);
        let mut previous = 0;
        let mut day = birth;
        for _ in 0..800 {
            day = day.succ_opt().unwrap();
            let age = age_in_months(birth, day);
            assert!(age >= previous);
            previous = age;
        }
    }

    #[test]
    fn test_latest_of_empty() {
        assert!(latest_of(&[]).is_none());
    }

    #[test]
    fn test_latest_of_is_insertion_order_not_date_order() {
        // The second record is chronologically older but was appended last,
        // so it wins.
        let records = vec![
            record("growth::2", 5.2, 57.0, date(2024, 3, 1)),
            record("growth::1", 5.0, 55.0, date(2024, 1, 1)),
        ];
        let latest = latest_of(&records).unwrap();
        assert_eq!(latest.id, "growth::1");
        assert_eq!(latest.weight_kg, 5.0);
    }

    #[test]
    fn test_median_for_exact_breakpoints() {
        assert_eq!(median_for(Sex::Male, Metric::Weight, 0), 3.3);
        assert_eq!(median_for(Sex::Male, Metric::Weight, 12), 9.6);
        assert_eq!(median_for(Sex::Female, Metric::Height, 24), 86.4);
        assert_eq!(median_for(Sex::Female, Metric::Weight, 60), 17.4);
    }

    #[test]
    fn test_median_for_interpolates_between_breakpoints() {
        // Midway between 6 months (7.9) and 12 months (9.6) for boys' weight.
        let mid = median_for(Sex::Male, Metric::Weight, 9);
        assert!((mid - 8.75).abs() < 1e-9);

        // One third of the way from 12 (75.7) to 24 (87.8) for boys' height.
        let third = median_for(Sex::Male, Metric::Height, 16);
        let expected = 75.7 + (87.8 - 75.7) * (4.0 / 12.0);
        assert!((third - expected).abs() < 1e-9);
    }

    #[test]
    fn test_median_for_clamps_above_last_breakpoint() {
        assert_eq!(median_for(Sex::Male, Metric::Weight, 61), 18.3);
        assert_eq!(median_for(Sex::Male, Metric::Weight, 120), 18.3);
        assert_eq!(median_for(Sex::Female, Metric::Height, 200), 109.4);
    }

    #[test]
    fn test_compare_to_standard_flags_below_median() {
        // Boys at 12 months: median 9.6 kg / 75.7 cm.
        let comparison = compare_to_standard(Sex::Male, 12, 8.0, 80.0);
        assert!(comparison.below_median_weight);
        assert!(!comparison.below_median_height);
        assert!((comparison.weight_percent_of_median - 8.0 / 9.6 * 100.0).abs() < 1e-9);
        assert!((comparison.height_percent_of_median - 80.0 / 75.7 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_compare_to_standard_at_median() {
        let comparison = compare_to_standard(Sex::Female, 24, 11.5, 86.4);
        assert!(!comparison.below_median_weight);
        assert!(!comparison.below_median_height);
        assert!((comparison.weight_percent_of_median - 100.0).abs() < 1e-9);
    }
}
