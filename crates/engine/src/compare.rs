//! Per-type equality predicates. Pure and stateless; missing values never
//! match, not even another missing value.

use chrono::NaiveDate;

use crate::config::CompareType;
use crate::normalize::{normalize_date, normalize_number};

/// Absolute tolerance for numeric comparison.
pub const NUMBER_EPSILON: f64 = 1e-6;

/// Minimum partial-ratio score (0–100) for a fuzzy text match.
pub const FUZZY_THRESHOLD: f64 = 80.0;

/// Dates match when at most this many days apart. Hardcoded slack for
/// off-by-one timezone and rounding artifacts in exported spreadsheets.
/// Candidate for a configurable tolerance.
pub const DATE_SLACK_DAYS: i64 = 1;

/// Compare two raw cell values under the given comparison type.
///
/// `None` on either side (missing cell, or unparseable under the type's
/// normalizer) is an unconditional non-match.
pub fn values_match(
    v1: Option<&str>,
    v2: Option<&str>,
    compare: CompareType,
    fuzzy: bool,
) -> bool {
    let (Some(v1), Some(v2)) = (v1, v2) else {
        return false;
    };

    match compare {
        CompareType::Date => match (normalize_date(v1), normalize_date(v2)) {
            (Some(a), Some(b)) => dates_match(a, b),
            _ => false,
        },
        CompareType::Number => match (normalize_number(v1), normalize_number(v2)) {
            (Some(a), Some(b)) => (a - b).abs() < NUMBER_EPSILON,
            _ => false,
        },
        CompareType::Text => {
            if fuzzy {
                partial_ratio(&v1.to_lowercase(), &v2.to_lowercase()) >= FUZZY_THRESHOLD
            } else {
                v1.trim().to_lowercase() == v2.trim().to_lowercase()
            }
        }
    }
}

fn dates_match(a: NaiveDate, b: NaiveDate) -> bool {
    (a - b).num_days().abs() <= DATE_SLACK_DAYS
}

/// Best-alignment substring similarity, scaled 0–100: the shorter string's
/// best-matching contiguous window inside the longer one, length-normalized.
///
/// Slides the shorter string across every same-length window of the longer
/// and keeps the best indel-similarity score. `fuzz::ratio` reports on a
/// 0–1 scale, so the result is rescaled to percent.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    if shorter.is_empty() {
        return if longer.is_empty() { 100.0 } else { 0.0 };
    }

    let mut best = 0.0f64;
    for start in 0..=(longer.len() - shorter.len()) {
        let window = &longer[start..start + shorter.len()];
        let score =
            100.0 * rapidfuzz::fuzz::ratio(window.iter().copied(), shorter.iter().copied());
        if score > best {
            best = score;
        }
    }
    best
}
