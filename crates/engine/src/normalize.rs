//! Type-specific value cleaning. Pure and infallible: anything that cannot
//! be parsed normalizes to `None` and later fails comparison, never the run.

use chrono::{NaiveDate, NaiveDateTime};

/// Formats carrying a time-of-day component. Tried first so that a trailing
/// time never makes the plain date formats reject the value.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
];

/// Plain calendar-date formats. Slash-separated dates are read month-first
/// with a day-first fallback (a value like `25/12/2025` fails `%m/%d/%Y` and
/// falls through); dash/dot-separated dates are read day-first.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%m/%d/%Y",
    "%d/%m/%Y",
];

/// Parse `raw` as a date in any commonly encountered representation,
/// truncated to calendar-day granularity. Missing or unparseable → `None`.
pub fn normalize_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

/// Strip comma thousands separators and surrounding whitespace, then parse
/// as a float. Missing or unparseable → `None`.
///
/// The comma strip is literal: `"500,00"` becomes `50000.0`. Decimal-comma
/// locales are therefore read as if the comma were a thousands separator.
/// Preserved for compatibility with the established behavior.
pub fn normalize_number(raw: &str) -> Option<f64> {
    let stripped = raw.replace(',', "");
    let s = stripped.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok()
}
