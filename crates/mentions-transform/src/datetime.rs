//! Date canonicalization.
//!
//! Source tables mix ISO dates (`2020-01-01`), day-first numeric
//! dates (`02/01/2020`), and spelled-out dates (`1 January 2020`).
//! Everything is canonicalized to `YYYY-MM-DD`; values that fit none
//! of the known formats are coerced to absent rather than failing the
//! run.

use chrono::NaiveDate;

/// Canonical render format for all date columns.
pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted input formats, tried in order after slashes are replaced
/// with hyphens. Ambiguous numeric dates are read day-first.
const INPUT_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d %B %Y", "%d %b %Y"];

/// Parse a raw cell into a date, if it matches any known format.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let unified = trimmed.replace('/', "-");
    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&unified, format).ok())
}

/// Canonicalize a raw cell to `YYYY-MM-DD`, or `None` when the value
/// is empty or unparseable (coerce-to-absent).
pub fn normalize_date(raw: &str) -> Option<String> {
    parse_date(raw).map(|date| date.format(STANDARD_DATE_FORMAT).to_string())
}
