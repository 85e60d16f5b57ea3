/*!
 * Title post-processing.
 *
 * Rewrites a raw model reply into a canonical lowercase, separator-delimited
 * title, and substitutes a generated timestamp when the model signals that no
 * relevant date was found in the document.
 */

use chrono::{DateTime, Local};

/// Marker the model is instructed to emit (uppercase) when no date is found.
/// Normalization lowercases it before the fallback runs.
const NO_DATE_MARKER: &str = "nodate";

/// Timestamp pattern used for the date fallback
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Normalize a raw model reply into canonical form.
///
/// The whole string is lowercased. If `separator` is non-empty and not a
/// single space, every space and underscore is replaced with it. The
/// transformation is idempotent.
pub fn normalize_title(title: &str, separator: &str) -> String {
    let mut title = title.to_lowercase();
    if !separator.is_empty() && separator != " " {
        title = title.replace(' ', separator).replace('_', separator);
    }
    title
}

/// Replace a trailing `nodate` marker with a timestamp of the current local time.
///
/// Returns the title unchanged when `include_date` is false or the marker is
/// absent.
pub fn apply_date_fallback(title: &str, include_date: bool, separator: &str) -> String {
    apply_date_fallback_at(title, include_date, separator, Local::now())
}

/// Date fallback against a fixed reference time, for deterministic testing
pub fn apply_date_fallback_at(
    title: &str,
    include_date: bool,
    separator: &str,
    now: DateTime<Local>,
) -> String {
    if !include_date || !title.ends_with(NO_DATE_MARKER) {
        return title.to_string();
    }

    let remaining = &title[..title.len() - NO_DATE_MARKER.len()];
    let remaining = remaining.trim_end_matches(|c| separator.contains(c));
    let timestamp = now.format(TIMESTAMP_FORMAT).to_string();

    if remaining.is_empty() {
        timestamp
    } else {
        format!("{}{}{}", remaining, separator, timestamp)
    }
}
