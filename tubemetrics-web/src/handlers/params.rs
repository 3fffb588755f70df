//! Query-parameter parsing shared by the JSON API handlers.
//!
//! All validation here runs before any upstream network call; a rejected
//! parameter carries the exact message returned to the client.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use tubemetrics_api::DateRange;

/// Region used when the caller does not supply one.
pub const DEFAULT_REGION: &str = "US";

/// Default and maximum number of results per request, matching the upstream
/// single-page cap.
pub const MAX_RESULTS_CAP: u8 = 50;

const INVALID_DATE: &str = "Invalid date format. Please use ISO 8601 format.";

/// Which edge of the day a date-only value snaps to.
#[derive(Debug, Clone, Copy)]
pub enum DayEdge {
    /// 00:00:00 UTC, for range starts
    Start,
    /// 23:59:59 UTC, for range ends
    End,
}

/// Parses and bounds the `maxResults` query parameter.
///
/// A missing value defaults to the upstream page cap of 50.
///
/// # Errors
///
/// Returns the fixed client-facing message for a non-integer or
/// out-of-range value.
pub fn parse_max_results(params: &HashMap<String, String>) -> Result<u8, &'static str> {
    let Some(raw) = params.get("maxResults") else {
        return Ok(MAX_RESULTS_CAP);
    };

    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| "maxResults must be an integer")?;
    if !(1..=i64::from(MAX_RESULTS_CAP)).contains(&value) {
        return Err("maxResults must be between 1 and 50");
    }
    Ok(value as u8)
}

/// Parses an ISO 8601 date parameter.
///
/// Accepts RFC 3339 datetimes and plain `YYYY-MM-DD` dates; a date-only
/// value resolves to the start or end of that day depending on which bound
/// it fills.
///
/// # Errors
///
/// Returns the fixed client-facing message for an unparsable value.
pub fn parse_iso_timestamp(raw: &str, edge: DayEdge) -> Result<DateTime<Utc>, &'static str> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    let date: NaiveDate = raw.parse().map_err(|_| INVALID_DATE)?;
    let time = match edge {
        DayEdge::Start => date.and_hms_opt(0, 0, 0),
        DayEdge::End => date.and_hms_opt(23, 59, 59),
    };
    time.map(|naive| naive.and_utc()).ok_or(INVALID_DATE)
}

/// Assembles a date range from already-parsed bounds, filling a missing side
/// with the corresponding extreme so a single bound acts as an open-ended
/// inclusive interval.
pub fn date_range_from_bounds(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Option<DateRange> {
    match (start, end) {
        (None, None) => None,
        (start, end) => Some(DateRange {
            start: start.unwrap_or(DateTime::<Utc>::MIN_UTC),
            end: end.unwrap_or(DateTime::<Utc>::MAX_UTC),
        }),
    }
}

/// Parses the optional `startDate`/`endDate` query parameters into a date
/// range. Empty strings count as absent, matching what the frontend sends
/// for unset filters.
///
/// # Errors
///
/// Returns the fixed client-facing message for an unparsable value.
pub fn parse_date_range(
    params: &HashMap<String, String>,
) -> Result<Option<DateRange>, &'static str> {
    let start = params
        .get("startDate")
        .filter(|raw| !raw.is_empty())
        .map(|raw| parse_iso_timestamp(raw, DayEdge::Start))
        .transpose()?;
    let end = params
        .get("endDate")
        .filter(|raw| !raw.is_empty())
        .map(|raw| parse_iso_timestamp(raw, DayEdge::End))
        .transpose()?;

    Ok(date_range_from_bounds(start, end))
}
