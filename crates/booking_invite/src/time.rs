//! Zoned wall-clock helpers.
//!
//! All conversions go through `chrono-tz` so daylight-saving transitions of
//! the requested zone are honoured; nothing here uses a fixed UTC offset or
//! the server's local zone.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::error::InviteError;

/// Compact local timestamp used by both ICS (`DTSTART;TZID=...`) and Google
/// Calendar `dates=` values.
pub const LOCAL_STAMP_FORMAT: &str = "%Y%m%dT%H%M%S";

const HHMM_FORMAT: &str = "%H:%M";

/// Parses an IANA identifier. Blank input is `MissingTimezone`, anything
/// chrono-tz does not know is `InvalidTimezone`.
pub fn parse_time_zone(time_zone: &str) -> Result<Tz, InviteError> {
    let trimmed = time_zone.trim();
    if trimmed.is_empty() {
        return Err(InviteError::MissingTimezone);
    }
    trimmed
        .parse::<Tz>()
        .map_err(|_| InviteError::InvalidTimezone(trimmed.to_string()))
}

/// 24-hour `HH:mm` of `instant` as shown on a wall clock in `tz`.
pub fn format_hhmm(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format(HHMM_FORMAT).to_string()
}

pub fn parse_hhmm(value: &str) -> Result<NaiveTime, InviteError> {
    NaiveTime::parse_from_str(value.trim(), HHMM_FORMAT)
        .map_err(|e| InviteError::TimeParseError(format!("'{}': {}", value, e)))
}

/// Calendar day of `date` in `tz`.
pub fn local_date(date: DateTime<Utc>, tz: Tz) -> NaiveDate {
    date.with_timezone(&tz).date_naive()
}

/// Local start/end wall-clock datetimes for an event on the zoned day of
/// `date`. Only an end strictly before the start (an overnight session) is
/// moved to the next day; equal wall times stay on the same day, which covers
/// zero-length bookings and bookings across a DST fall-back hour.
pub fn local_window(
    date: DateTime<Utc>,
    start_hhmm: &str,
    end_hhmm: &str,
    tz: Tz,
) -> Result<(NaiveDateTime, NaiveDateTime), InviteError> {
    let day = local_date(date, tz);
    let start = day.and_time(parse_hhmm(start_hhmm)?);
    let mut end = day.and_time(parse_hhmm(end_hhmm)?);
    if end < start {
        end += Duration::days(1);
    }
    Ok((start, end))
}

pub fn local_stamp(local: NaiveDateTime) -> String {
    local.format(LOCAL_STAMP_FORMAT).to_string()
}
