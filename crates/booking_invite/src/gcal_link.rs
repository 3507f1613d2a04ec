// --- File: crates/booking_invite/src/gcal_link.rs ---
//! "Add to Google Calendar" deep links.

use booking_common::{CalendarEventDescriptor, CalendarLinkBuilder};
use tracing::debug;

use crate::error::InviteError;
use crate::time::{local_stamp, local_window, parse_time_zone};

pub const GOOGLE_CALENDAR_RENDER_URL: &str = "https://calendar.google.com/calendar/render";

/// Builds `calendar/render?action=TEMPLATE` links.
///
/// `dates` carries local wall-clock stamps and `ctz` the IANA zone, so Google
/// shows the event at the same civil time regardless of the viewer's zone.
#[derive(Debug, Clone)]
pub struct GoogleCalendarLinkBuilder {
    base_url: String,
}

impl GoogleCalendarLinkBuilder {
    pub fn new() -> Self {
        Self::with_base_url(GOOGLE_CALENDAR_RENDER_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for GoogleCalendarLinkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarLinkBuilder for GoogleCalendarLinkBuilder {
    type Error = InviteError;

    fn build_link(
        &self,
        event: &CalendarEventDescriptor,
        time_zone: &str,
    ) -> Result<String, InviteError> {
        let tz = parse_time_zone(time_zone)?;
        let (start, end) =
            local_window(event.date, &event.start_time_hhmm, &event.end_time_hhmm, tz)?;
        let dates = format!("{}/{}", local_stamp(start), local_stamp(end));

        let query = serde_urlencoded::to_string([
            ("action", "TEMPLATE"),
            ("text", event.title.as_str()),
            ("dates", dates.as_str()),
            ("details", event.description.as_str()),
            ("location", event.location.as_str()),
            ("ctz", tz.name()),
        ])
        .map_err(|e| InviteError::EncodingError(e.to_string()))?;

        debug!("[Invite Link] Google Calendar dates={} ctz={}", dates, tz.name());
        Ok(format!("{}?{}", self.base_url, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn descriptor() -> CalendarEventDescriptor {
        CalendarEventDescriptor {
            title: "Appointment with Ana Lopez".to_string(),
            description: "First visit & intake".to_string(),
            location: "12 Harbor Rd".to_string(),
            date: Utc.with_ymd_and_hms(2025, 1, 15, 17, 0, 0).unwrap(),
            start_time_hhmm: "09:00".to_string(),
            end_time_hhmm: "10:00".to_string(),
        }
    }

    #[test]
    fn test_build_link_encodes_all_fields() {
        let url = GoogleCalendarLinkBuilder::new()
            .build_link(&descriptor(), "America/Los_Angeles")
            .unwrap();

        assert!(url.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE&"));
        assert!(url.contains("text=Appointment+with+Ana+Lopez"), "{}", url);
        assert!(url.contains("dates=20250115T090000%2F20250115T100000"), "{}", url);
        assert!(url.contains("details=First+visit+%26+intake"), "{}", url);
        assert!(url.contains("location=12+Harbor+Rd"), "{}", url);
        assert!(url.ends_with("ctz=America%2FLos_Angeles"), "{}", url);
    }

    #[test]
    fn test_build_link_empty_description_keeps_parameter() {
        let mut event = descriptor();
        event.description = String::new();
        let url = GoogleCalendarLinkBuilder::new()
            .build_link(&event, "America/Los_Angeles")
            .unwrap();
        assert!(url.contains("&details=&"), "{}", url);
    }

    #[test]
    fn test_build_link_requires_time_zone() {
        let err = GoogleCalendarLinkBuilder::new()
            .build_link(&descriptor(), "")
            .unwrap_err();
        assert_eq!(err, InviteError::MissingTimezone);
    }

    #[test]
    fn test_build_link_custom_base_url() {
        let url = GoogleCalendarLinkBuilder::with_base_url("http://localhost/render")
            .build_link(&descriptor(), "America/Los_Angeles")
            .unwrap();
        assert!(url.starts_with("http://localhost/render?action=TEMPLATE"));
    }
}
