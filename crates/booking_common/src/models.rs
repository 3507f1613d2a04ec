// --- File: crates/booking_common/src/models.rs ---
//! Calendar and email data shared between the invite builder and its
//! collaborators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Language the booking was made in.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Es,
    #[default]
    En,
}

/// Event data handed to a calendar link builder.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEventDescriptor {
    pub title: String,
    pub description: String,
    pub location: String,
    /// The booking's start instant; builders take the calendar day from it
    /// in the requested zone.
    #[cfg_attr(feature = "openapi", schema(example = "2025-01-15T17:00:00Z"))]
    pub date: DateTime<Utc>,
    /// Zoned wall-clock start, 24-hour `HH:mm`.
    #[cfg_attr(feature = "openapi", schema(example = "09:00"))]
    pub start_time_hhmm: String,
    /// Zoned wall-clock end, 24-hour `HH:mm`.
    #[cfg_attr(feature = "openapi", schema(example = "10:00"))]
    pub end_time_hhmm: String,
}

/// Event data handed to an ICS builder.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcsEventDescriptor {
    #[serde(flatten)]
    pub event: CalendarEventDescriptor,
    #[cfg_attr(feature = "openapi", schema(example = "booking-42@booking-saas"))]
    pub uid: String,
    pub organizer_email: String,
    pub attendee_email: String,
}

/// Everything an appointment email template needs. Rendering happens elsewhere.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentEmailProps {
    pub patient_name: String,
    pub patient_email: String,
    pub therapist_name: String,
    pub location_address: String,
    pub notes: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub google_calendar_url: String,
    pub language: Language,
    #[cfg_attr(feature = "openapi", schema(example = "America/Los_Angeles"))]
    pub time_zone: String,
}
