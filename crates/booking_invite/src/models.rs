// --- File: crates/booking_invite/src/models.rs ---

use booking_common::{AppointmentEmailProps, Language};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Booking data the invite artifacts are generated from.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct InvitePayload {
    #[cfg_attr(feature = "openapi", schema(example = "Ana Lopez"))]
    pub patient_name: String,
    pub patient_email: String,
    pub therapist_name: String,
    pub location_address: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "2025-01-15T17:00:00Z"))]
    pub start: DateTime<Utc>,
    #[cfg_attr(feature = "openapi", schema(example = "2025-01-15T18:00:00Z"))]
    pub end: DateTime<Utc>,
    pub language: Language,
    pub booking_id: String,
    /// Overrides the configured sender when present and non-empty.
    #[serde(default)]
    pub organizer_email: Option<String>,
    pub attendee_email: String,
    /// IANA zone all wall-clock values are rendered in. Required: an absent
    /// field deserializes to "" and is rejected when building.
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "America/Los_Angeles"))]
    pub time_zone: String,
}

/// The three artifacts of a booking confirmation plus its email subject.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct InviteArtifacts {
    pub google_calendar_url: String,
    pub ics_content: String,
    pub email_props: AppointmentEmailProps,
    pub subject: String,
}

/// Literal prefixes for the event title and email subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteLabels {
    pub title_prefix: String,
    pub subject_prefix: String,
}

impl InviteLabels {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::En => Self {
                title_prefix: "Appointment with".to_string(),
                subject_prefix: "New appointment:".to_string(),
            },
            Language::Es => Self {
                title_prefix: "Cita con".to_string(),
                subject_prefix: "Nueva cita:".to_string(),
            },
        }
    }

    pub fn title(&self, patient_name: &str) -> String {
        format!("{} {}", self.title_prefix, patient_name)
    }

    pub fn subject(&self, patient_name: &str) -> String {
        format!("{} {}", self.subject_prefix, patient_name)
    }
}

impl Default for InviteLabels {
    fn default() -> Self {
        Self::for_language(Language::En)
    }
}
