// --- File: crates/booking_invite/src/logic.rs ---
use std::sync::Arc;

use booking_common::{
    AppointmentEmailProps, CalendarEventDescriptor, CalendarLinkBuilder, IcsDocumentBuilder,
    IcsEventDescriptor,
};
use booking_config::{AppConfig, FALLBACK_FROM_EMAIL};
use tracing::{debug, info};

use crate::error::InviteError;
use crate::gcal_link::GoogleCalendarLinkBuilder;
use crate::ics::IcalendarIcsBuilder;
use crate::models::{InviteArtifacts, InviteLabels, InvitePayload};
use crate::time::{format_hhmm, parse_time_zone};

/// Globally unique, stable ICS UID for a booking.
pub fn booking_uid(booking_id: &str, uid_domain: &str) -> String {
    format!("booking-{}@{}", booking_id, uid_domain)
}

/// Organizer address by priority: explicit value, configured default sender,
/// then the literal fallback. Blank values count as absent.
pub fn resolve_organizer_email<'a>(explicit: Option<&'a str>, configured: Option<&'a str>) -> &'a str {
    explicit
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .or_else(|| configured.map(str::trim).filter(|email| !email.is_empty()))
        .unwrap_or(FALLBACK_FROM_EMAIL)
}

/// Produces the calendar link, ICS document, email payload and subject for a
/// booking confirmation.
///
/// The builder is stateless apart from its read-only config, so one instance
/// can be shared across threads.
pub struct InviteArtifactBuilder<L = GoogleCalendarLinkBuilder, I = IcalendarIcsBuilder> {
    config: Arc<AppConfig>,
    link_builder: L,
    ics_builder: I,
    labels: InviteLabels,
}

impl InviteArtifactBuilder {
    /// Builder with the Google Calendar link and `icalendar` collaborators.
    pub fn from_config(config: Arc<AppConfig>) -> Self {
        let ics_builder = IcalendarIcsBuilder::new(config.calendar.product_id.clone());
        Self::new(config, GoogleCalendarLinkBuilder::new(), ics_builder)
    }
}

impl<L, I> InviteArtifactBuilder<L, I>
where
    L: CalendarLinkBuilder,
    I: IcsDocumentBuilder,
{
    pub fn new(config: Arc<AppConfig>, link_builder: L, ics_builder: I) -> Self {
        Self {
            config,
            link_builder,
            ics_builder,
            labels: InviteLabels::default(),
        }
    }

    pub fn with_labels(mut self, labels: InviteLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn build(&self, payload: &InvitePayload) -> Result<InviteArtifacts, InviteError> {
        // Fail before touching any collaborator; never guess a zone.
        let tz = parse_time_zone(&payload.time_zone)?;
        let time_zone = tz.name();

        let start_hhmm = format_hhmm(payload.start, tz);
        let end_hhmm = format_hhmm(payload.end, tz);
        debug!(
            "[Invite Logic] booking {}: {} - {} ({})",
            payload.booking_id, start_hhmm, end_hhmm, time_zone
        );

        let event = CalendarEventDescriptor {
            title: self.labels.title(&payload.patient_name),
            description: payload.notes.clone().unwrap_or_default(),
            location: payload.location_address.clone(),
            date: payload.start,
            start_time_hhmm: start_hhmm,
            end_time_hhmm: end_hhmm,
        };

        let google_calendar_url = self
            .link_builder
            .build_link(&event, time_zone)
            .map_err(|e| InviteError::collaborator("calendar_link_builder", e))?;

        let organizer_email = resolve_organizer_email(
            payload.organizer_email.as_deref(),
            self.config.mail.configured_from_email(),
        );
        let ics_descriptor = IcsEventDescriptor {
            event,
            uid: booking_uid(&payload.booking_id, &self.config.calendar.uid_domain),
            organizer_email: organizer_email.to_string(),
            attendee_email: payload.attendee_email.clone(),
        };

        let ics_content = self
            .ics_builder
            .build_ics(&ics_descriptor, time_zone)
            .map_err(|e| InviteError::collaborator("ics_builder", e))?;

        let email_props = AppointmentEmailProps {
            patient_name: payload.patient_name.clone(),
            patient_email: payload.patient_email.clone(),
            therapist_name: payload.therapist_name.clone(),
            location_address: payload.location_address.clone(),
            notes: payload.notes.clone(),
            start: payload.start,
            end: payload.end,
            google_calendar_url: google_calendar_url.clone(),
            language: payload.language,
            time_zone: time_zone.to_string(),
        };

        let subject = self.labels.subject(&payload.patient_name);

        info!(
            "[Invite Logic] Built invite artifacts for booking {} (uid {}, organizer {})",
            payload.booking_id, ics_descriptor.uid, ics_descriptor.organizer_email
        );

        Ok(InviteArtifacts {
            google_calendar_url,
            ics_content,
            email_props,
            subject,
        })
    }
}

/// One-shot helper using the default collaborators and English labels.
pub fn build_therapist_invite_artifacts(
    payload: &InvitePayload,
    config: Arc<AppConfig>,
) -> Result<InviteArtifacts, InviteError> {
    InviteArtifactBuilder::from_config(config).build(payload)
}
