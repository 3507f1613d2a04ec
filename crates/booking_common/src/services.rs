//! Collaborator abstractions for invite generation.
//!
//! The invite builder only decides *what* goes into a calendar artifact; the
//! concrete formats (Google Calendar link, iCalendar document) are produced
//! by implementations of these traits so each format can be swapped or
//! tested on its own.

use crate::models::{CalendarEventDescriptor, IcsEventDescriptor};

/// Builds a "add to calendar" deep link for an event.
pub trait CalendarLinkBuilder: Send + Sync {
    /// Error type returned by the builder.
    type Error: std::error::Error + Send + Sync + 'static;

    /// `time_zone` is the IANA zone the descriptor's `HH:mm` values are in.
    fn build_link(
        &self,
        event: &CalendarEventDescriptor,
        time_zone: &str,
    ) -> Result<String, Self::Error>;
}

/// Builds an iCalendar document for an event.
pub trait IcsDocumentBuilder: Send + Sync {
    /// Error type returned by the builder.
    type Error: std::error::Error + Send + Sync + 'static;

    /// `time_zone` is the IANA zone the descriptor's `HH:mm` values are in.
    fn build_ics(&self, event: &IcsEventDescriptor, time_zone: &str)
        -> Result<String, Self::Error>;
}
