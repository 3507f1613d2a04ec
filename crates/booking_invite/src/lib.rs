// --- File: crates/booking_invite/src/lib.rs ---
// Declare modules within this crate
pub mod error;
pub mod gcal_link;
pub mod ics;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod models;
pub mod time;

pub use error::InviteError;
pub use gcal_link::GoogleCalendarLinkBuilder;
pub use ics::IcalendarIcsBuilder;
pub use logic::{
    booking_uid, build_therapist_invite_artifacts, resolve_organizer_email, InviteArtifactBuilder,
};
pub use models::{InviteArtifacts, InviteLabels, InvitePayload};
