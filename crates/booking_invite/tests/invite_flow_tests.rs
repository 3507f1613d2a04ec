//! End-to-end checks of the invite flow as the booking workflow uses it:
//! JSON payload in, artifacts (or a booking failure) out.

use booking_common::BookingError;
use booking_config::{AppConfig, MailConfig};
use booking_invite::{build_therapist_invite_artifacts, InviteArtifactBuilder, InviteArtifacts, InvitePayload};
use std::sync::Arc;
use std::thread;

const PAYLOAD_JSON: &str = r#"{
    "patient_name": "Ana Lopez",
    "patient_email": "ana@example.com",
    "therapist_name": "Dr. Ruiz",
    "location_address": "12 Harbor Rd",
    "notes": "Second session",
    "start": "2025-07-15T17:00:00Z",
    "end": "2025-07-15T17:50:00Z",
    "language": "en",
    "booking_id": "bk_9f3a",
    "attendee_email": "dr.ruiz@clinic.test",
    "time_zone": "America/Los_Angeles"
}"#;

fn config() -> Arc<AppConfig> {
    Arc::new(AppConfig {
        mail: MailConfig {
            from_email: Some("citas@clinic.test".to_string()),
        },
        ..AppConfig::default()
    })
}

#[test]
fn test_json_payload_to_artifacts() {
    let payload: InvitePayload = serde_json::from_str(PAYLOAD_JSON).unwrap();
    let artifacts = build_therapist_invite_artifacts(&payload, config()).unwrap();

    let ics = artifacts.ics_content.replace("\r\n ", "");
    assert!(ics.contains("UID:booking-bk_9f3a@booking-saas"));
    assert!(ics.contains("DTSTART;TZID=America/Los_Angeles:20250715T100000"));
    assert!(ics.contains("DTEND;TZID=America/Los_Angeles:20250715T105000"));
    assert!(ics.contains("ORGANIZER:mailto:citas@clinic.test"));
    assert!(ics.contains("DESCRIPTION:Second session"));
    assert!(artifacts
        .google_calendar_url
        .contains("dates=20250715T100000%2F20250715T105000"));
    assert_eq!(artifacts.subject, "New appointment: Ana Lopez");

    // Artifacts travel to the mail sender as JSON
    let json = serde_json::to_value(&artifacts).unwrap();
    assert_eq!(json["email_props"]["time_zone"], "America/Los_Angeles");
    assert_eq!(json["email_props"]["language"], "en");
    let back: InviteArtifacts = serde_json::from_value(json).unwrap();
    assert_eq!(back, artifacts);
}

#[test]
fn test_payload_without_time_zone_is_a_booking_failure() {
    let mut value: serde_json::Value = serde_json::from_str(PAYLOAD_JSON).unwrap();
    value.as_object_mut().unwrap().remove("time_zone");
    let payload: InvitePayload = serde_json::from_value(value).unwrap();

    let err: BookingError = build_therapist_invite_artifacts(&payload, config())
        .unwrap_err()
        .into();

    assert!(err.is_validation());
    assert!(err.to_string().contains("timeZone is required"));
}

#[test]
fn test_builder_is_shared_across_threads() {
    let payload: InvitePayload = serde_json::from_str(PAYLOAD_JSON).unwrap();
    let builder = Arc::new(InviteArtifactBuilder::from_config(config()));
    let expected = builder.build(&payload).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let builder = Arc::clone(&builder);
            let payload = payload.clone();
            thread::spawn(move || builder.build(&payload).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
