#[cfg(test)]
mod tests {
    use crate::logic::{booking_uid, InviteArtifactBuilder};
    use crate::models::InvitePayload;
    use crate::time::format_hhmm;
    use booking_common::Language;
    use booking_config::AppConfig;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use chrono_tz::Tz;
    use proptest::prelude::*;
    use std::sync::Arc;

    const ZONES: &[&str] = &[
        "America/Los_Angeles",
        "America/New_York",
        "America/Mexico_City",
        "Europe/Madrid",
        "Europe/Zurich",
        "Asia/Kolkata",
        "Australia/Sydney",
        "UTC",
    ];

    // 2020-01-01 .. 2030-01-01, minute resolution
    fn instant(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    fn payload(start: DateTime<Utc>, duration_minutes: i64, booking_id: &str, time_zone: &str) -> InvitePayload {
        InvitePayload {
            patient_name: "Ana Lopez".to_string(),
            patient_email: "ana@example.com".to_string(),
            therapist_name: "Dr. Ruiz".to_string(),
            location_address: "12 Harbor Rd".to_string(),
            notes: None,
            start,
            end: start + Duration::minutes(duration_minutes),
            language: Language::Es,
            booking_id: booking_id.to_string(),
            organizer_email: None,
            attendee_email: "dr.ruiz@clinic.test".to_string(),
            time_zone: time_zone.to_string(),
        }
    }

    fn unfold(ics: &str) -> String {
        ics.replace("\r\n ", "").replace("\r\n\t", "")
    }

    proptest! {
        // Same input, same bytes
        #[test]
        fn test_build_is_deterministic(
            minutes in 0..5_259_600i64,
            duration in 15..240i64,
            zone in prop::sample::select(ZONES),
            booking_id in "[a-z0-9-]{1,24}",
        ) {
            let builder = InviteArtifactBuilder::from_config(Arc::new(AppConfig::default()));
            let payload = payload(instant(minutes), duration, &booking_id, zone);

            let first = builder.build(&payload).unwrap();
            let second = builder.build(&payload).unwrap();

            prop_assert_eq!(first.ics_content, second.ics_content);
            prop_assert_eq!(first.google_calendar_url, second.google_calendar_url);
            prop_assert_eq!(first.subject, second.subject);
        }

        // DTSTART carries the zoned wall clock, never the UTC time
        #[test]
        fn test_dtstart_matches_zoned_wall_clock(
            minutes in 0..5_259_600i64,
            zone in prop::sample::select(ZONES),
        ) {
            let tz: Tz = zone.parse().unwrap();
            let start = instant(minutes);
            let builder = InviteArtifactBuilder::from_config(Arc::new(AppConfig::default()));
            let artifacts = builder.build(&payload(start, 60, "p", zone)).unwrap();

            let local = start.with_timezone(&tz);
            let expected = format!(
                "DTSTART;TZID={}:{}",
                zone,
                local.format("%Y%m%dT%H%M00")
            );
            let ics = unfold(&artifacts.ics_content);
            prop_assert!(ics.contains(&expected), "expected {} in {}", expected, ics);
            prop_assert_eq!(format_hhmm(start, tz), local.format("%H:%M").to_string());
        }

        #[test]
        fn test_distinct_booking_ids_never_share_a_uid(
            a in "[A-Za-z0-9@._-]{1,32}",
            b in "[A-Za-z0-9@._-]{1,32}",
        ) {
            prop_assume!(a != b);
            prop_assert_ne!(booking_uid(&a, "booking-saas"), booking_uid(&b, "booking-saas"));
            prop_assert_eq!(booking_uid(&a, "booking-saas"), booking_uid(&a, "booking-saas"));
        }

        #[test]
        fn test_blank_time_zone_always_fails(
            minutes in 0..5_259_600i64,
            blanks in "[ \t]{0,4}",
        ) {
            let builder = InviteArtifactBuilder::from_config(Arc::new(AppConfig::default()));
            let result = builder.build(&payload(instant(minutes), 60, "p", &blanks));
            prop_assert_eq!(result, Err(crate::error::InviteError::MissingTimezone));
        }
    }
}
