//! iCalendar (.ics) generation for appointment invites.

use booking_common::{IcsDocumentBuilder, IcsEventDescriptor};
use booking_config::DEFAULT_PRODUCT_ID;
use icalendar::{Calendar, Component, EventLike, Property};

use crate::error::InviteError;
use crate::time::{local_stamp, local_window, parse_time_zone};

/// Builds single-event `METHOD:REQUEST` documents with the `icalendar` crate.
///
/// DTSTART/DTEND are local wall-clock values tagged with `TZID`, and DTSTAMP
/// is derived from the booking start, so identical descriptors always yield
/// byte-identical output.
#[derive(Debug, Clone)]
pub struct IcalendarIcsBuilder {
    product_id: String,
}

impl IcalendarIcsBuilder {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
        }
    }
}

impl Default for IcalendarIcsBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_PRODUCT_ID)
    }
}

impl IcsDocumentBuilder for IcalendarIcsBuilder {
    type Error = InviteError;

    fn build_ics(
        &self,
        descriptor: &IcsEventDescriptor,
        time_zone: &str,
    ) -> Result<String, InviteError> {
        let tz = parse_time_zone(time_zone)?;
        let event = &descriptor.event;
        let (start, end) =
            local_window(event.date, &event.start_time_hhmm, &event.end_time_hhmm, tz)?;

        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&descriptor.uid);
        ics_event.add_property("DTSTAMP", event.date.format("%Y%m%dT%H%M%SZ").to_string());
        ics_event.summary(&event.title);
        ics_event.description(&event.description);
        ics_event.location(&event.location);
        ics_event.add_property("STATUS", "CONFIRMED");

        for (name, local) in [("DTSTART", start), ("DTEND", end)] {
            let mut prop = Property::new(name, local_stamp(local));
            prop.add_parameter("TZID", tz.name());
            ics_event.append_property(prop);
        }

        ics_event.append_property(Property::new(
            "ORGANIZER",
            cal_address(&descriptor.organizer_email),
        ));
        // icalendar keeps parameters in a map; spelling them into the name
        // pins their order.
        ics_event.append_multi_property(Property::new(
            ATTENDEE_WITH_PARAMS,
            cal_address(&descriptor.attendee_email),
        ));

        let mut cal = Calendar::new();
        cal.push(ics_event.done());
        let cal = cal.done();

        Ok(finish_calendar(&cal.to_string(), &self.product_id, tz.name()))
    }
}

const ATTENDEE_WITH_PARAMS: &str = "ATTENDEE;ROLE=REQ-PARTICIPANT;PARTSTAT=NEEDS-ACTION;RSVP=TRUE";

/// `mailto:` URI for an address. Control characters are dropped so a CR/LF in
/// an email cannot start a new content line.
fn cal_address(email: &str) -> String {
    let address: String = email.trim().chars().filter(|c| !c.is_control()).collect();
    format!("mailto:{}", address)
}

/// Rewrites the calendar header produced by the `icalendar` crate:
/// - PRODID becomes `product_id`
/// - METHOD:REQUEST and X-WR-TIMEZONE are added right after it
/// - CALSCALE:GREGORIAN is dropped (it is the default)
fn finish_calendar(ics: &str, product_id: &str, time_zone: &str) -> String {
    let mut result = String::with_capacity(ics.len() + 64);

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str(&format!("PRODID:{}\r\n", product_id));
            result.push_str("METHOD:REQUEST\r\n");
            result.push_str(&format!("X-WR-TIMEZONE:{}\r\n", time_zone));
            continue;
        }
        if line == "CALSCALE:GREGORIAN" {
            continue;
        }
        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
