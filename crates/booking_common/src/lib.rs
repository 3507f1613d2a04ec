// --- File: crates/booking_common/src/lib.rs ---
// Declare modules within this crate
pub mod error;    // Error handling
pub mod logging;  // Logging utilities
pub mod models;   // Shared calendar / email data
pub mod services; // Collaborator abstractions

// Re-export error types and utilities for easier access
pub use error::{
    BookingError,
    Context,
    validation_error,
    external_service_error,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, log_error, log_result};

pub use models::{AppointmentEmailProps, CalendarEventDescriptor, IcsEventDescriptor, Language};
pub use services::{CalendarLinkBuilder, IcsDocumentBuilder};
