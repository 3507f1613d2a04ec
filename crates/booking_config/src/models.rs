// --- File: crates/booking_config/src/models.rs ---

use serde::{Deserialize, Serialize};

/// Literal sender used when neither the booking nor the config names one.
pub const FALLBACK_FROM_EMAIL: &str = "no-reply@booking-saas.com";

pub const DEFAULT_UID_DOMAIN: &str = "booking-saas";

pub const DEFAULT_PRODUCT_ID: &str = "-//booking-saas//appointment invite//EN";

// --- Mail Config ---
// Default "from" address for outgoing invites. Usually set via BOOKING_FROM_EMAIL.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct MailConfig {
    #[serde(default)]
    pub from_email: Option<String>,
}

impl MailConfig {
    /// Configured sender, ignoring blank values.
    pub fn configured_from_email(&self) -> Option<&str> {
        self.from_email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }
}

// --- Calendar Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CalendarConfig {
    /// Right-hand side of generated ICS UIDs (`booking-{id}@{uid_domain}`).
    #[serde(default = "default_uid_domain")]
    pub uid_domain: String,
    /// PRODID written into generated ICS documents.
    #[serde(default = "default_product_id")]
    pub product_id: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            uid_domain: default_uid_domain(),
            product_id: default_product_id(),
        }
    }
}

fn default_uid_domain() -> String {
    DEFAULT_UID_DOMAIN.to_string()
}

fn default_product_id() -> String {
    DEFAULT_PRODUCT_ID.to_string()
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}
