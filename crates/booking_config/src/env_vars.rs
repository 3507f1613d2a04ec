//! Environment variable handling for the booking workspace.
//!
//! Layered settings use `BOOKING__SECTION__KEY` names and are picked up by the
//! `config` crate. A handful of settings also have a flat legacy name (for
//! example `BOOKING_FROM_EMAIL`) which the booking front-end already exports;
//! those are applied on top of the layered value.

use std::env;

use crate::models::AppConfig;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "BOOKING";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// Flat variable naming the default sender of calendar invites.
pub const FROM_EMAIL_ENV: &str = "BOOKING_FROM_EMAIL";

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a configuration path to an environment variable name
///
/// # Arguments
///
/// * `prefix` - The variable prefix (e.g., "BOOKING")
/// * `path` - The configuration path (e.g., "mail.from_email")
///
/// # Returns
///
/// The environment variable name (e.g., "BOOKING__MAIL__FROM_EMAIL")
pub fn config_path_to_env_var(prefix: &str, path: &str) -> String {
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}

/// Applies the flat legacy variables on top of an already layered config,
/// reading them through `lookup`.
///
/// Blank values are ignored so an exported-but-empty variable does not hide
/// the configured sender.
pub fn apply_legacy_overrides_with<F>(mut config: AppConfig, lookup: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(from_email) = lookup(FROM_EMAIL_ENV)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
    {
        tracing::debug!("Using default sender from {}", FROM_EMAIL_ENV);
        config.mail.from_email = Some(from_email);
    }
    config
}

/// Applies the flat legacy variables from the process environment.
pub fn apply_legacy_overrides(config: AppConfig) -> AppConfig {
    apply_legacy_overrides_with(config, |key| env::var(key).ok())
}
