use std::fmt;
use thiserror::Error;

/// The base error type for the booking workspace.
///
/// Feature crates keep their own error enums and implement
/// `From<SpecificError> for BookingError` so the booking workflow can treat
/// every failure uniformly.
#[derive(Error, Debug)]
pub enum BookingError {
    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The booking input was rejected
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred in an injected collaborator (URL builder, ICS builder, ...)
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl BookingError {
    /// Whether the error stems from the caller's input rather than the system.
    pub fn is_validation(&self) -> bool {
        matches!(self, BookingError::ValidationError(_))
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, BookingError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, BookingError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, BookingError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| BookingError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, BookingError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| BookingError::InternalError(format!("{}: {}", f(), error)))
    }
}

impl From<serde_json::Error> for BookingError {
    fn from(err: serde_json::Error) -> Self {
        BookingError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for BookingError {
    fn from(err: std::io::Error) -> Self {
        BookingError::InternalError(err.to_string())
    }
}

impl From<booking_config::ConfigError> for BookingError {
    fn from(err: booking_config::ConfigError) -> Self {
        BookingError::ConfigError(err.to_string())
    }
}

// Utility functions for error handling
pub fn validation_error<T: fmt::Display>(message: T) -> BookingError {
    BookingError::ValidationError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> BookingError {
    BookingError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}
