use booking_common::BookingError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InviteError {
    #[error("timeZone is required to build calendar artifacts")]
    MissingTimezone,
    #[error("Unknown IANA time zone: {0}")]
    InvalidTimezone(String),
    #[error("Failed to parse time: {0}")]
    TimeParseError(String),
    #[error("Failed to encode calendar link: {0}")]
    EncodingError(String),
    #[error("{collaborator} failed: {message}")]
    Collaborator {
        collaborator: &'static str,
        message: String,
    },
}

impl InviteError {
    pub(crate) fn collaborator<E: std::fmt::Display>(collaborator: &'static str, err: E) -> Self {
        InviteError::Collaborator {
            collaborator,
            message: err.to_string(),
        }
    }
}

// Timezone problems are the booking's fault, everything else is ours.
impl From<InviteError> for BookingError {
    fn from(err: InviteError) -> Self {
        match err {
            InviteError::MissingTimezone | InviteError::InvalidTimezone(_) => {
                BookingError::ValidationError(err.to_string())
            }
            InviteError::TimeParseError(msg) => BookingError::ParseError(msg),
            InviteError::Collaborator {
                collaborator,
                message,
            } => booking_common::external_service_error(collaborator, message),
            InviteError::EncodingError(msg) => BookingError::InternalError(msg),
        }
    }
}
