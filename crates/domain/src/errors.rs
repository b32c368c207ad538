//! Errors surfaced to the guest by the RSVP workflow.

use thiserror::Error;

/// User-facing RSVP error.
///
/// Every variant displays as its message alone, so the presentation layer can
/// show any of them in the same single error slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsvpError {
    /// Invitation lookup failed (network, non-2xx, unparseable body).
    #[error("{0}")]
    InviteFetch(String),

    /// Detected locally before any network call.
    #[error("{0}")]
    Validation(String),

    /// The RSVP POST failed (network or non-2xx).
    #[error("{0}")]
    Submission(String),
}

impl RsvpError {
    /// The message shown to the guest.
    pub fn message(&self) -> &str {
        match self {
            RsvpError::InviteFetch(msg)
            | RsvpError::Validation(msg)
            | RsvpError::Submission(msg) => msg,
        }
    }

    /// Stable kind label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RsvpError::InviteFetch(_) => "invite_fetch",
            RsvpError::Validation(_) => "validation",
            RsvpError::Submission(_) => "submission",
        }
    }
}
