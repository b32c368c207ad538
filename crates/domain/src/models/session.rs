//! RSVP session lifecycle states.

use serde::Serialize;

/// State of one RSVP session.
///
/// ```text
/// Idle -> Loading -> Error(msg)
///                 -> Confirmed                      (already responded)
///                 -> AwaitingInput <-> Submitting -> Confirmed
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    /// Invitation lookup failed; terminal for the session.
    Error(String),
    AwaitingInput,
    Submitting,
    Confirmed,
}

impl SessionState {
    /// Whether a request is outstanding.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SessionState::Loading | SessionState::Submitting)
    }

    /// Whether the form accepts edits and submissions.
    pub fn is_editable(&self) -> bool {
        matches!(self, SessionState::AwaitingInput)
    }

    /// Whether no further transition can happen.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Error(_) | SessionState::Confirmed)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::Loading => write!(f, "loading"),
            SessionState::Error(_) => write!(f, "error"),
            SessionState::AwaitingInput => write!(f, "awaiting_input"),
            SessionState::Submitting => write!(f, "submitting"),
            SessionState::Confirmed => write!(f, "confirmed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_state_display() {
        assert_eq!(SessionState::Idle.to_string(), "idle");
        assert_eq!(SessionState::Loading.to_string(), "loading");
        assert_eq!(SessionState::Error("x".into()).to_string(), "error");
        assert_eq!(SessionState::AwaitingInput.to_string(), "awaiting_input");
        assert_eq!(SessionState::Submitting.to_string(), "submitting");
        assert_eq!(SessionState::Confirmed.to_string(), "confirmed");
    }

    #[test]
    fn test_session_state_predicates() {
        assert!(SessionState::Loading.is_in_flight());
        assert!(SessionState::Submitting.is_in_flight());
        assert!(!SessionState::AwaitingInput.is_in_flight());

        assert!(SessionState::AwaitingInput.is_editable());
        assert!(!SessionState::Submitting.is_editable());

        assert!(SessionState::Confirmed.is_terminal());
        assert!(SessionState::Error("gone".into()).is_terminal());
        assert!(!SessionState::Idle.is_terminal());
    }

    #[test]
    fn test_session_state_serialization() {
        let json = serde_json::to_value(SessionState::Error("Invite not found".into())).unwrap();
        assert_eq!(json["state"], "error");
        assert_eq!(json["message"], "Invite not found");

        let json = serde_json::to_value(SessionState::Confirmed).unwrap();
        assert_eq!(json["state"], "confirmed");
    }
}
