//! Invitation lookup.

use std::sync::Arc;

use domain::models::Invitation;
use domain::services::{normalize_failure, RsvpApi};
use domain::RsvpError;
use tracing::{info, instrument, warn};

/// Resolves invitation codes through the RSVP API.
///
/// One request per call; nothing is cached and nothing is retried.
#[derive(Clone)]
pub struct InviteStore {
    api: Arc<dyn RsvpApi>,
    error_generic: String,
}

impl InviteStore {
    pub fn new(api: Arc<dyn RsvpApi>, error_generic: impl Into<String>) -> Self {
        Self {
            api,
            error_generic: error_generic.into(),
        }
    }

    /// Fetch the invitation for `code`.
    ///
    /// Capacity values are taken as sent; out-of-range values are only
    /// logged.
    #[instrument(skip(self))]
    pub async fn fetch(&self, code: &str) -> Result<Invitation, RsvpError> {
        if code.is_empty() {
            return Err(RsvpError::InviteFetch(self.error_generic.clone()));
        }

        match self.api.fetch_invite(code).await {
            Ok(response) => {
                let invitation = Invitation::from_response(code, response);
                if let Err(errors) = invitation.capacity.check() {
                    warn!(
                        max_adults = invitation.capacity.max_adults,
                        max_kids = invitation.capacity.max_kids,
                        errors = %errors,
                        "Invitation capacity out of expected range"
                    );
                }
                info!(
                    has_responded = invitation.has_responded,
                    max_adults = invitation.capacity.max_adults,
                    max_kids = invitation.capacity.max_kids,
                    "Invitation loaded"
                );
                Ok(invitation)
            }
            Err(failure) => {
                warn!(status = ?failure.status(), error = %failure, "Invitation lookup failed");
                Err(RsvpError::InviteFetch(normalize_failure(
                    &failure,
                    &self.error_generic,
                )))
            }
        }
    }
}
