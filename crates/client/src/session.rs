//! RSVP session: the interactive lifecycle of one invitation page.
//!
//! A session loads the invitation once, keeps the guest's draft, validates
//! it, and sends it at most once per submit. All methods take `&self` so UI
//! handlers can share one session; the state lock is never held across a
//! network call.

use std::sync::{Arc, Mutex, MutexGuard};

use domain::models::{validate_draft, Invitation, RsvpDraft, RsvpSubmission, SessionState};
use domain::services::{normalize_failure, RsvpApi};
use domain::RsvpError;
use tracing::{debug, info, instrument, warn};

use crate::config::SessionConfig;
use crate::store::InviteStore;

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The RSVP was recorded.
    Confirmed,
    /// Blocked locally before any request was made.
    Invalid(RsvpError),
    /// The request failed; the draft is kept for a manual retry.
    Failed(RsvpError),
    /// Nothing happened: a submission is already in flight, or the session
    /// is not accepting input.
    Ignored,
}

#[derive(Debug, Default)]
struct SessionInner {
    state: SessionState,
    invitation: Option<Invitation>,
    draft: RsvpDraft,
    error: Option<RsvpError>,
    celebrate: bool,
}

impl SessionInner {
    fn transition(&mut self, next: SessionState) {
        debug!(from = %self.state, to = %next, "RSVP session transition");
        self.state = next;
    }
}

pub struct RsvpSession {
    store: InviteStore,
    api: Arc<dyn RsvpApi>,
    config: SessionConfig,
    code: Option<String>,
    inner: Mutex<SessionInner>,
}

impl RsvpSession {
    /// Create an idle session for `code` (taken from the page URL).
    pub fn new(api: Arc<dyn RsvpApi>, config: SessionConfig, code: Option<String>) -> Self {
        Self {
            store: InviteStore::new(api.clone(), config.error_generic.clone()),
            api,
            config,
            code: code.filter(|c| !c.is_empty()),
            inner: Mutex::new(SessionInner::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Load the invitation.
    ///
    /// Without a code the session stays `Idle`. Only the first call from
    /// `Idle` fetches; later calls return the current state.
    #[instrument(skip(self), fields(code = ?self.code, api_base = %self.config.api_base))]
    pub async fn start(&self) -> SessionState {
        let Some(code) = self.code.clone() else {
            debug!("No invitation code; RSVP session stays idle");
            return SessionState::Idle;
        };

        {
            let mut inner = self.lock();
            if inner.state != SessionState::Idle {
                return inner.state.clone();
            }
            inner.error = None;
            inner.transition(SessionState::Loading);
        }

        let result = self.store.fetch(&code).await;

        let mut inner = self.lock();
        match result {
            Ok(invitation) => {
                let next = if invitation.has_responded {
                    info!("Invitation already answered");
                    SessionState::Confirmed
                } else {
                    SessionState::AwaitingInput
                };
                inner.invitation = Some(invitation);
                inner.draft = RsvpDraft::default();
                inner.transition(next);
            }
            Err(err) => {
                inner.transition(SessionState::Error(err.message().to_string()));
                inner.error = Some(err);
            }
        }
        inner.state.clone()
    }

    pub fn state(&self) -> SessionState {
        self.lock().state.clone()
    }

    pub fn invitation(&self) -> Option<Invitation> {
        self.lock().invitation.clone()
    }

    pub fn draft(&self) -> RsvpDraft {
        self.lock().draft.clone()
    }

    /// The error currently shown to the guest, if any.
    pub fn error(&self) -> Option<RsvpError> {
        self.lock().error.clone()
    }

    pub fn error_message(&self) -> Option<String> {
        self.lock().error.as_ref().map(|e| e.message().to_string())
    }

    pub fn guest_name(&self) -> Option<String> {
        self.lock().invitation.as_ref().map(|i| i.name.clone())
    }

    pub fn show_plus_one(&self) -> bool {
        self.lock()
            .invitation
            .as_ref()
            .is_some_and(|i| i.capacity.offers_plus_one())
    }

    pub fn show_kids(&self) -> bool {
        self.lock()
            .invitation
            .as_ref()
            .is_some_and(|i| i.capacity.offers_kids())
    }

    pub fn kid_options(&self) -> Vec<i32> {
        self.lock()
            .invitation
            .as_ref()
            .map(|i| i.capacity.kid_options())
            .unwrap_or_default()
    }

    /// Party size line from the configured template; empty when there is no
    /// invitation or no template.
    pub fn invite_size_message(&self) -> String {
        self.lock()
            .invitation
            .as_ref()
            .map(|i| i.size_message(&self.config.invite_size_template))
            .unwrap_or_default()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.lock().state.is_editable()
    }

    /// Apply an edit to the draft. Edits are only accepted in
    /// `AwaitingInput`; returns whether the edit was applied.
    ///
    /// Meant for the plus-one and free-text fields. Use
    /// [`select_kid_count`](Self::select_kid_count) for the kid count; a
    /// count written here is still range-checked by `submit`.
    pub fn edit_draft<F>(&self, edit: F) -> bool
    where
        F: FnOnce(&mut RsvpDraft),
    {
        let mut inner = self.lock();
        if !inner.state.is_editable() {
            return false;
        }
        edit(&mut inner.draft);
        true
    }

    pub fn set_plus_one(&self, plus_one: bool) -> bool {
        self.edit_draft(|draft| draft.plus_one = plus_one)
    }

    /// Pick a kid count from the offered options.
    ///
    /// Returns `Ok(false)` without touching the draft when the session is not
    /// accepting input, like [`edit_draft`](Self::edit_draft).
    pub fn select_kid_count(&self, count: i32) -> Result<bool, RsvpError> {
        let mut inner = self.lock();
        if !inner.state.is_editable() {
            return Ok(false);
        }
        let Some(capacity) = inner.invitation.as_ref().map(|i| i.capacity) else {
            return Ok(false);
        };
        inner
            .draft
            .select_kid_count(count, &capacity)
            .map(|()| true)
            .map_err(|err| {
                RsvpError::Validation(
                    err.message
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| self.config.error_missing_kids.clone()),
                )
            })
    }

    /// Check the current draft without sending anything.
    pub fn validate(&self) -> Result<(), RsvpError> {
        let inner = self.lock();
        match inner.invitation.as_ref() {
            Some(invitation) => validate_draft(
                &invitation.capacity,
                &inner.draft,
                &self.config.error_missing_kids,
            ),
            None => Err(RsvpError::Validation(self.config.error_generic.clone())),
        }
    }

    /// Validate and send the draft.
    ///
    /// At most one request is in flight per session: a call made while
    /// `Submitting` returns [`SubmitOutcome::Ignored`] without touching the
    /// network. Failed submissions are never retried automatically.
    #[instrument(skip(self), fields(code = ?self.code, api_base = %self.config.api_base))]
    pub async fn submit(&self) -> SubmitOutcome {
        let (code, submission) = {
            let mut inner = self.lock();
            if !inner.state.is_editable() {
                debug!(state = %inner.state, "Submit ignored");
                return SubmitOutcome::Ignored;
            }
            let Some(code) = self.code.clone() else {
                return SubmitOutcome::Ignored;
            };
            let Some(capacity) = inner.invitation.as_ref().map(|i| i.capacity) else {
                return SubmitOutcome::Ignored;
            };
            inner.error = None;

            if let Err(err) =
                validate_draft(&capacity, &inner.draft, &self.config.error_missing_kids)
            {
                info!(error = %err, "RSVP draft failed validation");
                inner.error = Some(err.clone());
                return SubmitOutcome::Invalid(err);
            }

            let submission = RsvpSubmission::build(&capacity, &inner.draft);
            inner.transition(SessionState::Submitting);
            (code, submission)
        };

        let result = self.api.submit_rsvp(&code, &submission).await;

        let mut inner = self.lock();
        match result {
            Ok(()) => {
                info!(
                    adult_count = submission.adult_count,
                    kid_count = ?submission.kid_count,
                    "RSVP submitted"
                );
                inner.celebrate = true;
                inner.transition(SessionState::Confirmed);
                SubmitOutcome::Confirmed
            }
            Err(failure) => {
                warn!(status = ?failure.status(), error = %failure, "RSVP submission failed");
                let err = RsvpError::Submission(normalize_failure(
                    &failure,
                    &self.config.error_generic,
                ));
                inner.error = Some(err.clone());
                inner.transition(SessionState::AwaitingInput);
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// True exactly once after a successful submission, for the
    /// celebration effect.
    pub fn take_celebration(&self) -> bool {
        std::mem::take(&mut self.lock().celebrate)
    }
}
