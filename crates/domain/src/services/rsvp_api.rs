//! RSVP API seam.
//!
//! The session talks to the remote invitation API only through [`RsvpApi`].
//! The HTTP implementation lives in the client crate; [`MockRsvpApi`] serves
//! development and tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::models::{InviteResponse, RsvpSubmission};

/// Failure reported by an [`RsvpApi`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiFailure {
    /// Non-2xx response; `body` is the raw response text.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    /// 2xx response whose body could not be decoded.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ApiFailure {
    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiFailure::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Remote invitation API.
#[async_trait::async_trait]
pub trait RsvpApi: Send + Sync {
    /// `GET /invite/{code}`.
    async fn fetch_invite(&self, code: &str) -> Result<InviteResponse, ApiFailure>;

    /// `POST /invite/{code}/rsvp`. Any 2xx is success.
    async fn submit_rsvp(&self, code: &str, submission: &RsvpSubmission) -> Result<(), ApiFailure>;
}

/// In-memory API for development and testing.
///
/// Records every call. Submit outcomes are consumed in order; once the queue
/// is empty submissions succeed.
#[derive(Debug)]
pub struct MockRsvpApi {
    invite: Result<InviteResponse, ApiFailure>,
    submit_outcomes: Mutex<VecDeque<Result<(), ApiFailure>>>,
    submit_delay: Option<Duration>,
    fetch_calls: AtomicUsize,
    submissions: Mutex<Vec<(String, RsvpSubmission)>>,
}

impl MockRsvpApi {
    /// API that resolves every code to `invite`.
    pub fn with_invite(invite: InviteResponse) -> Self {
        Self::from_result(Ok(invite))
    }

    /// API whose invite lookup always fails with `failure`.
    pub fn failing_fetch(failure: ApiFailure) -> Self {
        Self::from_result(Err(failure))
    }

    fn from_result(invite: Result<InviteResponse, ApiFailure>) -> Self {
        Self {
            invite,
            submit_outcomes: Mutex::new(VecDeque::new()),
            submit_delay: None,
            fetch_calls: AtomicUsize::new(0),
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// Queues the outcome of the next unqueued submission.
    pub fn then_submit(self, outcome: Result<(), ApiFailure>) -> Self {
        self.lock_outcomes().push_back(outcome);
        self
    }

    /// Holds every submission for `delay` before answering.
    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = Some(delay);
        self
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn submit_calls(&self) -> usize {
        self.lock_submissions().len()
    }

    /// Submissions received so far, with their invite codes.
    pub fn submissions(&self) -> Vec<(String, RsvpSubmission)> {
        self.lock_submissions().clone()
    }

    fn lock_outcomes(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<(), ApiFailure>>> {
        self.submit_outcomes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_submissions(&self) -> std::sync::MutexGuard<'_, Vec<(String, RsvpSubmission)>> {
        self.submissions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait::async_trait]
impl RsvpApi for MockRsvpApi {
    async fn fetch_invite(&self, code: &str) -> Result<InviteResponse, ApiFailure> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        tracing::info!(code = %code, "Mock: Would fetch invite");
        self.invite.clone()
    }

    async fn submit_rsvp(&self, code: &str, submission: &RsvpSubmission) -> Result<(), ApiFailure> {
        self.lock_submissions()
            .push((code.to_string(), submission.clone()));

        if let Some(delay) = self.submit_delay {
            tokio::time::sleep(delay).await;
        }

        let outcome = self.lock_outcomes().pop_front().unwrap_or(Ok(()));
        match &outcome {
            Ok(()) => tracing::info!(
                code = %code,
                adult_count = submission.adult_count,
                "Mock: Would submit RSVP"
            ),
            Err(failure) => tracing::warn!(
                code = %code,
                error = %failure,
                "Mock RSVP API simulating failure"
            ),
        }
        outcome
    }
}
