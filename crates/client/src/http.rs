//! HTTP implementation of the RSVP API.
//!
//! Talks to `GET {base}/invite/{code}` and `POST {base}/invite/{code}/rsvp`
//! with a bounded per-request timeout. Failures are handed back raw; turning
//! them into guest-facing text is the caller's job.

use std::time::Duration;

use domain::models::{InviteResponse, RsvpSubmission};
use domain::services::{ApiFailure, RsvpApi};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response, Url};
use tracing::{debug, instrument, warn};

use crate::config::ApiConfig;
use crate::error::ClientError;

/// RSVP API over HTTP.
pub struct HttpRsvpApi {
    client: Client,
    base: Url,
}

impl HttpRsvpApi {
    /// Create a client for the API rooted at `base`.
    pub fn new(base: Url, config: &ApiConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `{base}/invite/{code}[/rsvp]`, with the code percent-encoded as a
    /// single path segment.
    fn invite_url(&self, code: &str, rsvp: bool) -> Result<Url, ApiFailure> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiFailure::Transport(format!("Unusable API base: {}", self.base)))?;
            segments.pop_if_empty().push("invite").push(code);
            if rsvp {
                segments.push("rsvp");
            }
        }
        Ok(url)
    }

    /// Splits a response into its body or an [`ApiFailure::Status`].
    async fn read_body(response: Response) -> Result<String, ApiFailure> {
        let status = response.status();
        // An unreadable body is treated as empty.
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            warn!(status = status.as_u16(), "RSVP API returned non-2xx status");
            return Err(ApiFailure::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

fn transport_failure(err: reqwest::Error) -> ApiFailure {
    if err.is_timeout() {
        warn!("RSVP API request timed out");
        ApiFailure::Timeout
    } else {
        warn!(error = %err, "RSVP API request failed");
        ApiFailure::Transport(err.to_string())
    }
}

#[async_trait::async_trait]
impl RsvpApi for HttpRsvpApi {
    #[instrument(skip(self), fields(base = %self.base))]
    async fn fetch_invite(&self, code: &str) -> Result<InviteResponse, ApiFailure> {
        let url = self.invite_url(code, false)?;
        debug!(url = %url, "Fetching invite");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_failure)?;

        let body = Self::read_body(response).await?;
        serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "Invite response is not valid JSON");
            ApiFailure::Decode(e.to_string())
        })
    }

    #[instrument(skip(self, submission), fields(base = %self.base))]
    async fn submit_rsvp(&self, code: &str, submission: &RsvpSubmission) -> Result<(), ApiFailure> {
        let url = self.invite_url(code, true)?;
        debug!(url = %url, adult_count = submission.adult_count, "Submitting RSVP");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(submission)
            .send()
            .await
            .map_err(transport_failure)?;

        // Success bodies are ignored.
        Self::read_body(response).await.map(|_| ())
    }
}
