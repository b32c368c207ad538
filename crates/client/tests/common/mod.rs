//! Common test utilities for integration tests.
//!
//! Provides invitation fixtures and a local stub of the RSVP API served with
//! axum on an ephemeral port.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use domain::models::InviteResponse;
use reqwest::Url;
use rsvp_client::config::{ApiConfig, SessionConfig};
use serde_json::Value;

pub const GENERIC: &str = "Something went wrong. Please try again.";
pub const MISSING_KIDS: &str = "Please select the number of kids.";

pub fn invite(name: &str, max_adults: i32, max_kids: i32, has_responded: bool) -> InviteResponse {
    InviteResponse {
        name: name.to_string(),
        max_adults,
        max_kids,
        has_responded,
    }
}

pub fn session_config() -> SessionConfig {
    SessionConfig::with_api_base("http://127.0.0.1/api/v1")
}

pub fn api_config(timeout_ms: u64) -> ApiConfig {
    ApiConfig {
        timeout_ms,
        ..ApiConfig::default()
    }
}

/// Canned response returned by the stub.
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl StubResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.to_string(),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self::text(status, "")
    }
}

impl IntoResponse for StubResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, self.content_type)], self.body).into_response()
    }
}

#[derive(Clone)]
struct StubState {
    invite: StubResponse,
    rsvp: StubResponse,
    delay: Duration,
    invite_codes: Arc<Mutex<Vec<String>>>,
    submissions: Arc<Mutex<Vec<(String, Value)>>>,
}

/// A running stub RSVP API.
pub struct StubApi {
    pub base: Url,
    invite_codes: Arc<Mutex<Vec<String>>>,
    submissions: Arc<Mutex<Vec<(String, Value)>>>,
}

impl StubApi {
    pub async fn start(invite: StubResponse, rsvp: StubResponse) -> Self {
        Self::start_with_delay(invite, rsvp, Duration::ZERO).await
    }

    /// Every response is held for `delay` before being sent.
    pub async fn start_with_delay(
        invite: StubResponse,
        rsvp: StubResponse,
        delay: Duration,
    ) -> Self {
        let invite_codes = Arc::new(Mutex::new(Vec::new()));
        let submissions = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            invite,
            rsvp,
            delay,
            invite_codes: invite_codes.clone(),
            submissions: submissions.clone(),
        };

        let app = Router::new()
            .route("/api/v1/invite/:code", get(get_invite))
            .route("/api/v1/invite/:code/rsvp", post(post_rsvp))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub API");
        let addr = listener.local_addr().expect("Stub API has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub API crashed");
        });

        let base = Url::parse(&format!("http://{}/api/v1", addr)).expect("Invalid stub base URL");
        Self {
            base,
            invite_codes,
            submissions,
        }
    }

    pub fn invite_requests(&self) -> Vec<String> {
        self.invite_codes.lock().unwrap().clone()
    }

    pub fn submissions(&self) -> Vec<(String, Value)> {
        self.submissions.lock().unwrap().clone()
    }
}

async fn get_invite(State(state): State<StubState>, Path(code): Path<String>) -> StubResponse {
    state.invite_codes.lock().unwrap().push(code);
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    state.invite
}

async fn post_rsvp(
    State(state): State<StubState>,
    Path(code): Path<String>,
    Json(body): Json<Value>,
) -> StubResponse {
    state.submissions.lock().unwrap().push((code, body));
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    state.rsvp
}
