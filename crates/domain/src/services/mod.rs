//! Domain services for the RSVP client.
//!
//! Services contain the logic that sits between the models and the remote API.

pub mod error_message;
pub mod rsvp_api;

pub use error_message::{normalize_error_body, normalize_failure};
pub use rsvp_api::{ApiFailure, MockRsvpApi, RsvpApi};
