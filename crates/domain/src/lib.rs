//! Domain layer for the wedding RSVP client.
//!
//! This crate contains:
//! - Domain models (Invitation, RsvpDraft, RsvpSubmission, SessionState)
//! - Page UI state (carousel, FAQ accordion)
//! - Error normalization and the RSVP API seam
//! - Domain error types

pub mod errors;
pub mod models;
pub mod services;

pub use errors::RsvpError;
