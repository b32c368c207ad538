//! Shared utilities for the wedding RSVP client.
//!
//! This crate provides small helpers used by the domain and client crates:
//! - Capacity range validation
//! - Message template filling and text normalization

pub mod text;
pub mod validation;
