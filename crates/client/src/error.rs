use thiserror::Error;

/// Errors raised while setting up the client, before any RSVP session runs.
///
/// Session failures are reported as [`domain::RsvpError`] instead.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
