//! Page context: the URL the RSVP section is rendered on.
//!
//! The invitation code comes from the `code` query parameter, and the API
//! base depends on where the page is served from.

use std::net::IpAddr;

use reqwest::Url;

use crate::config::ApiConfig;
use crate::error::ClientError;

/// Query parameter carrying the invitation code.
pub const CODE_PARAM: &str = "code";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    url: Url,
}

impl PageContext {
    pub fn parse(page_url: &str) -> Result<Self, ClientError> {
        let url = Url::parse(page_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    fn code_param(&self) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == CODE_PARAM)
            .map(|(_, value)| value.into_owned())
    }

    /// Whether the RSVP section is shown at all.
    ///
    /// True whenever the `code` parameter is present, even if empty.
    pub fn show_section(&self) -> bool {
        self.code_param().is_some()
    }

    /// The invitation code, when present and non-empty.
    pub fn invite_code(&self) -> Option<String> {
        self.code_param().filter(|code| !code.is_empty())
    }

    /// Whether the page is served from a loopback host.
    pub fn is_loopback(&self) -> bool {
        match self.url.host_str() {
            Some("localhost") => true,
            Some(host) => host
                .trim_start_matches('[')
                .trim_end_matches(']')
                .parse::<IpAddr>()
                .map(|ip| ip.is_loopback())
                .unwrap_or(false),
            None => false,
        }
    }

    /// Resolves the API base URL for this page.
    ///
    /// Loopback pages use `local_base_url`. Otherwise `base_url` is resolved
    /// against the page, so a relative base stays on the page's origin and
    /// an empty base means the origin itself.
    pub fn api_base(&self, api: &ApiConfig) -> Result<Url, ClientError> {
        if self.is_loopback() && !api.local_base_url.is_empty() {
            return Url::parse(&api.local_base_url)
                .map_err(|e| ClientError::InvalidUrl(e.to_string()));
        }

        let base = if api.base_url.is_empty() {
            "/"
        } else {
            api.base_url.as_str()
        };
        self.url
            .join(base)
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))
    }
}
