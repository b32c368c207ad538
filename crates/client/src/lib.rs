//! Client-side RSVP workflow for the wedding site.
//!
//! [`page::PageContext`] reads the invitation code and API base from the page
//! URL, [`store::InviteStore`] resolves the code, and
//! [`session::RsvpSession`] drives the form from loading to confirmation.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod page;
pub mod session;
pub mod store;
