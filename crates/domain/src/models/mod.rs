//! Domain models for the RSVP client.

pub mod carousel;
pub mod faq;
pub mod invitation;
pub mod rsvp;
pub mod session;

pub use carousel::CarouselState;
pub use faq::FaqAccordion;
pub use invitation::{Capacity, Invitation, InviteResponse};
pub use rsvp::{parse_kid_count, validate_draft, RsvpDraft, RsvpSubmission};
pub use session::SessionState;
