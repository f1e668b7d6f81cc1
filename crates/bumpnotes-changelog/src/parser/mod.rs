//! Changelog text parsing

mod range;
mod tickets;

pub use range::{extract_range, is_version_header};
pub use tickets::{TicketExtractor, DEFAULT_TICKET_PATTERN};
