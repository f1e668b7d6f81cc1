//! Output formatting

mod links;

pub use links::TicketLinker;
