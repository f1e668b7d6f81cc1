//! bumpnotes changelog - ticket notes from dependency changelogs
//!
//! This crate slices module changelogs down to a version range, pulls the
//! issue tracker tickets out of the slice and links them.

pub mod formatter;
pub mod generator;
pub mod parser;
pub mod source;
pub mod types;

pub use formatter::TicketLinker;
pub use generator::NotesGenerator;
pub use parser::{extract_range, is_version_header, TicketExtractor};
pub use source::LocalChangelogSource;
pub use types::{ModuleFailure, ModuleNotes, NotesReport};
