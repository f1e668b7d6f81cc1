//! CLI commands

mod notes;

pub use notes::NotesCommand;
