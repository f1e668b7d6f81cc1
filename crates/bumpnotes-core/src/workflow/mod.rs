//! Workflow steps for bumpnotes

mod changes;

pub use changes::*;
