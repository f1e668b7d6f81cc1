//! Release note types

use serde::{Deserialize, Serialize};

use bumpnotes_core::ChangeRecord;

/// Tickets found for one bumped module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleNotes {
    /// Module name
    pub module: String,
    /// Version in the previous release
    pub previous_version: String,
    /// Version in the current release
    pub current_version: String,
    /// Distinct ticket ids, in changelog order
    pub tickets: Vec<String>,
    /// Links for `tickets`, same order
    pub links: Vec<String>,
}

impl ModuleNotes {
    /// Create notes for a change record
    pub fn new(record: &ChangeRecord, tickets: Vec<String>, links: Vec<String>) -> Self {
        Self {
            module: record.module_name.clone(),
            previous_version: record.prev_version.clone(),
            current_version: record.current_version.clone(),
            tickets,
            links,
        }
    }

    /// Links joined one per line
    pub fn rendered_links(&self) -> String {
        self.links.join("\n")
    }
}

/// A module that produced no notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleFailure {
    /// Module name
    pub module: String,
    /// Human-readable reason
    pub reason: String,
}

/// Outcome of a notes run, in completion order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotesReport {
    /// Release the notes start from
    pub previous_release: String,
    /// Release the notes are for
    pub current_release: String,
    /// Modules with notes
    pub modules: Vec<ModuleNotes>,
    /// Modules that were skipped
    pub failures: Vec<ModuleFailure>,
}

impl NotesReport {
    /// Create an empty report for a release pair
    pub fn new(previous_release: impl Into<String>, current_release: impl Into<String>) -> Self {
        Self {
            previous_release: previous_release.into(),
            current_release: current_release.into(),
            ..Default::default()
        }
    }

    /// Find the notes for a module
    pub fn module(&self, name: &str) -> Option<&ModuleNotes> {
        self.modules.iter().find(|m| m.module == name)
    }

    /// Total number of links across modules
    pub fn link_count(&self) -> usize {
        self.modules.iter().map(|m| m.links.len()).sum()
    }
}
