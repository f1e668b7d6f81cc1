//! Issue tracker ticket extraction

use std::collections::HashSet;

use regex::Regex;
use tracing::{debug, instrument};

use bumpnotes_core::error::ChangelogError;

/// Default pattern for ticket ids such as `ABC-123`
pub const DEFAULT_TICKET_PATTERN: &str = r"[A-Z]+-[0-9]+";

/// Finds ticket ids in changelog text
#[derive(Debug, Clone)]
pub struct TicketExtractor {
    pattern: Regex,
}

impl TicketExtractor {
    /// Create an extractor using [`DEFAULT_TICKET_PATTERN`]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_TICKET_PATTERN).expect("Invalid regex"),
        }
    }

    /// Create an extractor with a custom ticket pattern
    pub fn with_pattern(pattern: &str) -> Result<Self, ChangelogError> {
        let pattern = Regex::new(pattern).map_err(|e| ChangelogError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { pattern })
    }

    /// Collect distinct ticket ids in order of first appearance.
    ///
    /// Only the first id on each line is taken.
    #[instrument(skip_all, fields(bytes = text.len()))]
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut tickets = Vec::new();

        for line in text.lines() {
            if let Some(m) = self.pattern.find(line) {
                if seen.insert(m.as_str()) {
                    tickets.push(m.as_str().to_string());
                }
            }
        }

        debug!(count = tickets.len(), "extracted tickets");
        tickets
    }
}

impl Default for TicketExtractor {
    fn default() -> Self {
        Self::new()
    }
}
