//! Core types for bumpnotes

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Module name to version string, as declared in a dependency manifest.
///
/// Keys are kept sorted so diffs come out in a stable order.
pub type DependencyMap = BTreeMap<String, String>;

/// One module whose version changed between two releases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    /// Dependency name
    pub module_name: String,
    /// Version declared by the previous release
    pub prev_version: String,
    /// Version declared by the current release
    pub current_version: String,
}

impl ChangeRecord {
    /// Create a new change record
    pub fn new(
        module_name: impl Into<String>,
        prev_version: impl Into<String>,
        current_version: impl Into<String>,
    ) -> Self {
        Self {
            module_name: module_name.into(),
            prev_version: prev_version.into(),
            current_version: current_version.into(),
        }
    }
}

impl std::fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} -> {}",
            self.module_name, self.prev_version, self.current_version
        )
    }
}
