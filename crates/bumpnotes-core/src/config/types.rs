//! Configuration types

use serde::{Deserialize, Serialize};

/// Main configuration for bumpnotes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project name, shown in the notes title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Dependency manifest configuration
    pub manifest: ManifestConfig,

    /// Module changelog configuration
    pub changelog: ChangelogConfig,

    /// Ticket extraction and linking configuration
    pub tickets: TicketsConfig,
}

/// Where dependency versions are read from at each release
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Manifest file, relative to the repository root
    pub file: String,

    /// Top-level object holding the dependency versions
    pub field: String,

    /// Tag format (e.g., "v{version}")
    pub tag_format: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            file: "package.json".to_string(),
            field: "dependencies".to_string(),
            tag_format: "v{version}".to_string(),
        }
    }
}

impl ManifestConfig {
    /// Render the tag name for a version
    pub fn tag_for(&self, version: &str) -> String {
        self.tag_format.replace("{version}", version)
    }
}

/// Where installed dependency changelogs live
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Directory containing one sub-directory per installed module
    pub modules_dir: String,

    /// Changelog file name inside each module directory
    pub file: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            modules_dir: "node_modules".to_string(),
            file: "changelog.md".to_string(),
        }
    }
}

/// Issue tracker settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketsConfig {
    /// Prefix joined with each ticket id to form a link
    pub base_url: String,

    /// Pattern matching a ticket id
    pub pattern: String,
}

impl Default for TicketsConfig {
    fn default() -> Self {
        Self {
            base_url: "http://dashboard.news.com.au/browse/".to_string(),
            pattern: "[A-Z]+-[0-9]+".to_string(),
        }
    }
}
