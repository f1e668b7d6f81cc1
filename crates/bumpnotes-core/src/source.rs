//! Seams to the outside world: version control and installed modules

use async_trait::async_trait;

use crate::error::{ChangelogError, Result};

/// Reads a file as it was committed at a release version
pub trait VersionFetcher {
    /// Return the text of `filename` at `version`
    fn file_at_version(&self, version: &str, filename: &str) -> Result<String>;
}

/// Reads the changelog shipped with an installed module
#[async_trait]
pub trait ChangelogSource: Send + Sync {
    /// Return the full changelog text of `module`
    async fn read_changelog(&self, module: &str) -> std::result::Result<String, ChangelogError>;
}
