//! Changelogs of installed modules

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use bumpnotes_core::config::ChangelogConfig;
use bumpnotes_core::error::ChangelogError;
use bumpnotes_core::source::ChangelogSource;

/// Reads `<root>/<modules_dir>/<module>/<file>` from disk
#[derive(Debug, Clone)]
pub struct LocalChangelogSource {
    root: PathBuf,
    modules_dir: PathBuf,
    file: String,
}

impl LocalChangelogSource {
    /// Create a source rooted at a project directory
    pub fn new(root: impl Into<PathBuf>, config: &ChangelogConfig) -> Self {
        Self {
            root: root.into(),
            modules_dir: PathBuf::from(&config.modules_dir),
            file: config.file.clone(),
        }
    }

    /// Path of a module's changelog
    pub fn path_for(&self, module: &str) -> PathBuf {
        self.root
            .join(&self.modules_dir)
            .join(Path::new(module))
            .join(&self.file)
    }
}

#[async_trait]
impl ChangelogSource for LocalChangelogSource {
    async fn read_changelog(&self, module: &str) -> Result<String, ChangelogError> {
        let path = self.path_for(module);
        debug!(module, path = %path.display(), "reading module changelog");

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ChangelogError::Unavailable {
                module: module.to_string(),
                path,
                reason: e.to_string(),
            })
    }
}
