//! Manifest fetching from release tags

use tracing::debug;

use bumpnotes_core::config::ManifestConfig;
use bumpnotes_core::source::VersionFetcher;

use crate::repository::GitRepo;

/// Reads files at the tag belonging to a release version
pub struct TagFetcher {
    repo: GitRepo,
    manifest: ManifestConfig,
}

impl TagFetcher {
    /// Create a fetcher naming tags with the manifest's tag format
    pub fn new(repo: GitRepo, manifest: ManifestConfig) -> Self {
        Self { repo, manifest }
    }
}

impl VersionFetcher for TagFetcher {
    fn file_at_version(&self, version: &str, filename: &str) -> bumpnotes_core::Result<String> {
        let tag = self.manifest.tag_for(version);
        debug!(version, tag = %tag, filename, "fetching file for version");
        Ok(self.repo.read_file_at_tag(&tag, filename)?)
    }
}
