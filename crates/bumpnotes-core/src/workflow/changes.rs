//! Resolve which dependencies changed between two releases

use tracing::{debug, info, instrument};

use crate::config::ManifestConfig;
use crate::deps::{diff_dependencies, parse_dependencies};
use crate::error::{Result, SourceError};
use crate::source::VersionFetcher;
use crate::types::{ChangeRecord, DependencyMap};

/// Fetch and parse the dependency map of one release
pub fn dependencies_at(
    fetcher: &dyn VersionFetcher,
    manifest: &ManifestConfig,
    version: &str,
) -> Result<DependencyMap> {
    let content = fetcher
        .file_at_version(version, &manifest.file)
        .map_err(|e| SourceError::unavailable(version, &manifest.file, e))?;

    let deps = parse_dependencies(&content, &manifest.field)
        .map_err(|e| SourceError::unavailable(version, &manifest.file, e))?;

    debug!(version, count = deps.len(), "loaded dependencies");
    Ok(deps)
}

/// Compare the dependency manifests of two releases.
///
/// Both manifests are loaded before diffing; if either fails the whole
/// operation fails with [`SourceError::Unavailable`]. A release pair with
/// no version changes fails with [`SourceError::NoChanges`].
#[instrument(skip(fetcher, manifest), fields(file = %manifest.file))]
pub fn resolve_changes(
    fetcher: &dyn VersionFetcher,
    manifest: &ManifestConfig,
    previous: &str,
    current: &str,
) -> Result<Vec<ChangeRecord>> {
    let prev_deps = dependencies_at(fetcher, manifest, previous)?;
    let curr_deps = dependencies_at(fetcher, manifest, current)?;

    let records = diff_dependencies(&prev_deps, &curr_deps);
    if records.is_empty() {
        return Err(SourceError::no_changes(previous, current).into());
    }

    info!(previous, current, changed = records.len(), "resolved dependency changes");
    Ok(records)
}
