//! Reading files as they were at a tag

use std::path::Path;

use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use bumpnotes_core::error::GitError;

impl GitRepo {
    /// Resolve a tag (lightweight or annotated) to the tree it points at
    pub fn tag_tree(&self, name: &str) -> Result<git2::Tree<'_>> {
        let tag_ref = format!("refs/tags/{}", name);

        let reference = match self.repo.find_reference(&tag_ref) {
            Ok(reference) => reference,
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                return Err(GitError::TagNotFound(name.to_string()));
            }
            Err(e) => return Err(GitError::Git2(e)),
        };

        Ok(reference.peel_to_tree()?)
    }

    /// Read a file relative to the repository root as committed at a tag
    #[instrument(skip(self))]
    pub fn read_file_at_tag(&self, tag: &str, path: &str) -> Result<String> {
        let tree = self.tag_tree(tag)?;
        let relative = path.trim_start_matches("./");

        let not_found = || GitError::FileNotFound {
            rev: tag.to_string(),
            path: path.to_string(),
        };

        let entry = match tree.get_path(Path::new(relative)) {
            Ok(entry) => entry,
            Err(e) if e.code() == git2::ErrorCode::NotFound => return Err(not_found()),
            Err(e) => return Err(GitError::Git2(e)),
        };

        let object = entry.to_object(&self.repo)?;
        let blob = object.as_blob().ok_or_else(not_found)?;

        let content = std::str::from_utf8(blob.content()).map_err(|_| GitError::NotUtf8 {
            rev: tag.to_string(),
            path: path.to_string(),
        })?;

        debug!(tag, path, bytes = content.len(), "read file at tag");
        Ok(content.to_string())
    }
}
