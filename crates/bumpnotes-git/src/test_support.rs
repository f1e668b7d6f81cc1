//! Repository fixtures for tests

use std::path::Path;

use git2::{Oid, Repository, Signature};
use tempfile::TempDir;

/// Create an empty repository in a temp directory
pub(crate) fn init_repo() -> (TempDir, Repository) {
    let temp = TempDir::new().unwrap();
    let repo = Repository::init(temp.path()).unwrap();
    (temp, repo)
}

/// Write a file and commit it on HEAD, returning the commit id
pub(crate) fn commit_file(repo: &Repository, root: &Path, path: &str, content: &str) -> Oid {
    let full = root.join(path);
    if let Some(parent) = full.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&full, content).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(path)).unwrap();
    index.write().unwrap();

    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = Signature::now("Test", "test@example.com").unwrap();

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

    repo.commit(
        Some("HEAD"),
        &sig,
        &sig,
        &format!("update {}", path),
        &tree,
        &parents,
    )
    .unwrap()
}
