//! Dependency manifests and version diffs

mod diff;
mod manifest;

pub use diff::*;
pub use manifest::*;
