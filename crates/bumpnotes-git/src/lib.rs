//! bumpnotes git - Git access for release manifests
//!
//! This crate opens repositories and reads files as they were committed at
//! release tags.

mod fetcher;
mod repository;
mod tags;
#[cfg(test)]
mod test_support;

pub use fetcher::TagFetcher;
pub use repository::{GitRepo, Result};
