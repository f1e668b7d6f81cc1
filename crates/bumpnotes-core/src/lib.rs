//! bumpnotes core - shared building blocks for dependency release notes
//!
//! This crate provides the error types, configuration, dependency diffing and
//! the source traits the other bumpnotes crates plug into.

pub mod config;
pub mod deps;
pub mod error;
pub mod source;
pub mod types;
pub mod workflow;

pub use deps::{compare_dependencies, diff_dependencies, parse_dependencies, DependencyChange};
pub use error::{BumpnotesError, ChangelogError, ConfigError, GitError, Result, SourceError};
pub use source::{ChangelogSource, VersionFetcher};
pub use types::{ChangeRecord, DependencyMap};
pub use workflow::resolve_changes;
