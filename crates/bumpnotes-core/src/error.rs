//! Error types for bumpnotes

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using BumpnotesError
pub type Result<T> = std::result::Result<T, BumpnotesError>;

/// Main error type for bumpnotes operations
#[derive(Debug, Error)]
pub enum BumpnotesError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Dependency manifest errors
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found
    #[error("Git repository not found at {0}")]
    RepositoryNotFound(PathBuf),

    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// Tag does not exist
    #[error("Tag not found: {0}")]
    TagNotFound(String),

    /// File missing from the tagged tree
    #[error("File '{path}' not found at {rev}")]
    FileNotFound { rev: String, path: String },

    /// File content is not valid UTF-8
    #[error("File '{path}' at {rev} is not valid UTF-8")]
    NotUtf8 { rev: String, path: String },

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Dependency manifest errors. Both variants abort the run.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Manifest could not be fetched or parsed for a version
    #[error("Could not read {file} at version {version}: {reason}. Please check that the versions are correct.")]
    Unavailable {
        version: String,
        file: String,
        reason: String,
    },

    /// No dependency changed version between the two releases
    #[error("No dependency versions changed between {previous} and {current}. Please check that the versions are correct.")]
    NoChanges { previous: String, current: String },
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// A module's changelog could not be read
    #[error("Changelog for {module} unavailable at {path}: {reason}")]
    Unavailable {
        module: String,
        path: PathBuf,
        reason: String,
    },

    /// Ticket pattern failed to compile
    #[error("Invalid ticket pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl SourceError {
    /// Shorthand for an unavailable manifest
    pub fn unavailable(
        version: impl Into<String>,
        file: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::Unavailable {
            version: version.into(),
            file: file.into(),
            reason: reason.to_string(),
        }
    }

    /// Shorthand for an unchanged release pair
    pub fn no_changes(previous: impl Into<String>, current: impl Into<String>) -> Self {
        Self::NoChanges {
            previous: previous.into(),
            current: current.into(),
        }
    }
}
