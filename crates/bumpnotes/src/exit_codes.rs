//! Exit codes for the CLI

use bumpnotes_core::BumpnotesError;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Git error
pub const GIT_ERROR: i32 = 3;

/// Manifest missing, unparseable, or unchanged
pub const SOURCE_ERROR: i32 = 4;

/// Pick the exit code for a failed run
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<BumpnotesError>() {
        Some(BumpnotesError::Config(_)) => CONFIG_ERROR,
        Some(BumpnotesError::Git(_)) => GIT_ERROR,
        Some(BumpnotesError::Source(_)) => SOURCE_ERROR,
        _ => ERROR,
    }
}
