// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `RepoLikesError` and adds hints for the
//! terminal. Screen operations never get here (they raise alerts instead);
//! this covers startup and usage failures.

use anyhow::Error;
use repolikes_core::error::RepoLikesError;

/// Formats an error for CLI display with helpful hints.
///
/// If the error is not a `RepoLikesError`, returns the original error message.
pub fn format_error(error: &Error) -> String {
    if let Some(err) = error.downcast_ref::<RepoLikesError>() {
        match err {
            RepoLikesError::Config { message: _ } => {
                format!(
                    "{err}\n\nTip: Check your config file at {}",
                    repolikes_core::config::config_file_path().display()
                )
            }
            RepoLikesError::Network(_) => {
                format!(
                    "{err}\n\nTip: Check that the API is running and reachable, or pass --base-url."
                )
            }
            RepoLikesError::HttpStatus { .. } | RepoLikesError::Decode { .. } => {
                format!("{err}\n\nTip: Check that --base-url points at the repositories API.")
            }
        }
    } else {
        // Not a RepoLikesError, return the full context chain
        format!("{error:#}")
    }
}
