// SPDX-License-Identifier: Apache-2.0

//! Error types for repolikes.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur while talking to the repositories API.
#[derive(Error, Debug)]
pub enum RepoLikesError {
    /// No response was received (connection refused, DNS failure, reset).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Request URL.
        url: String,
    },

    /// The response body did not match the expected schema.
    #[error("Unexpected response body from {url}")]
    Decode {
        /// Request URL.
        url: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

impl RepoLikesError {
    /// Returns true if a response was received from the server.
    #[must_use]
    pub fn has_response(&self) -> bool {
        matches!(self, Self::HttpStatus { .. } | Self::Decode { .. })
    }
}

impl From<config::ConfigError> for RepoLikesError {
    fn from(err: config::ConfigError) -> Self {
        RepoLikesError::Config {
            message: err.to_string(),
        }
    }
}
