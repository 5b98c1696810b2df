//! Digest error types

use std::num::ParseIntError;

use thiserror::Error;

/// Errors produced while turning a chat command into a rendered digest
#[derive(Error, Debug)]
pub enum DigestError {
    /// The raw command does not match any accepted shape
    #[error("Invalid command: {0:?}")]
    InvalidCommand(String),

    /// The limit token is not a positive base-10 integer
    #[error("Invalid limit {value:?}: {source}")]
    InvalidLimit {
        /// Token as supplied by the user
        value: String,
        /// Underlying integer parse failure
        #[source]
        source: ParseIntError,
    },

    /// The article source failed to fetch
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// The article source received a payload it could not decode
    #[error("Decode failed: {0}")]
    Decode(String),
}

/// Result type alias using DigestError
pub type Result<T> = std::result::Result<T, DigestError>;
