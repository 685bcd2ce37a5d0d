//! Unified error types for Recolor.

use thiserror::Error;

/// The main error type for Recolor operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A constraint record could not be decoded or violates the input model.
    #[error("Malformed record #{position} ({record}): {reason}")]
    MalformedRecord {
        /// 1-based position of the record in the input stream.
        position: u64,
        /// The offending record as text.
        record: String,
        /// What is wrong with it.
        reason: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid parameter passed to a library call.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Internal solver error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Builds a [`Error::MalformedRecord`].
    pub fn malformed(position: u64, record: impl ToString, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            position,
            record: record.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
