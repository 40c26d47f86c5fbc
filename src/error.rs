//! Error types for flash message operations.

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by flash message operations
#[derive(Debug, Error)]
pub enum Error {
	/// A required argument was missing or degenerate at construction time
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	/// The underlying session store failed
	#[error("session error: {0}")]
	Session(String),

	/// The stored message table could not be serialized or deserialized
	#[error("serialization error: {0}")]
	Serialization(String),
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::Serialization(err.to_string())
	}
}
