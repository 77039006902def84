//! Error types for oracle calls and feeling submission.

use thiserror::Error;

/// Everything that can go wrong between a submitted feeling and a rendered mood.
///
/// None of these ever reach the canvas: the session swaps in fallback values
/// and logs the cause.
#[derive(Debug, Error)]
pub enum MoodError {
	/// The oracle endpoint could not be reached or answered with a non-success status.
	#[error("oracle transport failed: {0}")]
	Transport(String),

	/// The oracle answered, but the payload was missing, not JSON, or violated the schema.
	#[error("malformed oracle response: {0}")]
	MalformedResponse(String),

	/// The feeling text was empty or whitespace only; no request is made.
	#[error("empty feeling ignored")]
	InputIgnored,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MoodError>;

impl From<reqwest::Error> for MoodError {
	fn from(err: reqwest::Error) -> Self {
		if err.is_decode() {
			MoodError::MalformedResponse(err.to_string())
		} else {
			MoodError::Transport(err.to_string())
		}
	}
}

impl From<serde_json::Error> for MoodError {
	fn from(err: serde_json::Error) -> Self {
		MoodError::MalformedResponse(err.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn json_errors_are_malformed_responses() {
		let err: MoodError = serde_json::from_str::<Vec<String>>("{not json")
			.unwrap_err()
			.into();
		assert!(matches!(err, MoodError::MalformedResponse(_)));
	}

	#[test]
	fn display_names_the_failure() {
		let err = MoodError::Transport("status 503".into());
		assert_eq!(err.to_string(), "oracle transport failed: status 503");
	}
}
