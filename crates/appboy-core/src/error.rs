// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for credential and user profile construction.

use thiserror::Error;

/// Errors raised synchronously while building credentials or a [`UserProfile`](crate::UserProfile).
///
/// Every variant corresponds to a caller mistake. None of them are retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	#[error("custom attribute '{name}' value is {length} characters (must be shorter than {max})")]
	ValueTooLong {
		name: String,
		length: usize,
		max: usize,
	},

	#[error("custom attribute '{0}' is already set on this profile")]
	DuplicateKey(String),

	#[error(
		"app ID {0} already has a push notification token registered; only one token may be registered per user per app ID"
	)]
	DuplicateRegistration(String),
}

/// A specialized `Result` type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Returns `InvalidArgument` when `value` is empty or whitespace-only.
pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<()> {
	if value.trim().is_empty() {
		return Err(ModelError::InvalidArgument(format!(
			"{field} must not be empty or whitespace"
		)));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn require_non_blank_rejects_whitespace() {
		assert!(matches!(
			require_non_blank("external_id", "  \t"),
			Err(ModelError::InvalidArgument(_))
		));
		assert!(require_non_blank("external_id", "user-1").is_ok());
	}

	#[test]
	fn value_too_long_message_names_the_attribute() {
		let err = ModelError::ValueTooLong {
			name: "nickname".to_string(),
			length: 300,
			max: 255,
		};
		let msg = err.to_string();
		assert!(msg.contains("nickname"));
		assert!(msg.contains("300"));
	}
}
