// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the Appboy SDK.

use appboy_core::ModelError;
use thiserror::Error;

/// Appboy SDK errors.
///
/// Argument and invariant violations are returned from the call that caused
/// them. Everything from [`Transport`](AppboyError::Transport) down is produced
/// by classifying the outcome of a send.
#[derive(Debug, Error)]
pub enum AppboyError {
	/// Bad caller input, e.g. a blank credential.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	/// A profile or credential invariant was violated.
	#[error(transparent)]
	Model(#[from] ModelError),

	/// The batch would exceed the per-request profile cap.
	#[error("maximum of {limit} user profiles allowed per request (attempted {attempted})")]
	LimitExceeded { limit: usize, attempted: usize },

	/// The request never produced a usable response.
	#[error("transport error: {message}")]
	Transport { message: String },

	/// 400: the service rejected the payload.
	#[error("validation error: {message}")]
	Validation { message: String },

	/// 401: the company secret or app group was not accepted.
	#[error("authentication error: {message}")]
	Authentication { message: String },

	/// 404
	#[error("not found: {message}")]
	NotFound { message: String },

	/// 429: rate limited by the service.
	#[error("rate limited: {message} (retry after {retry_after_secs:?} seconds)")]
	RateLimited {
		message: String,
		retry_after_secs: Option<u64>,
	},

	/// Any status the client does not classify.
	#[error("unexpected status ({status}): {message}")]
	UnexpectedStatus { status: u16, message: String },

	/// Failed to encode the request payload.
	#[error("serialization error: {0}")]
	SerializationError(String),
}

impl AppboyError {
	/// Returns true for errors a caller may reasonably retry after a backoff.
	///
	/// The SDK itself never retries.
	pub fn is_retryable(&self) -> bool {
		matches!(
			self,
			AppboyError::Transport { .. } | AppboyError::RateLimited { .. }
		)
	}

	/// The HTTP status behind this error, when there was a response.
	pub fn status(&self) -> Option<u16> {
		match self {
			AppboyError::Validation { .. } => Some(400),
			AppboyError::Authentication { .. } => Some(401),
			AppboyError::NotFound { .. } => Some(404),
			AppboyError::RateLimited { .. } => Some(429),
			AppboyError::UnexpectedStatus { status, .. } => Some(*status),
			_ => None,
		}
	}
}

impl From<serde_json::Error> for AppboyError {
	fn from(err: serde_json::Error) -> Self {
		AppboyError::SerializationError(err.to_string())
	}
}

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, AppboyError>;
