// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Classification of user-tracking responses.
//!
//! | status | result |
//! |--------|--------|
//! | no response | [`AppboyError::Transport`] |
//! | 200, 201 | [`ImportResult`] |
//! | 400 | [`AppboyError::Validation`] |
//! | 401 | [`AppboyError::Authentication`] |
//! | 404 | [`AppboyError::NotFound`] |
//! | 429 | [`AppboyError::RateLimited`] |
//! | anything else | [`AppboyError::UnexpectedStatus`] |
//!
//! A body that cannot be parsed for a status that expects one is reported as
//! [`AppboyError::Transport`].

use appboy_core::ImportResult;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{AppboyError, Result};
use crate::transport::{HttpResponse, TransportFailure};

/// Error body shape returned alongside 4xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
	message: String,
}

/// Turns a transport outcome into the caller-facing result.
///
/// Pure apart from logging: it returns exactly one `Ok` or `Err` for every input.
pub fn classify_response(
	outcome: std::result::Result<HttpResponse, TransportFailure>,
) -> Result<ImportResult> {
	let response = match outcome {
		Ok(response) => response,
		Err(failure) => {
			warn!(error = %failure, "User tracking request failed");
			return Err(AppboyError::Transport {
				message: failure.message,
			});
		}
	};

	let status = response.status;
	let result = match status {
		200 | 201 => serde_json::from_str::<ImportResult>(&response.body)
			.map_err(|e| unparsable_body(status, &e)),
		400 => error_message(&response).and_then(|message| Err(AppboyError::Validation { message })),
		401 => error_message(&response)
			.and_then(|message| Err(AppboyError::Authentication { message })),
		404 => error_message(&response).and_then(|message| Err(AppboyError::NotFound { message })),
		429 => error_message(&response).and_then(|message| {
			Err(AppboyError::RateLimited {
				message,
				retry_after_secs: response.retry_after_secs,
			})
		}),
		_ => Err(AppboyError::UnexpectedStatus {
			status,
			message: response.body.clone(),
		}),
	};

	match &result {
		Ok(import) if import.has_errors() => warn!(
			status,
			num_attributes_processed = import.num_attributes_processed,
			non_fatal_errors = import.errors.len(),
			"User tracking request accepted with record errors"
		),
		Ok(import) => debug!(
			status,
			num_attributes_processed = import.num_attributes_processed,
			"User tracking request accepted"
		),
		Err(e) => warn!(status, error = %e, "User tracking request rejected"),
	}

	result
}

fn error_message(response: &HttpResponse) -> Result<String> {
	serde_json::from_str::<ErrorBody>(&response.body)
		.map(|body| body.message)
		.map_err(|e| unparsable_body(response.status, &e))
}

fn unparsable_body(status: u16, err: &serde_json::Error) -> AppboyError {
	AppboyError::Transport {
		message: format!("unparsable response body for status {status}: {err}"),
	}
}
