// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::Serialize;

use crate::error::{require_non_blank, ModelError, Result};

/// A device push-notification token registered for one mobile app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushTokenRegistration {
	app_id: String,
	token: String,
}

impl PushTokenRegistration {
	/// Creates a registration. The app ID must be non-blank and the token non-empty.
	pub fn new(app_id: impl Into<String>, token: impl Into<String>) -> Result<Self> {
		let app_id = app_id.into();
		let token = token.into();
		require_non_blank("app_id", &app_id)?;
		if token.is_empty() {
			return Err(ModelError::InvalidArgument(
				"push token must not be empty".to_string(),
			));
		}

		Ok(Self { app_id, token })
	}

	pub fn app_id(&self) -> &str {
		&self.app_id
	}

	pub fn token(&self) -> &str {
		&self.token
	}
}
