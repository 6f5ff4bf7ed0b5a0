// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Accumulating user profiles into a single user-tracking request.

use std::sync::Arc;

use appboy_core::{Credentials, ImportResult, UserProfile};
use http::Method;
use tracing::debug;

use crate::error::{AppboyError, Result};
use crate::payload::TrackUsersRequest;
use crate::response::classify_response;
use crate::transport::Transport;

/// Maximum number of user profiles in one request.
pub const MAX_USER_PROFILES_PER_REQUEST: usize = 50;

/// A pending user-tracking request.
///
/// Created by [`AppboyClient::build_request`](crate::AppboyClient::build_request).
/// Profiles are moved into the batch when added and sent by [`send`](Self::send),
/// which consumes the builder, so a batch can be sent at most once.
///
/// A builder is meant for a single writer. Wrap it in a lock if it must be
/// filled from several tasks.
pub struct BatchBuilder {
	credentials: Credentials,
	url: String,
	transport: Arc<dyn Transport>,
	user_profiles: Vec<UserProfile>,
}

impl BatchBuilder {
	pub(crate) fn new(credentials: Credentials, url: String, transport: Arc<dyn Transport>) -> Self {
		Self {
			credentials,
			url,
			transport,
			user_profiles: Vec::new(),
		}
	}

	/// Adds one profile to the batch.
	///
	/// Fails with [`AppboyError::LimitExceeded`] if the batch is already full.
	pub fn add_user_profile(&mut self, profile: UserProfile) -> Result<&mut Self> {
		if self.user_profiles.len() >= MAX_USER_PROFILES_PER_REQUEST {
			return Err(AppboyError::LimitExceeded {
				limit: MAX_USER_PROFILES_PER_REQUEST,
				attempted: self.user_profiles.len() + 1,
			});
		}

		self.user_profiles.push(profile);
		Ok(self)
	}

	/// Adds a group of profiles to the batch.
	///
	/// The whole group is rejected with [`AppboyError::LimitExceeded`] if it
	/// would take the batch past [`MAX_USER_PROFILES_PER_REQUEST`]; in that case
	/// nothing is added.
	pub fn add_user_profiles<I>(&mut self, profiles: I) -> Result<&mut Self>
	where
		I: IntoIterator<Item = UserProfile>,
	{
		let incoming: Vec<UserProfile> = profiles.into_iter().collect();
		let attempted = self.user_profiles.len() + incoming.len();
		if attempted > MAX_USER_PROFILES_PER_REQUEST {
			return Err(AppboyError::LimitExceeded {
				limit: MAX_USER_PROFILES_PER_REQUEST,
				attempted,
			});
		}

		self.user_profiles.extend(incoming);
		Ok(self)
	}

	pub fn user_profiles(&self) -> &[UserProfile] {
		&self.user_profiles
	}

	pub fn len(&self) -> usize {
		self.user_profiles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.user_profiles.is_empty()
	}

	pub fn max_user_profiles(&self) -> usize {
		MAX_USER_PROFILES_PER_REQUEST
	}

	/// The endpoint this batch will be posted to.
	pub fn url(&self) -> &str {
		&self.url
	}

	/// Builds the JSON body that [`send`](Self::send) will post.
	///
	/// The returned value contains the raw company secret.
	pub fn payload(&self) -> Result<serde_json::Value> {
		let request = TrackUsersRequest::new(&self.credentials, &self.user_profiles);
		Ok(serde_json::to_value(&request)?)
	}

	/// Posts the batch and classifies the response.
	///
	/// Transport failures and error statuses are returned as `Err`; nothing is
	/// retried.
	pub async fn send(self) -> Result<ImportResult> {
		let body = self.payload()?;

		debug!(
			url = %self.url,
			count = self.user_profiles.len(),
			"Sending user tracking batch"
		);

		let outcome = self.transport.execute(Method::POST, &self.url, &body).await;
		classify_response(outcome)
	}

	/// Callback form of [`send`](Self::send).
	///
	/// Exactly one of `on_success` or `on_error` is invoked, exactly once.
	pub async fn send_with<S, E>(self, on_success: S, on_error: E)
	where
		S: FnOnce(ImportResult),
		E: FnOnce(AppboyError),
	{
		match self.send().await {
			Ok(result) => on_success(result),
			Err(e) => on_error(e),
		}
	}
}
