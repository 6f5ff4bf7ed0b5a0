// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client for producing user-tracking requests.

use std::sync::Arc;
use std::time::Duration;

use appboy_core::{Credentials, ModelError};
use tracing::info;

use crate::batch::BatchBuilder;
use crate::error::{AppboyError, Result};
use crate::transport::{default_user_agent, ReqwestTransport, Transport};

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://api.appboy.com";
/// Path of the batch user-tracking endpoint, relative to the base URL.
pub const USER_TRACKING_PATH: &str = "users/track";

/// Configuration for the Appboy client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
	/// Base URL of the API, without a trailing slash.
	pub base_url: String,
	/// Timeout for HTTP requests made by the default transport.
	pub request_timeout: Duration,
	/// User-Agent sent by the default transport.
	pub user_agent: String,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			request_timeout: Duration::from_secs(30),
			user_agent: default_user_agent(),
		}
	}
}

/// Builder for constructing an AppboyClient.
pub struct AppboyClientBuilder {
	company_secret: Option<String>,
	app_group_id: Option<String>,
	config: ClientConfig,
	transport: Option<Arc<dyn Transport>>,
}

impl AppboyClientBuilder {
	/// Creates a new builder with default settings.
	pub fn new() -> Self {
		Self {
			company_secret: None,
			app_group_id: None,
			config: ClientConfig::default(),
			transport: None,
		}
	}

	/// Sets the company secret used to authenticate requests.
	pub fn company_secret(mut self, secret: impl Into<String>) -> Self {
		self.company_secret = Some(secret.into());
		self
	}

	/// Sets the app group the tracked users belong to.
	pub fn app_group_id(mut self, id: impl Into<String>) -> Self {
		self.app_group_id = Some(id.into());
		self
	}

	/// Sets the base URL of the API.
	///
	/// Example: `https://rest.iad-01.braze.com`
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.config.base_url = url.into();
		self
	}

	/// Sets the HTTP request timeout of the default transport.
	pub fn request_timeout(mut self, timeout: Duration) -> Self {
		self.config.request_timeout = timeout;
		self
	}

	/// Sets the User-Agent of the default transport.
	pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.config.user_agent = user_agent.into();
		self
	}

	/// Uses `transport` instead of building a [`ReqwestTransport`].
	///
	/// Timeout and User-Agent settings are then the transport's concern.
	pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
		self.transport = Some(transport);
		self
	}

	/// Builds the AppboyClient.
	///
	/// Fails with [`AppboyError::InvalidArgument`] if a credential is missing,
	/// empty or whitespace-only, or if the base URL is blank.
	pub fn build(self) -> Result<AppboyClient> {
		let company_secret = self
			.company_secret
			.ok_or_else(|| AppboyError::InvalidArgument("company_secret is required".to_string()))?;
		let app_group_id = self
			.app_group_id
			.ok_or_else(|| AppboyError::InvalidArgument("app_group_id is required".to_string()))?;

		let credentials = Credentials::new(company_secret, app_group_id).map_err(|e| match e {
			ModelError::InvalidArgument(msg) => AppboyError::InvalidArgument(msg),
			other => AppboyError::Model(other),
		})?;

		// Normalize base URL
		let base_url = self.config.base_url.trim().trim_end_matches('/').to_string();
		if base_url.is_empty() {
			return Err(AppboyError::InvalidArgument(
				"base_url must not be empty".to_string(),
			));
		}
		let tracking_url = format!("{base_url}/{USER_TRACKING_PATH}");

		let transport = match self.transport {
			Some(transport) => transport,
			None => Arc::new(
				ReqwestTransport::new(self.config.request_timeout, &self.config.user_agent)
					.map_err(|e| AppboyError::Transport { message: e.message })?,
			),
		};

		info!(
			base_url = %base_url,
			app_group_id = %credentials.app_group_id(),
			"Appboy client initialized"
		);

		Ok(AppboyClient {
			credentials,
			config: ClientConfig {
				base_url,
				..self.config
			},
			tracking_url,
			transport,
		})
	}
}

impl Default for AppboyClientBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Holds account credentials and hands out fresh [`BatchBuilder`]s.
///
/// The client keeps no per-request state; clone it freely.
///
/// # Example
///
/// ```ignore
/// use appboy::{AppboyClient, UserProfile};
///
/// let client = AppboyClient::new("company-secret", "app-group-id")?;
///
/// let mut user = UserProfile::new("user-1")?;
/// user.set_custom_string_attribute("plan", "pro")?;
///
/// let mut request = client.build_request();
/// request.add_user_profile(user)?;
/// let result = request.send().await?;
/// println!("processed {}", result.num_attributes_processed);
/// ```
#[derive(Clone)]
pub struct AppboyClient {
	credentials: Credentials,
	config: ClientConfig,
	tracking_url: String,
	transport: Arc<dyn Transport>,
}

impl AppboyClient {
	/// Creates a client with default configuration.
	pub fn new(company_secret: impl Into<String>, app_group_id: impl Into<String>) -> Result<Self> {
		Self::builder()
			.company_secret(company_secret)
			.app_group_id(app_group_id)
			.build()
	}

	/// Creates a new builder for constructing an AppboyClient.
	pub fn builder() -> AppboyClientBuilder {
		AppboyClientBuilder::new()
	}

	/// Starts a new, empty user-tracking request.
	pub fn build_request(&self) -> BatchBuilder {
		BatchBuilder::new(
			self.credentials.clone(),
			self.tracking_url.clone(),
			Arc::clone(&self.transport),
		)
	}

	pub fn app_group_id(&self) -> &str {
		self.credentials.app_group_id()
	}

	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Full URL of the user-tracking endpoint.
	pub fn tracking_url(&self) -> &str {
		&self.tracking_url
	}
}

impl std::fmt::Debug for AppboyClient {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AppboyClient")
			.field("credentials", &self.credentials)
			.field("config", &self.config)
			.field("tracking_url", &self.tracking_url)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_builder_requires_company_secret() {
		let result = AppboyClientBuilder::new().app_group_id("group-1").build();
		assert!(matches!(result, Err(AppboyError::InvalidArgument(_))));
	}

	#[test]
	fn test_builder_requires_app_group_id() {
		let result = AppboyClientBuilder::new().company_secret("secret").build();
		assert!(matches!(result, Err(AppboyError::InvalidArgument(_))));
	}

	#[test]
	fn test_new_rejects_blank_credentials() {
		let cases = [("", "group"), ("   ", "group"), ("secret", ""), ("secret", "\t")];
		for (secret, group) in cases {
			let result = AppboyClient::new(secret, group);
			assert!(
				matches!(result, Err(AppboyError::InvalidArgument(_))),
				"({secret:?}, {group:?}) should be rejected"
			);
		}
	}

	#[test]
	fn test_builder_rejects_blank_base_url() {
		let result = AppboyClient::builder()
			.company_secret("secret")
			.app_group_id("group")
			.base_url(" / ")
			.build();
		assert!(matches!(result, Err(AppboyError::InvalidArgument(_))));
	}

	#[test]
	fn test_tracking_url_uses_normalized_base_url() {
		let client = AppboyClient::builder()
			.company_secret("secret")
			.app_group_id("group")
			.base_url("https://rest.example.com/")
			.build()
			.unwrap();

		assert_eq!(client.config().base_url, "https://rest.example.com");
		assert_eq!(client.tracking_url(), "https://rest.example.com/users/track");
	}

	#[test]
	fn test_client_config_defaults() {
		let config = ClientConfig::default();
		assert_eq!(config.base_url, DEFAULT_BASE_URL);
		assert_eq!(config.request_timeout, Duration::from_secs(30));
		assert!(config.user_agent.starts_with("appboy-rust/"));
	}

	#[test]
	fn test_debug_output_redacts_secret() {
		let client = AppboyClient::new("very-secret-value", "group").unwrap();
		let debug_output = format!("{client:?}");
		assert!(!debug_output.contains("very-secret-value"));
	}

	#[test]
	fn test_build_request_returns_fresh_batches() {
		let client = AppboyClient::new("secret", "group").unwrap();
		let mut first = client.build_request();
		first
			.add_user_profile(appboy_core::UserProfile::new("user-1").unwrap())
			.unwrap();

		let second = client.build_request();
		assert_eq!(first.len(), 1);
		assert!(second.is_empty());
		assert_eq!(second.url(), client.tracking_url());
	}

	proptest! {
		#[test]
		fn client_accepts_any_non_blank_credentials(
			secret in "[A-Za-z0-9_]{1,32}",
			group in "[a-f0-9-]{1,36}",
		) {
			let client = AppboyClient::new(secret, group.clone()).unwrap();
			prop_assert_eq!(client.app_group_id(), group.as_str());
		}
	}
}
