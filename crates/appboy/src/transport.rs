// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The HTTP seam between the batch builder and the network.
//!
//! [`BatchBuilder`](crate::BatchBuilder) only ever talks to a [`Transport`].
//! The default [`ReqwestTransport`] performs real requests; tests inject their
//! own implementation.

use std::time::Duration;

use http::Method;
use reqwest::Client;
use thiserror::Error;
use tracing::trace;

/// SDK version sent in the default User-Agent.
const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");
/// SDK name sent in the default User-Agent.
const SDK_NAME: &str = "appboy-rust";

/// Returns the default User-Agent string.
///
/// Format: `appboy-rust/{version}`
pub fn default_user_agent() -> String {
	format!("{SDK_NAME}/{SDK_VERSION}")
}

/// A completed HTTP exchange, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
	pub status: u16,
	pub body: String,
	/// Parsed `Retry-After` header, in seconds.
	pub retry_after_secs: Option<u64>,
}

impl HttpResponse {
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self {
			status,
			body: body.into(),
			retry_after_secs: None,
		}
	}

	pub fn with_retry_after(mut self, secs: u64) -> Self {
		self.retry_after_secs = Some(secs);
		self
	}
}

/// The request failed before a response was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportFailure {
	pub message: String,
}

impl TransportFailure {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}
}

impl From<reqwest::Error> for TransportFailure {
	fn from(err: reqwest::Error) -> Self {
		Self::new(err.to_string())
	}
}

/// Executes a single JSON request.
///
/// Implementations own connection handling, TLS and timeouts. They must not
/// retry on their own; a non-2xx status is a successful exchange from the
/// transport's point of view.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
	async fn execute(
		&self,
		method: Method,
		url: &str,
		body: &serde_json::Value,
	) -> Result<HttpResponse, TransportFailure>;
}

/// [`Transport`] backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
	http_client: Client,
}

impl ReqwestTransport {
	/// Builds a transport with the given request timeout and User-Agent.
	pub fn new(request_timeout: Duration, user_agent: &str) -> Result<Self, TransportFailure> {
		let http_client = Client::builder()
			.user_agent(user_agent)
			.timeout(request_timeout)
			.build()?;
		Ok(Self { http_client })
	}

	/// Wraps an existing client, e.g. one shared with the rest of the application.
	pub fn from_client(http_client: Client) -> Self {
		Self { http_client }
	}
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
	async fn execute(
		&self,
		method: Method,
		url: &str,
		body: &serde_json::Value,
	) -> Result<HttpResponse, TransportFailure> {
		let response = self
			.http_client
			.request(method, url)
			.json(body)
			.send()
			.await?;

		let status = response.status().as_u16();
		let retry_after_secs = response
			.headers()
			.get("Retry-After")
			.and_then(|v| v.to_str().ok())
			.and_then(|s| s.trim().parse().ok());
		let body = response.text().await?;

		trace!(status, body_len = body.len(), "Received response");

		Ok(HttpResponse {
			status,
			body,
			retry_after_secs,
		})
	}
}
