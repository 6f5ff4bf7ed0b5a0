// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Rust SDK for the Appboy user-tracking API.
//!
//! This crate provides a client for pushing batches of user profile updates
//! (standard fields, custom attributes and push tokens) to the Appboy
//! `users/track` endpoint. Every send is a single POST; nothing is queued or
//! retried in the background.
//!
//! # Quick Start
//!
//! ```ignore
//! use appboy::{AppboyClient, UserProfile};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AppboyClient::new("company-secret", "app-group-id")?;
//!
//!     let mut user = UserProfile::new("user_123")?;
//!     user.email = Some("user@example.com".to_string());
//!     user.subscribed_to_emails = Some(true);
//!     user.set_custom_string_attribute("plan", "pro")?;
//!     user.add_push_token("ios-app-id", "device-token")?;
//!
//!     let mut request = client.build_request();
//!     request.add_user_profile(user)?;
//!
//!     let result = request.send().await?;
//!     println!("processed {}", result.num_attributes_processed);
//!     Ok(())
//! }
//! ```
//!
//! # Batching
//!
//! A request carries at most [`MAX_USER_PROFILES_PER_REQUEST`] profiles.
//! Adding past the cap fails with [`AppboyError::LimitExceeded`] and leaves the
//! batch unchanged. Split larger imports across several requests.
//!
//! [`BatchBuilder::send`] consumes the builder, so each batch is sent once.
//!
//! # Error Handling
//!
//! Every response is classified into exactly one outcome:
//!
//! | Status | Result |
//! |--------|--------|
//! | 200, 201 | `Ok(ImportResult)` |
//! | 400 | [`AppboyError::Validation`] |
//! | 401 | [`AppboyError::Authentication`] |
//! | 404 | [`AppboyError::NotFound`] |
//! | 429 | [`AppboyError::RateLimited`] |
//! | other | [`AppboyError::UnexpectedStatus`] |
//! | no response | [`AppboyError::Transport`] |
//!
//! ```ignore
//! use appboy::AppboyError;
//!
//! match request.send().await {
//!     Ok(result) => println!("processed {}", result.num_attributes_processed),
//!     Err(AppboyError::RateLimited { retry_after_secs, .. }) => {
//!         eprintln!("rate limited, retry after {:?}s", retry_after_secs);
//!     }
//!     Err(e) if e.is_retryable() => eprintln!("transient failure: {e}"),
//!     Err(e) => eprintln!("request rejected: {e}"),
//! }
//! ```

pub mod batch;
pub mod client;
pub mod error;
mod payload;
pub mod response;
pub mod transport;

pub use batch::{BatchBuilder, MAX_USER_PROFILES_PER_REQUEST};
pub use client::{
	AppboyClient, AppboyClientBuilder, ClientConfig, DEFAULT_BASE_URL, USER_TRACKING_PATH,
};
pub use error::{AppboyError, Result};
pub use response::classify_response;
pub use transport::{
	default_user_agent, HttpResponse, ReqwestTransport, Transport, TransportFailure,
};

// Re-export types from appboy-core that users may need
pub use appboy_core::{
	CustomAttributeValue, Gender, ImportError, ImportResult, ModelError, PushTokenRegistration,
	UserProfile, MAX_CUSTOM_STRING_ATTRIBUTE_LENGTH,
};

// Timestamps and dates on profiles are chrono types.
pub use chrono;
