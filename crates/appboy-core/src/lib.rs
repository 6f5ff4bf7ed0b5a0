// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Appboy user-tracking API.
//!
//! This crate holds the data model shared by the client SDK (`appboy`):
//! credentials, user profiles with their custom attributes and push tokens,
//! and the import result returned by the service. It performs no I/O.
//!
//! # Example
//!
//! ```
//! use appboy_core::{Gender, UserProfile};
//!
//! let mut user = UserProfile::new("user-42").unwrap();
//! user.email = Some("user42@example.com".to_string());
//! user.gender = Some(Gender::Female);
//! user.subscribed_to_emails = Some(true);
//! user.set_custom_string_attribute("plan", "pro").unwrap();
//! user.add_push_token("ios-app", "device-token").unwrap();
//!
//! // Custom attribute keys are unique.
//! assert!(user.set_custom_string_attribute("plan", "free").is_err());
//! ```

pub mod attribute;
pub mod credentials;
pub mod error;
pub mod import;
pub mod profile;
pub mod push_token;

pub use attribute::{
	is_reserved_attribute_name, CustomAttributeValue, MAX_CUSTOM_STRING_ATTRIBUTE_LENGTH,
	RESERVED_ATTRIBUTE_NAMES,
};
pub use credentials::{CompanySecret, Credentials, REDACTED};
pub use error::{ModelError, Result};
pub use import::{ImportError, ImportResult};
pub use profile::{Gender, UserProfile};
pub use push_token::PushTokenRegistration;
