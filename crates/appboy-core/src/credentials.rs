// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Account credentials for the user-tracking API.
//!
//! The company secret authenticates every request, so it is wrapped in
//! [`CompanySecret`]. The wrapper:
//!
//! - prints `[REDACTED]` for both `Debug` and `Display`
//! - is zeroized when dropped
//! - only hands out the raw value through [`CompanySecret::expose`]
//!
//! ```
//! use appboy_core::Credentials;
//!
//! let creds = Credentials::new("secret-value", "app-group-1").unwrap();
//! assert_eq!(format!("{}", creds.company_secret()), "[REDACTED]");
//! assert_eq!(creds.company_secret().expose(), "secret-value");
//! ```

use std::fmt;

use zeroize::Zeroize;

use crate::error::{require_non_blank, Result};

/// The redaction placeholder used in all output.
pub const REDACTED: &str = "[REDACTED]";

/// The company secret issued by the remote service.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct CompanySecret {
	inner: String,
}

impl CompanySecret {
	/// Wraps a company secret, rejecting empty or whitespace-only values.
	pub fn new(secret: impl Into<String>) -> Result<Self> {
		let inner = secret.into();
		require_non_blank("company_secret", &inner)?;
		Ok(Self { inner })
	}

	/// Explicitly access the raw secret.
	///
	/// Only the request payload should need this.
	pub fn expose(&self) -> &str {
		&self.inner
	}
}

impl Clone for CompanySecret {
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
		}
	}
}

impl fmt::Debug for CompanySecret {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("CompanySecret").field(&REDACTED).finish()
	}
}

impl fmt::Display for CompanySecret {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl PartialEq for CompanySecret {
	fn eq(&self, other: &Self) -> bool {
		self.inner == other.inner
	}
}

impl Eq for CompanySecret {}

/// The credential pair sent with every user-tracking request.
///
/// Both values are validated once at construction and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
	company_secret: CompanySecret,
	app_group_id: String,
}

impl Credentials {
	/// Validates and stores the credential pair.
	///
	/// Fails with [`ModelError::InvalidArgument`](crate::ModelError::InvalidArgument)
	/// if either value is empty or whitespace-only.
	pub fn new(company_secret: impl Into<String>, app_group_id: impl Into<String>) -> Result<Self> {
		let company_secret = CompanySecret::new(company_secret)?;
		let app_group_id = app_group_id.into();
		require_non_blank("app_group_id", &app_group_id)?;

		Ok(Self {
			company_secret,
			app_group_id,
		})
	}

	pub fn company_secret(&self) -> &CompanySecret {
		&self.company_secret
	}

	pub fn app_group_id(&self) -> &str {
		&self.app_group_id
	}
}
