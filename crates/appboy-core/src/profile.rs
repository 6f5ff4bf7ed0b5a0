// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! User profile types.
//!
//! A [`UserProfile`] holds the attribute changes for one user, keyed by the
//! caller's `external_id`. It has three groups of data:
//!
//! - optional core fields (name, email, date of birth, ...), exposed as public fields
//! - a bag of typed custom attributes, written through the `set_custom_*` methods
//! - push token registrations, at most one per app ID
//!
//! Custom attribute keys are unique. Setting a key that is already present is
//! rejected with [`ModelError::DuplicateKey`] and the stored value is kept.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::attribute::{
	is_reserved_attribute_name, CustomAttributeValue, MAX_CUSTOM_STRING_ATTRIBUTE_LENGTH,
};
use crate::error::{require_non_blank, ModelError, Result};
use crate::push_token::PushTokenRegistration;

/// Gender as understood by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
	#[serde(rename = "M")]
	Male,
	#[serde(rename = "F")]
	Female,
	/// Other or unknown.
	#[serde(rename = "O")]
	Other,
}

/// Attribute updates for a single user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
	external_id: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub first_name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last_name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	/// Serialized as `dob` in `YYYY-MM-DD` form.
	#[serde(rename = "dob", skip_serializing_if = "Option::is_none")]
	pub date_of_birth: Option<NaiveDate>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub country: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub home_city: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bio: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub gender: Option<Gender>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
	#[serde(rename = "email_subscribe", skip_serializing_if = "Option::is_none")]
	pub subscribed_to_emails: Option<bool>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	push_tokens: Vec<PushTokenRegistration>,
	#[serde(flatten)]
	custom_attributes: BTreeMap<String, CustomAttributeValue>,
}

impl UserProfile {
	/// Creates an empty profile for the given external ID.
	///
	/// Fails with [`ModelError::InvalidArgument`] if the ID is empty or whitespace-only.
	pub fn new(external_id: impl Into<String>) -> Result<Self> {
		let external_id = external_id.into();
		require_non_blank("external_id", &external_id)?;

		Ok(Self {
			external_id,
			first_name: None,
			last_name: None,
			email: None,
			date_of_birth: None,
			country: None,
			home_city: None,
			bio: None,
			gender: None,
			phone: None,
			subscribed_to_emails: None,
			push_tokens: Vec::new(),
			custom_attributes: BTreeMap::new(),
		})
	}

	pub fn external_id(&self) -> &str {
		&self.external_id
	}

	/// Sets a custom string attribute.
	///
	/// The value must be shorter than [`MAX_CUSTOM_STRING_ATTRIBUTE_LENGTH`]
	/// characters, counted as Unicode scalar values.
	pub fn set_custom_string_attribute(
		&mut self,
		name: impl Into<String>,
		value: impl Into<String>,
	) -> Result<()> {
		self.insert_custom_attribute(name.into(), CustomAttributeValue::String(value.into()))
	}

	pub fn set_custom_integer_attribute(&mut self, name: impl Into<String>, value: i64) -> Result<()> {
		self.insert_custom_attribute(name.into(), CustomAttributeValue::Integer(value))
	}

	/// Sets a custom float attribute. NaN and infinite values are rejected.
	pub fn set_custom_float_attribute(&mut self, name: impl Into<String>, value: f64) -> Result<()> {
		self.insert_custom_attribute(name.into(), CustomAttributeValue::Float(value))
	}

	pub fn set_custom_boolean_attribute(&mut self, name: impl Into<String>, value: bool) -> Result<()> {
		self.insert_custom_attribute(name.into(), CustomAttributeValue::Boolean(value))
	}

	pub fn set_custom_date_time_attribute(
		&mut self,
		name: impl Into<String>,
		value: DateTime<Utc>,
	) -> Result<()> {
		self.insert_custom_attribute(name.into(), CustomAttributeValue::DateTime(value))
	}

	/// Sets every attribute in `attributes`, in iteration order.
	///
	/// Each entry goes through the same checks as the typed setters. This does
	/// not clear attributes set earlier. On the first failing entry the error is
	/// returned and the entries before it stay applied; entries after it are
	/// not attempted.
	pub fn set_custom_attributes<I, K, V>(&mut self, attributes: I) -> Result<()>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<CustomAttributeValue>,
	{
		for (name, value) in attributes {
			self.insert_custom_attribute(name.into(), value.into())?;
		}
		Ok(())
	}

	pub fn custom_attribute(&self, name: &str) -> Option<&CustomAttributeValue> {
		self.custom_attributes.get(name)
	}

	pub fn custom_attributes(&self) -> &BTreeMap<String, CustomAttributeValue> {
		&self.custom_attributes
	}

	/// Registers a push token for `app_id`.
	///
	/// Only one token may be registered per app ID; a second registration fails
	/// with [`ModelError::DuplicateRegistration`] and the first one is kept.
	pub fn add_push_token(&mut self, app_id: impl Into<String>, token: impl Into<String>) -> Result<()> {
		let registration = PushTokenRegistration::new(app_id, token)?;
		if self.push_token(registration.app_id()).is_some() {
			return Err(ModelError::DuplicateRegistration(
				registration.app_id().to_string(),
			));
		}

		self.push_tokens.push(registration);
		Ok(())
	}

	pub fn push_tokens(&self) -> &[PushTokenRegistration] {
		&self.push_tokens
	}

	pub fn push_token(&self, app_id: &str) -> Option<&PushTokenRegistration> {
		self.push_tokens.iter().find(|r| r.app_id() == app_id)
	}

	fn insert_custom_attribute(&mut self, name: String, value: CustomAttributeValue) -> Result<()> {
		require_non_blank("custom attribute name", &name)?;

		if is_reserved_attribute_name(&name) {
			return Err(ModelError::InvalidArgument(format!(
				"custom attribute name '{name}' collides with a core profile field"
			)));
		}

		match &value {
			CustomAttributeValue::String(s) => {
				let length = s.chars().count();
				if length >= MAX_CUSTOM_STRING_ATTRIBUTE_LENGTH {
					return Err(ModelError::ValueTooLong {
						name,
						length,
						max: MAX_CUSTOM_STRING_ATTRIBUTE_LENGTH,
					});
				}
			}
			CustomAttributeValue::Float(f) if !f.is_finite() => {
				return Err(ModelError::InvalidArgument(format!(
					"custom {} attribute '{name}' must be finite, got {f}",
					value.type_name()
				)));
			}
			_ => {}
		}

		if self.custom_attributes.contains_key(&name) {
			return Err(ModelError::DuplicateKey(name));
		}

		self.custom_attributes.insert(name, value);
		Ok(())
	}
}
