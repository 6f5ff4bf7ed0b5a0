// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Typed values for application-defined custom attributes.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Custom string attribute values must be strictly shorter than this many characters.
pub const MAX_CUSTOM_STRING_ATTRIBUTE_LENGTH: usize = 255;

/// Wire field names of the core profile attributes.
///
/// Custom attributes are flattened into the same JSON object as these fields,
/// so a custom attribute may not reuse any of them.
pub const RESERVED_ATTRIBUTE_NAMES: &[&str] = &[
	"external_id",
	"first_name",
	"last_name",
	"email",
	"dob",
	"country",
	"home_city",
	"bio",
	"gender",
	"phone",
	"email_subscribe",
	"push_tokens",
];

/// Returns true if `name` collides with a core profile field.
pub fn is_reserved_attribute_name(name: &str) -> bool {
	RESERVED_ATTRIBUTE_NAMES.contains(&name)
}

/// The value of a single custom attribute.
///
/// Serializes untagged, so `Integer(3)` becomes `3` and `DateTime` becomes an
/// RFC 3339 string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CustomAttributeValue {
	String(String),
	Integer(i64),
	Float(f64),
	Boolean(bool),
	DateTime(DateTime<Utc>),
}

impl CustomAttributeValue {
	/// Short name of the value's type, used in validation error messages.
	pub fn type_name(&self) -> &'static str {
		match self {
			CustomAttributeValue::String(_) => "string",
			CustomAttributeValue::Integer(_) => "integer",
			CustomAttributeValue::Float(_) => "float",
			CustomAttributeValue::Boolean(_) => "boolean",
			CustomAttributeValue::DateTime(_) => "datetime",
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			CustomAttributeValue::String(s) => Some(s),
			_ => None,
		}
	}
}

impl From<String> for CustomAttributeValue {
	fn from(value: String) -> Self {
		CustomAttributeValue::String(value)
	}
}

impl From<&str> for CustomAttributeValue {
	fn from(value: &str) -> Self {
		CustomAttributeValue::String(value.to_string())
	}
}

impl From<i64> for CustomAttributeValue {
	fn from(value: i64) -> Self {
		CustomAttributeValue::Integer(value)
	}
}

impl From<i32> for CustomAttributeValue {
	fn from(value: i32) -> Self {
		CustomAttributeValue::Integer(value.into())
	}
}

impl From<f64> for CustomAttributeValue {
	fn from(value: f64) -> Self {
		CustomAttributeValue::Float(value)
	}
}

impl From<bool> for CustomAttributeValue {
	fn from(value: bool) -> Self {
		CustomAttributeValue::Boolean(value)
	}
}

impl From<DateTime<Utc>> for CustomAttributeValue {
	fn from(value: DateTime<Utc>) -> Self {
		CustomAttributeValue::DateTime(value)
	}
}
