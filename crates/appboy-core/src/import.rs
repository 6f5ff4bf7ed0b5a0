// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Response body of a successful user-tracking request.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Outcome of an accepted batch.
///
/// The service omits fields it has nothing to report for, so every field
/// defaults when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResult {
	#[serde(default)]
	pub num_attributes_processed: u64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
	/// Non-fatal per-record problems reported alongside a 2xx status.
	///
	/// Parsed leniently: `null` reads as empty and entries of an unknown shape
	/// are kept as [`ImportError::unrecognized`] instead of failing the result.
	#[serde(
		default,
		deserialize_with = "deserialize_import_errors",
		skip_serializing_if = "Vec::is_empty"
	)]
	pub errors: Vec<ImportError>,
}

impl ImportResult {
	pub fn has_errors(&self) -> bool {
		!self.errors.is_empty()
	}
}

/// A single non-fatal error for one record in the submitted batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportError {
	/// Error description. For entries that were not a record object this is
	/// the entry itself: the string for a bare string, the JSON text otherwise.
	#[serde(rename = "type", default)]
	pub kind: String,
	/// Which request array the record came from, e.g. `attributes`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub input_array: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub index: Option<usize>,
}

impl ImportError {
	/// Builds an error from an entry that is not a well-formed record.
	pub fn unrecognized(entry: &Value) -> Self {
		let kind = match entry {
			Value::String(s) => s.clone(),
			other => other.to_string(),
		};
		Self {
			kind,
			input_array: None,
			index: None,
		}
	}

	fn from_entry(entry: Value) -> Self {
		match entry {
			Value::Object(_) => {
				serde_json::from_value(entry.clone()).unwrap_or_else(|_| Self::unrecognized(&entry))
			}
			other => Self::unrecognized(&other),
		}
	}
}

fn deserialize_import_errors<'de, D>(deserializer: D) -> Result<Vec<ImportError>, D::Error>
where
	D: Deserializer<'de>,
{
	let errors = match Value::deserialize(deserializer)? {
		Value::Null => Vec::new(),
		Value::Array(entries) => entries
			.into_iter()
			.filter(|entry| !entry.is_null())
			.map(ImportError::from_entry)
			.collect(),
		single => vec![ImportError::from_entry(single)],
	};
	Ok(errors)
}
