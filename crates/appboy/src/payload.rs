// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use appboy_core::{Credentials, UserProfile};
use serde::Serialize;

/// Request body for the `users/track` endpoint.
///
/// Holds the exposed company secret; must not implement `Debug`.
#[derive(Serialize)]
pub(crate) struct TrackUsersRequest<'a> {
	company_secret: &'a str,
	app_group_id: &'a str,
	attributes: &'a [UserProfile],
}

impl<'a> TrackUsersRequest<'a> {
	pub(crate) fn new(credentials: &'a Credentials, attributes: &'a [UserProfile]) -> Self {
		Self {
			company_secret: credentials.company_secret().expose(),
			app_group_id: credentials.app_group_id(),
			attributes,
		}
	}
}
