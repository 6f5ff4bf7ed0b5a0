// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Example: Send a small batch of user profiles with the appboy SDK.
//!
//! Run with:
//!   APPBOY_COMPANY_SECRET=... APPBOY_APP_GROUP_ID=... \
//!     cargo run --example track_users -p appboy

use appboy::{chrono::Utc, AppboyClient, Gender, UserProfile};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let company_secret = std::env::var("APPBOY_COMPANY_SECRET")
		.map_err(|_| "APPBOY_COMPANY_SECRET environment variable required")?;
	let app_group_id = std::env::var("APPBOY_APP_GROUP_ID")
		.map_err(|_| "APPBOY_APP_GROUP_ID environment variable required")?;

	let mut builder = AppboyClient::builder()
		.company_secret(company_secret)
		.app_group_id(app_group_id);
	if let Ok(base_url) = std::env::var("APPBOY_BASE_URL") {
		builder = builder.base_url(base_url);
	}
	let client = builder.build()?;

	println!("Sending to {}", client.tracking_url());

	let mut subscriber = UserProfile::new("example-user-1")?;
	subscriber.first_name = Some("Ada".to_string());
	subscriber.email = Some("ada@example.com".to_string());
	subscriber.gender = Some(Gender::Female);
	subscriber.subscribed_to_emails = Some(true);
	subscriber.set_custom_string_attribute("favorite_color", "teal")?;
	subscriber.set_custom_integer_attribute("lifetime_orders", 12)?;
	subscriber.set_custom_date_time_attribute("last_seen_at", Utc::now())?;

	let mut request = client.build_request();
	request
		.add_user_profile(subscriber)?
		.add_user_profile(UserProfile::new("example-user-2")?)?
		.add_user_profile(UserProfile::new("example-user-3")?)?;

	println!("Sending {} profiles...", request.len());

	request
		.send_with(
			|result| {
				println!(
					"Accepted: {} attributes processed",
					result.num_attributes_processed
				);
				for error in &result.errors {
					println!("  non-fatal: {} at {:?}", error.kind, error.index);
				}
			},
			|error| eprintln!("Request failed: {error}"),
		)
		.await;

	Ok(())
}
