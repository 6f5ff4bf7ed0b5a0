// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! End-to-end tests against a mock `users/track` endpoint.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use appboy::{AppboyClient, AppboyError, UserProfile};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_partial_json, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPANY_SECRET: &str = "test-company-secret";
const APP_GROUP_ID: &str = "3b1a52e3-0f34-4c2e-9d1a-5b6f2a8c7e10";

fn client_for(server: &MockServer) -> AppboyClient {
	AppboyClient::builder()
		.company_secret(COMPANY_SECRET)
		.app_group_id(APP_GROUP_ID)
		.base_url(server.uri())
		.build()
		.unwrap()
}

#[tokio::test]
async fn test_batch_of_three_invokes_success_callback_once() {
	let server = MockServer::start().await;

	Mock::given(method("POST"))
		.and(path("/users/track"))
		.and(header_exists("user-agent"))
		.and(body_partial_json(json!({
			"company_secret": COMPANY_SECRET,
			"app_group_id": APP_GROUP_ID,
			"attributes": [
				{ "external_id": "user-1", "favorite_color": "teal", "email_subscribe": true },
				{ "external_id": "user-2" },
				{ "external_id": "user-3" }
			]
		})))
		.respond_with(
			ResponseTemplate::new(201).set_body_json(json!({ "num_attributes_processed": 3 })),
		)
		.expect(1)
		.mount(&server)
		.await;

	let client = client_for(&server);

	let mut first = UserProfile::new("user-1").unwrap();
	first
		.set_custom_string_attribute("favorite_color", "teal")
		.unwrap();
	first.subscribed_to_emails = Some(true);

	let mut request = client.build_request();
	request
		.add_user_profiles([
			first,
			UserProfile::new("user-2").unwrap(),
			UserProfile::new("user-3").unwrap(),
		])
		.unwrap();

	let successes = AtomicUsize::new(0);
	let errors = AtomicUsize::new(0);
	let mut processed = None;
	request
		.send_with(
			|result| {
				successes.fetch_add(1, Ordering::SeqCst);
				processed = Some(result.num_attributes_processed);
			},
			|_| {
				errors.fetch_add(1, Ordering::SeqCst);
			},
		)
		.await;

	assert_eq!(successes.load(Ordering::SeqCst), 1);
	assert_eq!(errors.load(Ordering::SeqCst), 0);
	assert_eq!(processed, Some(3));
}

#[tokio::test]
async fn test_send_returns_import_result() {
	let server = MockServer::start().await;

	Mock::given(method("POST"))
		.and(path("/users/track"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"num_attributes_processed": 1,
			"message": "success",
			"errors": [
				{ "type": "invalid attribute", "input_array": "attributes", "index": 0 }
			]
		})))
		.expect(1)
		.mount(&server)
		.await;

	let client = client_for(&server);
	let mut request = client.build_request();
	request
		.add_user_profile(UserProfile::new("user-1").unwrap())
		.unwrap();

	let result = assert_ok!(request.send().await);
	assert_eq!(result.num_attributes_processed, 1);
	assert_eq!(result.message.as_deref(), Some("success"));
	assert!(result.has_errors());
	assert_eq!(result.errors[0].index, Some(0));
}

#[tokio::test]
async fn test_401_surfaces_authentication_error() {
	let server = MockServer::start().await;

	Mock::given(method("POST"))
		.and(path("/users/track"))
		.respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "bad key" })))
		.expect(1)
		.mount(&server)
		.await;

	let client = client_for(&server);
	let errors = AtomicUsize::new(0);
	let successes = AtomicUsize::new(0);
	let mut captured = None;

	client
		.build_request()
		.send_with(
			|_| {
				successes.fetch_add(1, Ordering::SeqCst);
			},
			|e| {
				errors.fetch_add(1, Ordering::SeqCst);
				captured = Some(e);
			},
		)
		.await;

	assert_eq!(successes.load(Ordering::SeqCst), 0);
	assert_eq!(errors.load(Ordering::SeqCst), 1);
	match captured {
		Some(AppboyError::Authentication { message }) => assert_eq!(message, "bad key"),
		other => panic!("expected Authentication, got {other:?}"),
	}
}

#[tokio::test]
async fn test_429_carries_retry_after() {
	let server = MockServer::start().await;

	Mock::given(method("POST"))
		.and(path("/users/track"))
		.respond_with(
			ResponseTemplate::new(429)
				.insert_header("Retry-After", "30")
				.set_body_json(json!({ "message": "rate limit exceeded" })),
		)
		.expect(1)
		.mount(&server)
		.await;

	let client = client_for(&server);
	let err = assert_err!(client.build_request().send().await);

	assert!(err.is_retryable());
	match err {
		AppboyError::RateLimited {
			message,
			retry_after_secs,
		} => {
			assert_eq!(message, "rate limit exceeded");
			assert_eq!(retry_after_secs, Some(30));
		}
		other => panic!("expected RateLimited, got {other:?}"),
	}
}

#[tokio::test]
async fn test_400_and_404_are_classified() {
	let server = MockServer::start().await;

	Mock::given(method("POST"))
		.and(path("/users/track"))
		.respond_with(
			ResponseTemplate::new(400).set_body_json(json!({ "message": "missing external_id" })),
		)
		.up_to_n_times(1)
		.expect(1)
		.mount(&server)
		.await;

	Mock::given(method("POST"))
		.and(path("/users/track"))
		.respond_with(
			ResponseTemplate::new(404).set_body_json(json!({ "message": "unknown app group" })),
		)
		.expect(1)
		.mount(&server)
		.await;

	let client = client_for(&server);

	let err = assert_err!(client.build_request().send().await);
	assert!(matches!(err, AppboyError::Validation { ref message } if message == "missing external_id"));
	assert!(!err.is_retryable());

	let err = assert_err!(client.build_request().send().await);
	assert!(matches!(err, AppboyError::NotFound { ref message } if message == "unknown app group"));
}

#[tokio::test]
async fn test_unclassified_status_is_unexpected() {
	let server = MockServer::start().await;

	Mock::given(method("POST"))
		.and(path("/users/track"))
		.respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
		.expect(1)
		.mount(&server)
		.await;

	let client = client_for(&server);
	let err = assert_err!(client.build_request().send().await);

	assert_eq!(err.status(), Some(503));
	assert!(matches!(
		err,
		AppboyError::UnexpectedStatus { ref message, .. } if message == "upstream unavailable"
	));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
	let server = MockServer::start().await;

	Mock::given(method("POST"))
		.and(path("/users/track"))
		.respond_with(
			ResponseTemplate::new(201)
				.set_body_json(json!({ "num_attributes_processed": 0 }))
				.set_delay(Duration::from_secs(2)),
		)
		.mount(&server)
		.await;

	let client = AppboyClient::builder()
		.company_secret(COMPANY_SECRET)
		.app_group_id(APP_GROUP_ID)
		.base_url(server.uri())
		.request_timeout(Duration::from_millis(100))
		.build()
		.unwrap();

	let err = assert_err!(client.build_request().send().await);
	assert!(matches!(err, AppboyError::Transport { .. }));
	assert!(err.is_retryable());
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
	let server = MockServer::start().await;
	let uri = server.uri();
	drop(server);

	let client = AppboyClient::builder()
		.company_secret(COMPANY_SECRET)
		.app_group_id(APP_GROUP_ID)
		.base_url(uri)
		.request_timeout(Duration::from_secs(2))
		.build()
		.unwrap();

	let err = assert_err!(client.build_request().send().await);
	assert!(matches!(err, AppboyError::Transport { .. }));
}
