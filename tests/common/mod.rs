//! Shared fixtures for integration tests.

#![allow(dead_code)]

// crates.io
use httpmock::prelude::*;
use serde_json::{Value, json};
// self
use usegrant::{
	client::UseGrant,
	config::{ClientOptions, ClientOptionsBuilder},
	http::ReqwestHttpClient,
};

pub const API_KEY: &str = "test-api-key";
pub const BEARER: &str = "Bearer test-api-key";
pub const CREATED_AT: &str = "2024-05-01T10:00:00Z";
pub const UPDATED_AT: &str = "2024-05-02T08:30:00Z";

pub fn client(server: &MockServer) -> UseGrant<ReqwestHttpClient> {
	client_with(server, ClientOptions::builder())
}

pub fn client_with(server: &MockServer, builder: ClientOptionsBuilder) -> UseGrant<ReqwestHttpClient> {
	let options =
		builder.base_url(server.base_url()).build().expect("Mock server URL should be valid.");

	UseGrant::with_options(API_KEY, options).expect("Test client should build.")
}

pub fn provider_json(id: &str, name: &str, description: &str) -> Value {
	json!({
		"id": id,
		"name": name,
		"description": description,
		"createdAt": CREATED_AT,
		"updatedAt": UPDATED_AT,
	})
}

pub fn tenant_json(id: &str, name: &str) -> Value {
	json!({
		"id": id,
		"name": name,
		"description": "Tenant used in tests",
		"createdAt": CREATED_AT,
		"updatedAt": UPDATED_AT,
	})
}

pub fn domain_json(id: &str, domain: &str, verified: bool) -> Value {
	json!({
		"id": id,
		"domain": domain,
		"verified": verified,
		"createdAt": CREATED_AT,
		"updatedAt": UPDATED_AT,
	})
}
