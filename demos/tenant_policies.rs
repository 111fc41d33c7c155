//! Demonstrates registering a tenant provider, attaching a policy, and validating a token
//! against it, with an httpmock server standing in for the UseGrant API.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use usegrant::{
	client::UseGrant,
	config::ClientOptions,
	http::RetryPolicy,
	model::{
		Condition, ConditionOperator, CreateTenant, CreateTenantProvider, CreateTenantProviderPolicy,
	},
};

const FINGERPRINT: &str = "3b1f5f0c2a9d4e8e9c7a6b5d4c3b2a1f0e9d8c7b";
const STAMP: &str = "2024-05-01T10:00:00Z";

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let tenant_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/tenants");
			then.status(200).json_body(json!({
				"id": "tenant-acme",
				"name": "Acme",
				"description": "Acme production tenant",
				"createdAt": STAMP,
				"updatedAt": STAMP,
			}));
		})
		.await;
	let provider_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/tenants/tenant-acme/providers");
			then.status(200).json_body(json!({
				"id": "github-actions",
				"url": "https://token.actions.githubusercontent.com",
				"fingerprints": [FINGERPRINT],
				"audience": "api://acme",
				"earliestIssuanceTimeAllowed": 1,
				"createdAt": STAMP,
				"updatedAt": STAMP,
			}));
		})
		.await;
	let policy_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/tenants/tenant-acme/providers/github-actions/policies");
			then.status(200).json_body(json!({
				"id": "main-branch",
				"name": "Main branch",
				"description": "Deployments from the main branch only",
				"audience": "api://acme",
				"conditions": [{ "key": "ref", "operator": "stringEquals", "value": "refs/heads/main" }],
				"createdAt": STAMP,
				"updatedAt": STAMP,
			}));
		})
		.await;
	let validate_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v1/tenants/tenant-acme/validate")
				.json_body(json!({ "tenantProviderPolicyId": "main-branch", "token": "ci-token" }));
			then.status(200).json_body(json!({ "exp": 1_714_561_200 }));
		})
		.await;
	let options =
		ClientOptions::builder().base_url(server.base_url()).retry(RetryPolicy::default()).build()?;
	let client = UseGrant::with_options("demo-api-key", options)?;
	let tenant =
		client.create_tenant(&CreateTenant::new("Acme", "Acme production tenant")).await?;
	let provider = client
		.create_tenant_provider(
			&tenant.id,
			&CreateTenantProvider::new(
				"https://token.actions.githubusercontent.com/",
				[FINGERPRINT],
				"api://acme",
				1.,
			),
		)
		.await?;
	let policy = client
		.create_tenant_provider_policy(
			&tenant.id,
			&provider.id,
			&CreateTenantProviderPolicy {
				name: "Main branch".into(),
				description: "Deployments from the main branch only".into(),
				audience: "api://acme".into(),
				conditions: vec![Condition::new(
					"ref",
					ConditionOperator::StringEquals,
					"refs/heads/main",
				)],
			},
		)
		.await?;
	let validation = client.validate_token(&tenant.id, &policy.id, "ci-token").await?;

	println!("Token accepted by `{}`; it expires at {}.", policy.name, validation.expires_at()?);

	tenant_mock.assert_async().await;
	provider_mock.assert_async().await;
	policy_mock.assert_async().await;
	validate_mock.assert_async().await;

	Ok(())
}
