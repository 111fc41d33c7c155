//! Tenants, their trusted providers and policies, and token validation.

// self
use crate::{
	_prelude::*,
	client::UseGrant,
	contract::{self, EmptyResponse},
	http::ApiHttpClient,
	model::{
		CreateTenant, CreateTenantProvider, CreateTenantProviderPolicy, Tenant, TenantProvider,
		TenantProviderPolicy, TokenValidation, ValidateToken,
	},
};

impl<C> UseGrant<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists every tenant.
	pub async fn list_tenants(&self) -> Result<Vec<Tenant>> {
		self.fetch(&contract::LIST_TENANTS, &[]).await
	}

	/// Creates a tenant.
	pub async fn create_tenant(&self, tenant: &CreateTenant) -> Result<Tenant> {
		self.send(&contract::CREATE_TENANT, &[], tenant).await
	}

	/// Fetches a tenant.
	pub async fn get_tenant(&self, tenant_id: &str) -> Result<Tenant> {
		self.fetch(&contract::GET_TENANT, &[tenant_id]).await
	}

	/// Deletes a tenant.
	pub async fn delete_tenant(&self, tenant_id: &str) -> Result<EmptyResponse> {
		self.fetch(&contract::DELETE_TENANT, &[tenant_id]).await
	}

	/// Lists the external providers a tenant trusts.
	pub async fn list_tenant_providers(&self, tenant_id: &str) -> Result<Vec<TenantProvider>> {
		self.fetch(&contract::LIST_TENANT_PROVIDERS, &[tenant_id]).await
	}

	/// Registers an external provider with a tenant.
	///
	/// The URL is sent trimmed and without its trailing slash; the audience is sent trimmed.
	pub async fn create_tenant_provider(
		&self,
		tenant_id: &str,
		provider: &CreateTenantProvider,
	) -> Result<TenantProvider> {
		self.send(&contract::CREATE_TENANT_PROVIDER, &[tenant_id], provider).await
	}

	/// Fetches a tenant provider.
	pub async fn get_tenant_provider(
		&self,
		tenant_id: &str,
		tenant_provider_id: &str,
	) -> Result<TenantProvider> {
		self.fetch(&contract::GET_TENANT_PROVIDER, &[tenant_id, tenant_provider_id]).await
	}

	/// Removes a tenant provider.
	pub async fn delete_tenant_provider(
		&self,
		tenant_id: &str,
		tenant_provider_id: &str,
	) -> Result<EmptyResponse> {
		self.fetch(&contract::DELETE_TENANT_PROVIDER, &[tenant_id, tenant_provider_id]).await
	}

	/// Lists the policies attached to a tenant provider.
	pub async fn list_tenant_provider_policies(
		&self,
		tenant_id: &str,
		tenant_provider_id: &str,
	) -> Result<Vec<TenantProviderPolicy>> {
		self.fetch(&contract::LIST_TENANT_PROVIDER_POLICIES, &[tenant_id, tenant_provider_id])
			.await
	}

	/// Attaches a policy to a tenant provider.
	pub async fn create_tenant_provider_policy(
		&self,
		tenant_id: &str,
		tenant_provider_id: &str,
		policy: &CreateTenantProviderPolicy,
	) -> Result<TenantProviderPolicy> {
		self.send(&contract::CREATE_TENANT_PROVIDER_POLICY, &[tenant_id, tenant_provider_id], policy)
			.await
	}

	/// Fetches a tenant provider policy.
	pub async fn get_tenant_provider_policy(
		&self,
		tenant_id: &str,
		tenant_provider_id: &str,
		policy_id: &str,
	) -> Result<TenantProviderPolicy> {
		self.fetch(&contract::GET_TENANT_PROVIDER_POLICY, &[tenant_id, tenant_provider_id, policy_id])
			.await
	}

	/// Deletes a tenant provider policy.
	pub async fn delete_tenant_provider_policy(
		&self,
		tenant_id: &str,
		tenant_provider_id: &str,
		policy_id: &str,
	) -> Result<EmptyResponse> {
		self.fetch(
			&contract::DELETE_TENANT_PROVIDER_POLICY,
			&[tenant_id, tenant_provider_id, policy_id],
		)
		.await
	}

	/// Validates `token` against a tenant provider policy and returns its expiry.
	pub async fn validate_token(
		&self,
		tenant_id: &str,
		policy_id: &str,
		token: &str,
	) -> Result<TokenValidation> {
		let body = ValidateToken {
			tenant_provider_policy_id: policy_id.to_owned(),
			token: token.to_owned(),
		};

		self.send(&contract::VALIDATE_TOKEN, &[tenant_id], &body).await
	}
}
