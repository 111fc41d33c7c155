//! Every operation exposed by the UseGrant API.

// self
use crate::{
	contract::{
		EmptyResponse, Operation,
		Segment::{self, Literal, Param},
	},
	http::HttpMethod::{Delete, Get, Post},
	model::{
		Client, ClientId, Domain, DomainId, DomainVerification, Provider, ProviderId, Tenant,
		TenantId, TenantProvider, TenantProviderId, TenantProviderPolicy, TenantProviderPolicyId,
		Token, TokenValidation,
	},
};

const PROVIDERS: &[Segment] = &[Literal("providers")];
const PROVIDER: &[Segment] = &[Literal("providers"), Param(ProviderId::SPEC)];
const CLIENTS: &[Segment] = &[Literal("providers"), Param(ProviderId::SPEC), Literal("clients")];
const CLIENT: &[Segment] =
	&[Literal("providers"), Param(ProviderId::SPEC), Literal("clients"), Param(ClientId::SPEC)];
const TOKENS: &[Segment] = &[
	Literal("providers"),
	Param(ProviderId::SPEC),
	Literal("clients"),
	Param(ClientId::SPEC),
	Literal("tokens"),
];
const DOMAINS: &[Segment] = &[Literal("providers"), Param(ProviderId::SPEC), Literal("domains")];
const DOMAIN: &[Segment] =
	&[Literal("providers"), Param(ProviderId::SPEC), Literal("domains"), Param(DomainId::SPEC)];
const DOMAIN_VERIFY: &[Segment] = &[
	Literal("providers"),
	Param(ProviderId::SPEC),
	Literal("domains"),
	Param(DomainId::SPEC),
	Literal("verify"),
];
const TENANTS: &[Segment] = &[Literal("tenants")];
const TENANT: &[Segment] = &[Literal("tenants"), Param(TenantId::SPEC)];
const TENANT_PROVIDERS: &[Segment] =
	&[Literal("tenants"), Param(TenantId::SPEC), Literal("providers")];
const TENANT_PROVIDER: &[Segment] = &[
	Literal("tenants"),
	Param(TenantId::SPEC),
	Literal("providers"),
	Param(TenantProviderId::SPEC),
];
const POLICIES: &[Segment] = &[
	Literal("tenants"),
	Param(TenantId::SPEC),
	Literal("providers"),
	Param(TenantProviderId::SPEC),
	Literal("policies"),
];
const POLICY: &[Segment] = &[
	Literal("tenants"),
	Param(TenantId::SPEC),
	Literal("providers"),
	Param(TenantProviderId::SPEC),
	Literal("policies"),
	Param(TenantProviderPolicyId::SPEC),
];
const VALIDATE: &[Segment] = &[Literal("tenants"), Param(TenantId::SPEC), Literal("validate")];

/// `GET v1/providers`
pub const LIST_PROVIDERS: Operation<Vec<Provider>> =
	Operation::new("listProviders", Get, PROVIDERS);
/// `POST v1/providers`
pub const CREATE_PROVIDER: Operation<Provider> =
	Operation::new("createProvider", Post, PROVIDERS).with_body();
/// `GET v1/providers/{providerId}`
pub const GET_PROVIDER: Operation<Provider> = Operation::new("getProvider", Get, PROVIDER);
/// `DELETE v1/providers/{providerId}`
pub const DELETE_PROVIDER: Operation<EmptyResponse> =
	Operation::new("deleteProvider", Delete, PROVIDER);

/// `GET v1/providers/{providerId}/clients`
pub const LIST_CLIENTS: Operation<Vec<Client>> = Operation::new("listClients", Get, CLIENTS);
/// `POST v1/providers/{providerId}/clients`
pub const CREATE_CLIENT: Operation<Client> =
	Operation::new("createClient", Post, CLIENTS).with_body();
/// `GET v1/providers/{providerId}/clients/{clientId}`
pub const GET_CLIENT: Operation<Client> = Operation::new("getClient", Get, CLIENT);
/// `DELETE v1/providers/{providerId}/clients/{clientId}`
pub const DELETE_CLIENT: Operation<EmptyResponse> =
	Operation::new("deleteClient", Delete, CLIENT);
/// `POST v1/providers/{providerId}/clients/{clientId}/tokens`
pub const CREATE_TOKEN: Operation<Token> =
	Operation::new("createToken", Post, TOKENS).with_body();

/// `GET v1/providers/{providerId}/domains`
pub const LIST_DOMAINS: Operation<Vec<Domain>> = Operation::new("listDomains", Get, DOMAINS);
/// `POST v1/providers/{providerId}/domains`
pub const ADD_DOMAIN: Operation<Domain> = Operation::new("addDomain", Post, DOMAINS).with_body();
/// `GET v1/providers/{providerId}/domains/{domainId}`
pub const GET_DOMAIN: Operation<Domain> = Operation::new("getDomain", Get, DOMAIN);
/// `DELETE v1/providers/{providerId}/domains/{domainId}`
pub const DELETE_DOMAIN: Operation<EmptyResponse> =
	Operation::new("deleteDomain", Delete, DOMAIN);
/// `POST v1/providers/{providerId}/domains/{domainId}/verify`
pub const VERIFY_DOMAIN: Operation<DomainVerification> =
	Operation::new("verifyDomain", Post, DOMAIN_VERIFY);

/// `GET v1/tenants`
pub const LIST_TENANTS: Operation<Vec<Tenant>> = Operation::new("listTenants", Get, TENANTS);
/// `POST v1/tenants`
pub const CREATE_TENANT: Operation<Tenant> =
	Operation::new("createTenant", Post, TENANTS).with_body();
/// `GET v1/tenants/{tenantId}`
pub const GET_TENANT: Operation<Tenant> = Operation::new("getTenant", Get, TENANT);
/// `DELETE v1/tenants/{tenantId}`
pub const DELETE_TENANT: Operation<EmptyResponse> =
	Operation::new("deleteTenant", Delete, TENANT);

/// `GET v1/tenants/{tenantId}/providers`
pub const LIST_TENANT_PROVIDERS: Operation<Vec<TenantProvider>> =
	Operation::new("listTenantProviders", Get, TENANT_PROVIDERS);
/// `POST v1/tenants/{tenantId}/providers`
pub const CREATE_TENANT_PROVIDER: Operation<TenantProvider> =
	Operation::new("createTenantProvider", Post, TENANT_PROVIDERS).with_body();
/// `GET v1/tenants/{tenantId}/providers/{tenantProviderId}`
pub const GET_TENANT_PROVIDER: Operation<TenantProvider> =
	Operation::new("getTenantProvider", Get, TENANT_PROVIDER);
/// `DELETE v1/tenants/{tenantId}/providers/{tenantProviderId}`
pub const DELETE_TENANT_PROVIDER: Operation<EmptyResponse> =
	Operation::new("deleteTenantProvider", Delete, TENANT_PROVIDER);

/// `GET v1/tenants/{tenantId}/providers/{tenantProviderId}/policies`
pub const LIST_TENANT_PROVIDER_POLICIES: Operation<Vec<TenantProviderPolicy>> =
	Operation::new("listTenantProviderPolicies", Get, POLICIES);
/// `POST v1/tenants/{tenantId}/providers/{tenantProviderId}/policies`
pub const CREATE_TENANT_PROVIDER_POLICY: Operation<TenantProviderPolicy> =
	Operation::new("createTenantProviderPolicy", Post, POLICIES).with_body();
/// `GET v1/tenants/{tenantId}/providers/{tenantProviderId}/policies/{tenantProviderPolicyId}`
pub const GET_TENANT_PROVIDER_POLICY: Operation<TenantProviderPolicy> =
	Operation::new("getTenantProviderPolicy", Get, POLICY);
/// `DELETE v1/tenants/{tenantId}/providers/{tenantProviderId}/policies/{tenantProviderPolicyId}`
pub const DELETE_TENANT_PROVIDER_POLICY: Operation<EmptyResponse> =
	Operation::new("deleteTenantProviderPolicy", Delete, POLICY);

/// `POST v1/tenants/{tenantId}/validate`
pub const VALIDATE_TOKEN: Operation<TokenValidation> =
	Operation::new("validateToken", Post, VALIDATE).with_body();

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::http::HttpMethod;

	#[test]
	fn templates_match_the_http_surface() {
		let table: [(&str, HttpMethod, String); 8] = [
			(LIST_PROVIDERS.name, LIST_PROVIDERS.method, LIST_PROVIDERS.template()),
			(CREATE_TOKEN.name, CREATE_TOKEN.method, CREATE_TOKEN.template()),
			(VERIFY_DOMAIN.name, VERIFY_DOMAIN.method, VERIFY_DOMAIN.template()),
			(DELETE_TENANT.name, DELETE_TENANT.method, DELETE_TENANT.template()),
			(GET_TENANT_PROVIDER.name, GET_TENANT_PROVIDER.method, GET_TENANT_PROVIDER.template()),
			(
				DELETE_TENANT_PROVIDER_POLICY.name,
				DELETE_TENANT_PROVIDER_POLICY.method,
				DELETE_TENANT_PROVIDER_POLICY.template(),
			),
			(VALIDATE_TOKEN.name, VALIDATE_TOKEN.method, VALIDATE_TOKEN.template()),
			(ADD_DOMAIN.name, ADD_DOMAIN.method, ADD_DOMAIN.template()),
		];
		let expected = [
			("listProviders", Get, "v1/providers"),
			("createToken", Post, "v1/providers/{providerId}/clients/{clientId}/tokens"),
			("verifyDomain", Post, "v1/providers/{providerId}/domains/{domainId}/verify"),
			("deleteTenant", Delete, "v1/tenants/{tenantId}"),
			("getTenantProvider", Get, "v1/tenants/{tenantId}/providers/{tenantProviderId}"),
			(
				"deleteTenantProviderPolicy",
				Delete,
				"v1/tenants/{tenantId}/providers/{tenantProviderId}/policies/{tenantProviderPolicyId}",
			),
			("validateToken", Post, "v1/tenants/{tenantId}/validate"),
			("addDomain", Post, "v1/providers/{providerId}/domains"),
		];

		for ((name, method, template), (want_name, want_method, want_template)) in
			table.into_iter().zip(expected)
		{
			assert_eq!(name, want_name);
			assert_eq!(method, want_method, "{name} uses the wrong method.");
			assert_eq!(template, want_template, "{name} targets the wrong route.");
		}
	}

	#[test]
	fn bodies_only_travel_with_create_and_validate_calls() {
		assert!(CREATE_PROVIDER.has_body);
		assert!(CREATE_TENANT_PROVIDER_POLICY.has_body);
		assert!(VALIDATE_TOKEN.has_body);
		assert!(!VERIFY_DOMAIN.has_body);
		assert!(!DELETE_CLIENT.has_body);
		assert!(!GET_TENANT_PROVIDER_POLICY.has_body);
	}

	#[test]
	fn params_follow_argument_order() {
		let fields = GET_TENANT_PROVIDER_POLICY.params().map(|spec| spec.field).collect::<Vec<_>>();

		assert_eq!(fields, ["tenantId", "tenantProviderId", "tenantProviderPolicyId"]);
		assert_eq!(LIST_TENANTS.params().count(), 0);
	}
}
