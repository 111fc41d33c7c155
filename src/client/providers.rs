//! Providers, their clients and domains, and token issuance.

// self
use crate::{
	_prelude::*,
	client::UseGrant,
	contract::{self, EmptyResponse},
	http::ApiHttpClient,
	model::{
		AddDomain, Client, CreateClient, CreateProvider, CreateToken, Domain, DomainVerification,
		Provider, Token,
	},
};

impl<C> UseGrant<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists every provider.
	pub async fn list_providers(&self) -> Result<Vec<Provider>> {
		self.fetch(&contract::LIST_PROVIDERS, &[]).await
	}

	/// Creates a provider.
	pub async fn create_provider(&self, provider: &CreateProvider) -> Result<Provider> {
		self.send(&contract::CREATE_PROVIDER, &[], provider).await
	}

	/// Fetches a provider.
	pub async fn get_provider(&self, provider_id: &str) -> Result<Provider> {
		self.fetch(&contract::GET_PROVIDER, &[provider_id]).await
	}

	/// Deletes a provider; the reply body is returned verbatim.
	pub async fn delete_provider(&self, provider_id: &str) -> Result<EmptyResponse> {
		self.fetch(&contract::DELETE_PROVIDER, &[provider_id]).await
	}

	/// Lists the clients registered under a provider.
	pub async fn list_clients(&self, provider_id: &str) -> Result<Vec<Client>> {
		self.fetch(&contract::LIST_CLIENTS, &[provider_id]).await
	}

	/// Registers a client under a provider.
	pub async fn create_client(&self, provider_id: &str, client: &CreateClient) -> Result<Client> {
		self.send(&contract::CREATE_CLIENT, &[provider_id], client).await
	}

	/// Fetches a client.
	pub async fn get_client(&self, provider_id: &str, client_id: &str) -> Result<Client> {
		self.fetch(&contract::GET_CLIENT, &[provider_id, client_id]).await
	}

	/// Deletes a client.
	pub async fn delete_client(&self, provider_id: &str, client_id: &str) -> Result<EmptyResponse> {
		self.fetch(&contract::DELETE_CLIENT, &[provider_id, client_id]).await
	}

	/// Issues an access token for a client.
	///
	/// Pass `&CreateToken::default()` to accept the service defaults.
	pub async fn create_token(
		&self,
		provider_id: &str,
		client_id: &str,
		options: &CreateToken,
	) -> Result<Token> {
		self.send(&contract::CREATE_TOKEN, &[provider_id, client_id], options).await
	}

	/// Lists the domains attached to a provider.
	pub async fn list_domains(&self, provider_id: &str) -> Result<Vec<Domain>> {
		self.fetch(&contract::LIST_DOMAINS, &[provider_id]).await
	}

	/// Attaches a domain to a provider.
	pub async fn add_domain(&self, provider_id: &str, domain: &AddDomain) -> Result<Domain> {
		self.send(&contract::ADD_DOMAIN, &[provider_id], domain).await
	}

	/// Fetches a domain.
	pub async fn get_domain(&self, provider_id: &str, domain_id: &str) -> Result<Domain> {
		self.fetch(&contract::GET_DOMAIN, &[provider_id, domain_id]).await
	}

	/// Detaches a domain.
	pub async fn delete_domain(&self, provider_id: &str, domain_id: &str) -> Result<EmptyResponse> {
		self.fetch(&contract::DELETE_DOMAIN, &[provider_id, domain_id]).await
	}

	/// Asks the service to check the domain's DNS verification record.
	pub async fn verify_domain(
		&self,
		provider_id: &str,
		domain_id: &str,
	) -> Result<DomainVerification> {
		self.fetch(&contract::VERIFY_DOMAIN, &[provider_id, domain_id]).await
	}
}
