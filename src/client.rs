//! The UseGrant façade: one method per remote operation.
//!
//! Every method funnels into the same routine: validate identifiers and body against the
//! operation's contract, build the URL from the validated segments, send exactly one
//! request through the configured [`ApiHttpClient`], then decode the reply into the
//! operation's result type. Validation failures never reach the transport.

mod providers;
mod tenants;

// self
use crate::{
	_prelude::*,
	config::{API_KEY_ENV, ApiKey, ClientOptions, parse_base_url},
	contract::{API_VERSION, Operation, Reply, Segment},
	error::ConfigError,
	http::{ApiHttpClient, ApiRequest},
	obs::{OperationOutcome, OperationSpan, record_operation_outcome},
	schema::{Checker, Schema},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Typed client for the UseGrant API.
///
/// Cloning is cheap; clones share the transport.
pub struct UseGrant<C>
where
	C: ?Sized + ApiHttpClient,
{
	http_client: Arc<C>,
	api_key: ApiKey,
	base_url: Url,
}
impl<C> UseGrant<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a client that sends every request through a caller-provided transport.
	///
	/// Timeout, retry, and cancellation are the transport's concern.
	pub fn with_http_client(
		api_key: impl Into<String>,
		base_url: &str,
		http_client: impl Into<Arc<C>>,
	) -> Result<Self, ConfigError> {
		Ok(Self {
			http_client: http_client.into(),
			api_key: ApiKey::new(api_key)?,
			base_url: parse_base_url(base_url)?,
		})
	}

	/// Base URL routes are appended to.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Shared transport.
	pub fn http_client(&self) -> &Arc<C> {
		&self.http_client
	}

	async fn fetch<R>(&self, op: &Operation<R>, ids: &[&str]) -> Result<R>
	where
		R: Reply,
	{
		self.call(op, ids, None::<&NoBody>).await
	}

	async fn send<R, B>(&self, op: &Operation<R>, ids: &[&str], body: &B) -> Result<R>
	where
		R: Reply,
		B: Schema,
	{
		self.call(op, ids, Some(body)).await
	}

	async fn call<R, B>(&self, op: &Operation<R>, ids: &[&str], body: Option<&B>) -> Result<R>
	where
		R: Reply,
		B: Schema,
	{
		let span = OperationSpan::new(op.name, op.method);

		span.instrument(async move {
			record_operation_outcome(op.name, OperationOutcome::Attempt);

			let result = self.dispatch(op, ids, body).await;
			let outcome =
				if result.is_ok() { OperationOutcome::Success } else { OperationOutcome::Failure };

			record_operation_outcome(op.name, outcome);

			result
		})
		.await
	}

	async fn dispatch<R, B>(&self, op: &Operation<R>, ids: &[&str], body: Option<&B>) -> Result<R>
	where
		R: Reply,
		B: Schema,
	{
		let request = self.prepare(op, ids, body)?;
		let response = self.http_client.execute(request).await?.error_for_status()?;

		Ok(R::decode(response.status, &response.body)?)
	}

	fn prepare<R, B>(&self, op: &Operation<R>, ids: &[&str], body: Option<&B>) -> Result<ApiRequest>
	where
		R: Reply,
		B: Schema,
	{
		debug_assert_eq!(ids.len(), op.params().count(), "`{}` got the wrong ID count.", op.name);

		let mut checker = Checker::default();
		let mut ids = ids.iter().copied();
		let mut segments = Vec::with_capacity(op.route.len() + 1);

		segments.push(API_VERSION);

		for segment in op.route {
			match segment {
				Segment::Literal(literal) => segments.push(*literal),
				Segment::Param(spec) => {
					let raw = ids.next().unwrap_or_default();

					checker.field(spec.field, |c| {
						if let Err(e) = spec.check(raw) {
							c.report(e.to_string());
						}
					});
					segments.push(raw);
				},
			}
		}

		let payload = body.map(|body| body.check(&mut checker));
		let payload = checker.finish(payload).map_err(|e| e.for_operation(op.name))?;
		let url = self.route_url(&segments)?;
		let body =
			payload.map(|payload| serde_json::to_vec(&payload)).transpose().map_err(ConfigError::from)?;

		Ok(ApiRequest {
			operation: op.name,
			method: op.method,
			url,
			api_key: self.api_key.clone(),
			body,
		})
	}

	fn route_url(&self, segments: &[&str]) -> Result<Url, ConfigError> {
		let mut url = self.base_url.clone();

		url.path_segments_mut()
			.map_err(|_| ConfigError::UnsupportedBaseUrl { url: self.base_url.to_string() })?
			.pop_if_empty()
			.extend(segments);

		Ok(url)
	}
}
#[cfg(feature = "reqwest")]
impl UseGrant<ReqwestHttpClient> {
	/// Creates a client for the production endpoint with default options.
	pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
		Self::with_options(api_key, ClientOptions::builder().build()?)
	}

	/// Creates a reqwest-backed client honoring `options`.
	pub fn with_options(
		api_key: impl Into<String>,
		options: ClientOptions,
	) -> Result<Self, ConfigError> {
		let api_key = ApiKey::new(api_key)?;
		let http_client = ReqwestHttpClient::from_options(&options)?;

		Ok(Self { http_client: Arc::new(http_client), api_key, base_url: options.base_url().clone() })
	}

	/// Creates a client from `USEGRANT_API_KEY` and the optional `USEGRANT_BASE_URL`.
	pub fn from_env() -> Result<Self, ConfigError> {
		let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();

		Self::with_options(api_key, ClientOptions::from_env()?)
	}
}
impl<C> Clone for UseGrant<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: Arc::clone(&self.http_client),
			api_key: self.api_key.clone(),
			base_url: self.base_url.clone(),
		}
	}
}
impl<C> Debug for UseGrant<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("UseGrant")
			.field("base_url", &self.base_url.as_str())
			.field("api_key", &self.api_key)
			.finish()
	}
}

/// Placeholder body for operations that send none.
enum NoBody {}
impl Schema for NoBody {
	type Output = ();

	fn check(&self, _: &mut Checker) -> Self::Output {
		match *self {}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		contract::{CREATE_PROVIDER, DELETE_TENANT_PROVIDER_POLICY, LIST_TENANTS},
		error::Error,
		http::HttpFuture,
		model::CreateProvider,
	};

	struct Unreachable;
	impl ApiHttpClient for Unreachable {
		fn execute(&self, _: ApiRequest) -> HttpFuture<'_> {
			Box::pin(async { Err(crate::error::TransportError::Cancelled) })
		}
	}

	fn client(base_url: &str) -> UseGrant<Unreachable> {
		UseGrant::with_http_client("key", base_url, Unreachable).expect("Client should build.")
	}

	#[test]
	fn construction_requires_an_api_key() {
		assert!(matches!(
			UseGrant::<Unreachable>::with_http_client("", "https://sdk.usegrant.dev", Unreachable),
			Err(ConfigError::MissingApiKey)
		));
		assert!(matches!(
			UseGrant::<Unreachable>::with_http_client("key", "::", Unreachable),
			Err(ConfigError::InvalidBaseUrl { .. })
		));
	}

	#[test]
	fn routes_are_built_from_encoded_segments() {
		let request = client("http://localhost:8080")
			.prepare(&DELETE_TENANT_PROVIDER_POLICY, &["t 1", "p/2", "pol?"], None::<&NoBody>)
			.expect("IDs should be valid.");

		assert_eq!(
			request.url.as_str(),
			"http://localhost:8080/v1/tenants/t%201/providers/p%2F2/policies/pol%3F"
		);
		assert!(request.body.is_none());

		let request = client("http://localhost:8080/proxy/")
			.prepare(&LIST_TENANTS, &[], None::<&NoBody>)
			.expect("Listing takes no IDs.");

		assert_eq!(request.url.as_str(), "http://localhost:8080/proxy/v1/tenants");
	}

	#[test]
	fn identifier_and_body_violations_are_aggregated() {
		let err = client("http://localhost")
			.prepare(&DELETE_TENANT_PROVIDER_POLICY, &["t", "", ""], None::<&NoBody>)
			.expect_err("Empty IDs should fail.");
		let err = match err {
			Error::Validation(err) => err,
			other => panic!("Expected a validation error, got {other:?}."),
		};

		assert_eq!(err.operation, "deleteTenantProviderPolicy");
		assert_eq!(err.violations.len(), 2);
		assert!(err.has("tenantProviderId"));
		assert!(err.has("tenantProviderPolicyId"));

		let err = client("http://localhost")
			.prepare(&CREATE_PROVIDER, &[], Some(&CreateProvider::new("Ac", "")))
			.expect_err("Short names should fail.");

		assert!(err.is_validation());
	}

	#[test]
	fn dot_segments_cannot_shorten_the_route() {
		for ids in [["..", "tp", "pol"], ["t", ".", "pol"], ["t", "tp", ".."]] {
			let err = client("https://sdk.usegrant.dev")
				.prepare(&DELETE_TENANT_PROVIDER_POLICY, &ids, None::<&NoBody>)
				.expect_err("Dot segments should fail.");

			assert!(err.is_validation(), "{ids:?} produced {err:?}.");
		}
	}

	#[test]
	fn debug_redacts_the_api_key() {
		let rendered = format!("{:?}", client("http://localhost"));

		assert!(rendered.contains("<redacted>"));
		assert!(!rendered.contains("\"key\""));
	}
}
