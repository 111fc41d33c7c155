//! Transport primitives for UseGrant API calls.
//!
//! The façade depends on HTTP only through [`ApiHttpClient`]. Each call hands the transport
//! one fully validated [`ApiRequest`] and expects one [`ApiResponse`] back; timeouts,
//! cancellation, and retries belong to the transport. [`ReqwestHttpClient`] is the default
//! implementation and applies a [`RetryPolicy`] when one is configured.

pub mod retry;
#[cfg(feature = "reqwest")] pub mod transport;

pub use retry::*;
#[cfg(feature = "reqwest")] pub use transport::*;

// self
use crate::{_prelude::*, config::ApiKey, error::TransportError};

/// Boxed future returned by [`ApiHttpClient::execute`].
pub type HttpFuture<'a> = Pin<Box<dyn Future<Output = Result<ApiResponse, TransportError>> + 'a + Send>>;

/// HTTP methods used by the UseGrant API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
	/// Reads and listings.
	Get,
	/// Creation, verification, and validation actions.
	Post,
	/// Removals.
	Delete,
}
impl HttpMethod {
	/// Returns the canonical method token.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
			Self::Delete => "DELETE",
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// A single outbound request, built from validated arguments only.
#[derive(Clone)]
pub struct ApiRequest {
	/// Operation name the request belongs to.
	pub operation: &'static str,
	/// HTTP method.
	pub method: HttpMethod,
	/// Absolute request URL.
	pub url: Url,
	/// Credential sent as a bearer token.
	pub api_key: ApiKey,
	/// JSON body, when the operation carries one.
	pub body: Option<Vec<u8>>,
}
impl ApiRequest {
	/// Value of the `Authorization` header.
	pub fn authorization(&self) -> String {
		format!("Bearer {}", self.api_key.expose())
	}
}
impl Debug for ApiRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiRequest")
			.field("operation", &self.operation)
			.field("method", &self.method)
			.field("url", &self.url.as_str())
			.field("api_key", &self.api_key)
			.field("body_len", &self.body.as_ref().map(Vec::len))
			.finish()
	}
}

/// Response returned by a transport, whatever its status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiResponse {
	/// HTTP status code.
	pub status: u16,
	/// Retry-After hint expressed as a relative duration.
	pub retry_after: Option<Duration>,
	/// Raw response body.
	pub body: Vec<u8>,
}
impl ApiResponse {
	/// Creates a response without a Retry-After hint.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, retry_after: None, body: body.into() }
	}

	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Converts non-2xx responses into [`TransportError::Status`].
	pub fn error_for_status(self) -> Result<Self, TransportError> {
		if self.is_success() { Ok(self) } else { Err(TransportError::status(self.status, &self.body)) }
	}
}

/// Abstraction over HTTP transports able to execute UseGrant API requests.
///
/// Implementations must be `Send + Sync + 'static` so one transport can be shared by many
/// façade clones, and the futures they return must be `Send`. A transport performs at most
/// the attempts its own retry policy allows; the façade never retries on its behalf.
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Sends `request` and resolves with the final response, regardless of status.
	fn execute(&self, request: ApiRequest) -> HttpFuture<'_>;
}
