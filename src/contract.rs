//! Operation contracts binding each remote operation to its arguments and result schema.
//!
//! An [`Operation`] names the operation, its HTTP method, the route it targets (literal
//! segments interleaved with identifier parameters), and whether a validated body travels
//! with it. The result schema is the `R: Reply` type parameter, so the façade can run one
//! generic validate → call → decode routine for every endpoint.

pub mod catalog;

pub use catalog::*;

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	error::{ResponseError, body_preview},
	http::HttpMethod,
	model::{
		Client, Domain, DomainVerification, IdSpec, Provider, Tenant, TenantProvider,
		TenantProviderPolicy, Token, TokenValidation,
	},
};

/// Version prefix prepended to every route.
pub const API_VERSION: &str = "v1";

/// One route segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
	/// Fixed path segment.
	Literal(&'static str),
	/// Identifier argument, validated before it is placed in the path.
	Param(IdSpec),
}

/// Function contract for a single remote operation.
pub struct Operation<R> {
	/// camelCase operation name, used in errors, spans, and metrics.
	pub name: &'static str,
	/// HTTP method.
	pub method: HttpMethod,
	/// Route below [`API_VERSION`].
	pub route: &'static [Segment],
	/// Whether the operation sends a JSON body.
	pub has_body: bool,
	reply: PhantomData<fn() -> R>,
}
impl<R> Operation<R>
where
	R: Reply,
{
	/// Declares an operation without a body.
	pub const fn new(name: &'static str, method: HttpMethod, route: &'static [Segment]) -> Self {
		Self { name, method, route, has_body: false, reply: PhantomData }
	}

	/// Declares that the operation sends a validated body.
	pub const fn with_body(self) -> Self {
		Self {
			name: self.name,
			method: self.method,
			route: self.route,
			has_body: true,
			reply: PhantomData,
		}
	}

	/// Identifier parameters in argument order.
	pub fn params(&self) -> impl Iterator<Item = IdSpec> + '_ {
		self.route.iter().filter_map(|segment| match segment {
			Segment::Param(spec) => Some(*spec),
			Segment::Literal(_) => None,
		})
	}

	/// Renders the route template (`v1/providers/{providerId}`), mainly for diagnostics.
	pub fn template(&self) -> String {
		let mut buf = String::from(API_VERSION);

		for segment in self.route {
			buf.push('/');

			match segment {
				Segment::Literal(literal) => buf.push_str(literal),
				Segment::Param(spec) => {
					buf.push('{');
					buf.push_str(spec.field);
					buf.push('}');
				},
			}
		}

		buf
	}
}
impl<R> Clone for Operation<R> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<R> Copy for Operation<R> {}
impl<R> Debug for Operation<R> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Operation")
			.field("name", &self.name)
			.field("method", &self.method)
			.field("route", &self.route)
			.field("has_body", &self.has_body)
			.finish()
	}
}

/// Result schema of an operation: decodes a successful response body.
pub trait Reply
where
	Self: Sized,
{
	/// Decodes `body`, received with `status`, into the result type.
	fn decode(status: u16, body: &[u8]) -> Result<Self, ResponseError>;
}

/// Result of deletions: the verbatim (blank) body, never parsed as JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmptyResponse(String);
impl EmptyResponse {
	/// Returns the body exactly as received.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl Reply for EmptyResponse {
	fn decode(status: u16, body: &[u8]) -> Result<Self, ResponseError> {
		let text = String::from_utf8_lossy(body);

		if !text.trim().is_empty() {
			return Err(ResponseError::UnexpectedBody { status, preview: body_preview(body) });
		}

		Ok(Self(text.into_owned()))
	}
}

macro_rules! json_reply {
	($($ty:ty),+ $(,)?) => {
		$(
			impl Reply for $ty {
				fn decode(status: u16, body: &[u8]) -> Result<Self, ResponseError> {
					decode_json(status, body)
				}
			}
		)+
	};
}

json_reply! {
	Provider,
	Vec<Provider>,
	Client,
	Vec<Client>,
	Domain,
	Vec<Domain>,
	DomainVerification,
	Token,
	Tenant,
	Vec<Tenant>,
	TenantProvider,
	Vec<TenantProvider>,
	TenantProviderPolicy,
	Vec<TenantProviderPolicy>,
	TokenValidation,
}

fn decode_json<T>(status: u16, body: &[u8]) -> Result<T, ResponseError>
where
	T: DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| ResponseError::Json { source, status })
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn empty_response_keeps_blank_body_verbatim() {
		let reply = EmptyResponse::decode(204, b"").expect("Empty body should decode.");

		assert_eq!(reply.as_str(), "");

		let reply = EmptyResponse::decode(200, b" \n").expect("Blank body should decode.");

		assert_eq!(reply.as_str(), " \n");
		assert!(matches!(
			EmptyResponse::decode(200, b"{}"),
			Err(ResponseError::UnexpectedBody { status: 200, .. })
		));
	}

	#[test]
	fn json_reply_reports_mismatch_path() {
		let err = <Vec<Provider>>::decode(
			200,
			br#"[{"id":"p-1","name":"Acme","description":"Demo","createdAt":"2024-05-01T10:00:00Z","updatedAt":42}]"#,
		)
		.expect_err("Numeric timestamps should be rejected.");

		assert_eq!(err.path().as_deref(), Some("[0].updatedAt"));
		assert!(matches!(err, ResponseError::Json { status: 200, .. }));
	}

	#[test]
	fn timestamps_outside_rfc3339_are_rejected() {
		let err = Provider::decode(
			200,
			br#"{"id":"p-1","name":"Acme","description":"Demo","createdAt":"2024-05-01T10:00:00","updatedAt":"2024-05-01T10:00:00Z"}"#,
		)
		.expect_err("Offset-less timestamps should be rejected.");

		assert_eq!(err.path().as_deref(), Some("createdAt"));

		Provider::decode(
			200,
			br#"{"id":"p-1","name":"Acme","description":"Demo","createdAt":"2024-05-01T10:00:00.123+02:00","updatedAt":"2024-05-01T10:00:00Z"}"#,
		)
		.expect("Offsets and fractional seconds should decode.");
	}

	#[test]
	fn json_reply_rejects_non_json() {
		let err = TokenValidation::decode(200, b"").expect_err("Empty body is not JSON.");

		assert!(matches!(err, ResponseError::Json { .. }));
	}
}
