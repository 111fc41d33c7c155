//! Client-level error types shared across configuration, validation, transport, and decoding.

// self
use crate::{_prelude::*, schema::ValidationError};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn StdError + Send + Sync>;

const BODY_PREVIEW_LIMIT: usize = 256;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem, raised before any request is built.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// One or more arguments failed their schema; no request was sent.
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// Network failure, timeout, cancellation, or non-2xx status.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response body does not match the declared result schema.
	#[error(transparent)]
	Response(#[from] ResponseError),
}
impl Error {
	/// Returns `true` when the call was rejected locally by argument validation.
	pub fn is_validation(&self) -> bool {
		matches!(self, Self::Validation(_))
	}

	/// HTTP status attached to the failure, when the server answered.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Transport(TransportError::Status { status, .. }) => Some(*status),
			Self::Response(ResponseError::Json { status, .. }) => Some(*status),
			Self::Response(ResponseError::UnexpectedBody { status, .. }) => Some(*status),
			_ => None,
		}
	}
}

/// Configuration failures raised synchronously while constructing or using the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// API key is missing, empty, or blank.
	#[error("API key is required.")]
	MissingApiKey,
	/// API key contains characters that cannot travel in an HTTP header.
	#[error("API key contains control characters.")]
	InvalidApiKey,
	/// Base URL cannot be parsed.
	#[error("Base URL `{url}` is invalid.")]
	InvalidBaseUrl {
		/// Raw base URL that failed to parse.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL parsed but cannot host API routes.
	#[error("Base URL `{url}` must be an http(s) URL that can carry path segments.")]
	UnsupportedBaseUrl {
		/// Offending base URL.
		url: String,
	},
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Validated request payload could not be encoded as JSON.
	#[error("Request body could not be encoded.")]
	RequestEncode(#[from] serde_json::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, timeout, cancellation, HTTP status).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the UseGrant API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// The request exceeded the configured timeout.
	#[error("Request to the UseGrant API timed out.")]
	Timeout,
	/// The configured cancellation token fired before the request completed.
	#[error("Request to the UseGrant API was cancelled.")]
	Cancelled,
	/// Server answered with a non-2xx status.
	#[error("UseGrant API responded with HTTP {status}: {body}.")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Leading part of the response body, lossily decoded.
		body: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Builds a [`TransportError::Status`] from a raw response.
	pub fn status(status: u16, body: &[u8]) -> Self {
		Self::Status { status, body: body_preview(body) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		if e.is_timeout() { Self::Timeout } else { Self::network(e) }
	}
}

/// Failures raised while decoding a successful response.
#[derive(Debug, ThisError)]
pub enum ResponseError {
	/// Body is not JSON or does not match the declared result schema.
	#[error("UseGrant API returned a body that does not match the expected schema.")]
	Json {
		/// Structured parsing failure, including the JSON path of the mismatch.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
	/// An empty body was expected but the server sent content.
	#[error("UseGrant API returned an unexpected body: {preview}.")]
	UnexpectedBody {
		/// HTTP status code of the response.
		status: u16,
		/// Leading part of the response body, lossily decoded.
		preview: String,
	},
}
impl ResponseError {
	/// JSON path of the first mismatch for [`ResponseError::Json`] failures.
	pub fn path(&self) -> Option<String> {
		match self {
			Self::Json { source, .. } => Some(source.path().to_string()),
			Self::UnexpectedBody { .. } => None,
		}
	}
}

pub(crate) fn body_preview(body: &[u8]) -> String {
	let text = String::from_utf8_lossy(body);
	let trimmed = text.trim();

	match trimmed.char_indices().nth(BODY_PREVIEW_LIMIT) {
		Some((cut, _)) => format!("{}…", &trimmed[..cut]),
		None => trimmed.to_owned(),
	}
}
