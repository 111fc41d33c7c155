//! Client configuration: credentials, base URL, timeout, retries, and cancellation.

// crates.io
use tokio_util::sync::CancellationToken;
// self
use crate::{_prelude::*, error::ConfigError, http::RetryPolicy};

/// Production endpoint of the UseGrant API.
pub const DEFAULT_BASE_URL: &str = "https://sdk.usegrant.dev";
/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "USEGRANT_API_KEY";
/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "USEGRANT_BASE_URL";
/// Per-attempt timeout applied unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::seconds(10);

/// Credential sent as `Authorization: Bearer <key>`; formatters redact it.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);
impl ApiKey {
	/// Validates and wraps an API key.
	pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
		let value = value.into();

		if value.trim().is_empty() {
			return Err(ConfigError::MissingApiKey);
		}
		if value.chars().any(char::is_control) {
			return Err(ConfigError::InvalidApiKey);
		}

		Ok(Self(value))
	}

	/// Returns the raw key. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl Debug for ApiKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ApiKey").field(&"<redacted>").finish()
	}
}
impl Display for ApiKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
impl FromStr for ApiKey {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}
impl TryFrom<&str> for ApiKey {
	type Error = ConfigError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl TryFrom<String> for ApiKey {
	type Error = ConfigError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

/// Validated client options.
#[derive(Clone, Debug)]
pub struct ClientOptions {
	base_url: Url,
	timeout: Option<Duration>,
	retry: Option<RetryPolicy>,
	cancellation: Option<CancellationToken>,
}
impl ClientOptions {
	/// Starts a builder seeded with the defaults.
	pub fn builder() -> ClientOptionsBuilder {
		ClientOptionsBuilder::default()
	}

	/// Defaults, with the base URL taken from `USEGRANT_BASE_URL` when set.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut builder = Self::builder();

		if let Some(url) = lookup(BASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
			builder = builder.base_url(url.trim());
		}

		builder.build()
	}

	/// Base URL every route is appended to.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Per-attempt timeout, if any.
	pub fn timeout(&self) -> Option<Duration> {
		self.timeout
	}

	/// Retry policy, if retries are enabled.
	pub fn retry(&self) -> Option<&RetryPolicy> {
		self.retry.as_ref()
	}

	/// Cancellation token shared with the caller, if any.
	pub fn cancellation(&self) -> Option<&CancellationToken> {
		self.cancellation.as_ref()
	}
}

/// Builder for [`ClientOptions`]; the base URL is validated in [`build`](Self::build).
#[derive(Clone, Debug)]
pub struct ClientOptionsBuilder {
	base_url: String,
	timeout: Option<Duration>,
	retry: Option<RetryPolicy>,
	cancellation: Option<CancellationToken>,
}
impl ClientOptionsBuilder {
	/// Overrides the base URL.
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.base_url = url.into();

		self
	}

	/// Overrides the per-attempt timeout.
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Disables the per-attempt timeout.
	pub fn no_timeout(mut self) -> Self {
		self.timeout = None;

		self
	}

	/// Enables retries with `policy`.
	pub fn retry(mut self, policy: RetryPolicy) -> Self {
		self.retry = Some(policy);

		self
	}

	/// Attaches a cancellation token raced against every attempt and backoff.
	pub fn cancellation(mut self, token: CancellationToken) -> Self {
		self.cancellation = Some(token);

		self
	}

	/// Validates the base URL and produces the options.
	pub fn build(self) -> Result<ClientOptions, ConfigError> {
		let base_url = parse_base_url(&self.base_url)?;

		Ok(ClientOptions {
			base_url,
			timeout: self.timeout,
			retry: self.retry,
			cancellation: self.cancellation,
		})
	}
}
impl Default for ClientOptionsBuilder {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.into(),
			timeout: Some(DEFAULT_TIMEOUT),
			retry: None,
			cancellation: None,
		}
	}
}

pub(crate) fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
	let url = Url::parse(raw)
		.map_err(|source| ConfigError::InvalidBaseUrl { url: raw.to_owned(), source })?;

	if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
		return Err(ConfigError::UnsupportedBaseUrl { url: raw.to_owned() });
	}

	Ok(url)
}
