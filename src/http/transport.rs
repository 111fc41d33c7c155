//! reqwest-backed transport.

// crates.io
use reqwest::{
	Method,
	header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, RETRY_AFTER},
};
use time::format_description::well_known::Rfc2822;
use tokio_util::sync::CancellationToken;
// self
use crate::{
	_prelude::*,
	config::ClientOptions,
	error::{ConfigError, TransportError},
	http::{ApiHttpClient, ApiRequest, ApiResponse, HttpFuture, HttpMethod, RetryPolicy},
};

const JSON: &str = "application/json";

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Every attempt races the optional cancellation token. Retries happen only when a
/// [`RetryPolicy`] allows them; the default performs exactly one attempt.
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient {
	client: ReqwestClient,
	retry: RetryPolicy,
	cancellation: Option<CancellationToken>,
}
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`] without retries or cancellation.
	pub fn with_client(client: ReqwestClient) -> Self {
		Self { client, retry: RetryPolicy::disabled(), cancellation: None }
	}

	/// Builds a transport honoring the timeout, retry, and cancellation settings of `options`.
	pub fn from_options(options: &ClientOptions) -> Result<Self, ConfigError> {
		let mut builder = ReqwestClient::builder();

		if let Some(timeout) = options.timeout() {
			builder = builder.timeout(timeout.unsigned_abs());
		}

		let client = builder.build()?;

		Ok(Self {
			client,
			retry: options.retry().cloned().unwrap_or_else(RetryPolicy::disabled),
			cancellation: options.cancellation().cloned(),
		})
	}

	/// Replaces the retry policy.
	pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
		self.retry = retry;

		self
	}

	/// Attaches a cancellation token.
	pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
		self.cancellation = Some(token);

		self
	}

	/// Retry policy applied to every request.
	pub fn retry(&self) -> &RetryPolicy {
		&self.retry
	}

	async fn send_once(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
		let mut builder = self
			.client
			.request(request.method.into(), request.url.clone())
			.header(AUTHORIZATION, request.authorization())
			.header(ACCEPT, JSON);

		if let Some(body) = &request.body {
			builder = builder.header(CONTENT_TYPE, JSON).body(body.clone());
		}

		let response = builder.send().await?;
		let status = response.status().as_u16();
		let retry_after = parse_retry_after(response.headers());
		let body = response.bytes().await?.to_vec();

		Ok(ApiResponse { status, retry_after, body })
	}

	async fn cancellable<F, T>(&self, fut: F) -> Result<T, TransportError>
	where
		F: Future<Output = Result<T, TransportError>>,
	{
		match &self.cancellation {
			Some(token) => tokio::select! {
				biased;
				_ = token.cancelled() => Err(TransportError::Cancelled),
				result = fut => result,
			},
			None => fut.await,
		}
	}

	async fn run(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
		let mut attempt = 0;

		loop {
			attempt += 1;

			let outcome = self.cancellable(self.send_once(&request)).await;
			let delay = match &outcome {
				Ok(response) if response.is_success() => None,
				Ok(response) => self.retry.delay_after_status(
					request.method,
					response.status,
					response.retry_after,
					attempt,
				),
				Err(e) => self.retry.delay_after_error(request.method, e, attempt),
			};
			let Some(delay) = delay else {
				return outcome;
			};

			#[cfg(feature = "tracing")]
			tracing::warn!(
				operation = request.operation,
				attempt,
				delay_ms = delay.whole_milliseconds() as u64,
				"Retrying UseGrant request."
			);

			self.cancellable(async {
				tokio::time::sleep(delay.unsigned_abs()).await;

				Ok(())
			})
			.await?;
		}
	}
}
impl Default for ReqwestHttpClient {
	fn default() -> Self {
		Self::with_client(ReqwestClient::default())
	}
}
impl ApiHttpClient for ReqwestHttpClient {
	fn execute(&self, request: ApiRequest) -> HttpFuture<'_> {
		Box::pin(self.run(request))
	}
}

impl From<HttpMethod> for Method {
	fn from(method: HttpMethod) -> Self {
		match method {
			HttpMethod::Get => Method::GET,
			HttpMethod::Post => Method::POST,
			HttpMethod::Delete => Method::DELETE,
		}
	}
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u32>() {
		return Some(Duration::seconds(secs.into()));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		return Some(if delta.is_positive() { delta } else { Duration::ZERO });
	}

	None
}

#[cfg(test)]
mod tests {
	// crates.io
	use reqwest::header::HeaderValue;
	// self
	use super::*;

	fn headers_with(value: &'static str) -> HeaderMap {
		let mut headers = HeaderMap::new();

		headers.insert(RETRY_AFTER, HeaderValue::from_static(value));

		headers
	}

	#[test]
	fn retry_after_accepts_seconds_and_dates() {
		assert_eq!(parse_retry_after(&headers_with("7")), Some(Duration::seconds(7)));
		assert_eq!(
			parse_retry_after(&headers_with("Wed, 21 Oct 2015 07:28:00 +0000")),
			Some(Duration::ZERO)
		);
		assert_eq!(parse_retry_after(&headers_with("soon")), None);
		assert_eq!(parse_retry_after(&HeaderMap::new()), None);
	}

	#[test]
	fn methods_map_onto_reqwest() {
		assert_eq!(Method::from(HttpMethod::Get), Method::GET);
		assert_eq!(Method::from(HttpMethod::Delete), Method::DELETE);
	}

	#[test]
	fn default_transport_does_not_retry() {
		assert_eq!(ReqwestHttpClient::default().retry().limit, 0);
	}
}
