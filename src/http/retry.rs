//! Retry policy applied by transports.
//!
//! Semantics follow the browser-side client the service was designed around: only
//! idempotent methods retry, a fixed set of statuses is retriable, `Retry-After` is honored
//! for 413/429/503, and backoff doubles from a base delay. Timeouts and cancellations are
//! never retried.

// crates.io
use rand::Rng;
// self
use crate::{_prelude::*, error::TransportError, http::HttpMethod};

/// Retry behavior for a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
	/// Maximum number of retries after the first attempt.
	pub limit: u32,
	/// Methods eligible for retries.
	pub methods: Vec<HttpMethod>,
	/// Statuses that trigger a retry.
	pub status_codes: Vec<u16>,
	/// Statuses whose `Retry-After` header dictates the delay.
	pub after_status_codes: Vec<u16>,
	/// Give up instead of waiting when `Retry-After` exceeds this.
	pub max_retry_after: Option<Duration>,
	/// Delay before the first retry; doubles on every further retry.
	pub backoff_base: Duration,
	/// Upper bound for computed backoff delays.
	pub backoff_limit: Option<Duration>,
	/// Randomize computed delays in `[0, delay]`.
	pub jitter: bool,
}
impl RetryPolicy {
	/// Policy performing a single attempt.
	pub fn disabled() -> Self {
		Self { limit: 0, ..Self::default() }
	}

	/// Overrides the retry limit.
	pub fn with_limit(mut self, limit: u32) -> Self {
		self.limit = limit;

		self
	}

	/// Overrides the retriable methods.
	pub fn with_methods(mut self, methods: impl IntoIterator<Item = HttpMethod>) -> Self {
		self.methods = methods.into_iter().collect();

		self
	}

	/// Overrides the base backoff delay.
	pub fn with_backoff_base(mut self, base: Duration) -> Self {
		self.backoff_base = if base.is_negative() { Duration::ZERO } else { base };

		self
	}

	/// Caps computed backoff delays.
	pub fn with_backoff_limit(mut self, limit: Duration) -> Self {
		self.backoff_limit = Some(limit);

		self
	}

	/// Caps accepted `Retry-After` hints.
	pub fn with_max_retry_after(mut self, max: Duration) -> Self {
		self.max_retry_after = Some(max);

		self
	}

	/// Enables full jitter on computed delays.
	pub fn with_jitter(mut self, jitter: bool) -> Self {
		self.jitter = jitter;

		self
	}

	/// Delay before retrying after `attempt` (1-based) ended with `status`, if a retry is due.
	pub fn delay_after_status(
		&self,
		method: HttpMethod,
		status: u16,
		retry_after: Option<Duration>,
		attempt: u32,
	) -> Option<Duration> {
		if !self.allows(method, attempt) || !self.status_codes.contains(&status) {
			return None;
		}
		if self.after_status_codes.contains(&status) {
			if let Some(hint) = retry_after {
				return match self.max_retry_after {
					Some(max) if hint > max => None,
					_ => Some(hint),
				};
			}
			// 413 without a hint means the payload will never fit.
			if status == 413 {
				return None;
			}
		}

		Some(self.backoff(attempt))
	}

	/// Delay before retrying after `attempt` (1-based) failed with `error`, if a retry is due.
	pub fn delay_after_error(
		&self,
		method: HttpMethod,
		error: &TransportError,
		attempt: u32,
	) -> Option<Duration> {
		match error {
			TransportError::Network { .. } if self.allows(method, attempt) =>
				Some(self.backoff(attempt)),
			_ => None,
		}
	}

	/// Computed backoff for `attempt`, before jitter: `base * 2^(attempt - 1)`, capped.
	pub fn nominal_backoff(&self, attempt: u32) -> Duration {
		let exponent = attempt.saturating_sub(1).min(16);
		let delay = self.backoff_base.saturating_mul(1_i32 << exponent);

		match self.backoff_limit {
			Some(limit) if delay > limit => limit,
			_ => delay,
		}
	}

	fn allows(&self, method: HttpMethod, attempt: u32) -> bool {
		attempt <= self.limit && self.methods.contains(&method)
	}

	fn backoff(&self, attempt: u32) -> Duration {
		let delay = self.nominal_backoff(attempt);

		if !self.jitter {
			return delay;
		}

		let ceiling = i64::try_from(delay.whole_milliseconds()).unwrap_or(i64::MAX).max(0);

		Duration::milliseconds(rand::rng().random_range(0..=ceiling))
	}
}
impl Default for RetryPolicy {
	fn default() -> Self {
		Self {
			limit: 2,
			methods: vec![HttpMethod::Get, HttpMethod::Delete],
			status_codes: vec![408, 413, 429, 500, 502, 503, 504],
			after_status_codes: vec![413, 429, 503],
			max_retry_after: None,
			backoff_base: Duration::milliseconds(300),
			backoff_limit: None,
			jitter: false,
		}
	}
}
