//! External providers a tenant trusts, pinned by certificate fingerprints.

// self
use crate::{
	_prelude::*,
	model::TenantProviderId,
	schema::{Bound, Check, Checker, CountRule, NumRule, Schema, StrRule},
};

/// Payload for `createTenantProvider`.
///
/// Validation normalizes the payload: the URL is trimmed and loses one trailing slash, and
/// the audience is trimmed. The normalized value is what gets sent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenantProvider {
	/// Issuer URL of the external provider.
	pub url: String,
	/// Certificate/key fingerprints (1–5 entries, 32–64 characters each).
	pub fingerprints: Vec<String>,
	/// Audience expected in tokens from this provider (3–100 characters).
	pub audience: String,
	/// Maximum token age accepted, in hours (0–12).
	pub earliest_issuance_time_allowed: f64,
}
impl CreateTenantProvider {
	const AUDIENCE: StrRule = StrRule::new()
		.min(3, "Provider audience must be at least 3 characters long.")
		.max(100, "Provider audience must be at most 100 characters long.")
		.trimmed();
	const EARLIEST_ISSUANCE: NumRule = NumRule::new()
		.min(0., "Earliest issuance time allowed must be at least 0.")
		.max(12., "Earliest issuance time allowed must be at most 12.");
	const FINGERPRINT: StrRule = StrRule::new()
		.min(32, "Fingerprint must be at least 32 characters long.")
		.max(64, "Fingerprint must be at most 64 characters long.");
	const FINGERPRINTS: CountRule = CountRule::new(
		Bound { limit: 1, message: "At least one fingerprint is required." },
		Bound { limit: 5, message: "At most 5 fingerprints are allowed." },
	);
	const URL: StrRule =
		StrRule::new().checks(&[Check::new(is_absolute_url, "Please provide a valid URL.")]);

	/// Creates a payload from its fields.
	pub fn new<I, S>(
		url: impl Into<String>,
		fingerprints: I,
		audience: impl Into<String>,
		earliest_issuance_time_allowed: f64,
	) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			url: url.into(),
			fingerprints: fingerprints.into_iter().map(Into::into).collect(),
			audience: audience.into(),
			earliest_issuance_time_allowed,
		}
	}
}
impl Schema for CreateTenantProvider {
	type Output = Self;

	fn check(&self, checker: &mut Checker) -> Self::Output {
		let url = checker.field("url", |c| {
			let trimmed = Self::URL.check(c, self.url.trim());

			match trimmed.strip_suffix('/') {
				Some(stripped) => stripped.to_owned(),
				None => trimmed,
			}
		});
		let fingerprints = checker.field("fingerprints", |c| {
			Self::FINGERPRINTS.check(c, &self.fingerprints, |c, fingerprint| {
				Self::FINGERPRINT.check(c, fingerprint)
			})
		});
		let audience = checker.field("audience", |c| Self::AUDIENCE.check(c, &self.audience));
		let earliest_issuance_time_allowed = checker.field("earliestIssuanceTimeAllowed", |c| {
			Self::EARLIEST_ISSUANCE.check(c, self.earliest_issuance_time_allowed)
		});

		Self { url, fingerprints, audience, earliest_issuance_time_allowed }
	}
}

/// Tenant provider record returned by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantProvider {
	/// Server-assigned identifier.
	pub id: TenantProviderId,
	/// Issuer URL.
	pub url: String,
	/// Pinned fingerprints.
	pub fingerprints: Vec<String>,
	/// Expected audience.
	pub audience: String,
	/// Maximum token age accepted, in hours.
	pub earliest_issuance_time_allowed: f64,
	/// Creation instant.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Last update instant.
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}

fn is_absolute_url(value: &str) -> bool {
	Url::parse(value).is_ok()
}
