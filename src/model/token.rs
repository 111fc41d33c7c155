//! Access token issuance and tenant-side token validation.

// self
use crate::{
	_prelude::*,
	model::TenantProviderPolicyId,
	schema::{Checker, NumRule, Schema},
};

/// Payload for `createToken`; every field is optional and omitted when unset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateToken {
	/// Requested lifetime, bounded by [`CreateToken::MAX_EXPIRES_IN`].
	#[serde(skip_serializing_if = "Option::is_none")]
	pub expires_in: Option<u64>,
	/// Use the `at+jwt` token type in the JWT header.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub use_jwt_type: Option<bool>,
	/// Emit the audience claim as an array.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub audience_as_array: Option<bool>,
	/// Issue from the provider's default domain even when custom domains exist.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub force_default_domain: Option<bool>,
}
impl CreateToken {
	/// Largest `expiresIn` accepted locally.
	///
	/// The service's 48-hour guard is expressed in milliseconds, so values up to
	/// 172 800 000 pass and the server enforces anything tighter.
	pub const MAX_EXPIRES_IN: u64 = 48 * 60 * 60 * 1_000;

	const EXPIRES_IN: NumRule =
		NumRule::new().max(Self::MAX_EXPIRES_IN as f64, "Expires in must be less than 48 hours");

	/// Sets the token lifetime.
	pub fn expires_in(mut self, seconds: u64) -> Self {
		self.expires_in = Some(seconds);

		self
	}

	/// Toggles the `at+jwt` header type.
	pub fn use_jwt_type(mut self, enabled: bool) -> Self {
		self.use_jwt_type = Some(enabled);

		self
	}

	/// Toggles array-shaped audience claims.
	pub fn audience_as_array(mut self, enabled: bool) -> Self {
		self.audience_as_array = Some(enabled);

		self
	}

	/// Toggles issuance from the default domain.
	pub fn force_default_domain(mut self, enabled: bool) -> Self {
		self.force_default_domain = Some(enabled);

		self
	}
}
impl Schema for CreateToken {
	type Output = Self;

	fn check(&self, checker: &mut Checker) -> Self::Output {
		if let Some(seconds) = self.expires_in {
			checker.field("expiresIn", |c| Self::EXPIRES_IN.check(c, seconds as f64));
		}

		self.clone()
	}
}

/// Token type tag; the service only issues bearer tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenType {
	/// `Bearer`.
	Bearer,
}

/// Access token returned by `createToken`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
	/// Signed access token; callers must avoid logging it.
	pub access_token: String,
	/// Expiry instant.
	#[serde(with = "time::serde::rfc3339")]
	pub expires_at: OffsetDateTime,
	/// Token type tag.
	#[serde(rename = "type")]
	pub token_type: TokenType,
}
impl Token {
	/// Returns `true` if the token is expired at `instant`.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		instant >= self.expires_at
	}
}
impl Debug for Token {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Token")
			.field("access_token", &"<redacted>")
			.field("expires_at", &self.expires_at)
			.field("token_type", &self.token_type)
			.finish()
	}
}

/// Body of `validateToken`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateToken {
	/// Policy the token is evaluated against.
	pub tenant_provider_policy_id: String,
	/// Token to validate.
	pub token: String,
}
impl Schema for ValidateToken {
	type Output = Self;

	fn check(&self, checker: &mut Checker) -> Self::Output {
		let spec = TenantProviderPolicyId::SPEC;

		checker.field(spec.field, |c| {
			if let Err(e) = spec.check(&self.tenant_provider_policy_id) {
				c.report(e.to_string());
			}
		});

		self.clone()
	}
}
impl Debug for ValidateToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ValidateToken")
			.field("tenant_provider_policy_id", &self.tenant_provider_policy_id)
			.field("token", &"<redacted>")
			.finish()
	}
}

/// Result of `validateToken`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenValidation {
	/// Expiry of the validated token as a JWT NumericDate (seconds, possibly fractional).
	pub exp: f64,
}
impl TokenValidation {
	/// Converts [`TokenValidation::exp`] into an instant, keeping sub-second precision.
	pub fn expires_at(&self) -> Result<OffsetDateTime, time::error::ComponentRange> {
		// Saturating cast; out-of-range values surface as `ComponentRange`.
		let nanos = (self.exp * 1_000_000_000.).round() as i128;

		OffsetDateTime::from_unix_timestamp_nanos(nanos)
	}
}
