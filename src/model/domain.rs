//! Hostnames attached to a provider for issuance domain checks.

// std
use std::sync::LazyLock;
// crates.io
use regex::Regex;
// self
use crate::{
	_prelude::*,
	model::DomainId,
	schema::{Check, Checker, Schema, StrRule},
};

static HOSTNAME: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^([a-zA-Z0-9][a-zA-Z0-9-]{0,61}[a-zA-Z0-9]?\.)+[a-zA-Z]{2,}$")
		.expect("Hostname pattern is a valid regular expression.")
});

/// Payload for `addDomain`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddDomain {
	/// Hostname (3–255 characters, no `www.` prefix).
	pub domain: String,
}
impl AddDomain {
	const DOMAIN: StrRule = StrRule::new()
		.min(3, "Domain name must be at least 3 characters long.")
		.max(255, "Domain name must be less than 255 characters.")
		.checks(&[
			Check::new(is_hostname, "Please enter a valid domain name."),
			Check::new(lacks_www_prefix, "Domain name cannot start with www."),
		]);

	/// Creates a payload for `domain`.
	pub fn new(domain: impl Into<String>) -> Self {
		Self { domain: domain.into() }
	}
}
impl Schema for AddDomain {
	type Output = Self;

	fn check(&self, checker: &mut Checker) -> Self::Output {
		Self { domain: checker.field("domain", |c| Self::DOMAIN.check(c, &self.domain)) }
	}
}

/// Domain record returned by the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
	/// Server-assigned identifier.
	pub id: DomainId,
	/// Hostname.
	pub domain: String,
	/// Whether ownership has been verified.
	pub verified: bool,
	/// Creation instant.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Last update instant.
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}

/// Result of `verifyDomain`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainVerification {
	/// Domain record after the verification attempt.
	pub domain: Domain,
	/// Whether the domain is verified.
	pub verified: bool,
	/// Human-readable outcome reported by the service.
	pub message: String,
}

fn is_hostname(value: &str) -> bool {
	HOSTNAME.is_match(value)
}

fn lacks_www_prefix(value: &str) -> bool {
	!value.starts_with("www.")
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn add_domain_accepts_hostnames() {
		for domain in ["example.com", "auth.example.co.uk", "a-b.io"] {
			AddDomain::new(domain).validate().expect("Hostname should pass.");
		}
	}

	#[test]
	fn add_domain_rejects_www_and_malformed_hosts() {
		let err = AddDomain::new("www.example.com")
			.validate()
			.expect_err("www-prefixed domains should fail.");

		assert_eq!(err.violations.len(), 1);
		assert_eq!(err.violations[0].message, "Domain name cannot start with www.");

		let err = AddDomain::new("https://example.com")
			.validate()
			.expect_err("URLs are not hostnames.");

		assert_eq!(err.violations[0].message, "Please enter a valid domain name.");

		let err = AddDomain::new("ab").validate().expect_err("Tiny values should fail twice.");

		assert_eq!(
			err.violations.iter().map(|v| v.message.as_str()).collect::<Vec<_>>(),
			["Domain name must be at least 3 characters long.", "Please enter a valid domain name."]
		);
	}

	#[test]
	fn verification_decodes_nested_domain() {
		let verification: DomainVerification = serde_json::from_value(serde_json::json!({
			"domain": {
				"id": "d-1",
				"domain": "example.com",
				"verified": true,
				"createdAt": "2024-05-01T10:00:00Z",
				"updatedAt": "2024-05-01T11:00:00Z",
			},
			"verified": true,
			"message": "Domain verified",
		}))
		.expect("Verification fixture should decode.");

		assert!(verification.verified);
		assert_eq!(verification.domain.domain, "example.com");
	}

	#[test]
	fn domain_records_require_every_field() {
		let domain = serde_json::json!({
			"id": "d-1",
			"domain": "example.com",
			"verified": false,
			"createdAt": "2024-05-01T10:00:00Z",
			"updatedAt": "2024-05-01T10:00:00Z",
		});
		let verification = serde_json::json!({
			"domain": domain.clone(),
			"verified": false,
			"message": "Pending DNS record",
		});

		serde_json::from_value::<Domain>(domain.clone()).expect("Domain fixture should decode.");
		serde_json::from_value::<DomainVerification>(verification.clone())
			.expect("Verification fixture should decode.");

		for field in ["id", "domain", "verified", "createdAt", "updatedAt"] {
			let mut partial = domain.clone();

			if let Some(object) = partial.as_object_mut() {
				object.remove(field);
			}

			assert!(
				serde_json::from_value::<Domain>(partial).is_err(),
				"Missing `{field}` should be rejected."
			);
		}

		for field in ["domain", "verified", "message"] {
			let mut partial = verification.clone();

			if let Some(object) = partial.as_object_mut() {
				object.remove(field);
			}

			assert!(
				serde_json::from_value::<DomainVerification>(partial).is_err(),
				"Missing `{field}` should be rejected."
			);
		}
	}
}
