//! Relying-party clients registered under a provider.

// self
use crate::{
	_prelude::*,
	model::ClientId,
	schema::{Checker, Schema, StrRule},
};

/// Payload for `createClient`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateClient {
	/// Display name (3–50 characters).
	pub name: String,
	/// Audience identifying the relying party (3–100 characters).
	pub audience: String,
}
impl CreateClient {
	const AUDIENCE: StrRule = StrRule::new()
		.min(3, "Audience must be at least 3 characters long")
		.max(100, "Audience must be less than 100 characters long");
	const NAME: StrRule = StrRule::new()
		.min(3, "Name must be at least 3 characters long")
		.max(50, "Name must be less than 50 characters long");

	/// Creates a payload from its fields.
	pub fn new(name: impl Into<String>, audience: impl Into<String>) -> Self {
		Self { name: name.into(), audience: audience.into() }
	}
}
impl Schema for CreateClient {
	type Output = Self;

	fn check(&self, checker: &mut Checker) -> Self::Output {
		Self {
			name: checker.field("name", |c| Self::NAME.check(c, &self.name)),
			audience: checker.field("audience", |c| Self::AUDIENCE.check(c, &self.audience)),
		}
	}
}

/// Client record returned by the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
	/// Server-assigned identifier.
	pub id: ClientId,
	/// Display name.
	pub name: String,
	/// Audience identifying the relying party.
	pub audience: String,
	/// Creation instant.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Last update instant.
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn create_client_enforces_lengths() {
		CreateClient::new("Test Client", "sts.testaudience.com")
			.validate()
			.expect("Valid payload should pass.");

		let err = CreateClient::new("Test Client", "ab")
			.validate()
			.expect_err("Short audience should fail.");

		assert_eq!(err.violations.len(), 1);
		assert_eq!(err.violations[0].path, "audience");
		assert_eq!(err.violations[0].message, "Audience must be at least 3 characters long");
	}

	#[test]
	fn client_decodes_camel_case_fields() {
		let client: Client = serde_json::from_str(
			r#"{"id":"client-123","name":"Test Client","audience":"sts.testaudience.com","createdAt":"2024-05-01T10:00:00Z","updatedAt":"2024-05-01T10:00:00Z"}"#,
		)
		.expect("Client fixture should decode.");

		assert_eq!(&*client.id, "client-123");
		assert_eq!(client.created_at, client.updated_at);
		assert!(
			serde_json::from_str::<Client>(r#"{"id":"client-123","name":"Test Client"}"#).is_err()
		);
	}
}
