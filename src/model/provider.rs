//! Token-issuing providers owned by the caller's account.

// self
use crate::{
	_prelude::*,
	model::ProviderId,
	schema::{Checker, Schema, StrRule},
};

/// Payload for `createProvider`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProvider {
	/// Display name (3–50 characters).
	pub name: String,
	/// Free-form description (1–100 characters).
	pub description: String,
}
impl CreateProvider {
	const DESCRIPTION: StrRule = StrRule::new()
		.min(1, "Description is required")
		.max(100, "Description must be less than 100 characters long");
	const NAME: StrRule = StrRule::new()
		.min(3, "Name must be at least 3 characters long")
		.max(50, "Name must be less than 50 characters long");

	/// Creates a payload from its fields.
	pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
		Self { name: name.into(), description: description.into() }
	}
}
impl Schema for CreateProvider {
	type Output = Self;

	fn check(&self, checker: &mut Checker) -> Self::Output {
		Self {
			name: checker.field("name", |c| Self::NAME.check(c, &self.name)),
			description: checker
				.field("description", |c| Self::DESCRIPTION.check(c, &self.description)),
		}
	}
}

/// Provider record returned by the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
	/// Server-assigned identifier.
	pub id: ProviderId,
	/// Display name.
	pub name: String,
	/// Description.
	pub description: String,
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
	fn create_provider_enforces_lengths() {
		CreateProvider::new("Acme Corp", "Demo").validate().expect("Valid payload should pass.");

		let err = CreateProvider::new("Ac", "")
			.validate()
			.expect_err("Short name and empty description should fail.");

		assert_eq!(err.violations.len(), 2);
		assert!(err.has("name"));
		assert!(err.has("description"));

		let err = CreateProvider::new("a".repeat(51), "d".repeat(101))
			.validate()
			.expect_err("Oversized fields should fail.");

		assert_eq!(
			err.violations.iter().map(|v| v.message.as_str()).collect::<Vec<_>>(),
			[
				"Name must be less than 50 characters long",
				"Description must be less than 100 characters long"
			]
		);
	}

	#[test]
	fn provider_requires_every_field() {
		let json = serde_json::json!({
			"id": "p-123",
			"name": "Acme Corp",
			"description": "Demo",
			"createdAt": "2024-05-01T10:00:00.000Z",
			"updatedAt": "2024-05-02T10:00:00Z",
		});
		let provider: Provider =
			serde_json::from_value(json.clone()).expect("Provider fixture should decode.");

		assert_eq!(&*provider.id, "p-123");
		assert!(provider.updated_at > provider.created_at);

		for field in ["id", "name", "description", "createdAt", "updatedAt"] {
			let mut partial = json.clone();

			if let Some(object) = partial.as_object_mut() {
				object.remove(field);
			}

			assert!(
				serde_json::from_value::<Provider>(partial).is_err(),
				"Missing `{field}` should be rejected."
			);
		}
	}
}
