//! Tenants: top-level scopes that trust external providers.

// self
use crate::{
	_prelude::*,
	model::TenantId,
	schema::{Checker, Schema, StrRule},
};

/// Payload for `createTenant`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTenant {
	/// Display name (at least 3 characters).
	pub name: String,
	/// Description (1–100 characters).
	pub description: String,
}
impl CreateTenant {
	const DESCRIPTION: StrRule = StrRule::new()
		.min(1, "Description is required")
		.max(100, "Description must be less than 100 characters long");
	const NAME: StrRule = StrRule::new().min(3, "Name must be at least 3 characters long");

	/// Creates a payload from its fields.
	pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
		Self { name: name.into(), description: description.into() }
	}
}
impl Schema for CreateTenant {
	type Output = Self;

	fn check(&self, checker: &mut Checker) -> Self::Output {
		Self {
			name: checker.field("name", |c| Self::NAME.check(c, &self.name)),
			description: checker
				.field("description", |c| Self::DESCRIPTION.check(c, &self.description)),
		}
	}
}

/// Tenant record returned by the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
	/// Server-assigned identifier.
	pub id: TenantId,
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
	fn create_tenant_has_no_name_ceiling() {
		CreateTenant::new("t".repeat(500), "Test Tenant Description")
			.validate()
			.expect("Tenant names only have a minimum length.");

		let err = CreateTenant::new("Te", "d".repeat(101))
			.validate()
			.expect_err("Short name and long description should fail.");

		assert!(err.has("name"));
		assert!(err.has("description"));
	}

	#[test]
	fn tenant_requires_every_field() {
		let json = serde_json::json!({
			"id": "t-1",
			"name": "Acme",
			"description": "Production tenant",
			"createdAt": "2024-05-01T10:00:00Z",
			"updatedAt": "2024-05-01T10:00:00Z",
		});
		let tenant: Tenant =
			serde_json::from_value(json.clone()).expect("Tenant fixture should decode.");

		assert_eq!(&*tenant.id, "t-1");

		for field in ["id", "name", "description", "createdAt", "updatedAt"] {
			let mut partial = json.clone();

			if let Some(object) = partial.as_object_mut() {
				object.remove(field);
			}

			assert!(
				serde_json::from_value::<Tenant>(partial).is_err(),
				"Missing `{field}` should be rejected."
			);
		}
	}
}
