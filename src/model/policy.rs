//! Tenant provider policies and their conditions.

// self
use crate::{
	_prelude::*,
	model::TenantProviderPolicyId,
	schema::{Bound, Checker, CountRule, Schema, StrRule},
};

/// Comparison applied by a [`Condition`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConditionOperator {
	/// Exact match.
	StringEquals,
	/// Wildcard match.
	StringLike,
	/// Negated exact match.
	StringNotEquals,
	/// Negated wildcard match.
	StringNotLike,
}
impl ConditionOperator {
	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::StringEquals => "stringEquals",
			Self::StringLike => "stringLike",
			Self::StringNotEquals => "stringNotEquals",
			Self::StringNotLike => "stringNotLike",
		}
	}
}
impl Display for ConditionOperator {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// A claim comparison evaluated during token validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
	/// Claim key (1–10 characters).
	pub key: String,
	/// Comparison operator.
	pub operator: ConditionOperator,
	/// Expected value (1–100 characters).
	pub value: String,
}
impl Condition {
	const KEY: StrRule = StrRule::new()
		.min(1, "Please provide a condition key.")
		.max(10, "Condition key must be at most 10 characters long.");
	const VALUE: StrRule = StrRule::new()
		.min(1, "Please provide a condition value.")
		.max(100, "Condition value must be at most 100 characters long.");

	/// Creates a condition.
	pub fn new(key: impl Into<String>, operator: ConditionOperator, value: impl Into<String>) -> Self {
		Self { key: key.into(), operator, value: value.into() }
	}
}
impl Schema for Condition {
	type Output = Self;

	fn check(&self, checker: &mut Checker) -> Self::Output {
		Self {
			key: checker.field("key", |c| Self::KEY.check(c, &self.key)),
			operator: self.operator,
			value: checker.field("value", |c| Self::VALUE.check(c, &self.value)),
		}
	}
}

/// Payload for `createTenantProviderPolicy`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTenantProviderPolicy {
	/// Display name (at least 3 characters).
	pub name: String,
	/// Description (10–100 characters).
	pub description: String,
	/// Audience the policy applies to (3–100 characters, trimmed).
	pub audience: String,
	/// Conditions (1–5).
	pub conditions: Vec<Condition>,
}
impl CreateTenantProviderPolicy {
	const AUDIENCE: StrRule = StrRule::new()
		.min(3, "Audience must be at least 3 characters long.")
		.max(100, "Audience must be at most 100 characters long.")
		.trimmed();
	const CONDITIONS: CountRule = CountRule::new(
		Bound { limit: 1, message: "At least one condition is required." },
		Bound { limit: 5, message: "At most 5 conditions are allowed." },
	);
	const DESCRIPTION: StrRule = StrRule::new()
		.min(10, "Description must be at least 10 characters long")
		.max(100, "Description must be less than 100 characters long");
	const NAME: StrRule = StrRule::new().min(3, "Name must be at least 3 characters long");
}
impl Schema for CreateTenantProviderPolicy {
	type Output = Self;

	fn check(&self, checker: &mut Checker) -> Self::Output {
		Self {
			name: checker.field("name", |c| Self::NAME.check(c, &self.name)),
			description: checker
				.field("description", |c| Self::DESCRIPTION.check(c, &self.description)),
			audience: checker.field("audience", |c| Self::AUDIENCE.check(c, &self.audience)),
			conditions: checker.field("conditions", |c| {
				Self::CONDITIONS.check(c, &self.conditions, |c, condition| condition.check(c))
			}),
		}
	}
}

/// Tenant provider policy record returned by the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantProviderPolicy {
	/// Server-assigned identifier.
	pub id: TenantProviderPolicyId,
	/// Display name.
	pub name: String,
	/// Description.
	pub description: String,
	/// Audience the policy applies to.
	pub audience: String,
	/// Conditions evaluated during validation.
	pub conditions: Vec<Condition>,
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

	fn policy(conditions: Vec<Condition>) -> CreateTenantProviderPolicy {
		CreateTenantProviderPolicy {
			name: "GitHub main".into(),
			description: "Only main branch deploys".into(),
			audience: " sts.amazonaws.com".into(),
			conditions,
		}
	}

	#[test]
	fn trims_audience_and_keeps_conditions() {
		let condition = Condition::new("ref", ConditionOperator::StringEquals, "refs/heads/main");
		let normalized =
			policy(vec![condition.clone()]).validate().expect("Valid policy should pass.");

		assert_eq!(normalized.audience, "sts.amazonaws.com");
		assert_eq!(normalized.conditions, [condition]);
	}

	#[test]
	fn reports_nested_condition_paths() {
		let err = policy(vec![
			Condition::new("sub", ConditionOperator::StringLike, "repo:acme/*"),
			Condition::new("repository_owner", ConditionOperator::StringNotEquals, ""),
		])
		.validate()
		.expect_err("Invalid condition should fail.");
		let paths = err.violations.iter().map(|v| v.path.as_str()).collect::<Vec<_>>();

		assert_eq!(paths, ["conditions[1].key", "conditions[1].value"]);
	}

	#[test]
	fn requires_between_one_and_five_conditions() {
		let err = policy(Vec::new()).validate().expect_err("No conditions should fail.");

		assert_eq!(err.violations[0].message, "At least one condition is required.");

		let condition = Condition::new("aud", ConditionOperator::StringEquals, "x");
		let err =
			policy(vec![condition; 6]).validate().expect_err("Six conditions should fail.");

		assert_eq!(err.violations[0].message, "At most 5 conditions are allowed.");
	}

	#[test]
	fn operators_use_camel_case_labels() {
		let json = serde_json::to_string(&ConditionOperator::StringNotLike)
			.expect("Operator should serialize.");

		assert_eq!(json, "\"stringNotLike\"");
		assert_eq!(ConditionOperator::StringLike.to_string(), "stringLike");
		assert!(serde_json::from_str::<ConditionOperator>("\"regexMatch\"").is_err());
	}

	#[test]
	fn policy_record_requires_every_field() {
		let json = serde_json::json!({
			"id": "pol-1",
			"name": "Staff only",
			"description": "Allows staff audiences only",
			"audience": "api://acme",
			"conditions": [{ "key": "role", "operator": "stringEquals", "value": "staff" }],
			"createdAt": "2024-05-01T10:00:00Z",
			"updatedAt": "2024-05-01T10:00:00Z",
		});
		let policy: TenantProviderPolicy =
			serde_json::from_value(json.clone()).expect("Policy fixture should decode.");

		assert_eq!(policy.conditions.len(), 1);

		for field in ["id", "name", "description", "audience", "conditions", "createdAt", "updatedAt"] {
			let mut partial = json.clone();

			if let Some(object) = partial.as_object_mut() {
				object.remove(field);
			}

			assert!(
				serde_json::from_value::<TenantProviderPolicy>(partial).is_err(),
				"Missing `{field}` should be rejected."
			);
		}
	}
}
