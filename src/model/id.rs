//! Strongly typed resource identifiers assigned by the UseGrant service.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal, $field:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Path parameter description used by operation contracts.
			pub const SPEC: IdSpec = IdSpec { kind: $kind, field: $field };

			/// Creates a new identifier after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				Self::SPEC.check(view)?;

				Ok(Self(view.to_owned()))
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				Self::SPEC.check(&value)?;

				Ok(Self(value))
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!(stringify!($name), "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} ID is required.")]
	Empty {
		/// Kind of identifier (provider, client, tenant, ...).
		kind: &'static str,
	},
	/// The identifier was `.` or `..`, which URL path normalization would drop.
	#[error("{kind} ID is invalid.")]
	DotSegment {
		/// Kind of identifier (provider, client, tenant, ...).
		kind: &'static str,
	},
}

/// Describes an identifier argument: its kind label and its wire field name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdSpec {
	/// Human-readable kind used in messages.
	pub kind: &'static str,
	/// camelCase argument name used as the violation path.
	pub field: &'static str,
}
impl IdSpec {
	/// Validates a raw identifier against this spec.
	pub fn check(&self, view: &str) -> Result<(), IdentifierError> {
		if view.is_empty() {
			return Err(IdentifierError::Empty { kind: self.kind });
		}
		if matches!(view, "." | "..") {
			return Err(IdentifierError::DotSegment { kind: self.kind });
		}

		Ok(())
	}
}

def_id! { ProviderId, "Identifier of a token-issuing provider.", "Provider", "providerId" }
def_id! { ClientId, "Identifier of a client registered under a provider.", "Client", "clientId" }
def_id! { DomainId, "Identifier of a domain attached to a provider.", "Domain", "domainId" }
def_id! { TenantId, "Identifier of a tenant.", "Tenant", "tenantId" }
def_id! {
	TenantProviderId,
	"Identifier of an external provider trusted by a tenant.",
	"Tenant provider",
	"tenantProviderId"
}
def_id! {
	TenantProviderPolicyId,
	"Identifier of a tenant provider policy.",
	"Tenant provider policy",
	"tenantProviderPolicyId"
}
