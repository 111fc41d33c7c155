//! Resource identifiers, request payloads, and the records returned by the service.
//!
//! Request payloads (`Create*`, [`AddDomain`], [`ValidateToken`]) implement
//! [`Schema`](crate::schema::Schema); records are plain immutable values decoded from
//! responses and never mutated client-side.
//!
//! Record timestamps (`createdAt`, `updatedAt`, `expiresAt`) are decoded as RFC 3339, the
//! ISO-8601 profile the service emits (`2024-05-01T10:00:00Z`, fractional seconds and
//! `±hh:mm` offsets included). ISO-8601 forms outside that profile, such as a missing
//! offset or a `+0000` offset, are rejected with [`ResponseError::Json`] pointing at the
//! field.
//!
//! [`ResponseError::Json`]: crate::error::ResponseError::Json

pub mod client;
pub mod domain;
pub mod id;
pub mod policy;
pub mod provider;
pub mod tenant;
pub mod tenant_provider;
pub mod token;

pub use client::*;
pub use domain::*;
pub use id::*;
pub use policy::*;
pub use provider::*;
pub use tenant::*;
pub use tenant_provider::*;
pub use token::*;
