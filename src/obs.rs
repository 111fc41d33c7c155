//! Optional observability helpers for UseGrant operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to wrap every operation in a span named `usegrant.operation` with the
//!   `operation` (camelCase name) and `method` fields, and to log scheduled retries.
//! - Enable `metrics` to increment the `usegrant_operation_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.

mod metrics;
mod tracing;

pub use self::metrics::*;
pub use self::tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each operation call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationOutcome {
	/// Entry to an operation, before validation.
	Attempt,
	/// Decoded result returned to the caller.
	Success,
	/// Error propagated back to the caller.
	Failure,
}
impl OperationOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationOutcome::Attempt => "attempt",
			OperationOutcome::Success => "success",
			OperationOutcome::Failure => "failure",
		}
	}
}
impl Display for OperationOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
