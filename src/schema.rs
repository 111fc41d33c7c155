//! Declarative argument schemas and the violation collector they report into.
//!
//! Request payloads implement [`Schema`] by running field rules from [`rule`] against a
//! [`Checker`]. The checker tracks the current field path and aggregates every violation,
//! so a single [`ValidationError`] surfaces all problems at once. Schemas also return the
//! normalized value (trimmed strings, stripped trailing slashes) that is sent on the wire.

pub mod rule;

pub use rule::*;

// self
use crate::_prelude::*;

/// Describes a request payload that can be validated and normalized.
pub trait Schema {
	/// Normalized form forwarded to the remote service.
	type Output: Serialize;

	/// Records every violation under the checker's current path and returns the normalized value.
	fn check(&self, checker: &mut Checker) -> Self::Output;

	/// Validates `self` in isolation.
	fn validate(&self) -> Result<Self::Output, ValidationError> {
		let mut checker = Checker::default();
		let output = self.check(&mut checker);

		checker.finish(output)
	}
}

/// A single constraint violation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
	/// Wire path of the offending value (`conditions[1].key`); empty for the root.
	pub path: String,
	/// User-facing message.
	pub message: String,
}
impl Display for Violation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		if self.path.is_empty() {
			f.write_str(&self.message)
		} else {
			write!(f, "{}: {}", self.path, self.message)
		}
	}
}

/// Aggregated argument validation failure; raised before any request is sent.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Invalid arguments for `{operation}`: {}.", summarize(.violations))]
pub struct ValidationError {
	/// Operation whose arguments were rejected (`schema` when validated standalone).
	pub operation: &'static str,
	/// Every violation found, in declaration order.
	pub violations: Vec<Violation>,
}
impl ValidationError {
	/// Tags the error with the operation whose contract rejected the arguments.
	pub fn for_operation(mut self, operation: &'static str) -> Self {
		self.operation = operation;

		self
	}

	/// Returns the violations recorded for an exact path.
	pub fn at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Violation> {
		self.violations.iter().filter(move |violation| violation.path == path)
	}

	/// Returns `true` if any violation was recorded for `path`.
	pub fn has(&self, path: &str) -> bool {
		self.at(path).next().is_some()
	}
}

/// Collects violations while schemas walk a value.
#[derive(Debug, Default)]
pub struct Checker {
	path: Vec<PathSegment>,
	violations: Vec<Violation>,
}
impl Checker {
	/// Runs `check` with `name` appended to the current path.
	pub fn field<T>(&mut self, name: &'static str, check: impl FnOnce(&mut Self) -> T) -> T {
		self.scoped(PathSegment::Field(name), check)
	}

	/// Runs `check` with a list index appended to the current path.
	pub fn item<T>(&mut self, index: usize, check: impl FnOnce(&mut Self) -> T) -> T {
		self.scoped(PathSegment::Index(index), check)
	}

	/// Records a violation at the current path.
	pub fn report(&mut self, message: impl Into<String>) {
		let path = self.render_path();

		self.violations.push(Violation { path, message: message.into() });
	}

	/// Returns `true` while no violation has been recorded.
	pub fn is_clean(&self) -> bool {
		self.violations.is_empty()
	}

	/// Consumes the checker, yielding `value` if nothing was reported.
	pub fn finish<T>(self, value: T) -> Result<T, ValidationError> {
		if self.violations.is_empty() {
			Ok(value)
		} else {
			Err(ValidationError { operation: "schema", violations: self.violations })
		}
	}

	fn scoped<T>(&mut self, segment: PathSegment, check: impl FnOnce(&mut Self) -> T) -> T {
		self.path.push(segment);

		let output = check(self);

		self.path.pop();

		output
	}

	fn render_path(&self) -> String {
		let mut buf = String::new();

		for segment in &self.path {
			match segment {
				PathSegment::Field(name) => {
					if !buf.is_empty() {
						buf.push('.');
					}

					buf.push_str(name);
				},
				PathSegment::Index(index) => {
					buf.push('[');
					buf.push_str(&index.to_string());
					buf.push(']');
				},
			}
		}

		buf
	}
}

#[derive(Clone, Copy, Debug)]
enum PathSegment {
	Field(&'static str),
	Index(usize),
}

fn summarize(violations: &[Violation]) -> String {
	violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
