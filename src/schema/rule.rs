//! Primitive field rules: string length/format, numeric range, and list size.
//!
//! Rules are `const`-constructible so every payload declares its constraints next to its
//! type. Lengths are counted in UTF-16 code units, the unit the remote service counts in.

// self
use crate::schema::Checker;

/// A bound paired with the message reported when it is violated.
#[derive(Clone, Copy, Debug)]
pub struct Bound<T> {
	/// Inclusive limit.
	pub limit: T,
	/// Message reported when the limit is crossed.
	pub message: &'static str,
}

/// A named predicate applied after the length bounds of a [`StrRule`].
#[derive(Clone, Copy, Debug)]
pub struct Check {
	/// Returns `true` when the value passes.
	pub test: fn(&str) -> bool,
	/// Message reported when `test` fails.
	pub message: &'static str,
}
impl Check {
	/// Creates a check from a predicate and its failure message.
	pub const fn new(test: fn(&str) -> bool, message: &'static str) -> Self {
		Self { test, message }
	}
}

/// String rule: length bounds, then every format check, optionally trimming the output.
#[derive(Clone, Copy, Debug)]
pub struct StrRule {
	/// Minimum length in UTF-16 code units.
	pub min: Option<Bound<usize>>,
	/// Maximum length in UTF-16 code units.
	pub max: Option<Bound<usize>>,
	/// Format checks run in order after the length bounds.
	pub checks: &'static [Check],
	/// Trim surrounding whitespace from the normalized output.
	pub trim: bool,
}
impl StrRule {
	/// Rule without constraints.
	pub const fn new() -> Self {
		Self { min: None, max: None, checks: &[], trim: false }
	}

	/// Adds a minimum length.
	pub const fn min(self, limit: usize, message: &'static str) -> Self {
		Self { min: Some(Bound { limit, message }), ..self }
	}

	/// Adds a maximum length.
	pub const fn max(self, limit: usize, message: &'static str) -> Self {
		Self { max: Some(Bound { limit, message }), ..self }
	}

	/// Adds format checks.
	pub const fn checks(self, checks: &'static [Check]) -> Self {
		Self { checks, ..self }
	}

	/// Trims the normalized output after the checks ran.
	pub const fn trimmed(self) -> Self {
		Self { trim: true, ..self }
	}

	/// Applies the rule at the checker's current path and returns the normalized string.
	pub fn check(&self, checker: &mut Checker, value: &str) -> String {
		let len = utf16_len(value);

		if let Some(bound) = self.min
			&& len < bound.limit
		{
			checker.report(bound.message);
		}
		if let Some(bound) = self.max
			&& len > bound.limit
		{
			checker.report(bound.message);
		}

		for check in self.checks {
			if !(check.test)(value) {
				checker.report(check.message);
			}
		}

		if self.trim { value.trim().to_owned() } else { value.to_owned() }
	}
}
impl Default for StrRule {
	fn default() -> Self {
		Self::new()
	}
}

/// Numeric range rule; non-finite values are always rejected.
#[derive(Clone, Copy, Debug)]
pub struct NumRule {
	/// Inclusive minimum.
	pub min: Option<Bound<f64>>,
	/// Inclusive maximum.
	pub max: Option<Bound<f64>>,
}
impl NumRule {
	const NOT_FINITE: &'static str = "Expected a finite number.";

	/// Rule without bounds.
	pub const fn new() -> Self {
		Self { min: None, max: None }
	}

	/// Adds an inclusive minimum.
	pub const fn min(self, limit: f64, message: &'static str) -> Self {
		Self { min: Some(Bound { limit, message }), ..self }
	}

	/// Adds an inclusive maximum.
	pub const fn max(self, limit: f64, message: &'static str) -> Self {
		Self { max: Some(Bound { limit, message }), ..self }
	}

	/// Applies the rule at the checker's current path.
	pub fn check(&self, checker: &mut Checker, value: f64) -> f64 {
		if !value.is_finite() {
			checker.report(Self::NOT_FINITE);

			return value;
		}
		if let Some(bound) = self.min
			&& value < bound.limit
		{
			checker.report(bound.message);
		}
		if let Some(bound) = self.max
			&& value > bound.limit
		{
			checker.report(bound.message);
		}

		value
	}
}
impl Default for NumRule {
	fn default() -> Self {
		Self::new()
	}
}

/// List size rule; items are validated one by one under their index.
#[derive(Clone, Copy, Debug)]
pub struct CountRule {
	/// Minimum number of items.
	pub min: Bound<usize>,
	/// Maximum number of items.
	pub max: Bound<usize>,
}
impl CountRule {
	/// Creates a rule accepting between `min` and `max` items.
	pub const fn new(min: Bound<usize>, max: Bound<usize>) -> Self {
		Self { min, max }
	}

	/// Checks the list size, then every item under `[index]`, returning normalized items.
	pub fn check<T, O>(
		&self,
		checker: &mut Checker,
		items: &[T],
		mut check_item: impl FnMut(&mut Checker, &T) -> O,
	) -> Vec<O> {
		if items.len() < self.min.limit {
			checker.report(self.min.message);
		}
		if items.len() > self.max.limit {
			checker.report(self.max.message);
		}

		items
			.iter()
			.enumerate()
			.map(|(index, item)| checker.item(index, |c| check_item(c, item)))
			.collect()
	}
}

/// Length of `value` in UTF-16 code units.
pub fn utf16_len(value: &str) -> usize {
	value.encode_utf16().count()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	const NAME: StrRule = StrRule::new().min(3, "too short").max(5, "too long");
	const NO_DIGITS: StrRule = StrRule::new()
		.checks(&[Check::new(has_no_digits, "no digits")])
		.trimmed();

	fn has_no_digits(value: &str) -> bool {
		!value.chars().any(|c| c.is_ascii_digit())
	}

	fn messages(checker: Checker) -> Vec<String> {
		checker.finish(()).map(|_| Vec::new()).unwrap_or_else(|err| {
			err.violations.into_iter().map(|violation| violation.message).collect()
		})
	}

	#[test]
	fn string_bounds_are_inclusive() {
		for ok in ["abc", "abcde"] {
			let mut checker = Checker::default();

			assert_eq!(NAME.check(&mut checker, ok), ok);
			assert!(checker.is_clean(), "{ok} should pass.");
		}

		let mut checker = Checker::default();

		NAME.check(&mut checker, "ab");
		NAME.check(&mut checker, "abcdef");

		assert_eq!(messages(checker), ["too short", "too long"]);
	}

	#[test]
	fn string_length_counts_utf16_units() {
		let mut checker = Checker::default();

		// Each emoji is two UTF-16 units.
		NAME.check(&mut checker, "😀😀😀");

		assert_eq!(messages(checker), ["too long"]);
		assert_eq!(utf16_len("é"), 1);
	}

	#[test]
	fn checks_run_and_output_is_trimmed() {
		let mut checker = Checker::default();

		assert_eq!(NO_DIGITS.check(&mut checker, "  value "), "value");
		assert!(checker.is_clean());

		NO_DIGITS.check(&mut checker, "v4lue");

		assert_eq!(messages(checker), ["no digits"]);
	}

	#[test]
	fn numeric_bounds_and_non_finite_values() {
		let rule = NumRule::new().min(0., "below").max(12., "above");
		let mut checker = Checker::default();

		rule.check(&mut checker, 0.);
		rule.check(&mut checker, 12.);

		assert!(checker.is_clean());

		rule.check(&mut checker, -1.);
		rule.check(&mut checker, 12.5);
		rule.check(&mut checker, f64::NAN);

		assert_eq!(messages(checker), ["below", "above", NumRule::NOT_FINITE]);
	}

	#[test]
	fn count_rule_checks_size_and_items() {
		let rule = CountRule::new(
			Bound { limit: 1, message: "need one" },
			Bound { limit: 2, message: "too many" },
		);
		let mut checker = Checker::default();
		let out = rule.check(&mut checker, &["abc", "x", "abcd"], |c, item| NAME.check(c, item));

		assert_eq!(out, ["abc", "x", "abcd"]);

		let err = checker.finish(()).expect_err("Oversized list should fail.");

		assert_eq!(err.violations[0].message, "too many");
		assert_eq!(err.violations[1].path, "[1]");

		let mut checker = Checker::default();

		rule.check(&mut checker, &[] as &[&str], |c, item| NAME.check(c, item));

		assert_eq!(messages(checker), ["need one"]);
	}
}
