// self
use crate::obs::OperationOutcome;

/// Records an operation outcome via the global metrics recorder (when enabled).
pub fn record_operation_outcome(operation: &'static str, outcome: OperationOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"usegrant_operation_total",
			"operation" => operation,
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_operation_outcome_noop_without_metrics() {
		record_operation_outcome("listProviders", OperationOutcome::Failure);
	}
}
