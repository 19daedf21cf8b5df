//! Row-level heuristics used to derive the highlight subsets. Missing or non-numeric
//! values never mark a row as actionable.

pub fn behind_target(target_value: Option<f64>, current_value: Option<f64>) -> bool {
	match (target_value, current_value) {
		(Some(target), Some(current)) => target > 0.0 && current < target,
		_ => false,
	}
}

pub fn revenue_overdue(payment_status: &str) -> bool {
	payment_status == "overdue"
}

pub fn revenue_pending(payment_status: &str) -> bool {
	payment_status == "pending"
}

pub fn agent_inactive(status: &str) -> bool {
	status != "active"
}
