//! Deterministic rule set used when no planner is configured or delegation fails.

use crate::{
	task::{Priority, Task, TaskType},
	windows::DayWindows,
};

pub const FALLBACK_TASK_CAP: usize = 6;

/// Sizes of the five trigger subsets a snapshot can light up. Each non-zero count gates
/// exactly one fallback task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggerCounts {
	pub overdue_revenue: usize,
	pub due_interventions: usize,
	pub behind_outcomes: usize,
	pub events_today: usize,
	pub inactive_agents: usize,
}

impl TriggerCounts {
	pub fn any(&self) -> bool {
		self.overdue_revenue > 0
			|| self.due_interventions > 0
			|| self.behind_outcomes > 0
			|| self.events_today > 0
			|| self.inactive_agents > 0
	}
}

/// Builds the fallback list in fixed priority order. Ids are stable slugs so identical
/// snapshots produce identical lists. Never padded; at most `FALLBACK_TASK_CAP` entries.
pub fn fallback_tasks(triggers: &TriggerCounts, windows: &DayWindows) -> Vec<Task> {
	let mut tasks = Vec::new();

	if triggers.overdue_revenue > 0 {
		tasks.push(Task {
			id: "collect-overdue-invoices".to_string(),
			title: "Collect overdue invoices".to_string(),
			reason: format!("{} invoice(s) are past due.", triggers.overdue_revenue),
			task_type: TaskType::Revenue,
			priority: Priority::Critical,
			due_date: windows.end_of_day,
		});
	}
	if triggers.due_interventions > 0 {
		tasks.push(Task {
			id: "prioritize-due-interventions".to_string(),
			title: "Prioritize interventions due soon".to_string(),
			reason: format!(
				"{} intervention(s) are due within seven days.",
				triggers.due_interventions
			),
			task_type: TaskType::Intervention,
			priority: Priority::High,
			due_date: windows.week_ahead,
		});
	}
	if triggers.behind_outcomes > 0 {
		tasks.push(Task {
			id: "plan-outcome-target-actions".to_string(),
			title: "Plan actions to reach outcome targets".to_string(),
			reason: format!("{} outcome metric(s) are behind target.", triggers.behind_outcomes),
			task_type: TaskType::Outcome,
			priority: Priority::High,
			due_date: windows.week_ahead,
		});
	}
	if triggers.events_today > 0 {
		tasks.push(Task {
			id: "prepare-todays-sessions".to_string(),
			title: "Prepare for today's sessions".to_string(),
			reason: format!("{} session(s) are scheduled today.", triggers.events_today),
			task_type: TaskType::Event,
			priority: Priority::Medium,
			due_date: windows.end_of_day,
		});
	}
	if triggers.inactive_agents > 0 {
		tasks.push(Task {
			id: "review-inactive-agents".to_string(),
			title: "Review inactive agents".to_string(),
			reason: format!("{} agent(s) are not active.", triggers.inactive_agents),
			task_type: TaskType::Agent,
			priority: Priority::Low,
			due_date: windows.week_ahead,
		});
	}

	tasks.truncate(FALLBACK_TASK_CAP);

	tasks
}
