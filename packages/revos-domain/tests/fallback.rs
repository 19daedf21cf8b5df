use time::macros::datetime;

use revos_domain::{
	fallback::{FALLBACK_TASK_CAP, TriggerCounts, fallback_tasks},
	task::{Priority, TaskType},
	windows::DayWindows,
};

fn sample_windows() -> DayWindows {
	DayWindows::compute(datetime!(2026-08-28 09:15:00 UTC), time::UtcOffset::UTC)
}

#[test]
fn no_triggers_means_no_tasks() {
	let tasks = fallback_tasks(&TriggerCounts::default(), &sample_windows());

	assert!(tasks.is_empty());
	assert!(!TriggerCounts::default().any());
}

#[test]
fn any_single_trigger_produces_a_task() {
	let singles = [
		TriggerCounts { overdue_revenue: 1, ..Default::default() },
		TriggerCounts { due_interventions: 1, ..Default::default() },
		TriggerCounts { behind_outcomes: 1, ..Default::default() },
		TriggerCounts { events_today: 1, ..Default::default() },
		TriggerCounts { inactive_agents: 1, ..Default::default() },
	];

	for triggers in singles {
		let tasks = fallback_tasks(&triggers, &sample_windows());

		assert_eq!(tasks.len(), 1);
		assert!(triggers.any());
	}
}

#[test]
fn overdue_revenue_alone_yields_the_collection_task() {
	let triggers = TriggerCounts { overdue_revenue: 1, ..Default::default() };
	let tasks = fallback_tasks(&triggers, &sample_windows());

	assert_eq!(tasks.len(), 1);
	assert_eq!(tasks[0].title, "Collect overdue invoices");
	assert_eq!(tasks[0].task_type, TaskType::Revenue);
	assert_eq!(tasks[0].priority, Priority::Critical);
	assert_eq!(tasks[0].due_date, sample_windows().end_of_day);
}

#[test]
fn all_triggers_fire_in_fixed_order() {
	let triggers = TriggerCounts {
		overdue_revenue: 2,
		due_interventions: 3,
		behind_outcomes: 1,
		events_today: 4,
		inactive_agents: 5,
	};
	let tasks = fallback_tasks(&triggers, &sample_windows());

	assert_eq!(tasks.len(), 5);
	assert!(tasks.len() <= FALLBACK_TASK_CAP);
	assert_eq!(
		tasks.iter().map(|task| task.task_type).collect::<Vec<_>>(),
		vec![
			TaskType::Revenue,
			TaskType::Intervention,
			TaskType::Outcome,
			TaskType::Event,
			TaskType::Agent,
		],
	);
	assert_eq!(
		tasks.iter().map(|task| task.priority).collect::<Vec<_>>(),
		vec![
			Priority::Critical,
			Priority::High,
			Priority::High,
			Priority::Medium,
			Priority::Low,
		],
	);
}

#[test]
fn identical_triggers_produce_identical_lists() {
	let triggers = TriggerCounts { overdue_revenue: 1, events_today: 2, ..Default::default() };
	let windows = sample_windows();
	let first = fallback_tasks(&triggers, &windows);
	let second = fallback_tasks(&triggers, &windows);

	assert_eq!(first, second);
	assert_eq!(first[0].id, "collect-overdue-invoices");
}

#[test]
fn due_dates_follow_the_rule_windows() {
	let windows = sample_windows();
	let triggers = TriggerCounts {
		overdue_revenue: 1,
		due_interventions: 1,
		behind_outcomes: 1,
		events_today: 1,
		inactive_agents: 1,
	};
	let tasks = fallback_tasks(&triggers, &windows);

	assert_eq!(tasks[0].due_date, windows.end_of_day);
	assert_eq!(tasks[1].due_date, windows.week_ahead);
	assert_eq!(tasks[2].due_date, windows.week_ahead);
	assert_eq!(tasks[3].due_date, windows.end_of_day);
	assert_eq!(tasks[4].due_date, windows.week_ahead);
}
