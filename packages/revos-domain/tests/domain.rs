use time::macros::datetime;

use revos_domain::{task, triage, windows};

fn sample_windows() -> windows::DayWindows {
	windows::DayWindows::compute(datetime!(2026-08-28 14:30:00 UTC), time::UtcOffset::UTC)
}

#[test]
fn behind_target_requires_both_values() {
	assert!(triage::behind_target(Some(10.0), Some(4.0)));
	assert!(!triage::behind_target(Some(10.0), Some(10.0)));
	assert!(!triage::behind_target(Some(10.0), Some(12.0)));
	assert!(!triage::behind_target(Some(0.0), Some(-1.0)));
	assert!(!triage::behind_target(Some(-5.0), Some(-10.0)));
	assert!(!triage::behind_target(None, Some(4.0)));
	assert!(!triage::behind_target(Some(10.0), None));
	assert!(!triage::behind_target(None, None));
}

#[test]
fn revenue_status_filters_are_exact() {
	assert!(triage::revenue_overdue("overdue"));
	assert!(!triage::revenue_overdue("pending"));
	assert!(triage::revenue_pending("pending"));
	assert!(!triage::revenue_pending("paid"));
}

#[test]
fn any_non_active_agent_counts_as_inactive() {
	assert!(!triage::agent_inactive("active"));
	assert!(triage::agent_inactive("paused"));
	assert!(triage::agent_inactive("error"));
	assert!(triage::agent_inactive(""));
}

#[test]
fn day_windows_bound_the_local_day() {
	let windows = sample_windows();

	assert_eq!(windows.start_of_day, datetime!(2026-08-28 00:00:00 UTC));
	assert_eq!(windows.end_of_day, datetime!(2026-08-29 00:00:00 UTC));
	assert_eq!(windows.week_ahead, datetime!(2026-09-04 14:30:00 UTC));
}

#[test]
fn day_windows_follow_the_caller_offset() {
	let offset = windows::parse_utc_offset("+05:30").expect("Offset must parse.");
	let windows = windows::DayWindows::compute(datetime!(2026-08-28 22:00:00 UTC), offset);

	// 22:00 UTC is already 03:30 on the 29th in +05:30.
	assert_eq!(windows.start_of_day, datetime!(2026-08-29 00:00:00 +05:30));
	assert_eq!(windows.end_of_day, datetime!(2026-08-30 00:00:00 +05:30));
}

#[test]
fn offset_parsing_rejects_garbage() {
	assert_eq!(windows::parse_utc_offset("Z"), Some(time::UtcOffset::UTC));
	assert!(windows::parse_utc_offset("-08:00").is_some());
	assert!(windows::parse_utc_offset("+14:00").is_some());
	assert!(windows::parse_utc_offset("+15:00").is_none());
	assert!(windows::parse_utc_offset("05:30").is_none());
	assert!(windows::parse_utc_offset("+5:30").is_none());
	assert!(windows::parse_utc_offset("+05:60").is_none());
	assert!(windows::parse_utc_offset("later").is_none());
	assert!(windows::parse_utc_offset("").is_none());
}

#[test]
fn draft_without_title_is_dropped() {
	let windows = sample_windows();
	let draft = serde_json::json!({ "reason": "no title here", "priority": "high" });

	assert!(task::from_draft(&draft, &windows).is_none());
}

#[test]
fn draft_fields_degrade_to_defaults() {
	let windows = sample_windows();
	let draft = serde_json::json!({ "title": "Call the client", "type": "sprint", "priority": "??" });
	let parsed = task::from_draft(&draft, &windows).expect("Titled draft must parse.");

	assert_eq!(parsed.task_type, task::TaskType::General);
	assert_eq!(parsed.priority, task::Priority::Medium);
	assert_eq!(parsed.due_date, windows.end_of_day);
	assert!(!parsed.id.is_empty());
	assert!(parsed.reason.is_empty());
}

#[test]
fn draft_with_full_fields_is_preserved() {
	let windows = sample_windows();
	let draft = serde_json::json!({
		"id": "t-1",
		"title": "Send the renewal proposal",
		"reason": "Contract lapses Friday.",
		"type": "engagement",
		"priority": "critical",
		"due_date": "2026-08-28T17:00:00Z",
	});
	let parsed = task::from_draft(&draft, &windows).expect("Draft must parse.");

	assert_eq!(parsed.id, "t-1");
	assert_eq!(parsed.task_type, task::TaskType::Engagement);
	assert_eq!(parsed.priority, task::Priority::Critical);
	assert_eq!(parsed.due_date, datetime!(2026-08-28 17:00:00 UTC));
}

#[test]
fn drafts_are_clamped_to_the_delegated_cap() {
	let windows = sample_windows();
	let drafts = (0..40)
		.map(|index| serde_json::json!({ "title": format!("Task {index}") }))
		.collect::<Vec<_>>();
	let tasks = task::from_drafts(&drafts, &windows);

	assert_eq!(tasks.len(), task::DELEGATED_TASK_CAP);
	assert_eq!(tasks[0].title, "Task 0");
}

#[test]
fn task_serializes_with_wire_field_names() {
	let windows = sample_windows();
	let draft = serde_json::json!({ "title": "Review pipeline", "type": "revenue", "priority": "low" });
	let parsed = task::from_draft(&draft, &windows).expect("Draft must parse.");
	let value = serde_json::to_value(&parsed).expect("Task must serialize.");

	assert_eq!(value["type"], "revenue");
	assert_eq!(value["priority"], "low");
	assert_eq!(value["due_date"], "2026-08-29T00:00:00Z");
}
