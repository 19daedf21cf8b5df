use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use uuid::Uuid;

use crate::windows::DayWindows;

/// Upper bound applied to a successfully parsed planner list. The prompt asks for 5-10
/// items but nothing stops a model from returning more.
pub const DELEGATED_TASK_CAP: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
	Engagement,
	Intervention,
	Outcome,
	Revenue,
	Event,
	Agent,
	General,
}

impl TaskType {
	pub fn parse_lossy(raw: &str) -> Self {
		match raw {
			"engagement" => Self::Engagement,
			"intervention" => Self::Intervention,
			"outcome" => Self::Outcome,
			"revenue" => Self::Revenue,
			"event" => Self::Event,
			"agent" => Self::Agent,
			_ => Self::General,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
	Critical,
	High,
	Medium,
	Low,
}

impl Priority {
	pub fn parse_lossy(raw: &str) -> Self {
		match raw {
			"critical" => Self::Critical,
			"high" => Self::High,
			"medium" => Self::Medium,
			"low" => Self::Low,
			_ => Self::Medium,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
	pub id: String,
	pub title: String,
	pub reason: String,
	#[serde(rename = "type")]
	pub task_type: TaskType,
	pub priority: Priority,
	#[serde(with = "crate::time_serde")]
	pub due_date: OffsetDateTime,
}

/// Coerces one raw planner draft into a `Task`. A draft without a usable title is
/// dropped; every other field degrades to a sensible default.
pub fn from_draft(draft: &Value, windows: &DayWindows) -> Option<Task> {
	let title = draft.get("title").and_then(Value::as_str).map(str::trim).unwrap_or_default();

	if title.is_empty() {
		return None;
	}

	let id = draft
		.get("id")
		.and_then(Value::as_str)
		.map(str::trim)
		.filter(|id| !id.is_empty())
		.map(ToString::to_string)
		.unwrap_or_else(|| Uuid::new_v4().to_string());
	let reason =
		draft.get("reason").and_then(Value::as_str).map(str::trim).unwrap_or_default().to_string();
	let task_type =
		TaskType::parse_lossy(draft.get("type").and_then(Value::as_str).unwrap_or_default());
	let priority =
		Priority::parse_lossy(draft.get("priority").and_then(Value::as_str).unwrap_or_default());
	let due_date = draft
		.get("due_date")
		.and_then(Value::as_str)
		.and_then(|raw| OffsetDateTime::parse(raw, &Rfc3339).ok())
		.unwrap_or(windows.end_of_day);

	Some(Task { id, title: title.to_string(), reason, task_type, priority, due_date })
}

pub fn from_drafts(drafts: &[Value], windows: &DayWindows) -> Vec<Task> {
	drafts.iter().filter_map(|draft| from_draft(draft, windows)).take(DELEGATED_TASK_CAP).collect()
}
