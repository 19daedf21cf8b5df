//! Row shapes read from the data store. Every field beyond the id is optional or
//! defaulted; the store owns these tables and this service must keep working when
//! columns are absent or malformed.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRow {
	pub id: String,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub start_time: Option<String>,
	#[serde(default)]
	pub engagement_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterventionRow {
	pub id: String,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub status: String,
	#[serde(default)]
	pub priority: Option<String>,
	#[serde(default)]
	pub due_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeRow {
	pub id: String,
	#[serde(default)]
	pub metric_name: String,
	#[serde(default, deserialize_with = "lenient_f64")]
	pub baseline_value: Option<f64>,
	#[serde(default, deserialize_with = "lenient_f64")]
	pub current_value: Option<f64>,
	#[serde(default, deserialize_with = "lenient_f64")]
	pub target_value: Option<f64>,
	#[serde(default)]
	pub measurement_date: Option<String>,
	#[serde(default)]
	pub engagement_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueRow {
	pub id: String,
	#[serde(default, deserialize_with = "lenient_f64")]
	pub amount: Option<f64>,
	#[serde(default)]
	pub invoice_date: Option<String>,
	#[serde(default)]
	pub payment_date: Option<String>,
	#[serde(default)]
	pub payment_status: String,
	#[serde(default)]
	pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRow {
	pub id: String,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub status: String,
	#[serde(default)]
	pub engagement_id: Option<String>,
	#[serde(default)]
	pub org_id: Option<String>,
	#[serde(default)]
	pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementRow {
	pub id: String,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub status: String,
	#[serde(default)]
	pub start_date: Option<String>,
	#[serde(default)]
	pub end_date: Option<String>,
	#[serde(default)]
	pub org_id: Option<String>,
}

/// Accepts JSON numbers and numeric strings; anything else becomes `None` so malformed
/// figures never trip the behind-target heuristic.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = Option::<Value>::deserialize(deserializer)?;

	Ok(match raw {
		Some(Value::Number(number)) => number.as_f64(),
		Some(Value::String(text)) => text.trim().parse().ok(),
		_ => None,
	})
}
