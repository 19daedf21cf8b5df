use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub store: Store,
	pub planner: Option<Planner>,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Store {
	/// Base URL of the row-level-secured REST data store, without a trailing slash.
	pub api_base: String,
	/// Anonymous API key sent alongside the caller's bearer token on every read.
	pub anon_key: String,
	#[serde(default = "default_store_timeout_ms")]
	pub timeout_ms: u64,
}

/// Chat-completion provider used for goal delegation. The whole table is optional;
/// leaving it out (or leaving `api_key` blank) routes every request through the
/// deterministic fallback rules.
#[derive(Debug, Deserialize, Clone)]
pub struct Planner {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub temperature: f32,
	#[serde(default = "default_planner_timeout_ms")]
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

fn default_store_timeout_ms() -> u64 {
	10_000
}

fn default_planner_timeout_ms() -> u64 {
	15_000
}
