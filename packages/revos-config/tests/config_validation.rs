use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use revos_config::Error;

const SAMPLE_CONFIG_TEMPLATE_TOML: &str = include_str!("fixtures/sample_config.template.toml");

static COUNTER: AtomicU64 = AtomicU64::new(0);

fn write_config(contents: &str) -> PathBuf {
	let stamp = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map(|duration| duration.as_nanos())
		.unwrap_or(0);
	let id = COUNTER.fetch_add(1, Ordering::Relaxed);
	let path = env::temp_dir().join(format!("revos_config_{stamp}_{id}.toml"));

	fs::write(&path, contents).expect("Failed to write temp config.");

	path
}

fn sample_value() -> Value {
	toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.")
}

fn render(value: &Value) -> String {
	toml::to_string(value).expect("Failed to render template config.")
}

#[test]
fn loads_valid_config() {
	let path = write_config(SAMPLE_CONFIG_TEMPLATE_TOML);
	let cfg = revos_config::load(&path).expect("Expected a valid config.");

	assert_eq!(cfg.service.http_bind, "127.0.0.1:8780");
	assert_eq!(cfg.store.timeout_ms, 10_000);
	assert_eq!(cfg.planner.as_ref().map(|planner| planner.model.as_str()), Some("goal-planner"));

	fs::remove_file(path).ok();
}

#[test]
fn missing_planner_table_is_valid() {
	let mut value = sample_value();

	value.as_table_mut().expect("Template config must be a table.").remove("planner");

	let path = write_config(&render(&value));
	let cfg = revos_config::load(&path).expect("Config without a planner must load.");

	assert!(cfg.planner.is_none());

	fs::remove_file(path).ok();
}

#[test]
fn blank_planner_credential_disables_the_planner() {
	let mut value = sample_value();
	let planner = value
		.as_table_mut()
		.expect("Template config must be a table.")
		.get_mut("planner")
		.and_then(Value::as_table_mut)
		.expect("Template config must include [planner].");

	planner.insert("api_key".to_string(), Value::String("  ".to_string()));

	let path = write_config(&render(&value));
	let cfg = revos_config::load(&path).expect("Blank credential must not be a load error.");

	assert!(cfg.planner.is_none());

	fs::remove_file(path).ok();
}

#[test]
fn trims_trailing_slashes_from_store_api_base() {
	let mut value = sample_value();
	let store = value
		.as_table_mut()
		.expect("Template config must be a table.")
		.get_mut("store")
		.and_then(Value::as_table_mut)
		.expect("Template config must include [store].");

	store.insert("api_base".to_string(), Value::String("http://localhost:54321/".to_string()));

	let path = write_config(&render(&value));
	let cfg = revos_config::load(&path).expect("Expected a valid config.");

	assert_eq!(cfg.store.api_base, "http://localhost:54321");

	fs::remove_file(path).ok();
}

#[test]
fn rejects_empty_anon_key() {
	let mut value = sample_value();
	let store = value
		.as_table_mut()
		.expect("Template config must be a table.")
		.get_mut("store")
		.and_then(Value::as_table_mut)
		.expect("Template config must include [store].");

	store.insert("anon_key".to_string(), Value::String(String::new()));

	let path = write_config(&render(&value));
	let err = revos_config::load(&path).expect_err("Empty anon key must be rejected.");

	assert!(matches!(err, Error::Validation { .. }));

	fs::remove_file(path).ok();
}

#[test]
fn rejects_zero_planner_timeout() {
	let mut value = sample_value();
	let planner = value
		.as_table_mut()
		.expect("Template config must be a table.")
		.get_mut("planner")
		.and_then(Value::as_table_mut)
		.expect("Template config must include [planner].");

	planner.insert("timeout_ms".to_string(), Value::Integer(0));

	let path = write_config(&render(&value));
	let err = revos_config::load(&path).expect_err("Zero planner timeout must be rejected.");

	assert!(matches!(err, Error::Validation { .. }));

	fs::remove_file(path).ok();
}

#[test]
fn surfaces_parse_errors_with_the_path() {
	let path = write_config("service = \"not a table\"");
	let err = revos_config::load(&path).expect_err("Malformed TOML must be rejected.");

	assert!(matches!(err, Error::ParseConfig { .. }));

	fs::remove_file(path).ok();
}
