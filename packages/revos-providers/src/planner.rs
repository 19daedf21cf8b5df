use std::time::Duration;

use color_eyre::{Result, eyre};
use reqwest::Client;
use serde_json::Value;

const SYSTEM_PROMPT: &str = "\
You are the planning assistant for a Chief Revenue Scientist. Given today's operational \
context as JSON, reply with a single JSON object of the form {\"tasks\": [...]} and \
nothing else. Produce 5 to 10 tasks. Each task is an object with: id (string), title \
(short imperative sentence), reason (one short sentence), type (one of engagement, \
intervention, outcome, revenue, event, agent, general), priority (one of critical, \
high, medium, low), and due_date (ISO-8601 timestamp).";

/// One chat-completion round trip. No retries and no streaming; any network, status,
/// or parse failure is the caller's cue to fall back to the deterministic rules.
pub async fn plan(cfg: &revos_config::Planner, context: &Value) -> Result<Vec<Value>> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": cfg.model,
		"temperature": cfg.temperature,
		"messages": [
			{ "role": "system", "content": SYSTEM_PROMPT },
			{ "role": "user", "content": format!("Today's operational context:\n{context}") },
		],
	});
	let res = client
		.post(&url)
		.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	parse_task_drafts(&json)
}

fn parse_task_drafts(json: &Value) -> Result<Vec<Value>> {
	let content = json
		.get("choices")
		.and_then(Value::as_array)
		.and_then(|choices| choices.first())
		.and_then(|choice| choice.get("message"))
		.and_then(|message| message.get("content"))
		.and_then(Value::as_str)
		.ok_or_else(|| eyre::eyre!("Planner response carries no message content."))?;
	let parsed = parse_content_json(content)?;
	let tasks = parsed
		.get("tasks")
		.and_then(Value::as_array)
		.ok_or_else(|| eyre::eyre!("Planner reply lacks an array-typed tasks field."))?;

	Ok(tasks.clone())
}

fn parse_content_json(content: &str) -> Result<Value> {
	if let Ok(value) = serde_json::from_str(content) {
		return Ok(value);
	}

	let candidate = first_balanced_object(content)
		.ok_or_else(|| eyre::eyre!("Planner reply contains no JSON object."))?;

	serde_json::from_str(candidate)
		.map_err(|_| eyre::eyre!("Embedded planner JSON fragment is invalid."))
}

/// Returns the first `{...}` substring with balanced braces, skipping braces inside
/// string literals.
fn first_balanced_object(content: &str) -> Option<&str> {
	let start = content.find('{')?;
	let mut depth = 0_usize;
	let mut in_string = false;
	let mut escaped = false;

	for (index, ch) in content[start..].char_indices() {
		if escaped {
			escaped = false;

			continue;
		}

		match ch {
			'\\' if in_string => escaped = true,
			'"' => in_string = !in_string,
			'{' if !in_string => depth += 1,
			'}' if !in_string => {
				depth = depth.checked_sub(1)?;

				if depth == 0 {
					return Some(&content[start..start + index + 1]);
				}
			},
			_ => {},
		}
	}

	None
}

#[cfg(test)]
mod tests {
	use super::*;

	fn completion(content: &str) -> Value {
		serde_json::json!({
			"choices": [
				{ "message": { "content": content } }
			]
		})
	}

	#[test]
	fn parses_direct_json_content() {
		let json = completion("{\"tasks\": [{\"title\": \"Call the client\"}]}");
		let drafts = parse_task_drafts(&json).expect("parse failed");

		assert_eq!(drafts.len(), 1);
	}

	#[test]
	fn extracts_an_object_embedded_in_prose() {
		let json = completion(
			"Here is your plan for today:\n```json\n{\"tasks\": [{\"title\": \"Review {key} accounts\"}, {\"title\": \"Send invoices\"}]}\n```\nGood luck!",
		);
		let drafts = parse_task_drafts(&json).expect("parse failed");

		assert_eq!(drafts.len(), 2);
		assert_eq!(drafts[0]["title"], "Review {key} accounts");
	}

	#[test]
	fn plain_prose_is_a_parse_failure() {
		let json = completion("I could not find anything actionable today, sorry.");

		assert!(parse_task_drafts(&json).is_err());
	}

	#[test]
	fn object_without_tasks_array_is_a_parse_failure() {
		let json = completion("{\"plan\": \"rest\"}");

		assert!(parse_task_drafts(&json).is_err());

		let json = completion("{\"tasks\": \"none\"}");

		assert!(parse_task_drafts(&json).is_err());
	}

	#[test]
	fn missing_choices_is_a_parse_failure() {
		let json = serde_json::json!({ "error": { "message": "rate limited" } });

		assert!(parse_task_drafts(&json).is_err());
	}

	#[test]
	fn balanced_scan_ignores_braces_in_strings() {
		let content = "note {\"tasks\": [{\"title\": \"a } b\"}]} trailing";
		let object = first_balanced_object(content).expect("scan failed");

		assert_eq!(object, "{\"tasks\": [{\"title\": \"a } b\"}]}");
	}
}
