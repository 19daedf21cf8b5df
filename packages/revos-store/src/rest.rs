//! PostgREST-style read client. Every query forwards the caller's bearer token so the
//! store's row-level security scopes the result set; the service itself holds only the
//! anonymous API key.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use revos_domain::windows::DayWindows;

use crate::{
	Result,
	models::{AgentRow, EngagementRow, EventRow, InterventionRow, OutcomeRow, RevenueRow},
};

pub struct RestStore {
	client: Client,
	api_base: String,
	anon_key: String,
}

impl RestStore {
	pub fn new(cfg: &revos_config::Store) -> Result<Self> {
		let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;

		Ok(Self { client, api_base: cfg.api_base.clone(), anon_key: cfg.anon_key.clone() })
	}

	async fn select<T>(&self, token: &str, table: &str, params: &[(&str, String)]) -> Result<Vec<T>>
	where
		T: DeserializeOwned,
	{
		let url = format!("{}/{table}", self.api_base);
		let rows = self
			.client
			.get(url)
			.header("apikey", &self.anon_key)
			.bearer_auth(token)
			.query(params)
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;

		Ok(rows)
	}

	pub async fn events_today(&self, token: &str, windows: &DayWindows) -> Result<Vec<EventRow>> {
		self.select(token, "events", &event_params(windows)).await
	}

	pub async fn due_interventions(
		&self,
		token: &str,
		windows: &DayWindows,
	) -> Result<Vec<InterventionRow>> {
		self.select(token, "interventions", &intervention_params(windows)).await
	}

	pub async fn recent_outcomes(&self, token: &str) -> Result<Vec<OutcomeRow>> {
		self.select(token, "outcomes", &outcome_params()).await
	}

	pub async fn open_revenue(&self, token: &str) -> Result<Vec<RevenueRow>> {
		self.select(token, "revenue", &revenue_params()).await
	}

	pub async fn recent_agents(&self, token: &str) -> Result<Vec<AgentRow>> {
		self.select(token, "ai_agents", &agent_params()).await
	}

	pub async fn active_engagements(&self, token: &str) -> Result<Vec<EngagementRow>> {
		self.select(token, "engagements", &engagement_params()).await
	}
}

fn rfc3339(value: OffsetDateTime) -> String {
	value.format(&Rfc3339).unwrap_or_else(|_| value.to_string())
}

// Repeated column keys are ANDed by the store, so the two `start_time` filters below
// bound a half-open [start_of_day, end_of_day) window.
fn event_params(windows: &DayWindows) -> Vec<(&'static str, String)> {
	vec![
		("select", "*".to_string()),
		("start_time", format!("gte.{}", rfc3339(windows.start_of_day))),
		("start_time", format!("lt.{}", rfc3339(windows.end_of_day))),
		("order", "start_time.asc".to_string()),
		("limit", "50".to_string()),
	]
}

fn intervention_params(windows: &DayWindows) -> Vec<(&'static str, String)> {
	vec![
		("select", "*".to_string()),
		("status", "in.(planned,in_progress)".to_string()),
		("due_date", format!("lte.{}", rfc3339(windows.week_ahead))),
		("order", "due_date.asc".to_string()),
		("limit", "50".to_string()),
	]
}

fn outcome_params() -> Vec<(&'static str, String)> {
	vec![
		("select", "*".to_string()),
		("order", "measurement_date.desc".to_string()),
		("limit", "100".to_string()),
	]
}

fn revenue_params() -> Vec<(&'static str, String)> {
	vec![
		("select", "*".to_string()),
		("payment_status", "in.(pending,overdue)".to_string()),
		("order", "invoice_date.asc".to_string()),
		("limit", "50".to_string()),
	]
}

fn agent_params() -> Vec<(&'static str, String)> {
	vec![
		("select", "*".to_string()),
		("order", "updated_at.desc".to_string()),
		("limit", "50".to_string()),
	]
}

fn engagement_params() -> Vec<(&'static str, String)> {
	vec![
		("select", "*".to_string()),
		("status", "eq.active".to_string()),
		("limit", "100".to_string()),
	]
}
