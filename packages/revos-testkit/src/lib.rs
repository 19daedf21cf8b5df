//! Test doubles and row fixtures shared by the service and API test suites.

use std::{
	collections::HashSet,
	sync::{
		Mutex,
		atomic::{AtomicUsize, Ordering},
	},
};

use color_eyre::eyre;
use serde_json::Value;

use revos_config::{Config, Planner, Service, Store};
use revos_domain::windows::DayWindows;
use revos_service::{BoxFuture, PlannerProvider, TableStore};
use revos_store::models::{
	AgentRow, EngagementRow, EventRow, InterventionRow, OutcomeRow, RevenueRow,
};

pub fn test_config(with_planner: bool) -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:0".to_string(),
			log_level: "info".to_string(),
		},
		store: Store {
			api_base: "http://localhost:54321/rest/v1".to_string(),
			anon_key: "anon-test-key".to_string(),
			timeout_ms: 1_000,
		},
		planner: with_planner.then(|| Planner {
			provider_id: "stub".to_string(),
			api_base: "http://localhost:0".to_string(),
			api_key: "key".to_string(),
			path: "/v1/chat/completions".to_string(),
			model: "stub-model".to_string(),
			temperature: 0.1,
			timeout_ms: 1_000,
			default_headers: serde_json::Map::new(),
		}),
	}
}

pub fn event(id: &str, title: &str) -> EventRow {
	EventRow {
		id: id.to_string(),
		title: title.to_string(),
		start_time: Some("2026-08-28T10:00:00+00:00".to_string()),
		engagement_id: None,
	}
}

pub fn intervention(id: &str, status: &str, due_date: &str) -> InterventionRow {
	InterventionRow {
		id: id.to_string(),
		title: format!("Intervention {id}"),
		status: status.to_string(),
		priority: Some("high".to_string()),
		due_date: Some(due_date.to_string()),
	}
}

pub fn outcome(id: &str, current: Option<f64>, target: Option<f64>) -> OutcomeRow {
	OutcomeRow {
		id: id.to_string(),
		metric_name: format!("metric-{id}"),
		baseline_value: Some(0.0),
		current_value: current,
		target_value: target,
		measurement_date: Some("2026-08-27".to_string()),
		engagement_id: None,
	}
}

pub fn revenue(id: &str, payment_status: &str) -> RevenueRow {
	RevenueRow {
		id: id.to_string(),
		amount: Some(12_500.0),
		invoice_date: Some("2026-08-01".to_string()),
		payment_date: None,
		payment_status: payment_status.to_string(),
		description: None,
	}
}

pub fn agent(id: &str, status: &str) -> AgentRow {
	AgentRow {
		id: id.to_string(),
		name: format!("agent-{id}"),
		status: status.to_string(),
		engagement_id: None,
		org_id: None,
		updated_at: Some("2026-08-28T07:00:00+00:00".to_string()),
	}
}

pub fn engagement(id: &str) -> EngagementRow {
	EngagementRow {
		id: id.to_string(),
		name: format!("client-{id}"),
		status: "active".to_string(),
		start_date: Some("2026-01-01".to_string()),
		end_date: None,
		org_id: None,
	}
}

/// In-memory [`TableStore`]. Categories listed in `failures` error out the way a
/// broken read would; every call is counted so tests can assert the auth gate never
/// reached the store.
#[derive(Default)]
pub struct StubStore {
	pub events: Vec<EventRow>,
	pub interventions: Vec<InterventionRow>,
	pub outcomes: Vec<OutcomeRow>,
	pub revenue: Vec<RevenueRow>,
	pub agents: Vec<AgentRow>,
	pub engagements: Vec<EngagementRow>,
	pub failures: HashSet<&'static str>,
	pub reads: AtomicUsize,
}

impl StubStore {
	pub fn read_count(&self) -> usize {
		self.reads.load(Ordering::SeqCst)
	}

	fn category<T>(&self, name: &'static str, rows: &[T]) -> revos_store::Result<Vec<T>>
	where
		T: Clone,
	{
		self.reads.fetch_add(1, Ordering::SeqCst);

		if self.failures.contains(name) {
			return Err(revos_store::Error::InvalidConfig {
				message: format!("{name} read refused by stub."),
			});
		}

		Ok(rows.to_vec())
	}
}

impl TableStore for StubStore {
	fn events_today<'a>(
		&'a self,
		_token: &'a str,
		_windows: &'a DayWindows,
	) -> BoxFuture<'a, revos_store::Result<Vec<EventRow>>> {
		Box::pin(async move { self.category("events", &self.events) })
	}

	fn due_interventions<'a>(
		&'a self,
		_token: &'a str,
		_windows: &'a DayWindows,
	) -> BoxFuture<'a, revos_store::Result<Vec<InterventionRow>>> {
		Box::pin(async move { self.category("interventions", &self.interventions) })
	}

	fn recent_outcomes<'a>(
		&'a self,
		_token: &'a str,
	) -> BoxFuture<'a, revos_store::Result<Vec<OutcomeRow>>> {
		Box::pin(async move { self.category("outcomes", &self.outcomes) })
	}

	fn open_revenue<'a>(
		&'a self,
		_token: &'a str,
	) -> BoxFuture<'a, revos_store::Result<Vec<RevenueRow>>> {
		Box::pin(async move { self.category("revenue", &self.revenue) })
	}

	fn recent_agents<'a>(
		&'a self,
		_token: &'a str,
	) -> BoxFuture<'a, revos_store::Result<Vec<AgentRow>>> {
		Box::pin(async move { self.category("ai_agents", &self.agents) })
	}

	fn active_engagements<'a>(
		&'a self,
		_token: &'a str,
	) -> BoxFuture<'a, revos_store::Result<Vec<EngagementRow>>> {
		Box::pin(async move { self.category("engagements", &self.engagements) })
	}
}

pub enum PlannerScript {
	Drafts(Vec<Value>),
	Fail(String),
}

/// Scripted [`PlannerProvider`] that records the context it was handed.
pub struct StubPlanner {
	pub script: PlannerScript,
	pub calls: AtomicUsize,
	pub last_context: Mutex<Option<Value>>,
}

impl StubPlanner {
	pub fn drafts(drafts: Vec<Value>) -> Self {
		Self {
			script: PlannerScript::Drafts(drafts),
			calls: AtomicUsize::new(0),
			last_context: Mutex::new(None),
		}
	}

	pub fn failing(message: &str) -> Self {
		Self {
			script: PlannerScript::Fail(message.to_string()),
			calls: AtomicUsize::new(0),
			last_context: Mutex::new(None),
		}
	}

	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

impl PlannerProvider for StubPlanner {
	fn plan<'a>(
		&'a self,
		_cfg: &'a Planner,
		context: &'a Value,
	) -> BoxFuture<'a, color_eyre::Result<Vec<Value>>> {
		Box::pin(async move {
			self.calls.fetch_add(1, Ordering::SeqCst);
			*self.last_context.lock().unwrap_or_else(|err| err.into_inner()) =
				Some(context.clone());

			match &self.script {
				PlannerScript::Drafts(drafts) => Ok(drafts.clone()),
				PlannerScript::Fail(message) => Err(eyre::eyre!("{message}")),
			}
		})
	}
}
