use serde::Serialize;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use revos_domain::{HIGHLIGHT_ROWS, SAMPLE_ROWS, fallback::TriggerCounts, triage};
use revos_store::models::{
	AgentRow, EngagementRow, EventRow, InterventionRow, OutcomeRow, RevenueRow,
};

/// Whatever the six reads produced. A category whose read failed contributes an empty
/// vector and a reason in `degraded_reasons`.
#[derive(Debug, Default)]
pub struct Snapshot {
	pub events: Vec<EventRow>,
	pub interventions: Vec<InterventionRow>,
	pub outcomes: Vec<OutcomeRow>,
	pub revenue: Vec<RevenueRow>,
	pub agents: Vec<AgentRow>,
	pub engagements: Vec<EngagementRow>,
	pub degraded_reasons: Vec<String>,
}

/// The four derived subsets, each capped at `HIGHLIGHT_ROWS`.
#[derive(Debug, Default)]
pub struct Highlights {
	pub behind_outcomes: Vec<OutcomeRow>,
	pub overdue_revenue: Vec<RevenueRow>,
	pub pending_revenue: Vec<RevenueRow>,
	pub inactive_agents: Vec<AgentRow>,
}

impl Highlights {
	pub fn derive(snapshot: &Snapshot) -> Self {
		Self {
			behind_outcomes: snapshot
				.outcomes
				.iter()
				.filter(|row| triage::behind_target(row.target_value, row.current_value))
				.take(HIGHLIGHT_ROWS)
				.cloned()
				.collect(),
			overdue_revenue: snapshot
				.revenue
				.iter()
				.filter(|row| triage::revenue_overdue(&row.payment_status))
				.take(HIGHLIGHT_ROWS)
				.cloned()
				.collect(),
			pending_revenue: snapshot
				.revenue
				.iter()
				.filter(|row| triage::revenue_pending(&row.payment_status))
				.take(HIGHLIGHT_ROWS)
				.cloned()
				.collect(),
			inactive_agents: snapshot
				.agents
				.iter()
				.filter(|row| triage::agent_inactive(&row.status))
				.take(HIGHLIGHT_ROWS)
				.cloned()
				.collect(),
		}
	}

	pub fn trigger_counts(&self, snapshot: &Snapshot) -> TriggerCounts {
		TriggerCounts {
			overdue_revenue: self.overdue_revenue.len(),
			due_interventions: snapshot.interventions.len(),
			behind_outcomes: self.behind_outcomes.len(),
			events_today: snapshot.events.len(),
			inactive_agents: self.inactive_agents.len(),
		}
	}
}

/// The summary handed to the planner. Built once per request and never persisted.
#[derive(Debug, Serialize)]
pub struct Context {
	pub today: String,
	pub counts: Counts,
	pub samples: Samples,
}

#[derive(Debug, Serialize)]
pub struct Counts {
	pub events_today: usize,
	pub due_interventions: usize,
	pub recent_outcomes: usize,
	pub open_revenue: usize,
	pub agents: usize,
	pub active_engagements: usize,
	pub behind_outcomes: usize,
	pub overdue_revenue: usize,
	pub pending_revenue: usize,
	pub inactive_agents: usize,
}

#[derive(Debug, Serialize)]
pub struct Samples {
	pub events: Vec<EventRow>,
	pub interventions: Vec<InterventionRow>,
	pub outcomes: Vec<OutcomeRow>,
	pub revenue: Vec<RevenueRow>,
	pub agents: Vec<AgentRow>,
	pub engagements: Vec<EngagementRow>,
	pub behind_outcomes: Vec<OutcomeRow>,
	pub overdue_revenue: Vec<RevenueRow>,
	pub pending_revenue: Vec<RevenueRow>,
	pub inactive_agents: Vec<AgentRow>,
}

impl Context {
	pub fn build(now: OffsetDateTime, snapshot: &Snapshot, highlights: &Highlights) -> Self {
		Self {
			today: now.format(&Rfc3339).unwrap_or_else(|_| now.to_string()),
			counts: Counts {
				events_today: snapshot.events.len(),
				due_interventions: snapshot.interventions.len(),
				recent_outcomes: snapshot.outcomes.len(),
				open_revenue: snapshot.revenue.len(),
				agents: snapshot.agents.len(),
				active_engagements: snapshot.engagements.len(),
				behind_outcomes: highlights.behind_outcomes.len(),
				overdue_revenue: highlights.overdue_revenue.len(),
				pending_revenue: highlights.pending_revenue.len(),
				inactive_agents: highlights.inactive_agents.len(),
			},
			samples: Samples {
				events: sample(&snapshot.events),
				interventions: sample(&snapshot.interventions),
				outcomes: sample(&snapshot.outcomes),
				revenue: sample(&snapshot.revenue),
				agents: sample(&snapshot.agents),
				engagements: sample(&snapshot.engagements),
				behind_outcomes: sample(&highlights.behind_outcomes),
				overdue_revenue: sample(&highlights.overdue_revenue),
				pending_revenue: sample(&highlights.pending_revenue),
				inactive_agents: sample(&highlights.inactive_agents),
			},
		}
	}
}

fn sample<T>(rows: &[T]) -> Vec<T>
where
	T: Clone,
{
	rows.iter().take(SAMPLE_ROWS).cloned().collect()
}
