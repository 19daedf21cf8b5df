use serde::Serialize;
use time::{OffsetDateTime, UtcOffset};
use tracing::warn;

use revos_domain::{
	fallback,
	task::{self, Task},
	windows::DayWindows,
};

use crate::{Context, GoalService, Highlights, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalSource {
	Planner,
	Fallback,
}

#[derive(Debug, Serialize)]
pub struct GoalsResponse {
	pub tasks: Vec<Task>,
	#[serde(with = "revos_domain::time_serde")]
	pub generated_at: OffsetDateTime,
	pub source: GoalSource,
	pub degraded: bool,
	pub degraded_reasons: Vec<String>,
}

impl GoalService {
	/// Synthesizes the caller's task list for "today". Total: per-category read
	/// failures degrade to empty sets and a failed delegation selects the fallback
	/// rules, so the only hard failure left is the auth gate upstream.
	pub async fn todays_goals(&self, token: &str, offset: UtcOffset) -> GoalsResponse {
		let now = OffsetDateTime::now_utc();
		let windows = DayWindows::compute(now, offset);
		let snapshot = self.fetch_snapshot(token, &windows).await;
		let highlights = Highlights::derive(&snapshot);
		let (tasks, source) = self.synthesize(&windows, &snapshot, &highlights).await;

		GoalsResponse {
			tasks,
			generated_at: now,
			source,
			degraded: !snapshot.degraded_reasons.is_empty(),
			degraded_reasons: snapshot.degraded_reasons,
		}
	}

	async fn synthesize(
		&self,
		windows: &DayWindows,
		snapshot: &Snapshot,
		highlights: &Highlights,
	) -> (Vec<Task>, GoalSource) {
		if let Some(planner_cfg) = &self.cfg.planner {
			let context = Context::build(windows.now, snapshot, highlights);

			match serde_json::to_value(&context) {
				Ok(context) => match self.planner.plan(planner_cfg, &context).await {
					Ok(drafts) => {
						let tasks = task::from_drafts(&drafts, windows);

						if tasks.is_empty() {
							warn!("Planner returned no usable tasks; using fallback rules.");
						} else {
							return (tasks, GoalSource::Planner);
						}
					},
					Err(err) => {
						warn!(error = %err, "Planner delegation failed; using fallback rules.");
					},
				},
				Err(err) => {
					warn!(error = %err, "Context serialization failed; using fallback rules.");
				},
			}
		}

		let triggers = highlights.trigger_counts(snapshot);

		(fallback::fallback_tasks(&triggers, windows), GoalSource::Fallback)
	}

	async fn fetch_snapshot(&self, token: &str, windows: &DayWindows) -> Snapshot {
		let (events, interventions, outcomes, revenue, agents, engagements) = tokio::join!(
			self.store.events_today(token, windows),
			self.store.due_interventions(token, windows),
			self.store.recent_outcomes(token),
			self.store.open_revenue(token),
			self.store.recent_agents(token),
			self.store.active_engagements(token),
		);
		let mut degraded_reasons = Vec::new();

		Snapshot {
			events: settle("events", events, &mut degraded_reasons),
			interventions: settle("interventions", interventions, &mut degraded_reasons),
			outcomes: settle("outcomes", outcomes, &mut degraded_reasons),
			revenue: settle("revenue", revenue, &mut degraded_reasons),
			agents: settle("ai_agents", agents, &mut degraded_reasons),
			engagements: settle("engagements", engagements, &mut degraded_reasons),
			degraded_reasons,
		}
	}
}

fn settle<T>(
	category: &str,
	result: revos_store::Result<Vec<T>>,
	reasons: &mut Vec<String>,
) -> Vec<T> {
	match result {
		Ok(rows) => rows,
		Err(err) => {
			warn!(category, error = %err, "Category read failed; treating it as empty.");
			reasons.push(format!("{category}: {err}"));

			Vec::new()
		},
	}
}
