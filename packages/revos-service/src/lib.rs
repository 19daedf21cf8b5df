pub mod context;
pub mod goals;

use std::{future::Future, pin::Pin, sync::Arc};

use serde_json::Value;

pub use context::{Context, Counts, Highlights, Samples, Snapshot};
pub use goals::{GoalSource, GoalsResponse};

use revos_config::Config;
use revos_domain::windows::DayWindows;
use revos_store::{
	models::{AgentRow, EngagementRow, EventRow, InterventionRow, OutcomeRow, RevenueRow},
	rest::RestStore,
};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Read access to the six operational tables, scoped by the caller's bearer token.
pub trait TableStore
where
	Self: Send + Sync,
{
	fn events_today<'a>(
		&'a self,
		token: &'a str,
		windows: &'a DayWindows,
	) -> BoxFuture<'a, revos_store::Result<Vec<EventRow>>>;

	fn due_interventions<'a>(
		&'a self,
		token: &'a str,
		windows: &'a DayWindows,
	) -> BoxFuture<'a, revos_store::Result<Vec<InterventionRow>>>;

	fn recent_outcomes<'a>(
		&'a self,
		token: &'a str,
	) -> BoxFuture<'a, revos_store::Result<Vec<OutcomeRow>>>;

	fn open_revenue<'a>(
		&'a self,
		token: &'a str,
	) -> BoxFuture<'a, revos_store::Result<Vec<RevenueRow>>>;

	fn recent_agents<'a>(
		&'a self,
		token: &'a str,
	) -> BoxFuture<'a, revos_store::Result<Vec<AgentRow>>>;

	fn active_engagements<'a>(
		&'a self,
		token: &'a str,
	) -> BoxFuture<'a, revos_store::Result<Vec<EngagementRow>>>;
}

pub trait PlannerProvider
where
	Self: Send + Sync,
{
	fn plan<'a>(
		&'a self,
		cfg: &'a revos_config::Planner,
		context: &'a Value,
	) -> BoxFuture<'a, color_eyre::Result<Vec<Value>>>;
}

pub struct GoalService {
	pub cfg: Config,
	pub store: Arc<dyn TableStore>,
	pub planner: Arc<dyn PlannerProvider>,
}

impl GoalService {
	pub fn new(cfg: Config, store: Arc<dyn TableStore>, planner: Arc<dyn PlannerProvider>) -> Self {
		Self { cfg, store, planner }
	}

	/// Wires the live REST store and chat-completion planner.
	pub fn with_defaults(cfg: Config) -> revos_store::Result<Self> {
		let store = RestStore::new(&cfg.store)?;

		Ok(Self::new(cfg, Arc::new(store), Arc::new(DefaultPlanner)))
	}
}

struct DefaultPlanner;

impl PlannerProvider for DefaultPlanner {
	fn plan<'a>(
		&'a self,
		cfg: &'a revos_config::Planner,
		context: &'a Value,
	) -> BoxFuture<'a, color_eyre::Result<Vec<Value>>> {
		Box::pin(revos_providers::planner::plan(cfg, context))
	}
}

impl TableStore for RestStore {
	fn events_today<'a>(
		&'a self,
		token: &'a str,
		windows: &'a DayWindows,
	) -> BoxFuture<'a, revos_store::Result<Vec<EventRow>>> {
		Box::pin(RestStore::events_today(self, token, windows))
	}

	fn due_interventions<'a>(
		&'a self,
		token: &'a str,
		windows: &'a DayWindows,
	) -> BoxFuture<'a, revos_store::Result<Vec<InterventionRow>>> {
		Box::pin(RestStore::due_interventions(self, token, windows))
	}

	fn recent_outcomes<'a>(
		&'a self,
		token: &'a str,
	) -> BoxFuture<'a, revos_store::Result<Vec<OutcomeRow>>> {
		Box::pin(RestStore::recent_outcomes(self, token))
	}

	fn open_revenue<'a>(
		&'a self,
		token: &'a str,
	) -> BoxFuture<'a, revos_store::Result<Vec<RevenueRow>>> {
		Box::pin(RestStore::open_revenue(self, token))
	}

	fn recent_agents<'a>(
		&'a self,
		token: &'a str,
	) -> BoxFuture<'a, revos_store::Result<Vec<AgentRow>>> {
		Box::pin(RestStore::recent_agents(self, token))
	}

	fn active_engagements<'a>(
		&'a self,
		token: &'a str,
	) -> BoxFuture<'a, revos_store::Result<Vec<EngagementRow>>> {
		Box::pin(RestStore::active_engagements(self, token))
	}
}
