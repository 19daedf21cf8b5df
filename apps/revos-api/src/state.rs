use std::sync::Arc;

use revos_service::GoalService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<GoalService>,
}
impl AppState {
	pub fn new(config: revos_config::Config) -> color_eyre::Result<Self> {
		let service = GoalService::with_defaults(config)?;

		Ok(Self { service: Arc::new(service) })
	}
}
