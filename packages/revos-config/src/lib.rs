mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Planner, Service, Store};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.store.api_base.trim().is_empty() {
		return Err(Error::Validation { message: "store.api_base must be non-empty.".to_string() });
	}
	if cfg.store.anon_key.trim().is_empty() {
		return Err(Error::Validation { message: "store.anon_key must be non-empty.".to_string() });
	}
	if cfg.store.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "store.timeout_ms must be greater than zero.".to_string(),
		});
	}

	if let Some(planner) = &cfg.planner {
		if planner.api_base.trim().is_empty() {
			return Err(Error::Validation {
				message: "planner.api_base must be non-empty.".to_string(),
			});
		}
		if planner.model.trim().is_empty() {
			return Err(Error::Validation {
				message: "planner.model must be non-empty.".to_string(),
			});
		}
		if planner.timeout_ms == 0 {
			return Err(Error::Validation {
				message: "planner.timeout_ms must be greater than zero.".to_string(),
			});
		}
		if !planner.temperature.is_finite() || planner.temperature < 0.0 {
			return Err(Error::Validation {
				message: "planner.temperature must be a finite non-negative number.".to_string(),
			});
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	while cfg.store.api_base.ends_with('/') {
		cfg.store.api_base.pop();
	}

	// A planner table without a credential is treated as no planner at all, so the
	// service falls back deterministically instead of issuing doomed requests.
	if cfg.planner.as_ref().map(|planner| planner.api_key.trim().is_empty()).unwrap_or(false) {
		cfg.planner = None;
	}
}
