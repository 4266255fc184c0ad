// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults, a TOML file, and the environment.

use std::path::PathBuf;

use ga4_common_config::load_secret_env;
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ReportsConfigLayer;

pub const PROPERTY_ID_VAR: &str = "GOOGLE_ANALYTICS_PROPERTY_ID";
/// Also honoured as `GOOGLE_ANALYTICS_CREDENTIALS_FILE`.
pub const CREDENTIALS_VAR: &str = "GOOGLE_ANALYTICS_CREDENTIALS";
pub const BASE_URL_VAR: &str = "GA4_REPORTS_BASE_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "GA4_REPORTS_REQUEST_TIMEOUT_SECS";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ReportsConfigLayer, ConfigError>;
}

pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ReportsConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ReportsConfigLayer::default())
	}
}

/// TOML file source. The file was named explicitly, so it must exist.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ReportsConfigLayer, ConfigError> {
		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ReportsConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ReportsConfigLayer, ConfigError> {
		debug!("loading environment variables");
		let mut layer = layer_from_lookup(env_var)?;
		layer.credentials = load_secret_env(CREDENTIALS_VAR)?;
		Ok(layer)
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Builds the non-secret part of the environment layer from `lookup`.
fn layer_from_lookup<F>(lookup: F) -> Result<ReportsConfigLayer, ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	let request_timeout_secs = match lookup(REQUEST_TIMEOUT_VAR) {
		Some(v) => Some(v.trim().parse().map_err(|_| ConfigError::InvalidValue {
			key: REQUEST_TIMEOUT_VAR.to_string(),
			message: format!("invalid u64 value '{v}'"),
		})?),
		None => None,
	};

	Ok(ReportsConfigLayer {
		property_id: lookup(PROPERTY_ID_VAR),
		credentials: None,
		base_url: lookup(BASE_URL_VAR),
		request_timeout_secs,
	})
}
