// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the GA4 report facade.
//!
//! [`ReportsConfig`] is the explicit value handed to the facade constructor.
//! It can be built directly in code, or resolved from layered sources:
//!
//! 1. Environment variables (`GOOGLE_ANALYTICS_*`, `GA4_REPORTS_*`)
//! 2. A TOML file
//! 3. Built-in defaults
//!
//! ```ignore
//! use ga4_reports_config::load_config;
//!
//! let config = load_config(None)?;
//! println!("querying property {}", config.property_id);
//! ```

pub mod error;
pub mod layer;
pub mod sources;

use std::path::PathBuf;
use std::time::Duration;

use ga4_common_config::{Secret, SecretString};
use tracing::{debug, info};

pub use error::ConfigError;
pub use layer::ReportsConfigLayer;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

pub const DEFAULT_BASE_URL: &str = "https://analyticsdata.googleapis.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Fully resolved configuration. Immutable once handed to the facade.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportsConfig {
	/// GA4 property, either `123456` or `properties/123456`.
	pub property_id: String,
	/// Service-account key JSON. `None` means Application Default Credentials.
	pub credentials: Option<SecretString>,
	pub base_url: String,
	pub request_timeout: Duration,
}

impl ReportsConfig {
	pub fn new(property_id: impl Into<String>) -> Self {
		Self {
			property_id: property_id.into(),
			credentials: None,
			base_url: DEFAULT_BASE_URL.to_string(),
			request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
		}
	}

	pub fn with_credentials(mut self, credentials_json: impl Into<String>) -> Self {
		self.credentials = Some(Secret::new(credentials_json.into()));
		self
	}

	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout = timeout;
		self
	}
}

/// Load configuration from all sources with standard precedence.
///
/// `config_path` names a TOML file that must exist; without one only
/// defaults and the environment are consulted.
pub fn load_config(config_path: Option<PathBuf>) -> Result<ReportsConfig, ConfigError> {
	let mut sources: Vec<Box<dyn ConfigSource>> = vec![Box::new(DefaultsSource), Box::new(EnvSource)];
	if let Some(path) = config_path {
		sources.push(Box::new(TomlSource::new(path)));
	}

	load_from_sources(sources)
}

/// Merges `sources` in precedence order and finalizes the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<ReportsConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ReportsConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		merged.merge(source.load()?);
	}

	let config = merged.finalize()?;
	info!(
		property_id = %config.property_id,
		credentials_configured = config.credentials.is_some(),
		base_url = %config.base_url,
		request_timeout_secs = config.request_timeout.as_secs(),
		"Report configuration loaded"
	);
	Ok(config)
}
