// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration produced by a single source.

use std::time::Duration;

use ga4_common_config::SecretString;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::{ReportsConfig, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};

/// One source's view of the configuration. Unset fields defer to lower
/// precedence sources.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportsConfigLayer {
	#[serde(default)]
	pub property_id: Option<String>,
	/// Service-account key JSON, kept as text until the facade parses it.
	#[serde(default)]
	pub credentials: Option<SecretString>,
	#[serde(default)]
	pub base_url: Option<String>,
	#[serde(default)]
	pub request_timeout_secs: Option<u64>,
}

impl ReportsConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.property_id.is_some() {
			self.property_id = other.property_id;
		}
		if other.credentials.is_some() {
			self.credentials = other.credentials;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.request_timeout_secs.is_some() {
			self.request_timeout_secs = other.request_timeout_secs;
		}
	}

	pub fn finalize(self) -> Result<ReportsConfig, ConfigError> {
		let property_id = self
			.property_id
			.map(|p| p.trim().to_string())
			.filter(|p| !p.is_empty())
			.ok_or_else(|| {
				ConfigError::Missing(
					"property_id (set GOOGLE_ANALYTICS_PROPERTY_ID or property_id in the config file)"
						.to_string(),
				)
			})?;

		let request_timeout_secs = self
			.request_timeout_secs
			.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
		if request_timeout_secs == 0 {
			return Err(ConfigError::InvalidValue {
				key: "request_timeout_secs".to_string(),
				message: "must be greater than zero".to_string(),
			});
		}

		Ok(ReportsConfig {
			property_id,
			credentials: self.credentials,
			base_url: self
				.base_url
				.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			request_timeout: Duration::from_secs(request_timeout_secs),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use ga4_common_config::Secret;

	fn layer(property_id: &str) -> ReportsConfigLayer {
		ReportsConfigLayer {
			property_id: Some(property_id.to_string()),
			..Default::default()
		}
	}

	#[test]
	fn test_finalize_applies_defaults() {
		let config = layer("123456").finalize().unwrap();
		assert_eq!(config.property_id, "123456");
		assert!(config.credentials.is_none());
		assert_eq!(config.base_url, DEFAULT_BASE_URL);
		assert_eq!(
			config.request_timeout,
			Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
		);
	}

	#[test]
	fn test_finalize_requires_property_id() {
		let err = ReportsConfigLayer::default().finalize().unwrap_err();
		assert!(matches!(err, ConfigError::Missing(_)));
		assert!(err.to_string().contains("GOOGLE_ANALYTICS_PROPERTY_ID"));
	}

	#[test]
	fn test_finalize_rejects_blank_property_id() {
		assert!(matches!(
			layer("   ").finalize(),
			Err(ConfigError::Missing(_))
		));
	}

	#[test]
	fn test_finalize_rejects_zero_timeout() {
		let mut l = layer("1");
		l.request_timeout_secs = Some(0);
		assert!(matches!(
			l.finalize(),
			Err(ConfigError::InvalidValue { .. })
		));
	}

	#[test]
	fn test_merge_overlays_only_set_fields() {
		let mut base = ReportsConfigLayer {
			property_id: Some("111".to_string()),
			credentials: Some(Secret::new("{}".to_string())),
			base_url: Some("https://file.example".to_string()),
			request_timeout_secs: Some(10),
		};
		base.merge(ReportsConfigLayer {
			property_id: Some("222".to_string()),
			..Default::default()
		});

		assert_eq!(base.property_id.as_deref(), Some("222"));
		assert!(base.credentials.is_some());
		assert_eq!(base.base_url.as_deref(), Some("https://file.example"));
		assert_eq!(base.request_timeout_secs, Some(10));
	}

	#[test]
	fn test_deserialize_toml() {
		let layer: ReportsConfigLayer = toml::from_str(
			r#"
property_id = "987654"
credentials = '{"type":"service_account"}'
request_timeout_secs = 5
"#,
		)
		.unwrap();
		assert_eq!(layer.property_id.as_deref(), Some("987654"));
		assert_eq!(
			layer.credentials.as_ref().map(|c| c.expose().as_str()),
			Some(r#"{"type":"service_account"}"#)
		);
		assert_eq!(layer.request_timeout_secs, Some(5));
		assert!(layer.base_url.is_none());
	}

	#[test]
	fn test_deserialize_empty() {
		let layer: ReportsConfigLayer = toml::from_str("").unwrap();
		assert_eq!(layer, ReportsConfigLayer::default());
	}
}
