// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error type for the report facade.

use ga4_data_api::DataApiError;
use ga4_reports_config::ConfigError;
use thiserror::Error;

/// Configuration problems are fatal at construction; API failures come from
/// individual report calls and carry the client error untouched.
#[derive(Debug, Error)]
pub enum ReportsError {
	#[error("Missing configuration: {0}")]
	MissingConfig(String),

	#[error("Invalid credentials: {0}")]
	InvalidCredentials(String),

	#[error(transparent)]
	Config(#[from] ConfigError),

	/// The HTTP client could not be built (TLS backend, resolver).
	#[error("Failed to build Data API client: {0}")]
	ClientBuild(#[source] DataApiError),

	#[error("Analytics API error: {0}")]
	Api(#[from] DataApiError),
}

impl ReportsError {
	pub fn is_config_error(&self) -> bool {
		matches!(
			self,
			ReportsError::MissingConfig(_)
				| ReportsError::InvalidCredentials(_)
				| ReportsError::Config(_)
				| ReportsError::ClientBuild(_)
		)
	}

	/// The underlying client error, if this came from a report call.
	pub fn api_error(&self) -> Option<&DataApiError> {
		match self {
			ReportsError::Api(e) => Some(e),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::error::Error as _;

	#[test]
	fn test_config_errors_are_classified() {
		assert!(ReportsError::MissingConfig("property_id".to_string()).is_config_error());
		assert!(ReportsError::InvalidCredentials("bad json".to_string()).is_config_error());
		assert!(ReportsError::Config(ConfigError::Missing("property_id".to_string())).is_config_error());
	}

	#[test]
	fn test_client_build_failure_is_a_construction_error() {
		let err = ReportsError::ClientBuild(DataApiError::InvalidResponse("no TLS backend".to_string()));
		assert!(err.is_config_error());
		assert!(err.api_error().is_none());
		assert!(err.source().unwrap().to_string().contains("no TLS backend"));
	}

	#[test]
	fn test_api_error_keeps_source() {
		let err = ReportsError::from(DataApiError::QuotaExceeded {
			status: 429,
			message: "Exhausted concurrent requests".to_string(),
		});
		assert!(!err.is_config_error());
		assert_eq!(err.api_error().and_then(|e| e.status()), Some(429));
		assert!(err
			.source()
			.unwrap()
			.to_string()
			.contains("Exhausted concurrent requests"));
	}
}
