// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the GA4 Data API client.

use thiserror::Error;

/// Errors that can occur when calling the Data API.
///
/// Status-bearing variants keep the status and message the service returned.
#[derive(Debug, Error)]
pub enum DataApiError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// Could not obtain an OAuth access token.
	#[error("Authentication failed: {0}")]
	Auth(String),

	/// 401/403: credentials rejected or no access to the property.
	#[error("Unauthorized ({status}): {message}")]
	Unauthorized { status: u16, message: String },

	/// 429 or `RESOURCE_EXHAUSTED`: property or project quota used up.
	#[error("Quota exceeded ({status}): {message}")]
	QuotaExceeded { status: u16, message: String },

	/// Any other non-success status. `code` is the Google status string,
	/// e.g. `INVALID_ARGUMENT`, when the body carried one.
	#[error("Google Analytics API error ({status}): {message}")]
	Api {
		status: u16,
		code: Option<String>,
		message: String,
	},

	/// Success status but the body was not a report.
	#[error("Invalid response from Google Analytics: {0}")]
	InvalidResponse(String),
}

impl DataApiError {
	/// HTTP status of the failed call, when the service answered.
	pub fn status(&self) -> Option<u16> {
		match self {
			DataApiError::Unauthorized { status, .. }
			| DataApiError::QuotaExceeded { status, .. }
			| DataApiError::Api { status, .. } => Some(*status),
			DataApiError::Network(e) => e.status().map(|s| s.as_u16()),
			_ => None,
		}
	}
}
