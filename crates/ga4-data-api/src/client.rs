// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Data API client implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument, trace};

use crate::auth::ApiAuth;
use crate::error::DataApiError;
use crate::types::{RunReportRequest, RunReportResponse};

const DEFAULT_BASE_URL: &str = "https://analyticsdata.googleapis.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const PROPERTY_PREFIX: &str = "properties/";

/// Executes a single report request against a property.
///
/// The report facade is written against this trait so the transport can be
/// swapped (a recording fake in tests, a proxy in other deployments).
#[async_trait]
pub trait ReportClient: Send + Sync {
	async fn run_report(
		&self,
		property_id: &str,
		request: &RunReportRequest,
	) -> Result<RunReportResponse, DataApiError>;
}

/// Normalizes `123` and `properties/123` to `properties/123`.
pub fn property_resource(property_id: &str) -> String {
	let id = property_id.trim();
	let id = id.strip_prefix(PROPERTY_PREFIX).unwrap_or(id);
	format!("{PROPERTY_PREFIX}{id}")
}

/// HTTP client for `POST /v1beta/properties/{id}:runReport`.
#[derive(Debug, Clone)]
pub struct AnalyticsDataClient {
	http_client: Client,
	auth: ApiAuth,
	base_url: String,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorEnvelope {
	error: GoogleErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorDetail {
	message: String,
	status: Option<String>,
}

impl AnalyticsDataClient {
	pub fn new(auth: ApiAuth) -> Result<Self, DataApiError> {
		Self::with_timeout(auth, DEFAULT_TIMEOUT)
	}

	pub fn with_timeout(auth: ApiAuth, timeout: Duration) -> Result<Self, DataApiError> {
		let http_client = ga4_common_http::new_client_with_timeout(timeout)?;

		info!(
			auth = auth.kind(),
			timeout_secs = timeout.as_secs(),
			"Initialized Analytics Data API client"
		);

		Ok(Self {
			http_client,
			auth,
			base_url: DEFAULT_BASE_URL.to_string(),
		})
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into().trim_end_matches('/').to_string();
		self
	}

	fn run_report_url(&self, property_id: &str) -> String {
		format!(
			"{}/v1beta/{}:runReport",
			self.base_url,
			property_resource(property_id)
		)
	}
}

#[async_trait]
impl ReportClient for AnalyticsDataClient {
	#[instrument(skip(self, request), fields(property = %property_id))]
	async fn run_report(
		&self,
		property_id: &str,
		request: &RunReportRequest,
	) -> Result<RunReportResponse, DataApiError> {
		let url = self.run_report_url(property_id);
		debug!(url = %url, "Sending runReport request");
		trace!(request = ?request, "Request payload");

		let token = self.auth.bearer_token().await?;

		let response = self
			.http_client
			.post(&url)
			.bearer_auth(token.expose())
			.json(request)
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!("Request timed out");
					return DataApiError::Timeout;
				}
				error!(error = %e, "Network error during runReport request");
				DataApiError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response");

		if !status.is_success() {
			let status_code = status.as_u16();
			let body = response.text().await.unwrap_or_default();
			error!(status = status_code, body = %body, "runReport returned an error");
			return Err(classify_error(status_code, body));
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			DataApiError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		let report: RunReportResponse = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse runReport response");
			DataApiError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		debug!(
			row_count = report.row_count.unwrap_or(0),
			rows_returned = report.rows.len(),
			"runReport completed"
		);

		Ok(report)
	}
}

/// Maps a non-success status and body to an error, keeping Google's message
/// when the body is the standard error envelope.
fn classify_error(status: u16, body: String) -> DataApiError {
	let (code, message) = match serde_json::from_str::<GoogleErrorEnvelope>(&body) {
		Ok(envelope) => (envelope.error.status, envelope.error.message),
		Err(_) => (None, body),
	};

	if status == 429 || code.as_deref() == Some("RESOURCE_EXHAUSTED") {
		return DataApiError::QuotaExceeded { status, message };
	}

	match status {
		401 | 403 => DataApiError::Unauthorized { status, message },
		_ => DataApiError::Api {
			status,
			code,
			message,
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn client() -> AnalyticsDataClient {
		AnalyticsDataClient::new(ApiAuth::access_token("token")).unwrap()
	}

	#[test]
	fn test_client_defaults() {
		let client = client();
		assert_eq!(client.base_url, DEFAULT_BASE_URL);
		assert_eq!(
			client.run_report_url("123"),
			"https://analyticsdata.googleapis.com/v1beta/properties/123:runReport"
		);
	}

	#[test]
	fn test_with_base_url_strips_trailing_slash() {
		let client = client().with_base_url("http://127.0.0.1:8080/");
		assert_eq!(
			client.run_report_url("properties/9"),
			"http://127.0.0.1:8080/v1beta/properties/9:runReport"
		);
	}

	#[test]
	fn test_property_resource_accepts_both_forms() {
		assert_eq!(property_resource("123456"), "properties/123456");
		assert_eq!(property_resource("properties/123456"), "properties/123456");
		assert_eq!(property_resource(" 42 "), "properties/42");
	}

	#[test]
	fn test_classify_google_envelope() {
		let body = r#"{"error":{"code":400,"message":"Did you mean sessions?","status":"INVALID_ARGUMENT"}}"#;
		match classify_error(400, body.to_string()) {
			DataApiError::Api {
				status,
				code,
				message,
			} => {
				assert_eq!(status, 400);
				assert_eq!(code.as_deref(), Some("INVALID_ARGUMENT"));
				assert_eq!(message, "Did you mean sessions?");
			}
			other => panic!("unexpected error {other:?}"),
		}
	}

	#[test]
	fn test_classify_auth_and_quota() {
		assert!(matches!(
			classify_error(403, "denied".to_string()),
			DataApiError::Unauthorized { status: 403, .. }
		));
		assert!(matches!(
			classify_error(429, String::new()),
			DataApiError::QuotaExceeded { status: 429, .. }
		));
		let exhausted = r#"{"error":{"code":403,"message":"quota","status":"RESOURCE_EXHAUSTED"}}"#;
		assert!(matches!(
			classify_error(503, exhausted.to_string()),
			DataApiError::QuotaExceeded { status: 503, .. }
		));
	}

	#[test]
	fn test_classify_exhausted_quota_on_forbidden() {
		let body = r#"{"error":{"code":403,"message":"Exhausted property tokens","status":"RESOURCE_EXHAUSTED"}}"#;
		match classify_error(403, body.to_string()) {
			DataApiError::QuotaExceeded { status, message } => {
				assert_eq!(status, 403);
				assert_eq!(message, "Exhausted property tokens");
			}
			other => panic!("unexpected error {other:?}"),
		}
		let denied = r#"{"error":{"code":403,"message":"No access","status":"PERMISSION_DENIED"}}"#;
		assert!(matches!(
			classify_error(403, denied.to_string()),
			DataApiError::Unauthorized { status: 403, .. }
		));
	}

	#[test]
	fn test_classify_plain_body_is_kept() {
		match classify_error(502, "<html>Bad Gateway</html>".to_string()) {
			DataApiError::Api { code, message, .. } => {
				assert!(code.is_none());
				assert_eq!(message, "<html>Bad Gateway</html>");
			}
			other => panic!("unexpected error {other:?}"),
		}
	}

	proptest! {
		#[test]
		fn property_resource_is_idempotent(id in "[0-9]{1,15}") {
			let once = property_resource(&id);
			prop_assert_eq!(property_resource(&once), once.clone());
			prop_assert_eq!(once, format!("properties/{id}"));
		}
	}
}
