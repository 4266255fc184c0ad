// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The report facade: named GA4 queries over a single `runReport` call.

use std::fmt;
use std::sync::Arc;

use ga4_data_api::{
	property_resource, AnalyticsDataClient, ApiAuth, DateRange, ReportClient, RunReportRequest,
	RunReportResponse,
};
use ga4_reports_config::ReportsConfig;
use tracing::{debug, error, info, instrument};

use crate::error::ReportsError;
use crate::requests;

/// Named report queries against one GA4 property.
///
/// Cheap to clone and safe to share across tasks; every call is an
/// independent request/response round trip.
#[derive(Clone)]
pub struct Ga4Reports {
	property_id: String,
	client: Arc<dyn ReportClient>,
}

impl fmt::Debug for Ga4Reports {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Ga4Reports")
			.field("property_id", &self.property_id)
			.finish_non_exhaustive()
	}
}

impl Ga4Reports {
	/// Builds the facade and its Data API client from `config`.
	///
	/// Fails before any network activity if the property is missing or the
	/// credential payload is not a parseable service-account key. Without
	/// credentials, Application Default Credentials are used on first call.
	pub fn new(config: ReportsConfig) -> Result<Self, ReportsError> {
		let property_id = validate_property_id(&config.property_id)?;

		let auth = match &config.credentials {
			Some(credentials) => {
				serde_json::from_str::<serde_json::Value>(credentials.expose()).map_err(|e| {
					error!(error = %e, "Credential payload is not valid JSON");
					ReportsError::InvalidCredentials(format!("credentials are not valid JSON: {e}"))
				})?;
				ApiAuth::service_account_json(credentials.expose())
					.map_err(|e| ReportsError::InvalidCredentials(e.to_string()))?
			}
			None => ApiAuth::application_default(),
		};

		let client = AnalyticsDataClient::with_timeout(auth, config.request_timeout)
			.map_err(|e| {
				error!(error = %e, "Failed to build Data API client");
				ReportsError::ClientBuild(e)
			})?
			.with_base_url(config.base_url);

		info!(property = %property_id, "GA4 report facade ready");
		Ok(Self {
			property_id,
			client: Arc::new(client),
		})
	}

	/// Builds the facade over any [`ReportClient`].
	pub fn with_client(
		property_id: impl AsRef<str>,
		client: Arc<dyn ReportClient>,
	) -> Result<Self, ReportsError> {
		Ok(Self {
			property_id: validate_property_id(property_id.as_ref())?,
			client,
		})
	}

	/// The property as a resource name, `properties/{id}`.
	pub fn property_id(&self) -> &str {
		&self.property_id
	}

	/// Runs `request` as-is. Every named report ends up here.
	#[instrument(skip(self, request), fields(property = %self.property_id))]
	pub async fn run_report(&self, request: RunReportRequest) -> Result<RunReportResponse, ReportsError> {
		debug!(
			metrics = ?request.metric_names(),
			dimensions = ?request.dimension_names(),
			"Running report"
		);

		match self.client.run_report(&self.property_id, &request).await {
			Ok(response) => Ok(response),
			Err(e) => {
				error!(error = %e, "Error running report");
				Err(ReportsError::Api(e))
			}
		}
	}

	/// `screenPageViews` and `uniquePageViews`, grouped by `dimensions`.
	#[instrument(skip(self))]
	pub async fn page_views(
		&self,
		date_range: DateRange,
		dimensions: &[&str],
	) -> Result<RunReportResponse, ReportsError> {
		self.run_report(requests::page_views(date_range, dimensions)).await
	}

	#[instrument(skip(self))]
	pub async fn active_users(&self, date_range: DateRange) -> Result<RunReportResponse, ReportsError> {
		self.run_report(requests::active_users(date_range)).await
	}

	/// Event counts by event name; only `event_name` when given.
	#[instrument(skip(self))]
	pub async fn events(
		&self,
		date_range: DateRange,
		event_name: Option<&str>,
	) -> Result<RunReportResponse, ReportsError> {
		self.run_report(requests::events(date_range, event_name)).await
	}

	#[instrument(skip(self))]
	pub async fn user_behavior(&self, date_range: DateRange) -> Result<RunReportResponse, ReportsError> {
		self.run_report(requests::user_behavior(date_range)).await
	}

	#[instrument(skip(self))]
	pub async fn device_analysis(
		&self,
		date_range: DateRange,
	) -> Result<RunReportResponse, ReportsError> {
		self.run_report(requests::device_analysis(date_range)).await
	}

	/// Sessions by channel group, source and medium, busiest first.
	#[instrument(skip(self))]
	pub async fn traffic_sources(
		&self,
		date_range: DateRange,
	) -> Result<RunReportResponse, ReportsError> {
		self.run_report(requests::traffic_sources(date_range)).await
	}

	/// Country/city breakdown, busiest first, `limit` rows (default 10).
	#[instrument(skip(self))]
	pub async fn geo_analysis(
		&self,
		date_range: DateRange,
		limit: Option<i64>,
	) -> Result<RunReportResponse, ReportsError> {
		self.run_report(requests::geo_analysis(date_range, limit)).await
	}

	/// Most viewed pages, `limit` rows (default 10).
	#[instrument(skip(self))]
	pub async fn top_pages(
		&self,
		date_range: DateRange,
		limit: Option<i64>,
	) -> Result<RunReportResponse, ReportsError> {
		self.run_report(requests::top_pages(date_range, limit)).await
	}

	#[instrument(skip(self))]
	pub async fn conversions(&self, date_range: DateRange) -> Result<RunReportResponse, ReportsError> {
		self.run_report(requests::conversions(date_range)).await
	}

	/// Escape hatch for queries the named reports don't cover. The request is
	/// sent verbatim; the service does all validation.
	pub async fn custom_report(
		&self,
		request: RunReportRequest,
	) -> Result<RunReportResponse, ReportsError> {
		self.run_report(request).await
	}
}

fn validate_property_id(property_id: &str) -> Result<String, ReportsError> {
	let resource = property_resource(property_id);
	if resource.len() == "properties/".len() {
		error!("GA4 property id is not configured");
		return Err(ReportsError::MissingConfig(
			"property_id is required (GOOGLE_ANALYTICS_PROPERTY_ID)".to_string(),
		));
	}
	Ok(resource)
}
