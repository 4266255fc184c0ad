// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request shapes for the named reports.
//!
//! Each function only assembles a [`RunReportRequest`]; nothing here does I/O,
//! so the shape of every named report can be checked directly.

use ga4_data_api::{DateRange, FilterExpression, MatchType, OrderBy, RunReportRequest};

/// Row limit for geography and top-page reports when the caller gives none.
pub const DEFAULT_LIMIT: i64 = 10;

pub const PAGE_VIEW_METRICS: [&str; 2] = ["screenPageViews", "uniquePageViews"];
pub const ACTIVE_USER_METRICS: [&str; 3] = ["activeUsers", "newUsers", "totalUsers"];
pub const USER_BEHAVIOR_METRICS: [&str; 4] = [
	"averageSessionDuration",
	"bounceRate",
	"sessionsPerUser",
	"screenPageViewsPerSession",
];
pub const DEVICE_METRICS: [&str; 4] = [
	"activeUsers",
	"sessions",
	"bounceRate",
	"averageSessionDuration",
];
pub const TRAFFIC_SOURCE_DIMENSIONS: [&str; 3] = [
	"sessionDefaultChannelGroup",
	"sessionSource",
	"sessionMedium",
];
pub const TRAFFIC_SOURCE_METRICS: [&str; 3] = ["sessions", "newUsers", "totalUsers"];
pub const GEO_DIMENSIONS: [&str; 2] = ["country", "city"];
pub const GEO_METRICS: [&str; 2] = ["activeUsers", "sessions"];
pub const TOP_PAGE_DIMENSIONS: [&str; 2] = ["pagePath", "pageTitle"];
pub const TOP_PAGE_METRICS: [&str; 3] = ["screenPageViews", "uniquePageViews", "averageTimeOnPage"];
pub const CONVERSION_METRICS: [&str; 2] = ["conversions", "totalRevenue"];

const EVENT_NAME: &str = "eventName";
const PURCHASE_EVENT_FRAGMENT: &str = "purchase";

/// Page views, grouped by whatever `dimensions` the caller asks for (possibly none).
pub fn page_views(date_range: DateRange, dimensions: &[&str]) -> RunReportRequest {
	RunReportRequest::new(date_range)
		.metrics(PAGE_VIEW_METRICS)
		.dimensions(dimensions.iter().copied())
}

pub fn active_users(date_range: DateRange) -> RunReportRequest {
	RunReportRequest::new(date_range).metrics(ACTIVE_USER_METRICS)
}

/// Event counts per event name, narrowed to one event when `event_name` is given.
pub fn events(date_range: DateRange, event_name: Option<&str>) -> RunReportRequest {
	let request = RunReportRequest::new(date_range)
		.metric("eventCount")
		.dimension(EVENT_NAME);

	match event_name {
		Some(name) => request.dimension_filter(FilterExpression::string(
			EVENT_NAME,
			MatchType::Exact,
			name,
		)),
		None => request,
	}
}

pub fn user_behavior(date_range: DateRange) -> RunReportRequest {
	RunReportRequest::new(date_range).metrics(USER_BEHAVIOR_METRICS)
}

pub fn device_analysis(date_range: DateRange) -> RunReportRequest {
	RunReportRequest::new(date_range)
		.dimension("deviceCategory")
		.metrics(DEVICE_METRICS)
}

pub fn traffic_sources(date_range: DateRange) -> RunReportRequest {
	RunReportRequest::new(date_range)
		.dimensions(TRAFFIC_SOURCE_DIMENSIONS)
		.metrics(TRAFFIC_SOURCE_METRICS)
		.order_by(OrderBy::metric("sessions", true))
}

pub fn geo_analysis(date_range: DateRange, limit: Option<i64>) -> RunReportRequest {
	RunReportRequest::new(date_range)
		.dimensions(GEO_DIMENSIONS)
		.metrics(GEO_METRICS)
		.order_by(OrderBy::metric("sessions", true))
		.limit(limit.unwrap_or(DEFAULT_LIMIT))
}

pub fn top_pages(date_range: DateRange, limit: Option<i64>) -> RunReportRequest {
	RunReportRequest::new(date_range)
		.dimensions(TOP_PAGE_DIMENSIONS)
		.metrics(TOP_PAGE_METRICS)
		.order_by(OrderBy::metric("screenPageViews", true))
		.limit(limit.unwrap_or(DEFAULT_LIMIT))
}

/// Conversions and revenue for every event whose name contains "purchase".
pub fn conversions(date_range: DateRange) -> RunReportRequest {
	RunReportRequest::new(date_range)
		.metrics(CONVERSION_METRICS)
		.dimension(EVENT_NAME)
		.dimension_filter(FilterExpression::string(
			EVENT_NAME,
			MatchType::Contains,
			PURCHASE_EVENT_FRAGMENT,
		))
}

#[cfg(test)]
mod tests {
	use super::*;
	use ga4_data_api::{Filter, FilterKind, OrderTarget, StringFilter};
	use proptest::prelude::*;

	fn range() -> DateRange {
		DateRange::new("2024-01-01", "2024-01-31")
	}

	fn string_filter(request: &RunReportRequest) -> Option<&StringFilter> {
		match request.dimension_filter.as_ref()? {
			FilterExpression::Filter(Filter {
				field_name,
				kind: FilterKind::StringFilter(f),
			}) if field_name == EVENT_NAME => Some(f),
			_ => None,
		}
	}

	fn sorted_desc_by(request: &RunReportRequest) -> Vec<(&str, bool)> {
		request
			.order_bys
			.iter()
			.map(|o| match &o.target {
				OrderTarget::Metric(m) => (m.metric_name.as_str(), o.desc),
				OrderTarget::Dimension(d) => (d.dimension_name.as_str(), o.desc),
			})
			.collect()
	}

	#[test]
	fn test_every_request_carries_the_date_range() {
		for request in [
			page_views(range(), &[]),
			active_users(range()),
			events(range(), None),
			user_behavior(range()),
			device_analysis(range()),
			traffic_sources(range()),
			geo_analysis(range(), None),
			top_pages(range(), None),
			conversions(range()),
		] {
			assert_eq!(request.date_ranges, vec![range()]);
		}
	}

	#[test]
	fn test_page_views_without_dimensions() {
		let request = page_views(range(), &[]);
		assert_eq!(request.metric_names(), ["screenPageViews", "uniquePageViews"]);
		assert!(request.dimensions.is_empty());
		assert!(request.dimension_filter.is_none());
		assert!(request.order_bys.is_empty());
		assert!(request.limit.is_none());
	}

	#[test]
	fn test_page_views_with_dimensions() {
		let request = page_views(range(), &["pagePath", "date"]);
		assert_eq!(request.dimension_names(), ["pagePath", "date"]);
	}

	#[test]
	fn test_active_users() {
		let request = active_users(range());
		assert_eq!(request.metric_names(), ["activeUsers", "newUsers", "totalUsers"]);
		assert!(request.dimensions.is_empty());
	}

	#[test]
	fn test_events_with_name_filters_exactly() {
		let request = events(range(), Some("sign_up"));
		assert_eq!(request.metric_names(), ["eventCount"]);
		assert_eq!(request.dimension_names(), ["eventName"]);
		let filter = string_filter(&request).expect("eventName string filter");
		assert_eq!(filter.match_type, MatchType::Exact);
		assert_eq!(filter.value, "sign_up");
	}

	#[test]
	fn test_events_without_name_has_no_filter() {
		let request = events(range(), None);
		assert_eq!(request.dimension_names(), ["eventName"]);
		assert!(request.dimension_filter.is_none());
	}

	#[test]
	fn test_user_behavior() {
		let request = user_behavior(range());
		assert_eq!(
			request.metric_names(),
			[
				"averageSessionDuration",
				"bounceRate",
				"sessionsPerUser",
				"screenPageViewsPerSession"
			]
		);
		assert!(request.dimensions.is_empty());
	}

	#[test]
	fn test_device_analysis() {
		let request = device_analysis(range());
		assert_eq!(request.dimension_names(), ["deviceCategory"]);
		assert_eq!(
			request.metric_names(),
			["activeUsers", "sessions", "bounceRate", "averageSessionDuration"]
		);
	}

	#[test]
	fn test_traffic_sources_sorted_by_sessions() {
		let request = traffic_sources(range());
		assert_eq!(
			request.dimension_names(),
			["sessionDefaultChannelGroup", "sessionSource", "sessionMedium"]
		);
		assert_eq!(request.metric_names(), ["sessions", "newUsers", "totalUsers"]);
		assert_eq!(sorted_desc_by(&request), [("sessions", true)]);
		assert!(request.limit.is_none());
	}

	#[test]
	fn test_geo_analysis_defaults_limit() {
		let request = geo_analysis(range(), None);
		assert_eq!(request.dimension_names(), ["country", "city"]);
		assert_eq!(request.metric_names(), ["activeUsers", "sessions"]);
		assert_eq!(sorted_desc_by(&request), [("sessions", true)]);
		assert_eq!(request.limit, Some(DEFAULT_LIMIT));
	}

	#[test]
	fn test_top_pages_defaults_limit() {
		let request = top_pages(range(), None);
		assert_eq!(request.dimension_names(), ["pagePath", "pageTitle"]);
		assert_eq!(
			request.metric_names(),
			["screenPageViews", "uniquePageViews", "averageTimeOnPage"]
		);
		assert_eq!(sorted_desc_by(&request), [("screenPageViews", true)]);
		assert_eq!(request.limit, Some(10));
	}

	#[test]
	fn test_conversions_always_filter_purchase() {
		let request = conversions(range());
		assert_eq!(request.metric_names(), ["conversions", "totalRevenue"]);
		assert_eq!(request.dimension_names(), ["eventName"]);
		let filter = string_filter(&request).expect("eventName string filter");
		assert_eq!(filter.match_type, MatchType::Contains);
		assert_eq!(filter.value, "purchase");
	}

	proptest! {
		#[test]
		fn limits_are_passed_through(limit in 1i64..100_000) {
			prop_assert_eq!(geo_analysis(range(), Some(limit)).limit, Some(limit));
			prop_assert_eq!(top_pages(range(), Some(limit)).limit, Some(limit));
		}

		#[test]
		fn event_filter_value_is_verbatim(name in "[a-z_]{1,40}") {
			let request = events(range(), Some(name.as_str()));
			let filter = string_filter(&request).unwrap();
			prop_assert_eq!(&filter.value, &name);
			prop_assert_eq!(filter.match_type, MatchType::Exact);
		}
	}
}
