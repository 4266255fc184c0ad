// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Named Google Analytics 4 reports.
//!
//! [`Ga4Reports`] turns each common question (page views, active users,
//! traffic sources, ...) into one `runReport` call against a configured
//! property. Anything the named reports don't cover goes through
//! [`Ga4Reports::custom_report`].

pub mod date;
pub mod error;
pub mod facade;
pub mod requests;

pub use date::{ReportDate, ReportDateParseError};
pub use error::ReportsError;
pub use facade::Ga4Reports;

pub use ga4_data_api::{
	DataApiError, DateRange, Dimension, FilterExpression, MatchType, Metric, OrderBy,
	ReportClient, Row, RunReportRequest, RunReportResponse,
};
pub use ga4_reports_config::{load_config, ReportsConfig};
