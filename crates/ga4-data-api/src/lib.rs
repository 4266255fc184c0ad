// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Google Analytics 4 Data API client.
//!
//! A typed model of the `runReport` request and response, plus
//! [`AnalyticsDataClient`], which POSTs a request to
//! `/v1beta/properties/{id}:runReport` and hands back the response as-is.
//! One request per call: no retries, no caching.
//!
//! [`ReportClient`] is the seam the report facade is written against.

pub mod auth;
pub mod client;
pub mod error;
pub mod types;

pub use auth::{ApiAuth, ANALYTICS_READONLY_SCOPE};
pub use client::{property_resource, AnalyticsDataClient, ReportClient};
pub use error::DataApiError;
pub use types::*;
