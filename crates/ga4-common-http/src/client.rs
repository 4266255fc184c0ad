// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `reqwest` client with the standard GA4 tools User-Agent.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

const PRODUCT: &str = "ga4-reports";

/// Client builder preset with [`user_agent`].
///
/// # Example
/// ```ignore
/// let client = ga4_common_http::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Builds a client with the standard User-Agent and a per-request timeout.
pub fn new_client_with_timeout(timeout: Duration) -> Result<Client, reqwest::Error> {
	builder().timeout(timeout).build()
}

/// `ga4-reports/{version} ({os}-{arch})`, e.g. `ga4-reports/0.1.0 (linux-x86_64)`.
pub fn user_agent() -> String {
	format!(
		"{PRODUCT}/{} ({}-{})",
		env!("CARGO_PKG_VERSION"),
		std::env::consts::OS,
		std::env::consts::ARCH
	)
}
