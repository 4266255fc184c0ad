// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Report dates: literal calendar days or the Data API's relative keywords.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use ga4_data_api::DateRange;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DAYS_AGO_SUFFIX: &str = "daysAgo";

/// One end of a report date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportDate {
	Today,
	Yesterday,
	/// `NdaysAgo`, relative to the property's time zone.
	DaysAgo(u32),
	Date(NaiveDate),
}

impl ReportDate {
	/// Range from `self` to `end`, inclusive.
	pub fn to(self, end: ReportDate) -> DateRange {
		DateRange::new(self, end)
	}
}

impl fmt::Display for ReportDate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ReportDate::Today => f.write_str("today"),
			ReportDate::Yesterday => f.write_str("yesterday"),
			ReportDate::DaysAgo(n) => write!(f, "{n}{DAYS_AGO_SUFFIX}"),
			ReportDate::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
		}
	}
}

impl From<ReportDate> for String {
	fn from(date: ReportDate) -> Self {
		date.to_string()
	}
}

impl From<NaiveDate> for ReportDate {
	fn from(date: NaiveDate) -> Self {
		ReportDate::Date(date)
	}
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid report date '{0}': expected YYYY-MM-DD, today, yesterday or NdaysAgo")]
pub struct ReportDateParseError(String);

impl FromStr for ReportDate {
	type Err = ReportDateParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		match s {
			"today" => return Ok(ReportDate::Today),
			"yesterday" => return Ok(ReportDate::Yesterday),
			_ => {}
		}

		if let Some(n) = s.strip_suffix(DAYS_AGO_SUFFIX) {
			if n.is_empty() || !n.bytes().all(|b| b.is_ascii_digit()) {
				return Err(ReportDateParseError(s.to_string()));
			}
			return n
				.parse()
				.map(ReportDate::DaysAgo)
				.map_err(|_| ReportDateParseError(s.to_string()));
		}

		NaiveDate::parse_from_str(s, DATE_FORMAT)
			.map(ReportDate::Date)
			.map_err(|_| ReportDateParseError(s.to_string()))
	}
}
