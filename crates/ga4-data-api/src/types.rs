// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request and response types for `properties.runReport`.
//!
//! Field names and enum spellings follow the Data API's JSON mapping. Unset
//! optional fields are omitted from the wire form.

use serde::{Deserialize, Serialize};

/// Body of a `runReport` call. The property is part of the URL, not the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReportRequest {
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub date_ranges: Vec<DateRange>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub dimensions: Vec<Dimension>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub metrics: Vec<Metric>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub dimension_filter: Option<FilterExpression>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub metric_filter: Option<FilterExpression>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub order_bys: Vec<OrderBy>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub limit: Option<i64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub offset: Option<i64>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub metric_aggregations: Vec<MetricAggregation>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub currency_code: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub keep_empty_rows: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub return_property_quota: Option<bool>,
}

impl RunReportRequest {
	/// Starts a request over a single date range.
	pub fn new(date_range: DateRange) -> Self {
		Self {
			date_ranges: vec![date_range],
			..Default::default()
		}
	}

	pub fn metric(mut self, name: impl Into<String>) -> Self {
		self.metrics.push(Metric::new(name));
		self
	}

	pub fn metrics<I, S>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.metrics.extend(names.into_iter().map(Metric::new));
		self
	}

	pub fn dimension(mut self, name: impl Into<String>) -> Self {
		self.dimensions.push(Dimension::new(name));
		self
	}

	pub fn dimensions<I, S>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.dimensions.extend(names.into_iter().map(Dimension::new));
		self
	}

	pub fn dimension_filter(mut self, filter: FilterExpression) -> Self {
		self.dimension_filter = Some(filter);
		self
	}

	pub fn order_by(mut self, order_by: OrderBy) -> Self {
		self.order_bys.push(order_by);
		self
	}

	pub fn limit(mut self, limit: i64) -> Self {
		self.limit = Some(limit);
		self
	}

	pub fn metric_names(&self) -> Vec<&str> {
		self.metrics.iter().map(|m| m.name.as_str()).collect()
	}

	pub fn dimension_names(&self) -> Vec<&str> {
		self.dimensions.iter().map(|d| d.name.as_str()).collect()
	}
}

/// Inclusive date range. Dates are `YYYY-MM-DD`, `today`, `yesterday` or `NdaysAgo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
	pub start_date: String,
	pub end_date: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
}

impl DateRange {
	pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
		Self {
			start_date: start_date.into(),
			end_date: end_date.into(),
			name: None,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
	pub name: String,
}

impl Dimension {
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
	pub name: String,
	/// Derived metric formula, e.g. `eventCount/totalUsers`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub expression: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub invisible: Option<bool>,
}

impl Metric {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			expression: None,
			invisible: None,
		}
	}
}

/// Filter tree. Serializes as exactly one of `andGroup`, `orGroup`,
/// `notExpression` or `filter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterExpression {
	AndGroup(FilterExpressionList),
	OrGroup(FilterExpressionList),
	NotExpression(Box<FilterExpression>),
	Filter(Filter),
}

impl FilterExpression {
	/// Single string filter on `field_name`.
	pub fn string(
		field_name: impl Into<String>,
		match_type: MatchType,
		value: impl Into<String>,
	) -> Self {
		FilterExpression::Filter(Filter {
			field_name: field_name.into(),
			kind: FilterKind::StringFilter(StringFilter {
				match_type,
				value: value.into(),
				case_sensitive: None,
			}),
		})
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterExpressionList {
	pub expressions: Vec<FilterExpression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
	pub field_name: String,
	#[serde(flatten)]
	pub kind: FilterKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKind {
	StringFilter(StringFilter),
	InListFilter(InListFilter),
	NumericFilter(NumericFilter),
	BetweenFilter(BetweenFilter),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringFilter {
	pub match_type: MatchType,
	pub value: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub case_sensitive: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchType {
	Exact,
	BeginsWith,
	EndsWith,
	Contains,
	FullRegexp,
	PartialRegexp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InListFilter {
	pub values: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub case_sensitive: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericFilter {
	pub operation: NumericOperation,
	pub value: NumericValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumericOperation {
	Equal,
	LessThan,
	LessThanOrEqual,
	GreaterThan,
	GreaterThanOrEqual,
}

/// int64 values travel as JSON strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumericValue {
	Int64Value(String),
	DoubleValue(f64),
}

impl From<i64> for NumericValue {
	fn from(v: i64) -> Self {
		NumericValue::Int64Value(v.to_string())
	}
}

impl From<f64> for NumericValue {
	fn from(v: f64) -> Self {
		NumericValue::DoubleValue(v)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetweenFilter {
	pub from_value: NumericValue,
	pub to_value: NumericValue,
}

/// One sort key. Serializes as `{"metric": {...}, "desc": true}` or the
/// `dimension` equivalent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
	#[serde(flatten)]
	pub target: OrderTarget,
	#[serde(default)]
	pub desc: bool,
}

impl OrderBy {
	pub fn metric(metric_name: impl Into<String>, desc: bool) -> Self {
		Self {
			target: OrderTarget::Metric(MetricOrderBy {
				metric_name: metric_name.into(),
			}),
			desc,
		}
	}

	pub fn dimension(dimension_name: impl Into<String>, desc: bool) -> Self {
		Self {
			target: OrderTarget::Dimension(DimensionOrderBy {
				dimension_name: dimension_name.into(),
				order_type: None,
			}),
			desc,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderTarget {
	Metric(MetricOrderBy),
	Dimension(DimensionOrderBy),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricOrderBy {
	pub metric_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionOrderBy {
	pub dimension_name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub order_type: Option<DimensionOrderType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DimensionOrderType {
	Alphanumeric,
	CaseInsensitiveAlphanumeric,
	Numeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricAggregation {
	Total,
	Maximum,
	Minimum,
	Count,
}

/// Response of a `runReport` call.
///
/// Headers, rows and the row count are typed; everything else the service
/// sends (totals, metadata, property quota, ...) is kept verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReportResponse {
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub dimension_headers: Vec<DimensionHeader>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub metric_headers: Vec<MetricHeader>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub rows: Vec<Row>,
	/// Total rows matching the query, independent of `limit`. Omitted by the
	/// service when zero.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub row_count: Option<i64>,
	#[serde(flatten)]
	pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionHeader {
	pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricHeader {
	pub name: String,
	#[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
	pub metric_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
	#[serde(default)]
	pub dimension_values: Vec<CellValue>,
	#[serde(default)]
	pub metric_values: Vec<CellValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellValue {
	#[serde(default)]
	pub value: Option<String>,
}
