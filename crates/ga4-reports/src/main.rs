// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Connectivity check: runs the page-view and active-user reports for one
//! date range and logs how many rows came back.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ga4_reports::{load_config, Ga4Reports, ReportDate};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "ga4-reports", version, about = "Check access to a GA4 property")]
struct Cli {
	/// TOML config file; environment variables override it.
	#[arg(long, env = "GA4_REPORTS_CONFIG")]
	config: Option<PathBuf>,

	#[arg(long, default_value = "yesterday")]
	start_date: ReportDate,

	#[arg(long, default_value = "yesterday")]
	end_date: ReportDate,

	/// Emit logs as JSON lines.
	#[arg(long)]
	json_logs: bool,
}

fn init_tracing(json: bool) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	let registry = tracing_subscriber::registry().with(filter);
	if json {
		registry.with(tracing_subscriber::fmt::layer().json()).init();
	} else {
		registry.with(tracing_subscriber::fmt::layer()).init();
	}
}

async fn run(cli: Cli) -> Result<()> {
	let config = load_config(cli.config)?;
	let reports = Ga4Reports::new(config)?;
	let range = cli.start_date.to(cli.end_date);

	info!(
		property = %reports.property_id(),
		start_date = %range.start_date,
		end_date = %range.end_date,
		"Testing GA4 connection"
	);

	let page_views = reports.page_views(range.clone(), &[]).await?;
	info!(
		rows = page_views.row_count.unwrap_or(0),
		"Page views report succeeded"
	);

	let active_users = reports.active_users(range).await?;
	info!(
		rows = active_users.row_count.unwrap_or(0),
		"Active users report succeeded"
	);

	Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.json_logs);

	if let Err(e) = run(cli).await {
		error!(error = %e, "GA4 connection test failed");
		std::process::exit(1);
	}

	info!("GA4 connection test passed");
	Ok(())
}
