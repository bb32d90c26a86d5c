//! Journal Analytics Binary
//!
//! Loads a journal export and prints the dashboard payloads as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin journal-analytics -- path/to/journal.json [7d|30d|90d|1y]
//! ```
//!
//! # Environment Variables
//!
//! ## Optional
//! - `JOURNAL_CONFIG`: Path to the YAML config (default: config.yaml if present)
//! - `JOURNAL_AS_OF`: RFC 3339 timestamp used as "now" (default: current time)
//! - `RUST_LOG`: Log filter (default: from config)

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, bail};
use chrono::{DateTime, Utc};
use journal_analytics::analytics::{ReportingPeriod, format_money, format_pct};
use journal_analytics::application::DashboardService;
use journal_analytics::application::use_cases::RecalculateStrategyPerformanceUseCase;
use journal_analytics::config::{Config, DEFAULT_CONFIG_PATH, load_config};
use journal_analytics::domain::parse_datetime_text;
use journal_analytics::infrastructure::load_journal;
use journal_analytics::infrastructure::persistence::InMemoryStrategyPerformanceRepository;
use journal_analytics::telemetry;
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let config = resolve_config()?;
    telemetry::init_tracing(&config.logging)?;

    let mut args = std::env::args().skip(1);
    let Some(journal_path) = args.next() else {
        bail!("usage: journal-analytics <journal.json> [7d|30d|90d|1y]");
    };
    let period = args
        .next()
        .map_or(config.analytics.default_period, |p| ReportingPeriod::from_query(&p));
    let now = resolve_now()?;

    tracing::info!(
        journal = %journal_path,
        %period,
        date_field = %config.analytics.date_field,
        as_of = %now,
        "Starting journal analytics"
    );

    let journal = load_journal(&journal_path)
        .with_context(|| format!("loading journal '{journal_path}'"))?;

    let repository = Arc::new(InMemoryStrategyPerformanceRepository::new());
    let recalculate =
        RecalculateStrategyPerformanceUseCase::new(repository, config.analytics.date_field);
    let strategies = recalculate
        .execute_all(&journal.strategies, &journal.trades)
        .await?;

    let service = DashboardService::new(config.analytics);
    let overview = service.overview(&journal.trades, strategies, now);
    let performance = service.performance(&journal.trades, period, now);

    tracing::info!(
        trades = overview.summary.total_trades,
        total_pnl = %format_money(overview.summary.total_pnl),
        win_rate = %format_pct(overview.summary.win_rate),
        max_drawdown = %format_money(overview.max_drawdown),
        period_pnl = %format_money(performance.total_pnl),
        "Dashboard ready"
    );

    let output = json!({
        "overview": overview,
        "performance": performance,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// Config from `JOURNAL_CONFIG`, else `config.yaml` when present, else defaults.
fn resolve_config() -> anyhow::Result<Config> {
    if let Ok(path) = std::env::var("JOURNAL_CONFIG") {
        return load_config(Some(&path)).with_context(|| format!("loading config '{path}'"));
    }
    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        return Ok(load_config(None)?);
    }
    Ok(Config::default())
}

fn resolve_now() -> anyhow::Result<DateTime<Utc>> {
    match std::env::var("JOURNAL_AS_OF") {
        Ok(value) => parse_datetime_text(&value)
            .with_context(|| format!("JOURNAL_AS_OF has invalid timestamp '{value}'")),
        Err(_) => Ok(Utc::now()),
    }
}
