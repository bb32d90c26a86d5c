// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Journal Analytics - Trade Journal Performance Engine
//!
//! Turns a trader's closed trades into the numbers a journal dashboard shows.
//!
//! # Architecture (Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Trade records, executions, strategies
//!   - `trade`: `TradeRecord`, `DateField` selector, lenient record parsing
//!   - `execution`: P&L derived from entry/exit prices, quantity and fees
//!   - `strategy`: `StrategyRecord` and its `StrategyPerformance` snapshot
//!
//! - **Analytics**: Pure aggregation functions (no state, no I/O)
//!   - Summary stats, equity curves, daily P&L, maximum drawdown
//!   - Strategy and monthly breakdowns, Sharpe ratio, reporting periods
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `StrategyPerformanceRepository`
//!   - `use_cases`: `RecalculateStrategyPerformance`
//!   - `dashboard`: overview and period performance payloads
//!
//! - **Infrastructure**: Adapters
//!   - `journal`: JSON journal export loading
//!   - `persistence`: in-memory snapshot repository
//!
//! # Monetary Values
//!
//! All money is `rust_decimal::Decimal`; rounding happens only in
//! `DashboardService` and the `format_*` helpers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

pub mod analytics;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

pub use analytics::{
    SummaryStats, compute_daily_pnl, compute_equity_curve, compute_max_drawdown,
    compute_monthly_performance, compute_performance_by_strategy, compute_summary_stats,
};
pub use config::{Config, ConfigError, load_config};
pub use domain::{DateField, StrategyPerformance, StrategyRecord, TradeRecord};
