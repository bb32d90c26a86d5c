//! Trading performance aggregation engine.
//!
//! Pure functions over caller-supplied trade lists:
//! - Summary statistics (win rate, profit factor, averages, best/worst)
//! - Equity curve (per trade and per day) and daily P&L
//! - Maximum drawdown (cumulative peak tracking, starting from flat)
//! - Strategy and monthly breakdowns
//! - Strategy performance snapshots
//!
//! Division with an empty denominator yields zero, never NaN or infinity.
//! No function holds state or performs I/O.

mod breakdown;
mod constants;
mod equity;
mod format;
mod math;
mod performance;
mod period;
mod summary;
mod types;

pub use breakdown::{compute_monthly_performance, compute_performance_by_strategy};
pub use constants::NO_STRATEGY;
pub use equity::{
    compute_daily_equity_curve, compute_daily_pnl, compute_equity_curve, compute_max_drawdown,
};
pub use format::{format_money, format_pct, round_display};
pub use performance::{compute_sharpe_ratio, compute_strategy_performance};
pub use period::{ReportingPeriod, within};
pub use summary::compute_summary_stats;
pub use types::{
    DailyEquityPoint, DailyPnl, EquityPoint, MonthBucket, StrategyBucket, SummaryStats,
};
