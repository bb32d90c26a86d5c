//! Strategy performance snapshot.

use rust_decimal::Decimal;

use super::equity::compute_max_drawdown;
use super::math::{ratio, sample_moments};
use super::summary::compute_summary_stats;
use crate::domain::{DateField, StrategyPerformance, TradeRecord};

/// Per-trade Sharpe ratio: mean net P&L over its sample standard deviation.
///
/// Zero with fewer than two trades, when every trade has the same P&L, or
/// when the moments are too large to represent.
#[must_use]
pub fn compute_sharpe_ratio(trades: &[TradeRecord]) -> Decimal {
    let pnls: Vec<Decimal> = trades.iter().map(|t| t.net_pnl).collect();
    match sample_moments(&pnls) {
        Some(moments) => ratio(moments.mean, moments.std_dev),
        _ => Decimal::ZERO,
    }
}

/// Build the snapshot persisted on a strategy from its trades.
#[must_use]
pub fn compute_strategy_performance(trades: &[TradeRecord], field: DateField) -> StrategyPerformance {
    let summary = compute_summary_stats(trades);

    StrategyPerformance {
        total_trades: summary.total_trades,
        winning_trades: summary.winning_trades,
        losing_trades: summary.losing_trades,
        win_rate: summary.win_rate,
        total_pnl: summary.total_pnl,
        average_win: summary.average_win,
        average_loss: summary.average_loss,
        profit_factor: summary.profit_factor,
        max_drawdown: compute_max_drawdown(trades, field),
        sharpe_ratio: compute_sharpe_ratio(trades),
    }
}
