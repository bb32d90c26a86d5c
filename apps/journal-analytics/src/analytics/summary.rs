//! Headline trade statistics.

use rust_decimal::Decimal;

use super::constants::HUNDRED;
use super::math::{ratio, saturating_sum};
use super::types::SummaryStats;
use crate::domain::TradeRecord;

/// Win rate as a percentage, zero for an empty set.
pub(crate) fn win_rate(winning: u64, total: u64) -> Decimal {
    if total > 0 {
        Decimal::from(winning) / Decimal::from(total) * HUNDRED
    } else {
        Decimal::ZERO
    }
}

/// Compute summary statistics over `trades`. Order is irrelevant.
#[must_use]
pub fn compute_summary_stats(trades: &[TradeRecord]) -> SummaryStats {
    let mut total_wins = Decimal::ZERO;
    let mut losing_sum = Decimal::ZERO;
    let mut winning_trades = 0u64;
    let mut losing_trades = 0u64;

    for trade in trades {
        if trade.is_winner() {
            total_wins = total_wins.saturating_add(trade.net_pnl);
            winning_trades += 1;
        } else if trade.is_loser() {
            losing_sum = losing_sum.saturating_add(trade.net_pnl);
            losing_trades += 1;
        }
    }

    let total_trades = trades.len() as u64;
    let total_pnl = saturating_sum(trades.iter().map(|t| t.net_pnl));
    let total_losses = losing_sum.abs();

    let profit_factor = ratio(total_wins, total_losses);
    let average_win = ratio(total_wins, Decimal::from(winning_trades));
    let average_loss = ratio(total_losses, Decimal::from(losing_trades));

    let best_trade = trades.iter().map(|t| t.net_pnl).max().unwrap_or(Decimal::ZERO);
    let worst_trade = trades.iter().map(|t| t.net_pnl).min().unwrap_or(Decimal::ZERO);

    tracing::debug!(
        total_trades,
        winning_trades,
        losing_trades,
        %total_pnl,
        "computed summary stats"
    );

    SummaryStats {
        total_trades,
        winning_trades,
        losing_trades,
        total_pnl,
        win_rate: win_rate(winning_trades, total_trades),
        total_wins,
        total_losses,
        profit_factor,
        average_win,
        average_loss,
        best_trade,
        worst_trade,
    }
}
