//! Time-ordered aggregations: equity curve, daily P&L and drawdown.
//!
//! All functions take the date field explicitly. Sorting is stable, so
//! trades sharing a timestamp keep their input order.

use rust_decimal::Decimal;

use super::types::{DailyEquityPoint, DailyPnl, EquityPoint};
use crate::domain::{DateField, TradeRecord};

/// Borrow `trades` in ascending order of `field`.
fn sorted_by(trades: &[TradeRecord], field: DateField) -> Vec<&TradeRecord> {
    let mut sorted: Vec<&TradeRecord> = trades.iter().collect();
    sorted.sort_by_key(|trade| field.of(trade));
    sorted
}

/// Running total of P&L, one point per trade, in date order.
#[must_use]
pub fn compute_equity_curve(trades: &[TradeRecord], field: DateField) -> Vec<EquityPoint> {
    let mut cumulative_pnl = Decimal::ZERO;
    sorted_by(trades, field)
        .into_iter()
        .map(|trade| {
            cumulative_pnl = cumulative_pnl.saturating_add(trade.net_pnl);
            EquityPoint {
                date: field.of(trade),
                trade_pnl: trade.net_pnl,
                cumulative_pnl,
            }
        })
        .collect()
}

/// Net P&L per UTC calendar day of `field`.
#[must_use]
pub fn compute_daily_pnl(trades: &[TradeRecord], field: DateField) -> DailyPnl {
    let mut daily = DailyPnl::new();
    for trade in trades {
        let day = daily.entry(field.of(trade).date_naive()).or_insert(Decimal::ZERO);
        *day = day.saturating_add(trade.net_pnl);
    }
    daily
}

/// Running total of daily P&L, one point per day that has trades.
#[must_use]
pub fn compute_daily_equity_curve(trades: &[TradeRecord], field: DateField) -> Vec<DailyEquityPoint> {
    let mut cumulative_pnl = Decimal::ZERO;
    compute_daily_pnl(trades, field)
        .into_iter()
        .map(|(date, pnl)| {
            cumulative_pnl = cumulative_pnl.saturating_add(pnl);
            DailyEquityPoint {
                date,
                pnl,
                cumulative_pnl,
            }
        })
        .collect()
}

/// Largest decline of cumulative P&L from its running peak.
///
/// The peak starts at zero, so a series that opens with losses draws down
/// from flat. Never negative. Running totals clamp at the `Decimal` bounds.
#[must_use]
pub fn compute_max_drawdown(trades: &[TradeRecord], field: DateField) -> Decimal {
    let mut peak = Decimal::ZERO;
    let mut running = Decimal::ZERO;
    let mut max_drawdown = Decimal::ZERO;

    for trade in sorted_by(trades, field) {
        running = running.saturating_add(trade.net_pnl);
        peak = peak.max(running);
        max_drawdown = max_drawdown.max(peak.saturating_sub(running));
    }

    max_drawdown
}
