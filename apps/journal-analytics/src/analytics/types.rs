//! Output types of the aggregation engine.
//!
//! Every type serializes with camelCase field names so it can be handed to
//! the HTTP layer as-is. Decimals serialize as JSON strings (`"66.67"`) to
//! keep full precision; they deserialize from either strings or numbers.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net P&L per calendar day (`YYYY-MM-DD`). Sparse: days without trades are absent.
pub type DailyPnl = BTreeMap<NaiveDate, Decimal>;

/// Headline statistics over a set of trades.
///
/// Ratios and averages with an empty denominator are zero, never NaN or
/// infinity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    /// Number of trades.
    pub total_trades: u64,
    /// Trades with P&L > 0.
    pub winning_trades: u64,
    /// Trades with P&L < 0.
    pub losing_trades: u64,
    /// Sum of net P&L.
    pub total_pnl: Decimal,
    /// Winning trades over all trades, as a percentage (0-100).
    pub win_rate: Decimal,
    /// Sum of winning P&L.
    pub total_wins: Decimal,
    /// Absolute sum of losing P&L.
    pub total_losses: Decimal,
    /// `total_wins / total_losses`, zero when there are no losses.
    pub profit_factor: Decimal,
    /// Mean winning trade.
    pub average_win: Decimal,
    /// Mean losing trade, as a positive value.
    pub average_loss: Decimal,
    /// Largest single-trade P&L.
    pub best_trade: Decimal,
    /// Smallest single-trade P&L.
    pub worst_trade: Decimal,
}

/// One trade on the equity curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityPoint {
    /// Timestamp of the selected date field.
    pub date: DateTime<Utc>,
    /// This trade's P&L.
    pub trade_pnl: Decimal,
    /// Running total including this trade.
    pub cumulative_pnl: Decimal,
}

/// One calendar day on the daily equity curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEquityPoint {
    /// Calendar day (UTC).
    pub date: NaiveDate,
    /// Net P&L of the day.
    pub pnl: Decimal,
    /// Running total through the end of the day.
    pub cumulative_pnl: Decimal,
}

/// Per-strategy breakdown row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyBucket {
    /// Strategy name, or `"No Strategy"`.
    pub name: String,
    /// Number of trades.
    pub trade_count: u64,
    /// Sum of net P&L.
    pub total_pnl: Decimal,
    /// Trades with P&L > 0.
    pub wins: u64,
    /// Trades with P&L < 0.
    pub losses: u64,
    /// Win rate as a percentage (0-100).
    pub win_rate: Decimal,
}

/// Per-month breakdown row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthBucket {
    /// Month number, 1 = January.
    pub month: u32,
    /// Sum of net P&L.
    pub pnl: Decimal,
    /// Number of trades.
    pub trades_count: u64,
    /// Win rate as a percentage (0-100).
    pub win_rate: Decimal,
}
