//! Trading strategies and their persisted performance snapshot.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Strategy classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyCategory {
    /// Seconds-to-minutes holding periods.
    Scalping,
    /// Flat by the close.
    DayTrading,
    /// Days to weeks.
    SwingTrading,
    /// Weeks to months.
    PositionTrading,
    /// Rules executed by a program.
    Algorithmic,
    /// Anything else.
    #[default]
    Other,
}

/// Performance snapshot stored on a strategy after each recalculation.
///
/// Produced by `analytics::compute_strategy_performance`; the engine never
/// stores it itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrategyPerformance {
    /// Number of trades.
    pub total_trades: u64,
    /// Trades with positive P&L.
    pub winning_trades: u64,
    /// Trades with negative P&L.
    pub losing_trades: u64,
    /// Win rate as a percentage (0-100).
    pub win_rate: Decimal,
    /// Sum of net P&L.
    pub total_pnl: Decimal,
    /// Mean winning trade.
    pub average_win: Decimal,
    /// Mean losing trade, as a positive value.
    pub average_loss: Decimal,
    /// Gross wins over gross losses, zero when there are no losses.
    pub profit_factor: Decimal,
    /// Largest peak-to-trough decline of cumulative P&L.
    pub max_drawdown: Decimal,
    /// Per-trade Sharpe ratio.
    pub sharpe_ratio: Decimal,
}

/// A user's strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyRecord {
    /// Storage identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Display name, matched against trade strategy labels.
    pub name: String,
    /// Classification.
    #[serde(default)]
    pub category: StrategyCategory,
    /// Last stored snapshot.
    #[serde(default)]
    pub performance: StrategyPerformance,
    /// Inactive strategies are kept but excluded from dashboards.
    #[serde(default = "default_active", alias = "is_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}

impl StrategyRecord {
    /// Create an active strategy with an empty snapshot.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: StrategyCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            performance: StrategyPerformance::default(),
            is_active: true,
        }
    }
}
