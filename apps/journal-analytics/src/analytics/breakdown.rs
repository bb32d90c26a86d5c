//! Strategy and monthly breakdowns.

use std::collections::HashMap;

use chrono::Datelike;
use rust_decimal::Decimal;

use super::constants::{MONTHS_PER_YEAR, NO_STRATEGY};
use super::summary::win_rate;
use super::types::{MonthBucket, StrategyBucket};
use crate::domain::{DateField, TradeRecord};

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    count: u64,
    pnl: Decimal,
    wins: u64,
    losses: u64,
}

impl Tally {
    fn add(&mut self, trade: &TradeRecord) {
        self.count += 1;
        self.pnl = self.pnl.saturating_add(trade.net_pnl);
        if trade.is_winner() {
            self.wins += 1;
        } else if trade.is_loser() {
            self.losses += 1;
        }
    }
}

/// Group trades by strategy label in order of first appearance.
///
/// Unlabelled trades fall into the `"No Strategy"` bucket.
#[must_use]
pub fn compute_performance_by_strategy(trades: &[TradeRecord]) -> Vec<StrategyBucket> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Tally)> = Vec::new();

    for trade in trades {
        let name = trade.strategy_label.as_deref().unwrap_or(NO_STRATEGY);
        let slot = *index.entry(name).or_insert_with(|| {
            groups.push((name, Tally::default()));
            groups.len() - 1
        });
        groups[slot].1.add(trade);
    }

    groups
        .into_iter()
        .map(|(name, tally)| StrategyBucket {
            name: name.to_string(),
            trade_count: tally.count,
            total_pnl: tally.pnl,
            wins: tally.wins,
            losses: tally.losses,
            win_rate: win_rate(tally.wins, tally.count),
        })
        .collect()
}

/// Twelve month buckets (January first) for trades whose `field` falls in `year`.
///
/// Months without trades are present with zero values.
#[must_use]
pub fn compute_monthly_performance(
    trades: &[TradeRecord],
    year: i32,
    field: DateField,
) -> Vec<MonthBucket> {
    let mut months = [Tally::default(); MONTHS_PER_YEAR];

    for trade in trades {
        let date = field.of(trade);
        if date.year() == year {
            months[date.month0() as usize].add(trade);
        }
    }

    months
        .iter()
        .zip(1u32..)
        .map(|(tally, month)| MonthBucket {
            month,
            pnl: tally.pnl,
            trades_count: tally.count,
            win_rate: win_rate(tally.wins, tally.count),
        })
        .collect()
}
