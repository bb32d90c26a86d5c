//! Dashboard report assembly.
//!
//! Combines engine outputs into the payloads the dashboard renders. This is
//! the one place that rounds for display.

use chrono::{DateTime, Datelike, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analytics::{
    DailyEquityPoint, DailyPnl, EquityPoint, MonthBucket, ReportingPeriod, StrategyBucket,
    SummaryStats, compute_daily_equity_curve, compute_daily_pnl, compute_equity_curve,
    compute_max_drawdown, compute_monthly_performance, compute_performance_by_strategy,
    compute_summary_stats, round_display, within,
};
use crate::config::AnalyticsConfig;
use crate::domain::{StrategyRecord, TradeRecord};

/// Dashboard landing page payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    /// Headline statistics, rounded for display.
    pub summary: SummaryStats,
    /// Maximum drawdown of the full history.
    pub max_drawdown: Decimal,
    /// Per-trade equity curve.
    pub equity_curve: Vec<EquityPoint>,
    /// Daily P&L over the trailing window.
    pub daily_pnl: DailyPnl,
    /// Breakdown by strategy label.
    pub strategy_breakdown: Vec<StrategyBucket>,
    /// Year covered by `monthly`.
    pub year: i32,
    /// Month-by-month breakdown of `year`.
    pub monthly: Vec<MonthBucket>,
    /// Active strategies with their stored snapshots.
    pub strategies: Vec<StrategyRecord>,
}

/// Period performance payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    /// Look-back window.
    pub period: ReportingPeriod,
    /// Daily P&L within the window.
    pub daily_pnl: DailyPnl,
    /// Running total per day.
    pub cumulative_data: Vec<DailyEquityPoint>,
    /// Net P&L of the window.
    pub total_pnl: Decimal,
}

/// Builds dashboard payloads with a fixed analytics configuration.
#[derive(Debug, Clone)]
pub struct DashboardService {
    config: AnalyticsConfig,
}

impl DashboardService {
    /// Create a new service.
    #[must_use]
    pub const fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Overview of the whole journal as of `now`.
    #[must_use]
    pub fn overview(
        &self,
        trades: &[TradeRecord],
        strategies: Vec<StrategyRecord>,
        now: DateTime<Utc>,
    ) -> DashboardOverview {
        let field = self.config.date_field;
        let window_start = now - Duration::days(i64::from(self.config.daily_window_days));
        let recent = within(trades, window_start, now, field);
        let year = now.year();

        let overview = DashboardOverview {
            summary: self.rounded_summary(&compute_summary_stats(trades)),
            max_drawdown: compute_max_drawdown(trades, field),
            equity_curve: compute_equity_curve(trades, field),
            daily_pnl: compute_daily_pnl(&recent, field),
            strategy_breakdown: compute_performance_by_strategy(trades),
            year,
            monthly: compute_monthly_performance(trades, year, field),
            strategies: strategies.into_iter().filter(|s| s.is_active).collect(),
        };

        debug!(
            trades = trades.len(),
            recent_days = overview.daily_pnl.len(),
            strategies = overview.strategies.len(),
            date_field = %field,
            "built dashboard overview"
        );

        overview
    }

    /// Daily and cumulative P&L over `period` ending at `now`.
    #[must_use]
    pub fn performance(
        &self,
        trades: &[TradeRecord],
        period: ReportingPeriod,
        now: DateTime<Utc>,
    ) -> PerformanceReport {
        let field = self.config.date_field;
        let in_period = period.filter(trades, now, field);
        let cumulative_data = compute_daily_equity_curve(&in_period, field);
        let total_pnl = cumulative_data
            .last()
            .map_or(Decimal::ZERO, |point| point.cumulative_pnl);

        debug!(%period, trades = in_period.len(), %total_pnl, "built performance report");

        PerformanceReport {
            period,
            daily_pnl: compute_daily_pnl(&in_period, field),
            cumulative_data,
            total_pnl,
        }
    }

    /// Round every decimal of a summary to the configured display precision.
    #[must_use]
    pub fn rounded_summary(&self, summary: &SummaryStats) -> SummaryStats {
        let dp = self.config.display_precision;
        let round = |value: Decimal| round_display(value, dp);
        SummaryStats {
            total_pnl: round(summary.total_pnl),
            win_rate: round(summary.win_rate),
            total_wins: round(summary.total_wins),
            total_losses: round(summary.total_losses),
            profit_factor: round(summary.profit_factor),
            average_win: round(summary.average_win),
            average_loss: round(summary.average_loss),
            best_trade: round(summary.best_trade),
            worst_trade: round(summary.worst_trade),
            ..summary.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use rust_decimal_macros::dec;

    use crate::domain::{DateField, StrategyCategory};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 31, 18, 0, 0).unwrap()
    }

    fn make_trade(pnl: Decimal, month: u32, day: u32) -> TradeRecord {
        let exit = Utc.with_ymd_and_hms(2024, month, day, 15, 0, 0).unwrap();
        TradeRecord::new(pnl, exit - Duration::hours(2), exit)
    }

    fn service() -> DashboardService {
        DashboardService::new(AnalyticsConfig::default())
    }

    #[test]
    fn test_overview() {
        let trades = vec![
            make_trade(dec!(100), 1, 5).with_strategy("Gap"),
            make_trade(dec!(-40), 1, 10),
            make_trade(dec!(60), 3, 20).with_strategy("Gap"),
        ];
        let mut inactive = StrategyRecord::new("s2", "Old", StrategyCategory::Other);
        inactive.is_active = false;
        let strategies = vec![StrategyRecord::new("s1", "Gap", StrategyCategory::DayTrading), inactive];

        let overview = service().overview(&trades, strategies, now());

        assert_eq!(overview.summary.total_pnl, dec!(120));
        assert_eq!(overview.summary.win_rate, dec!(66.67));
        assert_eq!(overview.summary.profit_factor, dec!(4));
        assert_eq!(overview.max_drawdown, dec!(40));
        assert_eq!(overview.equity_curve.len(), 3);
        // Only the March trade is inside the 30-day window.
        assert_eq!(overview.daily_pnl.len(), 1);
        assert_eq!(
            overview.daily_pnl[&NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()],
            dec!(60)
        );
        assert_eq!(overview.strategy_breakdown.len(), 2);
        assert_eq!(overview.year, 2024);
        assert_eq!(overview.monthly.len(), 12);
        assert_eq!(overview.monthly[0].pnl, dec!(60));
        assert_eq!(overview.strategies.len(), 1);
    }

    #[test]
    fn test_overview_empty_journal() {
        let overview = service().overview(&[], Vec::new(), now());
        assert_eq!(overview.summary, SummaryStats::default());
        assert!(overview.equity_curve.is_empty());
        assert!(overview.daily_pnl.is_empty());
        assert_eq!(overview.monthly.len(), 12);
        assert_eq!(overview.max_drawdown, Decimal::ZERO);
    }

    #[test]
    fn test_performance_report() {
        let trades = vec![
            make_trade(dec!(25), 3, 28),
            make_trade(dec!(-10), 3, 26),
            make_trade(dec!(5), 3, 28),
            make_trade(dec!(500), 2, 1),
        ];

        let report = service().performance(&trades, ReportingPeriod::SevenDays, now());

        assert_eq!(report.period, ReportingPeriod::SevenDays);
        assert_eq!(report.daily_pnl.len(), 2);
        assert_eq!(report.cumulative_data[0].cumulative_pnl, dec!(-10));
        assert_eq!(report.cumulative_data[1].cumulative_pnl, dec!(20));
        assert_eq!(report.total_pnl, dec!(20));

        let year = service().performance(&trades, ReportingPeriod::OneYear, now());
        assert_eq!(year.total_pnl, dec!(520));
    }

    #[test]
    fn test_performance_report_uses_configured_field() {
        let config = AnalyticsConfig {
            date_field: DateField::Entry,
            ..AnalyticsConfig::default()
        };
        let entry = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let exit = Utc.with_ymd_and_hms(2024, 3, 30, 10, 0, 0).unwrap();
        let trades = vec![TradeRecord::new(dec!(7), entry, exit)];

        let by_entry = DashboardService::new(config).performance(&trades, ReportingPeriod::SevenDays, now());
        assert_eq!(by_entry.total_pnl, Decimal::ZERO);

        let by_exit = service().performance(&trades, ReportingPeriod::SevenDays, now());
        assert_eq!(by_exit.total_pnl, dec!(7));
    }

    #[test]
    fn test_rounded_summary_keeps_counts() {
        let summary = SummaryStats {
            total_trades: 3,
            winning_trades: 2,
            win_rate: dec!(66.666666),
            profit_factor: dec!(1.005),
            ..SummaryStats::default()
        };
        let rounded = service().rounded_summary(&summary);
        assert_eq!(rounded.total_trades, 3);
        assert_eq!(rounded.winning_trades, 2);
        assert_eq!(rounded.win_rate, dec!(66.67));
        assert_eq!(rounded.profit_factor, dec!(1.01));
    }
}
