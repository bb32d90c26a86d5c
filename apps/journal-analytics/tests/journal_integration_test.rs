//! End-to-end tests: journal file and config on disk through to dashboard payloads.

use std::io::Write;
use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};
use journal_analytics::analytics::{NO_STRATEGY, ReportingPeriod};
use journal_analytics::application::DashboardService;
use journal_analytics::application::ports::StrategyPerformanceRepository;
use journal_analytics::application::use_cases::RecalculateStrategyPerformanceUseCase;
use journal_analytics::config::load_config;
use journal_analytics::domain::DateField;
use journal_analytics::infrastructure::load_journal;
use journal_analytics::infrastructure::persistence::InMemoryStrategyPerformanceRepository;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::NamedTempFile;

const JOURNAL: &str = r#"{
  "trades": [
    {"netPnl": "250.50", "entryDate": "2024-03-04T14:30:00Z", "exitDate": "2024-03-04T19:00:00Z", "strategyLabel": "Opening Range"},
    {"net_pnl": -80, "entry_date": "2024-03-10T14:30:00Z", "exit_date": "2024-03-11T15:00:00Z", "strategy": {"name": "Opening Range"}},
    {"pnl": 40, "entryDate": "2024-03-20", "exitDate": "2024-03-27"},
    {"netPnl": null, "pnl": -20, "entryDate": "2024-03-28T13:00:00Z", "exitDate": "2024-03-28T20:00:00Z", "strategy": "Fade"}
  ],
  "executions": [
    {"side": "long", "entryPrice": "100", "exitPrice": "103", "quantity": "20", "fees": "2",
     "entryDate": "2024-03-29T14:00:00Z", "exitDate": "2024-03-29T15:00:00Z", "strategyLabel": "Fade"}
  ],
  "strategies": [
    {"id": "or-1", "name": "Opening Range", "category": "day-trading"},
    {"_id": "fade-1", "name": "Fade", "category": "scalping"},
    {"id": "old-1", "name": "Retired", "category": "other", "isActive": false}
  ]
}"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_journal_to_dashboard() {
    let journal_file = write_temp(JOURNAL);
    let config_file = write_temp(
        "analytics:\n  date_field: exit\n  display_precision: 2\n  daily_window_days: 7\n",
    );

    let config = load_config(Some(config_file.path().to_str().unwrap())).unwrap();
    let journal = load_journal(journal_file.path()).unwrap();
    assert_eq!(journal.trades.len(), 5);
    assert_eq!(journal.trades[4].net_pnl, dec!(58));

    let repository = Arc::new(InMemoryStrategyPerformanceRepository::new());
    let use_case =
        RecalculateStrategyPerformanceUseCase::new(Arc::clone(&repository), config.analytics.date_field);
    let strategies = use_case
        .execute_all(&journal.strategies, &journal.trades)
        .await
        .unwrap();

    assert_eq!(strategies[0].performance.total_trades, 2);
    assert_eq!(strategies[0].performance.total_pnl, dec!(170.50));
    assert_eq!(strategies[0].performance.max_drawdown, dec!(80));
    assert_eq!(strategies[1].performance.total_pnl, dec!(38));
    assert_eq!(strategies[2].performance.total_trades, 0);
    assert_eq!(
        repository.find_performance("fade-1").await.unwrap(),
        Some(strategies[1].performance.clone())
    );

    let now = Utc.with_ymd_and_hms(2024, 3, 31, 23, 0, 0).unwrap();
    let service = DashboardService::new(config.analytics);
    let overview = service.overview(&journal.trades, strategies, now);

    assert_eq!(overview.summary.total_trades, 5);
    assert_eq!(overview.summary.winning_trades, 3);
    assert_eq!(overview.summary.total_pnl, dec!(248.50));
    assert_eq!(overview.summary.win_rate, dec!(60));
    assert_eq!(overview.summary.profit_factor, dec!(3.49));
    assert_eq!(overview.max_drawdown, dec!(80));
    assert_eq!(overview.strategies.len(), 2);
    assert_eq!(overview.monthly[2].trades_count, 5);

    let names: Vec<&str> = overview
        .strategy_breakdown
        .iter()
        .map(|b| b.name.as_str())
        .collect();
    assert_eq!(names, vec!["Opening Range", NO_STRATEGY, "Fade"]);

    // Seven-day window: 27th, 28th and 29th.
    assert_eq!(overview.daily_pnl.len(), 3);
    assert_eq!(
        overview.daily_pnl[&NaiveDate::from_ymd_opt(2024, 3, 29).unwrap()],
        dec!(58)
    );

    let report = service.performance(&journal.trades, ReportingPeriod::SevenDays, now);
    assert_eq!(report.total_pnl, dec!(78));
    assert_eq!(report.cumulative_data.len(), 3);
}

#[test]
fn test_entry_date_config_changes_bucketing() {
    let config_file = write_temp("analytics:\n  date_field: entry\n");
    let config = load_config(Some(config_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.analytics.date_field, DateField::Entry);

    let journal = load_journal(write_temp(JOURNAL).path()).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 3, 31, 23, 0, 0).unwrap();
    let report = DashboardService::new(config.analytics).performance(
        &journal.trades,
        ReportingPeriod::SevenDays,
        now,
    );

    // By entry date the 40 trade opened on the 20th, outside the window.
    assert_eq!(report.total_pnl, dec!(38));
}

#[test]
fn test_bare_array_journal() {
    let file = write_temp(
        r#"[{"netPnl": 10, "entryDate": "2024-01-01", "exitDate": "2024-01-02"},
            {"netPnl": "abc", "entryDate": "2024-01-03", "exitDate": "2024-01-04"}]"#,
    );
    let journal = load_journal(file.path()).unwrap();

    assert_eq!(journal.trades.len(), 2);
    assert_eq!(journal.trades[1].net_pnl, Decimal::ZERO);
    assert!(journal.strategies.is_empty());
}

#[test]
fn test_record_without_exit_date_is_rejected() {
    let file = write_temp(r#"[{"netPnl": 10, "entryDate": "2024-01-01"}]"#);
    let err = load_journal(file.path()).unwrap_err();
    assert!(err.to_string().contains("exitDate"));
}

#[test]
fn test_huge_pnl_journal_aggregates_without_panicking() {
    let file = write_temp(
        r#"[{"netPnl": "50000000000000000000000000000", "entryDate": "2024-01-01", "exitDate": "2024-01-01"},
            {"netPnl": "50000000000000000000000000000", "entryDate": "2024-01-02", "exitDate": "2024-01-02"},
            {"netPnl": "-0.00000000000000000001", "entryDate": "2024-01-03", "exitDate": "2024-01-03"}]"#,
    );
    let journal = load_journal(file.path()).unwrap();

    let now = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
    let config = load_config(Some(write_temp("{}").path().to_str().unwrap())).unwrap();
    let overview = DashboardService::new(config.analytics).overview(&journal.trades, Vec::new(), now);

    assert_eq!(overview.summary.total_trades, 3);
    assert_eq!(overview.summary.profit_factor, Decimal::MAX);
    assert!(overview.summary.total_pnl >= Decimal::MAX - Decimal::ONE);
    assert!(overview.max_drawdown <= Decimal::ONE);
    assert_eq!(overview.equity_curve[1].cumulative_pnl, Decimal::MAX);
}
