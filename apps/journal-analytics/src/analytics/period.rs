//! Look-back windows for the performance report.

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DateField, TradeRecord};

/// Dashboard look-back window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReportingPeriod {
    /// Last 7 days.
    #[serde(rename = "7d")]
    SevenDays,
    /// Last 30 days.
    #[default]
    #[serde(rename = "30d")]
    ThirtyDays,
    /// Last 90 days.
    #[serde(rename = "90d")]
    NinetyDays,
    /// Last calendar year.
    #[serde(rename = "1y")]
    OneYear,
}

impl ReportingPeriod {
    /// Parse a query-string value. Unknown values fall back to 30 days.
    #[must_use]
    pub fn from_query(value: &str) -> Self {
        match value.trim() {
            "7d" => Self::SevenDays,
            "90d" => Self::NinetyDays,
            "1y" => Self::OneYear,
            _ => Self::ThirtyDays,
        }
    }

    /// Query-string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SevenDays => "7d",
            Self::ThirtyDays => "30d",
            Self::NinetyDays => "90d",
            Self::OneYear => "1y",
        }
    }

    /// First instant of the window ending at `now`.
    #[must_use]
    pub fn start(self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::SevenDays => now - Duration::days(7),
            Self::ThirtyDays => now - Duration::days(30),
            Self::NinetyDays => now - Duration::days(90),
            Self::OneYear => now
                .checked_sub_months(Months::new(12))
                .unwrap_or_else(|| now - Duration::days(365)),
        }
    }

    /// Trades whose `field` falls within `[start(now), now]`, in input order.
    #[must_use]
    pub fn filter(self, trades: &[TradeRecord], now: DateTime<Utc>, field: DateField) -> Vec<TradeRecord> {
        within(trades, self.start(now), now, field)
    }
}

impl std::fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trades whose `field` falls within `[start, end]`, in input order.
#[must_use]
pub fn within(
    trades: &[TradeRecord],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    field: DateField,
) -> Vec<TradeRecord> {
    trades
        .iter()
        .filter(|trade| {
            let date = field.of(trade);
            date >= start && date <= end
        })
        .cloned()
        .collect()
}
