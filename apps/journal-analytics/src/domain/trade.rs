//! Trade records as delivered by the persistence layer.
//!
//! Journal exports come from two storage backends with slightly different
//! shapes (`netPnl` vs `net_pnl` vs `pnl`, nested `strategies` objects vs
//! flat labels). Deserialization goes through [`RawTradeRecord`] so every
//! shape lands in the same strongly-typed [`TradeRecord`]. Extra fields are
//! ignored.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::errors::TradeRecordError;

/// Which timestamp of a trade drives ordering and date bucketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateField {
    /// Trade entry (open) timestamp.
    #[serde(alias = "entryDate", alias = "entry_date")]
    Entry,
    /// Trade exit (close) timestamp. Close-based aggregation is the default.
    #[default]
    #[serde(alias = "exitDate", alias = "exit_date")]
    Exit,
}

impl DateField {
    /// Read the selected timestamp from a trade.
    #[must_use]
    pub const fn of(self, trade: &TradeRecord) -> DateTime<Utc> {
        match self {
            Self::Entry => trade.entry_date,
            Self::Exit => trade.exit_date,
        }
    }

    /// Field name as it appears in configuration and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Exit => "exit",
        }
    }
}

impl std::fmt::Display for DateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A closed trade as consumed by the aggregation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTradeRecord")]
pub struct TradeRecord {
    /// Realized P&L, net of fees.
    pub net_pnl: Decimal,
    /// Entry timestamp.
    pub entry_date: DateTime<Utc>,
    /// Exit timestamp.
    pub exit_date: DateTime<Utc>,
    /// Resolved strategy name, if the trade was tagged with one.
    pub strategy_label: Option<String>,
    /// Net P&L as a percentage of the entry cost basis, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pnl_percentage: Option<Decimal>,
}

impl TradeRecord {
    /// Create an untagged trade record.
    #[must_use]
    pub const fn new(net_pnl: Decimal, entry_date: DateTime<Utc>, exit_date: DateTime<Utc>) -> Self {
        Self {
            net_pnl,
            entry_date,
            exit_date,
            strategy_label: None,
            pnl_percentage: None,
        }
    }

    /// Tag the trade with a strategy name.
    #[must_use]
    pub fn with_strategy(mut self, label: impl Into<String>) -> Self {
        self.strategy_label = Some(label.into());
        self
    }

    /// Strictly positive P&L.
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.net_pnl > Decimal::ZERO
    }

    /// Strictly negative P&L.
    #[must_use]
    pub fn is_loser(&self) -> bool {
        self.net_pnl < Decimal::ZERO
    }
}

/// Wire shape accepted from either storage backend.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTradeRecord {
    #[serde(default)]
    net_pnl: Option<Value>,
    #[serde(default, rename = "net_pnl")]
    net_pnl_snake: Option<Value>,
    #[serde(default)]
    pnl: Option<Value>,
    #[serde(default, alias = "entry_date")]
    entry_date: Option<Value>,
    #[serde(default, alias = "exit_date")]
    exit_date: Option<Value>,
    #[serde(default, alias = "strategy_label", alias = "strategyName", alias = "strategy_name")]
    strategy_label: Option<Value>,
    #[serde(default, alias = "strategies")]
    strategy: Option<Value>,
    #[serde(default, alias = "pnl_percentage")]
    pnl_percentage: Option<Value>,
}

impl TryFrom<RawTradeRecord> for TradeRecord {
    type Error = TradeRecordError;

    fn try_from(raw: RawTradeRecord) -> Result<Self, Self::Error> {
        let pnl_value = [raw.net_pnl, raw.net_pnl_snake, raw.pnl]
            .into_iter()
            .flatten()
            .find(|value| !value.is_null());

        let net_pnl = match pnl_value {
            None => Decimal::ZERO,
            Some(value) => decimal_from_value(&value).unwrap_or_else(|| {
                tracing::warn!(value = %value, "non-numeric trade P&L coerced to zero");
                Decimal::ZERO
            }),
        };

        let entry_date = required_datetime(raw.entry_date.as_ref(), "entryDate")?;
        let exit_date = required_datetime(raw.exit_date.as_ref(), "exitDate")?;

        let strategy_label = raw
            .strategy_label
            .as_ref()
            .and_then(label_from_value)
            .or_else(|| raw.strategy.as_ref().and_then(label_from_value));

        let pnl_percentage = raw.pnl_percentage.as_ref().and_then(decimal_from_value);

        Ok(Self {
            net_pnl,
            entry_date,
            exit_date,
            strategy_label,
            pnl_percentage,
        })
    }
}

/// Parse a decimal from a JSON number or numeric string.
fn decimal_from_value(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

/// Parse a timestamp in any of the formats the journal backends emit.
///
/// Bare dates are read as midnight UTC.
pub fn parse_datetime_text(text: &str) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.and_utc());
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Serde adapter reading a timestamp with [`parse_datetime_text`].
pub(crate) fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_datetime_text(&text)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{text}'")))
}

fn required_datetime(
    value: Option<&Value>,
    field: &'static str,
) -> Result<DateTime<Utc>, TradeRecordError> {
    match value {
        None | Some(Value::Null) => Err(TradeRecordError::MissingField { field }),
        Some(Value::String(text)) => {
            parse_datetime_text(text).ok_or_else(|| TradeRecordError::InvalidTimestamp {
                field,
                value: text.clone(),
            })
        }
        Some(other) => Err(TradeRecordError::InvalidTimestamp {
            field,
            value: other.to_string(),
        }),
    }
}

fn label_from_value(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.as_str(),
        Value::Object(map) => map.get("name").and_then(Value::as_str)?,
        _ => return None,
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn parse(json: &str) -> TradeRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_camel_case_record() {
        let trade = parse(
            r#"{"netPnl": 125.5, "entryDate": "2024-01-05T09:30:00Z",
                "exitDate": "2024-01-05T15:45:00Z", "strategyLabel": "Breakout",
                "instrument": "AAPL", "notes": "ignored"}"#,
        );
        assert_eq!(trade.net_pnl, dec!(125.5));
        assert_eq!(trade.entry_date, Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap());
        assert_eq!(trade.strategy_label.as_deref(), Some("Breakout"));
    }

    #[test]
    fn test_snake_case_record_with_nested_strategy() {
        let trade = parse(
            r#"{"pnl": "-40.25", "entry_date": "2024-01-10", "exit_date": "2024-01-11 10:00:00",
                "strategies": {"id": "s1", "name": "Mean Reversion", "category": "swing-trading"}}"#,
        );
        assert_eq!(trade.net_pnl, dec!(-40.25));
        assert_eq!(trade.exit_date, Utc.with_ymd_and_hms(2024, 1, 11, 10, 0, 0).unwrap());
        assert_eq!(trade.strategy_label.as_deref(), Some("Mean Reversion"));
    }

    #[test]
    fn test_net_pnl_preferred_over_gross_pnl() {
        let trade = parse(
            r#"{"net_pnl": 90, "pnl": 100, "entry_date": "2024-01-10", "exit_date": "2024-01-10"}"#,
        );
        assert_eq!(trade.net_pnl, dec!(90));
    }

    #[test]
    fn test_missing_or_invalid_pnl_coerces_to_zero() {
        let missing = parse(r#"{"entryDate": "2024-01-10", "exitDate": "2024-01-10"}"#);
        assert_eq!(missing.net_pnl, Decimal::ZERO);

        let null = parse(r#"{"netPnl": null, "entryDate": "2024-01-10", "exitDate": "2024-01-10"}"#);
        assert_eq!(null.net_pnl, Decimal::ZERO);

        let garbage =
            parse(r#"{"netPnl": "n/a", "entryDate": "2024-01-10", "exitDate": "2024-01-10"}"#);
        assert_eq!(garbage.net_pnl, Decimal::ZERO);

        let boolean =
            parse(r#"{"netPnl": true, "entryDate": "2024-01-10", "exitDate": "2024-01-10"}"#);
        assert_eq!(boolean.net_pnl, Decimal::ZERO);
    }

    #[test]
    fn test_pnl_percentage_is_optional() {
        let trade = parse(
            r#"{"netPnl": 48, "pnlPercentage": "4.8", "entryDate": "2024-01-10", "exitDate": "2024-01-10"}"#,
        );
        assert_eq!(trade.pnl_percentage, Some(dec!(4.8)));

        let snake = parse(
            r#"{"netPnl": 48, "pnl_percentage": 4.8, "entryDate": "2024-01-10", "exitDate": "2024-01-10"}"#,
        );
        assert_eq!(snake.pnl_percentage, Some(dec!(4.8)));

        let garbage = parse(
            r#"{"netPnl": 48, "pnlPercentage": "n/a", "entryDate": "2024-01-10", "exitDate": "2024-01-10"}"#,
        );
        assert_eq!(garbage.pnl_percentage, None);
        assert!(serde_json::to_value(&garbage).unwrap().get("pnlPercentage").is_none());
    }

    #[test]
    fn test_blank_strategy_is_absent() {
        let trade = parse(
            r#"{"netPnl": 1, "entryDate": "2024-01-10", "exitDate": "2024-01-10", "strategyLabel": "  "}"#,
        );
        assert!(trade.strategy_label.is_none());
    }

    #[test]
    fn test_missing_date_is_rejected() {
        let err = serde_json::from_str::<TradeRecord>(r#"{"netPnl": 1, "entryDate": "2024-01-10"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("exitDate"));
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let err = serde_json::from_str::<TradeRecord>(
            r#"{"netPnl": 1, "entryDate": "yesterday", "exitDate": "2024-01-10"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let trade = TradeRecord::new(
            dec!(10),
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap(),
        )
        .with_strategy("Scalp");
        let json = serde_json::to_value(&trade).unwrap();
        assert_eq!(json["strategyLabel"], "Scalp");
        assert!(json.get("netPnl").is_some());
    }

    #[test]
    fn test_date_field_selects_timestamp() {
        let entry = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let exit = Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap();
        let trade = TradeRecord::new(dec!(1), entry, exit);
        assert_eq!(DateField::Entry.of(&trade), entry);
        assert_eq!(DateField::Exit.of(&trade), exit);
        assert_eq!(DateField::default(), DateField::Exit);
    }
}
