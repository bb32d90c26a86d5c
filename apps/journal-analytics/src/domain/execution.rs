//! Trade P&L derivation from execution prices.
//!
//! Journal entries are captured as prices and quantity; the net P&L the
//! aggregation engine consumes is derived here before the record is stored.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::ExecutionError;
use super::trade::{TradeRecord, deserialize_timestamp};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Position direction.
///
/// Deserialized through [`TryFrom<&str>`], so `buy`/`sell` and any casing are
/// accepted and anything else fails with [`ExecutionError::UnknownSide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TradeSide {
    /// Profits when price rises.
    Long,
    /// Profits when price falls.
    Short,
}

impl TryFrom<&str> for TradeSide {
    type Error = ExecutionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "long" | "buy" => Ok(Self::Long),
            "short" | "sell" => Ok(Self::Short),
            other => Err(ExecutionError::UnknownSide(other.to_string())),
        }
    }
}

impl TryFrom<String> for TradeSide {
    type Error = ExecutionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

/// A journaled trade as entered: prices, size and fees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeExecution {
    /// Direction.
    pub side: TradeSide,
    /// Average entry price.
    pub entry_price: Decimal,
    /// Average exit price.
    pub exit_price: Decimal,
    /// Position size.
    pub quantity: Decimal,
    /// Total fees paid.
    #[serde(default)]
    pub fees: Decimal,
    /// Entry timestamp.
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub entry_date: DateTime<Utc>,
    /// Exit timestamp.
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub exit_date: DateTime<Utc>,
    /// Strategy name, if tagged.
    #[serde(default)]
    pub strategy_label: Option<String>,
}

impl TradeExecution {
    /// Reject negative prices, quantity or fees.
    pub fn validate(&self) -> Result<(), ExecutionError> {
        let fields = [
            ("entryPrice", self.entry_price),
            ("exitPrice", self.exit_price),
            ("quantity", self.quantity),
            ("fees", self.fees),
        ];
        for (field, value) in fields {
            if value < Decimal::ZERO {
                return Err(ExecutionError::NegativeValue { field });
            }
        }
        Ok(())
    }

    /// P&L before fees.
    pub fn gross_pnl(&self) -> Result<Decimal, ExecutionError> {
        let price_diff = match self.side {
            TradeSide::Long => self.exit_price.checked_sub(self.entry_price),
            TradeSide::Short => self.entry_price.checked_sub(self.exit_price),
        };
        price_diff
            .and_then(|diff| diff.checked_mul(self.quantity))
            .ok_or(ExecutionError::Overflow)
    }

    /// P&L after fees.
    pub fn net_pnl(&self) -> Result<Decimal, ExecutionError> {
        self.gross_pnl()?
            .checked_sub(self.fees)
            .ok_or(ExecutionError::Overflow)
    }

    /// Net P&L as a percentage of the entry cost basis.
    ///
    /// Zero when the cost basis is zero.
    pub fn pnl_percentage(&self) -> Result<Decimal, ExecutionError> {
        let cost = self
            .entry_price
            .checked_mul(self.quantity)
            .ok_or(ExecutionError::Overflow)?;
        if cost.is_zero() {
            return Ok(Decimal::ZERO);
        }
        self.net_pnl()?
            .checked_div(cost)
            .and_then(|fraction| fraction.checked_mul(HUNDRED))
            .ok_or(ExecutionError::Overflow)
    }

    /// Build the record the aggregation engine consumes.
    pub fn to_record(&self) -> Result<TradeRecord, ExecutionError> {
        self.validate()?;
        Ok(TradeRecord {
            net_pnl: self.net_pnl()?,
            entry_date: self.entry_date,
            exit_date: self.exit_date,
            strategy_label: self.strategy_label.clone(),
            pnl_percentage: Some(self.pnl_percentage()?),
        })
    }
}
