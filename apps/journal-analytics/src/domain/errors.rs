//! Domain errors for journal records.

use thiserror::Error;

/// Errors raised while reading a trade record from its wire shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TradeRecordError {
    /// A required timestamp was absent or null.
    #[error("trade record is missing required field '{field}'")]
    MissingField {
        /// Field name.
        field: &'static str,
    },

    /// A timestamp could not be parsed.
    #[error("trade record field '{field}' has invalid timestamp '{value}'")]
    InvalidTimestamp {
        /// Field name.
        field: &'static str,
        /// Raw value as received.
        value: String,
    },
}

/// Errors raised while deriving trade P&L from execution prices.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// Side was neither long nor short.
    #[error("unknown trade side: {0}")]
    UnknownSide(String),

    /// P&L is too large to represent.
    #[error("trade P&L overflows")]
    Overflow,

    /// Prices, quantity and fees must not be negative.
    #[error("{field} must not be negative")]
    NegativeValue {
        /// Field name.
        field: &'static str,
    },
}
