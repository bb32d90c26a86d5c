//! Journal export loading.
//!
//! Accepts either a bare JSON array of trade records or an object:
//!
//! ```json
//! {
//!   "trades": [{ "netPnl": 100, "entryDate": "...", "exitDate": "..." }],
//!   "executions": [{ "side": "long", "entryPrice": "10", "exitPrice": "12", ... }],
//!   "strategies": [{ "id": "s1", "name": "Breakout", "category": "day-trading" }]
//! }
//! ```
//!
//! Executions are converted to trade records (P&L derived from prices) and
//! appended after `trades`.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::domain::{ExecutionError, StrategyRecord, TradeExecution, TradeRecord};

/// Errors while loading a journal export.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Failed to read the file.
    #[error("Failed to read journal file '{path}': {source}")]
    ReadError {
        /// Path to the journal file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Malformed JSON or record shape.
    #[error("Failed to parse journal JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    /// An execution entry had invalid values.
    #[error("Invalid execution at index {index}: {source}")]
    InvalidExecution {
        /// Position in the `executions` array.
        index: usize,
        /// The validation failure.
        source: ExecutionError,
    },
}

/// Loaded journal contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalFile {
    /// Closed trades, in file order.
    pub trades: Vec<TradeRecord>,
    /// Strategies, in file order.
    pub strategies: Vec<StrategyRecord>,
}

#[derive(Debug, Deserialize)]
struct RawJournal {
    #[serde(default)]
    trades: Vec<TradeRecord>,
    #[serde(default)]
    executions: Vec<TradeExecution>,
    #[serde(default)]
    strategies: Vec<StrategyRecord>,
}

/// Parse a journal export from a JSON string.
pub fn parse_journal(json: &str) -> Result<JournalFile, JournalError> {
    let value: Value = serde_json::from_str(json)?;

    if value.is_array() {
        let trades: Vec<TradeRecord> = serde_json::from_value(value)?;
        return Ok(JournalFile {
            trades,
            strategies: Vec::new(),
        });
    }

    let raw: RawJournal = serde_json::from_value(value)?;
    let mut trades = raw.trades;
    trades.reserve(raw.executions.len());
    for (index, execution) in raw.executions.iter().enumerate() {
        let record = execution
            .to_record()
            .map_err(|source| JournalError::InvalidExecution { index, source })?;
        trades.push(record);
    }

    Ok(JournalFile {
        trades,
        strategies: raw.strategies,
    })
}

/// Read and parse a journal export from disk.
pub fn load_journal(path: impl AsRef<Path>) -> Result<JournalFile, JournalError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| JournalError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let journal = parse_journal(&contents)?;
    info!(
        path = %path.display(),
        trades = journal.trades.len(),
        strategies = journal.strategies.len(),
        "loaded journal"
    );
    Ok(journal)
}
