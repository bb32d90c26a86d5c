//! Journal domain model.
//!
//! - `trade`: closed trade records and the date field selector
//! - `execution`: P&L derivation from execution prices
//! - `strategy`: strategies and their persisted performance snapshot

pub mod errors;
pub mod execution;
pub mod strategy;
pub mod trade;

pub use errors::{ExecutionError, TradeRecordError};
pub use execution::{TradeExecution, TradeSide};
pub use strategy::{StrategyCategory, StrategyPerformance, StrategyRecord};
pub use trade::{DateField, TradeRecord, parse_datetime_text};
