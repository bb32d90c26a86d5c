//! Strategy Performance Repository Port (Driven Port)
//!
//! Storage for the performance snapshot kept on each strategy. The
//! aggregation engine is stateless; snapshots are written only through
//! this port, after an explicit recalculation.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::StrategyPerformance;

/// Errors from snapshot storage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store failed.
    #[error("Storage error: {message}")]
    Storage {
        /// Error message.
        message: String,
    },
}

/// Port for persisting strategy performance snapshots.
#[async_trait]
pub trait StrategyPerformanceRepository: Send + Sync {
    /// Replace the stored snapshot for a strategy.
    async fn save_performance(
        &self,
        strategy_id: &str,
        performance: &StrategyPerformance,
    ) -> Result<(), RepositoryError>;

    /// Load the stored snapshot, if any.
    async fn find_performance(
        &self,
        strategy_id: &str,
    ) -> Result<Option<StrategyPerformance>, RepositoryError>;
}
