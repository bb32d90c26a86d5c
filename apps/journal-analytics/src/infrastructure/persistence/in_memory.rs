//! In-memory strategy performance repository.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::application::ports::{RepositoryError, StrategyPerformanceRepository};
use crate::domain::StrategyPerformance;

/// In-memory implementation of `StrategyPerformanceRepository`.
///
/// Backs the batch binary and tests.
#[derive(Debug, Default)]
pub struct InMemoryStrategyPerformanceRepository {
    snapshots: RwLock<HashMap<String, StrategyPerformance>>,
}

impl InMemoryStrategyPerformanceRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no snapshot has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl StrategyPerformanceRepository for InMemoryStrategyPerformanceRepository {
    async fn save_performance(
        &self,
        strategy_id: &str,
        performance: &StrategyPerformance,
    ) -> Result<(), RepositoryError> {
        let mut snapshots = self
            .snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        snapshots.insert(strategy_id.to_string(), performance.clone());
        drop(snapshots);
        Ok(())
    }

    async fn find_performance(
        &self,
        strategy_id: &str,
    ) -> Result<Option<StrategyPerformance>, RepositoryError> {
        let snapshots = self
            .snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(snapshots.get(strategy_id).cloned())
    }
}
