//! Recalculate Strategy Performance Use Case
//!
//! Recompute-and-store: run the pure engine over a strategy's trades and
//! write the resulting snapshot through the repository port.

use std::sync::Arc;

use tracing::{debug, info};

use crate::analytics::compute_strategy_performance;
use crate::application::ports::{RepositoryError, StrategyPerformanceRepository};
use crate::domain::{DateField, StrategyPerformance, StrategyRecord, TradeRecord};

/// Use case for refreshing stored strategy performance snapshots.
pub struct RecalculateStrategyPerformanceUseCase<R>
where
    R: StrategyPerformanceRepository,
{
    repository: Arc<R>,
    date_field: DateField,
}

impl<R> RecalculateStrategyPerformanceUseCase<R>
where
    R: StrategyPerformanceRepository,
{
    /// Create a new use case. `date_field` orders trades for the drawdown walk.
    pub const fn new(repository: Arc<R>, date_field: DateField) -> Self {
        Self {
            repository,
            date_field,
        }
    }

    /// Recompute one strategy from its trades and store the snapshot.
    ///
    /// An empty trade list stores the all-zero snapshot.
    pub async fn execute(
        &self,
        strategy_id: &str,
        trades: &[TradeRecord],
    ) -> Result<StrategyPerformance, RepositoryError> {
        let performance = compute_strategy_performance(trades, self.date_field);
        self.repository
            .save_performance(strategy_id, &performance)
            .await?;

        debug!(
            strategy_id,
            total_trades = performance.total_trades,
            total_pnl = %performance.total_pnl,
            "stored strategy performance"
        );

        Ok(performance)
    }

    /// Recompute every strategy, matching trades to strategies by name.
    ///
    /// Returns the strategies with their refreshed snapshots, in input order.
    pub async fn execute_all(
        &self,
        strategies: &[StrategyRecord],
        trades: &[TradeRecord],
    ) -> Result<Vec<StrategyRecord>, RepositoryError> {
        let mut refreshed = Vec::with_capacity(strategies.len());

        for strategy in strategies {
            let own: Vec<TradeRecord> = trades
                .iter()
                .filter(|t| t.strategy_label.as_deref() == Some(strategy.name.as_str()))
                .cloned()
                .collect();

            let performance = self.execute(&strategy.id, &own).await?;
            refreshed.push(StrategyRecord {
                performance,
                ..strategy.clone()
            });
        }

        info!(strategies = refreshed.len(), "recalculated strategy performance");
        Ok(refreshed)
    }
}
