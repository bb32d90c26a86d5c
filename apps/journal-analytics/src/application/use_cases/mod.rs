//! Application Use Cases

mod recalculate_strategy_performance;

pub use recalculate_strategy_performance::RecalculateStrategyPerformanceUseCase;
