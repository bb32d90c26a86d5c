//! Application Ports (Driven)
//!
//! Interfaces the application uses to reach external systems.

mod strategy_performance_repository;

pub use strategy_performance_repository::{RepositoryError, StrategyPerformanceRepository};
