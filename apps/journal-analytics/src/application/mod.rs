//! Application layer: ports, use cases and dashboard assembly.

pub mod dashboard;
pub mod ports;
pub mod use_cases;

pub use dashboard::{DashboardOverview, DashboardService, PerformanceReport};
