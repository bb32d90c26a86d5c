//! Constants for performance aggregation.

use rust_decimal::Decimal;

pub const TWO: Decimal = Decimal::TWO;
pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;
pub const TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 7); // 0.0000001

/// Bucket name for trades without a strategy.
pub const NO_STRATEGY: &str = "No Strategy";

/// Monthly breakdowns are always dense.
pub const MONTHS_PER_YEAR: usize = 12;
