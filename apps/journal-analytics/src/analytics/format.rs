//! Display rounding and formatting. The engine itself never rounds.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round for display, halves away from zero.
#[must_use]
pub fn round_display(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a value already expressed in percent, e.g. `66.67%`.
#[must_use]
pub fn format_pct(value: Decimal) -> String {
    format!("{:.2}%", round_display(value, 2))
}

/// Format a money amount with 2 decimal places.
#[must_use]
pub fn format_money(value: Decimal) -> String {
    format!("{:.2}", round_display(value, 2))
}
