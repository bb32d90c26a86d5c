//! Decimal arithmetic that cannot panic.
//!
//! Sums and differences saturate at `Decimal::MAX` / `Decimal::MIN`. A ratio
//! with a zero denominator is zero; a ratio too large to represent saturates
//! toward its sign. Statistics whose intermediates overflow are `None`.

use rust_decimal::Decimal;

use super::constants::{TOLERANCE, TWO};

const MAX_SQRT_ITERATIONS: usize = 64;

/// `numerator / denominator`, zero for a zero denominator, clamped on overflow.
pub fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or_else(|| {
        if numerator.is_sign_negative() == denominator.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}

/// Saturating sum of a series.
pub fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Mean and sample standard deviation (n - 1) of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleMoments {
    pub mean: Decimal,
    pub std_dev: Decimal,
}

/// Mean and sample standard deviation.
///
/// `None` below two values or when an intermediate overflows.
pub fn sample_moments(values: &[Decimal]) -> Option<SampleMoments> {
    if values.len() < 2 {
        return None;
    }

    let n = Decimal::from(values.len() as u64);
    let total = values
        .iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(*value))?;
    let mean = total.checked_div(n)?;
    let squared_deviations = values.iter().try_fold(Decimal::ZERO, |acc, value| {
        let deviation = value.checked_sub(mean)?;
        acc.checked_add(deviation.checked_mul(deviation)?)
    })?;
    let std_dev = sqrt_decimal(squared_deviations.checked_div(n - Decimal::ONE)?)?;

    Some(SampleMoments { mean, std_dev })
}

/// Square root by Newton's method, `None` for negative input.
pub fn sqrt_decimal(value: Decimal) -> Option<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return None;
    }
    if value.is_zero() {
        return Some(Decimal::ZERO);
    }

    let mut estimate = if value > Decimal::ONE { value / TWO } else { Decimal::ONE };
    for _ in 0..MAX_SQRT_ITERATIONS {
        let refined = estimate.checked_add(value.checked_div(estimate)?)? / TWO;
        let converged = (refined - estimate).abs() < TOLERANCE;
        estimate = refined;
        if converged {
            break;
        }
    }
    Some(estimate)
}
