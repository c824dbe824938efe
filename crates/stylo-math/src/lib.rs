//! Deterministic numeric and statistical helpers.
//!
//! Every helper is total: empty input and zero denominators return `0.0`
//! instead of `NaN` or a panic.

#![forbid(unsafe_code)]

/// Round a floating point value to `decimals` decimal places.
///
/// Rounds the exact binary value, so `15.905` (stored just below the tie)
/// becomes `15.9`. Exact ties go to the even digit.
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    format!("{value:.prec$}", prec = decimals as usize)
        .parse()
        .unwrap_or(value)
}

/// Return a 4-decimal ratio and guard division by zero.
#[must_use]
pub fn safe_ratio(numer: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        round_f64(numer as f64 / denom as f64, 4)
    }
}

/// Arithmetic mean, `0.0` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divides by `n`, not `n - 1`).
#[must_use]
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
#[must_use]
pub fn population_std_dev(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}

/// Population coefficient of variation (`std_dev / mean`).
///
/// Returns `0.0` when the slice is empty or the mean is not positive.
#[must_use]
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    let m = mean(values);
    if m <= 0.0 {
        return 0.0;
    }
    population_std_dev(values) / m
}

/// Convert integer counts into `f64` samples.
#[must_use]
pub fn counts_to_f64(counts: &[usize]) -> Vec<f64> {
    counts.iter().map(|c| *c as f64).collect()
}

/// Linear shortfall below a floor, as a percentage of the floor.
///
/// `0.0` at or above the floor, rising to `100.0` at zero. A non-positive
/// floor never penalizes.
#[must_use]
pub fn shortfall_pct(value: f64, floor: f64) -> f64 {
    if floor <= 0.0 || value >= floor {
        0.0
    } else {
        (floor - value) / floor * 100.0
    }
}

/// Linear excess above a ceiling, as a percentage of the ceiling, capped at `100.0`.
#[must_use]
pub fn excess_pct(value: f64, ceiling: f64) -> f64 {
    if ceiling <= 0.0 || value <= ceiling {
        0.0
    } else {
        ((value - ceiling) / ceiling * 100.0).min(100.0)
    }
}
