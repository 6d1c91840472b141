//! Percentile resolution with linear interpolation between order
//! statistics.

/// Compute the `rank`-th percentile (0-100) of `values`.
///
/// Uses linear interpolation between order statistics: for n values
/// sorted ascending, the rank maps to index `rank/100 * (n-1)` and the
/// result interpolates between the two surrounding values. P50 of
/// `[10, 20, 30, 40, 50]` is exactly 30.
///
/// Returns `None` for an empty population or a rank outside [0, 100] —
/// callers treat that as a fail-closed condition, not an error.
pub fn percentile(values: &[f64], rank: f64) -> Option<f64> {
    if values.is_empty() || !rank.is_finite() || !(0.0..=100.0).contains(&rank) {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let position = rank / 100.0 * (sorted.len() - 1) as f64;
    let lo = position.floor() as usize;
    let hi = position.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }

    let fraction = position - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * fraction)
}
