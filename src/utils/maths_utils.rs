use argminmax::ArgMinMax;

#[inline]
pub(crate) fn get_max(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    let max_index: usize = vec.argmax();
    Some(vec[max_index])
}

#[inline]
pub(crate) fn get_min(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    let min_index: usize = vec.argmin();
    Some(vec[min_index])
}

/// Percentage drop from `first` to `last`. Positive means the value fell.
/// Returns 0.0 when `first` is zero so a flat-zero series does not produce NaN.
pub(crate) fn fade_pct(first: f64, last: f64) -> f64 {
    if first.abs() <= f64::EPSILON {
        return 0.0;
    }
    (first - last) / first * 100.0
}
