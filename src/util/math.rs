//! Integer helpers for dimension arithmetic.

/// Computes `value * num / den` with truncating division in 64-bit space.
///
/// Returns 0 when `den` is 0. Results larger than `usize::MAX` saturate.
pub(crate) fn mul_div(value: usize, num: usize, den: usize) -> usize {
    if den == 0 {
        return 0;
    }
    let scaled = (value as u64).saturating_mul(num as u64) / den as u64;
    usize::try_from(scaled).unwrap_or(usize::MAX)
}
