//! Numerical guards shared by the Lorentz operations.

/// Minkowski norms at or below this value are treated as zero.
///
/// Guards the divisions in the logarithm, exponential and transport.
pub const MIN_NORM: f64 = 1e-15;

/// arccosh with its argument clamped to the domain `[1, inf)`.
///
/// `-<a, b>_M` drifts just below 1 for coincident points; those arguments map
/// to distance 0 instead of NaN. NaN input still propagates.
#[inline]
pub fn clamped_arcosh(x: f64) -> f64 {
    if x < 1.0 {
        0.0
    } else {
        x.acosh()
    }
}
