use super::error::PowderError;
use crate::core::models::orientation::OrientationSet;

// Fibonacci step g(M-2) approximated as N/phi^2, with the golden ratio
// squared truncated to the value the published sequences were built with.
const PHI_SQUARED: f64 = 2.618;

/// Generates a ZCW (Zaremba-Conroy-Wolfsberg) quasi-random orientation set.
///
/// The variant selects the angular range covered: `1` samples the full
/// sphere, `0.5` one hemisphere, and `0.25` one quadrant of azimuth over a
/// hemisphere. Exactly `count` orientations are produced, deterministic
/// for a given `(count, variant)`.
///
/// # Errors
///
/// Returns [`PowderError::UnsupportedVariant`] for any variant outside
/// {1, 0.5, 0.25}.
pub fn zcw_sequence(count: usize, variant: f64) -> Result<OrientationSet, PowderError> {
    let c: [f64; 3] = if variant == 1.0 {
        [1.0, 2.0, 1.0]
    } else if variant == 0.5 {
        [-1.0, 1.0, 1.0]
    } else if variant == 0.25 {
        [-1.0, 1.0, 4.0]
    } else {
        return Err(PowderError::UnsupportedVariant { variant });
    };

    let n = count as f64;
    let g2 = (n / PHI_SQUARED).floor();

    let mut alpha = Vec::with_capacity(count);
    let mut beta = Vec::with_capacity(count);
    for m in 1..=count {
        let m = m as f64;
        beta.push((c[0] * (c[1] * ((m / n) % 1.0) - 1.0)).acos().to_degrees());
        alpha.push(360.0 * ((m * g2 / n) % 1.0) / c[2]);
    }

    Ok(OrientationSet::from_angles(alpha, beta))
}
