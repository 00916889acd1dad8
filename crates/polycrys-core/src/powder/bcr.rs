use crate::core::models::orientation::OrientationSet;

/// Generates a BCR orientation set, the closed-form equal-area partition of
/// the sphere.
///
/// For k = 0..count-1 the offset index `s = k + 0.5` places one orientation
/// at azimuth `alpha = 360°·s/count` with `cos(beta) = 1 − 2s/count`, so the
/// polar angles are uniform in cos(beta) and every orientation represents an
/// equal area of the spherical surface. Deterministic, closed-form, O(count).
pub fn bcr_sequence(count: usize) -> OrientationSet {
    let n = count as f64;

    let mut alpha = Vec::with_capacity(count);
    let mut beta = Vec::with_capacity(count);
    for k in 0..count {
        let s = k as f64 + 0.5;
        alpha.push(360.0 * s / n);
        beta.push((1.0 - 2.0 * s / n).acos().to_degrees());
    }

    OrientationSet::from_angles(alpha, beta)
}
