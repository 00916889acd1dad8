use super::error::PowderError;
use crate::core::io::repulsion::RepulsionTables;
use crate::core::models::orientation::OrientationSet;

/// Retrieves the precomputed REPULSION orientation set with exactly
/// `count` orientations.
///
/// There is no interpolation between published sets: the requested count
/// must match an entry of the loaded tables exactly. Zero entries are
/// column padding and are dropped; the surviving angles then receive the
/// sign treatment of the published convention, which keeps negative
/// values as they are and shifts every non-negative value by a full turn.
///
/// # Errors
///
/// Returns [`PowderError::OrientationCountNotFound`] when the tables hold
/// no set of the requested size, and [`PowderError::TableInconsistency`]
/// when the alpha and beta columns disagree on how many real entries the
/// set has.
pub fn repulsion_sequence(
    tables: &RepulsionTables,
    count: usize,
) -> Result<OrientationSet, PowderError> {
    let (alpha_raw, beta_raw) = tables
        .column(count)
        .ok_or(PowderError::OrientationCountNotFound { count })?;

    let alpha: Vec<f64> = alpha_raw
        .into_iter()
        .filter(|&a| a != 0.0)
        .map(shift_non_negative)
        .collect();
    let beta: Vec<f64> = beta_raw
        .into_iter()
        .filter(|&b| b != 0.0)
        .map(shift_non_negative)
        .collect();

    if alpha.len() != beta.len() {
        return Err(PowderError::TableInconsistency(format!(
            "set {} has {} alpha but {} beta entries after dropping padding",
            count,
            alpha.len(),
            beta.len()
        )));
    }

    Ok(OrientationSet::from_angles(alpha, beta))
}

fn shift_non_negative(angle: f64) -> f64 {
    if angle < 0.0 { angle } else { 360.0 + angle }
}
