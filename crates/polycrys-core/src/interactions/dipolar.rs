use super::error::InteractionError;
use crate::core::io::nuclide_table::NuclideTable;
use crate::core::models::interaction::PairInteraction;
use crate::core::utils::rotation::EulerAngles;

const PLANCK_CONSTANT: f64 = 6.62607015e-34; // In J·s

/// Computes the point-dipole coupling constant in Hz between two nuclides
/// separated by `distance_angstrom`.
///
/// Gyromagnetic ratios are looked up from `table` (stored as MHz/T) and the
/// result is rounded to two decimal places, the precision carried by the
/// produced interaction records. The sign follows the physical convention:
/// nuclides whose ratios share a sign couple negatively.
///
/// # Errors
///
/// Returns [`InteractionError::NuclideNotFound`] when either label is absent
/// from the table and [`InteractionError::InvalidDistance`] for a distance
/// that is not a positive number.
pub fn dipole_hz(
    nuc1: &str,
    nuc2: &str,
    distance_angstrom: f64,
    table: &NuclideTable,
) -> Result<f64, InteractionError> {
    if distance_angstrom.is_nan() || distance_angstrom <= 0.0 {
        return Err(InteractionError::InvalidDistance {
            distance: distance_angstrom,
        });
    }

    let gamma1 = gamma_hz_per_t(table, nuc1)?;
    let gamma2 = gamma_hz_per_t(table, nuc2)?;
    let distance_m = distance_angstrom * 1e-10;

    let coupling = -1.0e-7 * (gamma1 * gamma2 * PLANCK_CONSTANT) / distance_m.powi(3);
    Ok(round2(coupling))
}

/// Builds an interaction record from a user-entered distance: the coupling
/// comes from [`dipole_hz`], the orientation from the supplied Euler angles.
///
/// This is the tabular distance-entry path; records derived from a full
/// geometry go through [`super::pairwise_interactions`] instead.
pub fn pair_from_distance(
    i: usize,
    j: usize,
    nuc_i: &str,
    nuc_j: &str,
    distance_angstrom: f64,
    orientation: EulerAngles,
    table: &NuclideTable,
) -> Result<PairInteraction, InteractionError> {
    let coupling_hz = dipole_hz(nuc_i, nuc_j, distance_angstrom, table)?;
    Ok(PairInteraction::new(
        i,
        j,
        coupling_hz,
        orientation.alpha_deg,
        orientation.beta_deg,
        orientation.gamma_deg,
    ))
}

fn gamma_hz_per_t(table: &NuclideTable, label: &str) -> Result<f64, InteractionError> {
    table
        .get(label)
        .map(|nuclide| nuclide.gamma_mhz_per_t * 1e6)
        .ok_or_else(|| InteractionError::NuclideNotFound {
            label: label.to_string(),
        })
}

/// Rounds to the two decimal places carried by interaction records, half
/// away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
