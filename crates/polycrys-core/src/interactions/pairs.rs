use super::dipolar::{dipole_hz, round2};
use super::error::InteractionError;
use crate::core::io::nuclide_table::NuclideTable;
use crate::core::models::atom::MolecularGeometry;
use crate::core::models::interaction::PairInteraction;
use crate::core::utils::rotation::euler_angles_between;
use itertools::Itertools;
use nalgebra::Vector3;
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Converts a molecular geometry and its per-atom nuclide assignment into
/// the complete table of pairwise dipolar interactions.
///
/// `nuclei[k]` names the isotope occupying the k-th coordinate row; one
/// record is produced for every unordered pair, in the canonical order
/// (1,2), (1,3), ..., (N-1,N) with 1-based atom numbers. Each record carries
/// the coupling from [`dipole_hz`] and the ZYZ Euler angles taking the
/// laboratory z axis onto the internuclear vector `r_j − r_i`, so the output
/// depends only on relative positions, not on the coordinate origin.
/// Couplings and angles are rounded to two decimal places.
///
/// # Errors
///
/// Returns [`InteractionError::GeometryMismatch`] when the assignment length
/// disagrees with the number of coordinate rows,
/// [`InteractionError::NuclideNotFound`] for labels absent from the table,
/// and [`InteractionError::CoincidentSites`] when two atoms share a position.
#[instrument(skip_all, name = "interaction_set_task", fields(sites = geometry.len()))]
pub fn pairwise_interactions(
    geometry: &MolecularGeometry,
    nuclei: &[&str],
    table: &NuclideTable,
) -> Result<Vec<PairInteraction>, InteractionError> {
    if geometry.len() != nuclei.len() {
        return Err(InteractionError::GeometryMismatch {
            sites: geometry.len(),
            assigned: nuclei.len(),
        });
    }

    let index_pairs: Vec<(usize, usize)> = (0..geometry.len()).tuple_combinations().collect();
    let build = |&(i, j): &(usize, usize)| pair_record(geometry, nuclei, table, i, j);

    #[cfg(not(feature = "parallel"))]
    let records = index_pairs.iter().map(build).collect::<Result<Vec<_>, _>>()?;

    #[cfg(feature = "parallel")]
    let records = {
        let mut records = index_pairs
            .par_iter()
            .map(build)
            .collect::<Result<Vec<_>, _>>()?;
        // Record order is an observable contract; restore the canonical
        // (i, j) order after the fan-out.
        records.sort_by_key(|record| (record.i, record.j));
        records
    };

    info!("Computed {} pair interaction(s).", records.len());
    Ok(records)
}

fn pair_record(
    geometry: &MolecularGeometry,
    nuclei: &[&str],
    table: &NuclideTable,
    i: usize,
    j: usize,
) -> Result<PairInteraction, InteractionError> {
    let separation: Vector3<f64> =
        geometry.sites()[j].position - geometry.sites()[i].position;
    let distance = separation.norm();
    if distance == 0.0 {
        return Err(InteractionError::CoincidentSites { i: i + 1, j: j + 1 });
    }

    let coupling_hz = dipole_hz(nuclei[i], nuclei[j], distance, table)?;
    let orientation = euler_angles_between(&Vector3::z(), &separation);

    Ok(PairInteraction::new(
        i + 1,
        j + 1,
        coupling_hz,
        round2(orientation.alpha_deg),
        round2(orientation.beta_deg),
        round2(orientation.gamma_deg),
    ))
}
