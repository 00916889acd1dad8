//! # Powder Module
//!
//! This module generates the discrete orientation sets used to approximate a
//! powder average (the integral of an NMR observable over all crystallite
//! orientations) by a finite sum of single-crystal orientations.
//!
//! ## Overview
//!
//! Three families of sampling schemes are provided, each with different
//! coverage and convergence characteristics:
//!
//! - **ZCW** ([`zcw`]) - Closed-form quasi-random (Zaremba/Conroy-type) sequences
//!   for any orientation count, over the full sphere or fractions of it
//! - **REPULSION** ([`repulsion`]) - Precomputed repulsion-optimized sets looked
//!   up from external tables by exact orientation count
//! - **BCR** ([`bcr`]) - Analytic equal-area partition of the sphere, uniform in
//!   cos(beta)
//!
//! Callers resolve user input into a [`PowderScheme`] request once and hand it
//! to [`generate`]; the schemes share the (alpha, beta) vocabulary of
//! [`OrientationSet`] and assume uniform quadrature weights.

pub mod bcr;
pub mod error;
pub mod repulsion;
pub mod zcw;

pub use bcr::bcr_sequence;
pub use error::PowderError;
pub use repulsion::repulsion_sequence;
pub use zcw::zcw_sequence;

use crate::core::io::repulsion::RepulsionTables;
use crate::core::models::orientation::OrientationSet;
use tracing::{debug, info, instrument};

/// A resolved orientation-sampling request.
///
/// Presentation layers parse whatever the user typed (scheme names, combined
/// label+count strings) into this tagged form exactly once; the generators
/// never dispatch on strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PowderScheme {
    /// Quasi-random ZCW sequence; `variant` selects the angular range
    /// covered (1 = sphere, 0.5 = hemisphere, 0.25 = quadrant).
    Zcw { count: usize, variant: f64 },
    /// Repulsion-optimized set retrieved from loaded tables by exact count.
    Repulsion { count: usize },
    /// Equal-area BCR partition.
    Bcr { count: usize },
}

impl PowderScheme {
    /// Returns the requested orientation count.
    pub fn count(&self) -> usize {
        match *self {
            PowderScheme::Zcw { count, .. }
            | PowderScheme::Repulsion { count }
            | PowderScheme::Bcr { count } => count,
        }
    }
}

/// Generates the orientation set described by `scheme`.
///
/// `tables` is only consulted for [`PowderScheme::Repulsion`]; the other
/// schemes are closed-form and ignore it.
///
/// # Errors
///
/// Returns [`PowderError::UnsupportedVariant`] for a ZCW variant outside
/// {1, 0.5, 0.25}, [`PowderError::RepulsionTablesNotLoaded`] when a REPULSION
/// request arrives without tables, and [`PowderError::OrientationCountNotFound`]
/// when the tables hold no set of the requested size.
#[instrument(skip(tables), name = "powder_generation")]
pub fn generate(
    scheme: PowderScheme,
    tables: Option<&RepulsionTables>,
) -> Result<OrientationSet, PowderError> {
    debug!("Resolving orientation request: {:?}", scheme);

    let set = match scheme {
        PowderScheme::Zcw { count, variant } => zcw_sequence(count, variant)?,
        PowderScheme::Repulsion { count } => {
            let tables = tables.ok_or(PowderError::RepulsionTablesNotLoaded)?;
            repulsion_sequence(tables, count)?
        }
        PowderScheme::Bcr { count } => bcr_sequence(count),
    };

    info!("Generated {} orientation(s).", set.len());
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::repulsion::RepulsionTables;

    fn sample_tables() -> RepulsionTables {
        RepulsionTables::from_parts(
            vec![2.0],
            vec![vec![-12.3], vec![45.6], vec![0.0]],
            vec![vec![30.0], vec![-40.0], vec![0.0]],
        )
        .unwrap()
    }

    #[test]
    fn scheme_reports_its_requested_count() {
        assert_eq!(
            PowderScheme::Zcw {
                count: 615,
                variant: 1.0
            }
            .count(),
            615
        );
        assert_eq!(PowderScheme::Repulsion { count: 144 }.count(), 144);
        assert_eq!(PowderScheme::Bcr { count: 40 }.count(), 40);
    }

    #[test]
    fn generate_dispatches_to_the_zcw_sequence() {
        let scheme = PowderScheme::Zcw {
            count: 20,
            variant: 1.0,
        };
        let set = generate(scheme, None).unwrap();
        assert_eq!(set, zcw_sequence(20, 1.0).unwrap());
    }

    #[test]
    fn generate_dispatches_to_the_bcr_sequence() {
        let set = generate(PowderScheme::Bcr { count: 10 }, None).unwrap();
        assert_eq!(set, bcr_sequence(10));
    }

    #[test]
    fn generate_uses_loaded_tables_for_repulsion() {
        let tables = sample_tables();
        let set = generate(PowderScheme::Repulsion { count: 2 }, Some(&tables)).unwrap();
        assert_eq!(set, repulsion_sequence(&tables, 2).unwrap());
    }

    #[test]
    fn repulsion_without_tables_is_an_error() {
        let result = generate(PowderScheme::Repulsion { count: 2 }, None);
        assert!(matches!(result, Err(PowderError::RepulsionTablesNotLoaded)));
    }

    #[test]
    fn unsupported_zcw_variant_propagates() {
        let scheme = PowderScheme::Zcw {
            count: 100,
            variant: 2.0,
        };
        assert!(matches!(
            generate(scheme, None),
            Err(PowderError::UnsupportedVariant { .. })
        ));
    }
}
