//! # Interactions Module
//!
//! This module turns molecular/geometric input into the pairwise dipolar
//! interaction records a spin-system description is built from.
//!
//! ## Overview
//!
//! Two entry granularities are provided:
//!
//! - **Single couplings** ([`dipolar`]) - The point-dipole formula for one
//!   nuclide pair at a known distance, plus the record constructor for the
//!   tabular distance-entry path
//! - **Full geometries** ([`pairs`]) - Conversion of a coordinate table and
//!   per-atom nuclide assignment into the complete, canonically ordered set
//!   of [`PairInteraction`](crate::core::models::interaction::PairInteraction)
//!   records
//!
//! Couplings come from the nuclide table's gyromagnetic ratios; orientations
//! from the ZYZ Euler angles taking the laboratory z axis onto each
//! internuclear vector. All failures are reported as typed
//! [`InteractionError`] values naming the offending labels or indices.

pub mod dipolar;
pub mod error;
pub mod pairs;

pub use dipolar::{dipole_hz, pair_from_distance};
pub use error::InteractionError;
pub use pairs::pairwise_interactions;
