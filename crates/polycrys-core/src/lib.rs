//! # Polycrys Core Library
//!
//! A library for describing nuclear spin-pair geometry and for generating the
//! discrete orientation sets used to average simulated solid-state NMR signals
//! over all crystallite orientations of a powder sample.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict layered architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`Nuclide`,
//!   `MolecularGeometry`, `OrientationSet`, `PairInteraction`), readers for the
//!   fixed input formats (XYZ geometries, nuclide CSV tables, REPULSION angle
//!   matrices), and the shared 3-D rotation mathematics.
//!
//! - **[`powder`]: Orientation Sampling.** Generates the discrete orientation
//!   sets (ZCW, REPULSION, BCR) that approximate a continuous powder average by
//!   a finite sum of single-crystal orientations, dispatched through a single
//!   tagged request type.
//!
//! - **[`interactions`]: Spin-Pair Geometry.** Converts a molecular geometry
//!   and a per-atom nuclide assignment into the complete table of pairwise
//!   dipolar coupling constants and the ZYZ Euler angles relating each pair's
//!   principal interaction frame to the reference frame.
//!
//! All computations are pure, synchronous and bounded: values are derived on
//! demand from explicit inputs, and no global state survives a call. The
//! presentation layers that render these results as interaction tables or
//! orientation previews live outside this crate.

pub mod core;
pub mod interactions;
pub mod powder;
