//! Provides input functionality for the fixed file formats the library
//! consumes.
//!
//! Three read-only inputs exist: XYZ coordinate tables for molecular
//! geometries, the CSV nuclide frequency table, and the whitespace
//! matrices holding the precomputed REPULSION orientation sets. Each
//! reader returns typed errors carrying the offending path and line so
//! presentation layers can report precise messages.

pub mod nuclide_table;
pub mod repulsion;
pub mod xyz;
