//! # Core Module
//!
//! This module provides the fundamental building blocks shared by the
//! orientation generators and the interaction builder: value-type data
//! models, readers for the fixed input formats, and the 3-D rotation
//! mathematics.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Nuclides, atomic sites, orientation sets and interaction records
//! - **File I/O** ([`io`]) - XYZ geometries, the nuclide CSV table, REPULSION angle tables
//! - **Math Utilities** ([`utils`]) - Rodrigues rotations and ZYZ Euler angle extraction
//!
//! Everything here is stateless and synchronous: values are computed on
//! demand from explicit inputs and nothing persists between calls.

pub mod io;
pub mod models;
pub mod utils;
