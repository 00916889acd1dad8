//! # Core Models Module
//!
//! This module contains the fundamental value types used to describe spin
//! systems and orientation sampling throughout the library.
//!
//! ## Overview
//!
//! All models are plain immutable values: they are computed or loaded on
//! demand, handed between layers by reference, and never mutated in
//! place. None of them owns another; a geometry conversion produces its
//! pair records transiently and does not retain them.
//!
//! ## Key Components
//!
//! - [`nuclide`] - Nuclear isotope constants (spin, gyromagnetic ratio) and the bundled table
//! - [`atom`] - Labelled atomic sites and ordered molecular geometries
//! - [`interaction`] - Pairwise dipolar coupling records with ZYZ Euler angles
//! - [`orientation`] - Discrete (alpha, beta) orientation sets for powder averaging

pub mod atom;
pub mod interaction;
pub mod nuclide;
pub mod orientation;
