//! Provides shared mathematical utilities for the library.
//!
//! Currently this covers 3-D rotation construction and ZYZ Euler angle
//! extraction, the geometric vocabulary shared by the orientation
//! generators and the interaction builder.

pub mod rotation;
