use thiserror::Error;

#[derive(Debug, Error)]
pub enum InteractionError {
    #[error("Geometry has {sites} coordinate rows but {assigned} nuclides were assigned")]
    GeometryMismatch { sites: usize, assigned: usize },

    #[error("Nuclide '{label}' not found in the loaded table")]
    NuclideNotFound { label: String },

    #[error("Invalid internuclear distance {distance} Å; expected a positive value")]
    InvalidDistance { distance: f64 },

    #[error("Atoms {i} and {j} occupy the same position, leaving the internuclear axis undefined")]
    CoincidentSites { i: usize, j: usize },
}
