use nalgebra::Vector3;

/// A discrete set of crystallite orientations used to approximate a
/// powder average by a finite sum.
///
/// Orientations are stored as two parallel arrays of (alpha, beta) Euler
/// angles in degrees; no third angle is produced by the generators (gamma
/// averaging is supplied separately by the consumer). The ZCW and BCR
/// generators emit beta in [0°, 180°] and alpha in [0°, 360°); REPULSION
/// sets keep the sign convention of the published tables (see
/// [`crate::powder::repulsion_sequence`]), so no range is enforced here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrientationSet {
    alpha_deg: Vec<f64>,
    beta_deg: Vec<f64>,
}

impl OrientationSet {
    /// Creates an orientation set from parallel alpha and beta arrays.
    ///
    /// # Panics
    ///
    /// Panics if the arrays differ in length.
    pub fn from_angles(alpha_deg: Vec<f64>, beta_deg: Vec<f64>) -> Self {
        assert_eq!(
            alpha_deg.len(),
            beta_deg.len(),
            "alpha and beta arrays must have equal length"
        );
        Self {
            alpha_deg,
            beta_deg,
        }
    }

    /// Returns the number of orientations in the set.
    pub fn len(&self) -> usize {
        self.alpha_deg.len()
    }

    /// Returns `true` if the set contains no orientations.
    pub fn is_empty(&self) -> bool {
        self.alpha_deg.is_empty()
    }

    /// Returns the alpha angles in degrees, in generation order.
    pub fn alpha_deg(&self) -> &[f64] {
        &self.alpha_deg
    }

    /// Returns the beta angles in degrees, in generation order.
    pub fn beta_deg(&self) -> &[f64] {
        &self.beta_deg
    }

    /// Iterates over the (alpha, beta) pairs in generation order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.alpha_deg
            .iter()
            .copied()
            .zip(self.beta_deg.iter().copied())
    }

    /// Converts each orientation to a Cartesian unit vector, treating beta
    /// as the polar angle from +z and alpha as the azimuth.
    ///
    /// This is the spherical-to-Cartesian mapping used by 3-D scatter
    /// previews of a sampling scheme.
    pub fn unit_vectors(&self) -> Vec<Vector3<f64>> {
        self.iter()
            .map(|(alpha, beta)| {
                let (sin_b, cos_b) = beta.to_radians().sin_cos();
                let (sin_a, cos_a) = alpha.to_radians().sin_cos();
                Vector3::new(sin_b * cos_a, sin_b * sin_a, cos_b)
            })
            .collect()
    }
}
