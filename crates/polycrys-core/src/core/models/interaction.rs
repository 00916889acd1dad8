use serde::Serialize;

/// A single pairwise dipolar interaction record.
///
/// Atom numbers are 1-based and canonically ordered (`i < j`). The Euler
/// angles relate the pair's principal interaction frame to the reference
/// frame in the ZYZ convention. Records are immutable values: they are
/// produced once by the geometry conversion (or entered directly) and
/// handed to presentation layers for rendering, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairInteraction {
    /// 1-based number of the first nucleus of the pair.
    pub i: usize,
    /// 1-based number of the second nucleus of the pair (`j > i`).
    pub j: usize,
    /// Dipolar coupling constant in Hz.
    pub coupling_hz: f64,
    /// First ZYZ Euler angle in degrees.
    pub alpha_deg: f64,
    /// Second ZYZ Euler angle in degrees.
    pub beta_deg: f64,
    /// Third ZYZ Euler angle in degrees.
    pub gamma_deg: f64,
}

impl PairInteraction {
    /// Creates a record from an already-known coupling and orientation,
    /// the direct-entry path of interactive use.
    pub fn new(
        i: usize,
        j: usize,
        coupling_hz: f64,
        alpha_deg: f64,
        beta_deg: f64,
        gamma_deg: f64,
    ) -> Self {
        Self {
            i,
            j,
            coupling_hz,
            alpha_deg,
            beta_deg,
            gamma_deg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_stores_all_fields() {
        let record = PairInteraction::new(1, 2, -8950.88, 10.0, 20.0, 30.0);
        assert_eq!(record.i, 1);
        assert_eq!(record.j, 2);
        assert_eq!(record.coupling_hz, -8950.88);
        assert_eq!(record.alpha_deg, 10.0);
        assert_eq!(record.beta_deg, 20.0);
        assert_eq!(record.gamma_deg, 30.0);
    }

    #[test]
    fn records_compare_by_value() {
        let a = PairInteraction::new(1, 2, -100.0, 0.0, 90.0, 0.0);
        let b = PairInteraction::new(1, 2, -100.0, 0.0, 90.0, 0.0);
        let c = PairInteraction::new(1, 3, -100.0, 0.0, 90.0, 0.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
