use nalgebra::Point3;

/// Represents a single labelled atomic site in a molecular structure.
///
/// The label carries the element or isotope symbol as written in the
/// coordinate file and is informational only: the nuclide assignment used
/// for coupling computations is supplied separately, so the same geometry
/// can be evaluated for different isotopic labelling.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomSite {
    /// The element or isotope label from the coordinate file (e.g., "H", "C").
    pub label: String,
    /// The 3D coordinates of the site in Angstroms.
    pub position: Point3<f64>,
}

impl AtomSite {
    /// Creates a new `AtomSite` from a label and a Cartesian position.
    pub fn new(label: &str, position: Point3<f64>) -> Self {
        Self {
            label: label.to_string(),
            position,
        }
    }
}

/// An ordered collection of atomic sites read from a coordinate file.
///
/// Site order is significant: the index of a site is its atom number, and
/// all records derived from the geometry report atom numbers 1-based in
/// this order. The collection is never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MolecularGeometry {
    sites: Vec<AtomSite>,
}

impl MolecularGeometry {
    /// Creates a geometry from an ordered list of sites.
    pub fn new(sites: Vec<AtomSite>) -> Self {
        Self { sites }
    }

    /// Returns the sites in file order.
    pub fn sites(&self) -> &[AtomSite] {
        &self.sites
    }

    /// Returns the site at `index` (0-based), if present.
    pub fn site(&self, index: usize) -> Option<&AtomSite> {
        self.sites.get(index)
    }

    /// Returns the number of atomic sites.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Returns `true` if the geometry contains no sites.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_site_stores_label_and_position() {
        let site = AtomSite::new("C", Point3::new(0.3567, -0.0905, 1.0501));
        assert_eq!(site.label, "C");
        assert_eq!(site.position, Point3::new(0.3567, -0.0905, 1.0501));
    }

    #[test]
    fn geometry_preserves_site_order() {
        let geometry = MolecularGeometry::new(vec![
            AtomSite::new("H", Point3::new(0.0, 0.0, 0.0)),
            AtomSite::new("C", Point3::new(1.0, 0.0, 0.0)),
            AtomSite::new("N", Point3::new(0.0, 1.0, 0.0)),
        ]);

        assert_eq!(geometry.len(), 3);
        assert_eq!(geometry.sites()[0].label, "H");
        assert_eq!(geometry.sites()[1].label, "C");
        assert_eq!(geometry.sites()[2].label, "N");
    }

    #[test]
    fn site_returns_none_out_of_range() {
        let geometry = MolecularGeometry::new(vec![AtomSite::new(
            "H",
            Point3::new(0.0, 0.0, 0.0),
        )]);
        assert!(geometry.site(0).is_some());
        assert!(geometry.site(1).is_none());
    }

    #[test]
    fn empty_geometry_reports_empty() {
        let geometry = MolecularGeometry::default();
        assert!(geometry.is_empty());
        assert_eq!(geometry.len(), 0);
    }
}
