use phf::{Map, phf_map};

/// Represents the NMR-relevant constants of a single nuclear isotope.
///
/// This struct holds the two quantities every coupling and frequency
/// computation in the library needs: the nuclear spin quantum number and
/// the gyromagnetic ratio. Values are immutable once loaded; the core
/// only ever reads them through a [`crate::core::io::nuclide_table::NuclideTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nuclide {
    /// The nuclear spin quantum number (e.g., 0.5 for 1H, 1.0 for 2H).
    pub spin: f64,
    /// The gyromagnetic ratio γ/2π in MHz/T (negative for nuclei with
    /// magnetic moment antiparallel to spin, e.g. 15N, 29Si).
    pub gamma_mhz_per_t: f64,
}

impl Nuclide {
    /// Creates a new `Nuclide` from its spin and gyromagnetic ratio.
    ///
    /// # Arguments
    ///
    /// * `spin` - The nuclear spin quantum number.
    /// * `gamma_mhz_per_t` - The gyromagnetic ratio γ/2π in MHz/T.
    pub fn new(spin: f64, gamma_mhz_per_t: f64) -> Self {
        Self {
            spin,
            gamma_mhz_per_t,
        }
    }

    /// Returns `true` if this isotope carries an electric quadrupole
    /// moment, i.e. its spin exceeds 1/2.
    ///
    /// Presentation layers use this to decide whether quadrupolar
    /// interaction parameters apply to a chosen spin system.
    pub fn is_quadrupolar(&self) -> bool {
        self.spin > 0.5
    }
}

/// The bundled nuclide frequency table, keyed by isotope label.
///
/// Covers the common solid-state NMR nuclei; user-supplied CSV tables
/// loaded at runtime take precedence when provided. Gyromagnetic ratios
/// are γ/2π in MHz/T.
pub static BUILTIN_NUCLIDES: Map<&'static str, Nuclide> = phf_map! {
    "1H" => Nuclide { spin: 0.5, gamma_mhz_per_t: 42.577 },
    "2H" => Nuclide { spin: 1.0, gamma_mhz_per_t: 6.536 },
    "7Li" => Nuclide { spin: 1.5, gamma_mhz_per_t: 16.546 },
    "11B" => Nuclide { spin: 1.5, gamma_mhz_per_t: 13.663 },
    "13C" => Nuclide { spin: 0.5, gamma_mhz_per_t: 10.708 },
    "14N" => Nuclide { spin: 1.0, gamma_mhz_per_t: 3.077 },
    "15N" => Nuclide { spin: 0.5, gamma_mhz_per_t: -4.316 },
    "17O" => Nuclide { spin: 2.5, gamma_mhz_per_t: -5.772 },
    "19F" => Nuclide { spin: 0.5, gamma_mhz_per_t: 40.078 },
    "23Na" => Nuclide { spin: 1.5, gamma_mhz_per_t: 11.262 },
    "27Al" => Nuclide { spin: 2.5, gamma_mhz_per_t: 11.103 },
    "29Si" => Nuclide { spin: 0.5, gamma_mhz_per_t: -8.465 },
    "31P" => Nuclide { spin: 0.5, gamma_mhz_per_t: 17.235 },
    "35Cl" => Nuclide { spin: 1.5, gamma_mhz_per_t: 4.176 },
    "51V" => Nuclide { spin: 3.5, gamma_mhz_per_t: 11.213 },
    "71Ga" => Nuclide { spin: 1.5, gamma_mhz_per_t: 13.021 },
    "77Se" => Nuclide { spin: 0.5, gamma_mhz_per_t: 8.157 },
    "119Sn" => Nuclide { spin: 0.5, gamma_mhz_per_t: -15.966 },
    "195Pt" => Nuclide { spin: 0.5, gamma_mhz_per_t: 9.153 },
    "207Pb" => Nuclide { spin: 0.5, gamma_mhz_per_t: 8.882 },
};
