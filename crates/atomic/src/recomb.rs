//! Effective recombination coefficient records, one type per fit family
//!
//! The published fits differ in shape: grid tabulations (Storey & Hummer
//! 1995, Porter et al. He I) against analytic polynomial rows (PPB91, the
//! Davey collection). Each family keeps its own record type with its own
//! fields rather than being flattened into one.

use crate::error::{Error, Result};

use nebtools_utils::GridExt;
use serde::{Deserialize, Serialize};

/// Gridded α_eff for a single line (SH95 family)
///
/// Used for the Hβ reference emissivity and for He II lines. Values are
/// effective recombination coefficients in cm³ s⁻¹ on a
/// temperature × density grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AeffGrid {
    /// Temperature axis (K), ascending
    pub temperatures: Vec<f64>,
    /// Density axis (cm⁻³), ascending
    pub densities: Vec<f64>,
    /// `values[it][id]`, α_eff in cm³ s⁻¹
    pub values: Vec<Vec<f64>>,
    /// Wavelength of the line the grid was built for (Å)
    pub wavelength: f64,
}

impl AeffGrid {
    /// Validate axes and grid shape, consuming and returning the record
    pub fn validated(self) -> Result<Self> {
        self.temperatures.try_ascending()?;
        self.densities.try_ascending()?;

        if self.values.len() != self.temperatures.len() {
            return Err(Error::InconsistentPayload {
                name: "grid temperature rows",
                expected: self.temperatures.len(),
                found: self.values.len(),
            });
        }
        for row in &self.values {
            if row.len() != self.densities.len() {
                return Err(Error::InconsistentPayload {
                    name: "grid density columns",
                    expected: self.densities.len(),
                    found: row.len(),
                });
            }
        }
        Ok(self)
    }
}

/// Per-line gridded α_eff for He I (Porter et al.)
///
/// One temperature × density grid per line of the published table. Line
/// indices at the API follow the published 1-based numbering
/// (e.g. 10 → 4471.50 Å).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AeffHeI {
    /// Temperature axis (K), ascending
    pub temperatures: Vec<f64>,
    /// Density axis (cm⁻³), ascending
    pub densities: Vec<f64>,
    /// Published line list (Å), in table order
    pub wavelengths: Vec<f64>,
    /// `values[line][it][id]`, α_eff in cm³ s⁻¹
    pub values: Vec<Vec<Vec<f64>>>,
}

impl AeffHeI {
    /// Validate axes and per-line grid shapes
    pub fn validated(self) -> Result<Self> {
        self.temperatures.try_ascending()?;
        self.densities.try_ascending()?;

        if self.values.len() != self.wavelengths.len() {
            return Err(Error::InconsistentPayload {
                name: "per-line grids",
                expected: self.wavelengths.len(),
                found: self.values.len(),
            });
        }
        for grid in &self.values {
            if grid.len() != self.temperatures.len() {
                return Err(Error::InconsistentPayload {
                    name: "grid temperature rows",
                    expected: self.temperatures.len(),
                    found: grid.len(),
                });
            }
            for row in grid {
                if row.len() != self.densities.len() {
                    return Err(Error::InconsistentPayload {
                        name: "grid density columns",
                        expected: self.densities.len(),
                        found: row.len(),
                    });
                }
            }
        }
        Ok(self)
    }

    /// Number of lines in the published table
    pub fn line_count(&self) -> usize {
        self.wavelengths.len()
    }
}

/// One analytic-fit row (PPB91 and the Davey collection)
///
/// α_eff = 10⁻¹⁴ · a · T₄^f · br · [1 + b(1−T₄) + c(1−T₄)² + d(1−T₄)³]
/// with T₄ = Tₑ/10⁴. Rows that publish no branching ratio default to 1.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RecombLine {
    /// Line wavelength (Å)
    pub wavelength: f64,
    /// Fit amplitude
    pub a: f64,
    /// Linear polynomial coefficient
    pub b: f64,
    /// Quadratic polynomial coefficient
    pub c: f64,
    /// Cubic polynomial coefficient
    pub d: f64,
    /// Temperature exponent
    pub f: f64,
    /// Branching ratio of the row itself
    #[serde(default = "unit_branching")]
    pub br: f64,
}

fn unit_branching() -> f64 {
    1.0
}

/// A single companion branching-ratio entry
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BranchingRatio {
    /// Line wavelength (Å)
    pub wavelength: f64,
    /// Fraction of upper-state decays through this line
    pub br: f64,
}

/// Companion branching-ratio table (N II and O II collection members)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BranchingRatios {
    /// Entries in table order
    pub rows: Vec<BranchingRatio>,
}

impl BranchingRatios {
    /// Branching ratio for a wavelength, matched within `tolerance` Å
    ///
    /// Ties resolve to the smallest stored wavelength, mirroring the row
    /// selection of the fit tables themselves.
    pub fn lookup(&self, wavelength: f64, tolerance: f64) -> Option<f64> {
        self.rows
            .iter()
            .filter(|row| (row.wavelength - wavelength).abs() <= tolerance)
            .min_by(|a, b| a.wavelength.total_cmp(&b.wavelength))
            .map(|row| row.br)
    }
}
