//! He I emissivities from the Porter et al. per-line grids

use crate::error::{Error, Result};
use crate::grid::bilinear;

use nebtools_atomic::constants::{ANGSTROM_PER_CM, HC};
use nebtools_atomic::AeffHeI;

/// He I line emissivity at `(te, ne)` (erg cm³ s⁻¹)
///
/// `line` is the 1-based index into the published table (e.g. 10 for the
/// 4471.50 Å line); rows are held zero-based internally. Each line carries
/// its own (T, N) grid, interpolated bilinearly in (log₁₀ T, log₁₀ N) like
/// the SH95 family.
pub fn emiss_he_i(data: &AeffHeI, te: f64, ne: f64, line: usize) -> Result<f64> {
    if !te.is_finite() || te <= 0.0 {
        return Err(Error::InvalidTemperature(te));
    }
    if !ne.is_finite() || ne <= 0.0 {
        return Err(Error::InvalidDensity(ne));
    }

    if line == 0 || line > data.line_count() {
        return Err(Error::LineIndexOutOfRange {
            index: line,
            count: data.line_count(),
        });
    }
    let row = line - 1;

    let log_temps: Vec<f64> = data.temperatures.iter().map(|t| t.log10()).collect();
    let log_dens: Vec<f64> = data.densities.iter().map(|n| n.log10()).collect();

    let aeff = bilinear(
        &log_temps,
        &log_dens,
        &data.values[row],
        te.log10(),
        ne.log10(),
    )?;

    Ok(aeff * HC * ANGSTROM_PER_CM / data.wavelengths[row])
}
