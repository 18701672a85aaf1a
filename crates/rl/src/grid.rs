//! Gridded recombination coefficients (SH95 family)
//!
//! The Storey & Hummer tabulations cover a temperature × density grid per
//! line. Emissivities interpolate α_eff bilinearly in (log₁₀ T, log₁₀ N)
//! and convert with the photon energy, ε = α_eff·hc/λ.

use crate::error::{Error, Result};

use nebtools_atomic::constants::{ANGSTROM_PER_CM, HC};
use nebtools_atomic::AeffGrid;

use nebtools_utils::GridExt;

/// Bilinear interpolation on two tabulated axes
///
/// Out-of-range queries extrapolate linearly from the edge intervals, in
/// keeping with the silent-extrapolation convention of the Ω interpolator.
pub(crate) fn bilinear(
    x_axis: &[f64],
    y_axis: &[f64],
    values: &[Vec<f64>],
    x: f64,
    y: f64,
) -> Result<f64> {
    let i = x_axis.lookup_interval(x)?;
    let j = y_axis.lookup_interval(y)?;

    let tx = (x - x_axis[i]) / (x_axis[i + 1] - x_axis[i]);
    let ty = (y - y_axis[j]) / (y_axis[j + 1] - y_axis[j]);

    Ok((1.0 - tx) * (1.0 - ty) * values[i][j]
        + tx * (1.0 - ty) * values[i + 1][j]
        + (1.0 - tx) * ty * values[i][j + 1]
        + tx * ty * values[i + 1][j + 1])
}

/// α_eff from an SH95-family grid at `(te, ne)` (cm³ s⁻¹)
pub(crate) fn grid_aeff(grid: &AeffGrid, te: f64, ne: f64) -> Result<f64> {
    if !te.is_finite() || te <= 0.0 {
        return Err(Error::InvalidTemperature(te));
    }
    if !ne.is_finite() || ne <= 0.0 {
        return Err(Error::InvalidDensity(ne));
    }

    let log_temps: Vec<f64> = grid.temperatures.iter().map(|t| t.log10()).collect();
    let log_dens: Vec<f64> = grid.densities.iter().map(|n| n.log10()).collect();

    bilinear(&log_temps, &log_dens, &grid.values, te.log10(), ne.log10())
}

/// Hβ reference emissivity at `(te, ne)` (erg cm³ s⁻¹)
///
/// Anchors every recombination-line abundance: fluxes are conventionally
/// normalized to F(Hβ) = 100, so the quotient of this emissivity with a
/// line's own converts flux straight to an ionic abundance.
///
/// ```rust, no_run
/// # use nebtools_atomic::read_aeff_sh95;
/// # use nebtools_rl::emiss_hbeta;
/// let grid = read_aeff_sh95("data/aeff_sh95.json", "h", "i").unwrap();
/// let eps = emiss_hbeta(&grid, 10000.0, 5000.0).unwrap();
/// ```
pub fn emiss_hbeta(grid: &AeffGrid, te: f64, ne: f64) -> Result<f64> {
    let aeff = grid_aeff(grid, te, ne)?;
    Ok(aeff * HC * ANGSTROM_PER_CM / grid.wavelength)
}

/// He II line emissivity at `(te, ne)` (erg cm³ s⁻¹)
///
/// Same grid family and interpolation as the Hβ reference, evaluated on the
/// He II tabulation (conventionally the 4686 Å line).
pub fn emiss_he_ii(grid: &AeffGrid, te: f64, ne: f64) -> Result<f64> {
    let aeff = grid_aeff(grid, te, ne)?;
    Ok(aeff * HC * ANGSTROM_PER_CM / grid.wavelength)
}
