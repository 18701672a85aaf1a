//! Ionic abundances from recombination-line fluxes

use crate::error::{Error, Result};
use crate::fits::{emiss_collection, emiss_ppb91};
use crate::grid::{emiss_hbeta, emiss_he_ii};
use crate::helium::emiss_he_i;

use nebtools_atomic::{AeffGrid, AeffHeI, BranchingRatios, RecombLine};

/// Ionic abundance N(X⁺q)/N(H⁺) from an emissivity pair and a flux
///
/// Fluxes follow the dereddened convention F(Hβ) = 100, so
/// N(X)/N(H⁺) = (ε_Hβ/ε_X)·F/100.
pub fn ionic_abundance(eps_hbeta: f64, eps_line: f64, flux: f64) -> Result<f64> {
    if !flux.is_finite() || flux <= 0.0 {
        return Err(Error::InvalidFlux(flux));
    }
    if eps_line <= 0.0 {
        return Err(Error::ZeroEmissivity);
    }

    Ok(eps_hbeta / eps_line * flux / 100.0)
}

/// He⁺/H⁺ from a He I line flux (Porter et al. grids)
///
/// `line` is the published 1-based line index, e.g. 10 for 4471.50 Å.
pub fn abund_he_i_rl(
    hbeta: &AeffGrid,
    data: &AeffHeI,
    te: f64,
    ne: f64,
    line: usize,
    flux: f64,
) -> Result<f64> {
    let reference = emiss_hbeta(hbeta, te, ne)?;
    let line_eps = emiss_he_i(data, te, ne, line)?;
    ionic_abundance(reference, line_eps, flux)
}

/// He²⁺/H⁺ from a He II line flux (SH95-family grid)
pub fn abund_he_ii_rl(
    hbeta: &AeffGrid,
    grid: &AeffGrid,
    te: f64,
    ne: f64,
    flux: f64,
) -> Result<f64> {
    let reference = emiss_hbeta(hbeta, te, ne)?;
    let line_eps = emiss_he_ii(grid, te, ne)?;
    ionic_abundance(reference, line_eps, flux)
}

/// Ionic abundance from a PPB91 fit line (C III, N III)
pub fn abund_ppb91_rl(
    hbeta: &AeffGrid,
    lines: &[RecombLine],
    te: f64,
    ne: f64,
    wavelength: f64,
    flux: f64,
) -> Result<f64> {
    let reference = emiss_hbeta(hbeta, te, ne)?;
    let line_eps = emiss_ppb91(lines, te, wavelength)?;
    ionic_abundance(reference, line_eps, flux)
}

/// Ionic abundance from a collection fit line (C II, N II, O II, Ne II)
pub fn abund_collection_rl(
    hbeta: &AeffGrid,
    lines: &[RecombLine],
    branching: Option<&BranchingRatios>,
    te: f64,
    ne: f64,
    wavelength: f64,
    flux: f64,
) -> Result<f64> {
    let reference = emiss_hbeta(hbeta, te, ne)?;
    let line_eps = emiss_collection(lines, branching, te, wavelength)?;
    ionic_abundance(reference, line_eps, flux)
}
