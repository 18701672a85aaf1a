//! Analytic effective recombination coefficient fits
//!
//! The PPB91 (Pequignot, Petitjean & Boisson 1991) polynomial form, shared
//! by the Davey et al. collection:
//!
//! α_eff = 10⁻¹⁴ · a · T₄^f · br · [1 + b(1−T₄) + c(1−T₄)² + d(1−T₄)³]
//!
//! with T₄ = Tₑ/10⁴ K. Rows are selected by wavelength.

use crate::error::{Error, Result};

use nebtools_atomic::constants::{ANGSTROM_PER_CM, HC};
use nebtools_atomic::{BranchingRatios, RecombLine};

use log::warn;

/// Wavelength match window for fit-row selection (Å)
const WAVELENGTH_TOLERANCE: f64 = 0.01;

/// Fit row whose wavelength matches within the tolerance
///
/// When several rows of a close multiplet fall inside the window, the row
/// of smallest stored wavelength wins.
fn match_line(lines: &[RecombLine], wavelength: f64) -> Result<&RecombLine> {
    lines
        .iter()
        .filter(|line| (line.wavelength - wavelength).abs() <= WAVELENGTH_TOLERANCE)
        .min_by(|a, b| a.wavelength.total_cmp(&b.wavelength))
        .ok_or(Error::NoWavelengthMatch {
            wavelength,
            tolerance: WAVELENGTH_TOLERANCE,
        })
}

/// The PPB91 polynomial at `te` with an explicit branching ratio
fn alpha_eff(line: &RecombLine, te: f64, branching: f64) -> f64 {
    let t4 = te / 1.0e4;
    let polynomial = 1.0
        + line.b * (1.0 - t4)
        + line.c * (1.0 - t4).powi(2)
        + line.d * (1.0 - t4).powi(3);

    1.0e-14 * line.a * t4.powf(line.f) * branching * polynomial
}

/// PPB91 line emissivity at `te` (erg cm³ s⁻¹), for C III and N III
///
/// ```rust, no_run
/// # use nebtools_atomic::read_aeff_ppb91;
/// # use nebtools_rl::emiss_ppb91;
/// let lines = read_aeff_ppb91("data/aeff_ppb91.json", "c", "iii").unwrap();
/// let eps = emiss_ppb91(&lines, 10000.0, 4647.42).unwrap();
/// ```
pub fn emiss_ppb91(lines: &[RecombLine], te: f64, wavelength: f64) -> Result<f64> {
    if !te.is_finite() || te <= 0.0 {
        return Err(Error::InvalidTemperature(te));
    }

    let line = match_line(lines, wavelength)?;
    let aeff = alpha_eff(line, te, line.br);
    Ok(aeff * HC * ANGSTROM_PER_CM / line.wavelength)
}

/// Collection line emissivity at `te` (erg cm³ s⁻¹)
///
/// Covers the Davey et al. C II fits and the N II / O II / Ne II members of
/// the collection. Where a companion branching-ratio table is supplied
/// (N II, O II) the matched row's ratio multiplies the fit; a row missing
/// from the companion table falls back to unity with a warning.
pub fn emiss_collection(
    lines: &[RecombLine],
    branching: Option<&BranchingRatios>,
    te: f64,
    wavelength: f64,
) -> Result<f64> {
    if !te.is_finite() || te <= 0.0 {
        return Err(Error::InvalidTemperature(te));
    }

    let line = match_line(lines, wavelength)?;

    let companion = match branching {
        Some(table) => table
            .lookup(line.wavelength, WAVELENGTH_TOLERANCE)
            .unwrap_or_else(|| {
                warn!("no branching ratio tabulated at {} Å", line.wavelength);
                1.0
            }),
        None => 1.0,
    };

    let aeff = alpha_eff(line, te, line.br * companion);
    Ok(aeff * HC * ANGSTROM_PER_CM / line.wavelength)
}
