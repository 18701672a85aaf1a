//! Line emissivities summed over transition selections

use crate::error::{Error, Result};
use crate::selection::LineSelection;

use nebtools_atomic::constants::HC;
use nebtools_atomic::Atom;

use nalgebra::DVector;

/// Emissivity of a single upper→lower transition (erg s⁻¹ per ion)
///
/// ε = n_upper · A · hc/λ with λ = 10⁸/(E_upper − E_lower) Å, which reduces
/// to hc times the transition energy in cm⁻¹. Transitions without a
/// radiative decay contribute zero. Indices are zero-based.
pub fn line_emissivity(
    atom: &Atom,
    populations: &DVector<f64>,
    lower: usize,
    upper: usize,
) -> Result<f64> {
    if upper >= populations.len() || upper >= atom.level_count() || lower >= upper {
        return Err(Error::LevelOutOfRange {
            level: upper + 1,
            count: populations.len().min(atom.level_count()),
        });
    }

    let delta_e = atom.levels.energy(upper) - atom.levels.energy(lower);
    Ok(populations[upper] * atom.radiative.a(upper, lower) * HC * delta_e)
}

/// Total emissivity over a selection of transitions
pub fn emissivity_sum(
    atom: &Atom,
    populations: &DVector<f64>,
    selection: &LineSelection,
) -> Result<f64> {
    if selection.is_empty() {
        return Err(Error::EmptySelection);
    }

    selection
        .pairs
        .iter()
        .map(|&(lower, upper)| line_emissivity(atom, populations, lower, upper))
        .sum()
}

/// Ratio of two selection sums, numerator over denominator
///
/// The modeled counterpart of an observed line ratio. A denominator
/// selection with no radiative decay at all is a typed error rather than an
/// infinity.
pub fn emissivity_ratio(
    atom: &Atom,
    populations: &DVector<f64>,
    numerator: &LineSelection,
    denominator: &LineSelection,
) -> Result<f64> {
    let upper_sum = emissivity_sum(atom, populations, numerator)?;
    let lower_sum = emissivity_sum(atom, populations, denominator)?;

    if lower_sum == 0.0 {
        return Err(Error::ZeroDenominator);
    }
    Ok(upper_sum / lower_sum)
}
