//! Level populations and critical densities

use crate::error::{Error, Result};
use crate::rates::{collision_rate_matrix, rate_matrix};

use nebtools_atomic::Atom;

use nalgebra::DVector;

/// Normalized level populations at `(te, ne)`
///
/// Solves the statistical-equilibrium system for Nⱼ/N_ion over the full
/// level ladder. The result sums to one within roundoff and every entry is
/// strictly positive for well-formed atomic data.
///
/// ```rust, no_run
/// # use nebtools_atomic::{read_levels, read_omij, read_aij, Atom};
/// # use nebtools_cel::populations;
/// # let levels = read_levels("data/levels.json", "s", "ii", 5).unwrap();
/// # let omij = read_omij("data/omij.json", "s", "ii").unwrap();
/// # let aij = read_aij("data/aij.json", "s", "ii").unwrap();
/// let atom = Atom::new("s", "ii", levels, omij, aij).unwrap();
///
/// let n = populations(&atom, 10000.0, 1000.0).unwrap();
/// assert!((n.sum() - 1.0).abs() < 1e-10);
/// ```
pub fn populations(atom: &Atom, te: f64, ne: f64) -> Result<DVector<f64>> {
    populations_limited(atom, te, ne, atom.level_count())
}

/// Normalized populations over the lowest `max_levels` levels only
///
/// Restricting the ladder shrinks the linear system, which matters inside
/// the diagnostic search where the solver runs dozens of times. A limit
/// larger than the ladder falls back to the full model.
pub fn populations_limited(
    atom: &Atom,
    te: f64,
    ne: f64,
    max_levels: usize,
) -> Result<DVector<f64>> {
    if !te.is_finite() || te <= 0.0 {
        return Err(Error::InvalidTemperature(te));
    }
    if !ne.is_finite() || ne <= 0.0 {
        return Err(Error::InvalidDensity(ne));
    }

    let count = max_levels.clamp(1, atom.level_count());
    if count == 1 {
        return Ok(DVector::from_element(1, 1.0));
    }

    let matrix = rate_matrix(atom, te, ne, count)?;

    // right-hand side of the substituted system: conservation to 1
    let mut rhs = DVector::zeros(count);
    rhs[0] = 1.0;

    matrix
        .lu()
        .solve(&rhs)
        .ok_or(Error::SingularRateMatrix { te, ne })
}

/// Critical density of every level at `te` (cm⁻³)
///
/// The density at which collisional de-excitation of a level balances its
/// total radiative decay: N_crit = Σ_{i<j} A_ji / Σ_{i≠j} q_ji. The ground
/// level has no decay and is reported as zero.
pub fn critical_densities(atom: &Atom, te: f64) -> Result<Vec<f64>> {
    let collisions = collision_rate_matrix(atom, te)?;
    let count = atom.level_count();

    let mut critical = vec![0.0; count];
    for level in 1..count {
        let radiative: f64 = (0..level).map(|lower| atom.radiative.a(level, lower)).sum();
        let collisional: f64 = (0..count)
            .filter(|&other| other != level)
            .map(|other| collisions[(level, other)])
            .sum();

        if collisional > 0.0 {
            critical[level] = radiative / collisional;
        }
    }
    Ok(critical)
}
