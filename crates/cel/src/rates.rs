//! Collisional and radiative rate assembly
//!
//! Builds the statistical-equilibrium system for normalized level
//! populations at a given electron temperature and density. Collision
//! strengths are interpolated at the query temperature, converted to
//! de-excitation rate coefficients, and mirrored upward through detailed
//! balance.

use crate::error::{Error, Result};
use crate::spline::fit_log10;

use nebtools_atomic::constants::{COLLISION_RATE_COEFF, HC_OVER_K};
use nebtools_atomic::Atom;

use log::debug;
use nalgebra::DMatrix;

/// Extrapolation beyond the tabulated axis is silent by contract, but
/// leaves a trace for debugging sessions
fn trace_out_of_range(atom: &Atom, te: f64) {
    let axis = &atom.collisions.temperatures;
    if let (Some(first), Some(last)) = (axis.first(), axis.last()) {
        if te < *first || te > *last {
            debug!("extrapolating collision strengths at {te} K outside [{first}, {last}]");
        }
    }
}

/// Interpolated Ω snapshot at `te`
///
/// Returns the symmetric matrix of collision strengths evaluated at the
/// query temperature; pairs absent from the table stay at zero. With a
/// non-zero `irats` flag the table holds rates rather than strengths, and
/// the snapshot is of those tabulated values.
pub fn effective_omega(atom: &Atom, te: f64) -> Result<DMatrix<f64>> {
    if !te.is_finite() || te <= 0.0 {
        return Err(Error::InvalidTemperature(te));
    }

    trace_out_of_range(atom, te);

    let count = atom.level_count();
    let log_te = te.log10();

    let mut omega = DMatrix::zeros(count, count);
    for transition in &atom.collisions.transitions {
        let spline = fit_log10(&atom.collisions.temperatures, &transition.strengths)?;
        let value = spline.eval(log_te);
        omega[(transition.lower, transition.upper)] = value;
        omega[(transition.upper, transition.lower)] = value;
    }
    Ok(omega)
}

/// Collisional rate coefficients at `te` (cm³ s⁻¹)
///
/// Entry `(from, to)` is the electron-impact rate coefficient for the
/// `from`→`to` transition. De-excitation follows
/// `q = 8.629e-6 Ω / (g √T)` for tabulated collision strengths, or the
/// tabulated rate scaled by `10^irats` otherwise; excitation mirrors it
/// through detailed balance with the Boltzmann factor.
pub fn collision_rate_matrix(atom: &Atom, te: f64) -> Result<DMatrix<f64>> {
    if !te.is_finite() || te <= 0.0 {
        return Err(Error::InvalidTemperature(te));
    }

    trace_out_of_range(atom, te);

    let count = atom.level_count();
    let log_te = te.log10();
    let sqrt_te = te.sqrt();
    let irats = atom.collisions.irats;

    let mut rates = DMatrix::zeros(count, count);
    for transition in &atom.collisions.transitions {
        let lower = transition.lower;
        let upper = transition.upper;

        let spline = fit_log10(&atom.collisions.temperatures, &transition.strengths)?;
        let tabulated = spline.eval(log_te);

        let g_lower = atom.levels.weight(lower);
        let g_upper = atom.levels.weight(upper);

        let down = if irats == 0 {
            COLLISION_RATE_COEFF * tabulated / (g_upper * sqrt_te)
        } else {
            tabulated * 10f64.powi(irats)
        };

        let delta_e = atom.levels.energy(upper) - atom.levels.energy(lower);
        let up = down * (g_upper / g_lower) * (-HC_OVER_K * delta_e / te).exp();

        rates[(upper, lower)] = down;
        rates[(lower, upper)] = up;
    }
    Ok(rates)
}

/// Statistical-equilibrium matrix at `(te, ne)`, conservation row in place
///
/// Row `i` balances the population flowing into level `i` against the flow
/// out of it; entry `(i, j)` carries the total `j`→`i` rate and the
/// diagonal the negated total outflow. The raw balance is rank-deficient by
/// one (columns sum to zero up to roundoff), so the first row is replaced
/// with the conservation constraint Σnⱼ = 1, making the system well-posed.
///
/// `levels` restricts the model to the lowest levels so diagnostics that
/// only need a handful of them can solve a smaller system.
pub fn rate_matrix(atom: &Atom, te: f64, ne: f64, levels: usize) -> Result<DMatrix<f64>> {
    if !ne.is_finite() || ne <= 0.0 {
        return Err(Error::InvalidDensity(ne));
    }

    let collisions = collision_rate_matrix(atom, te)?;
    let count = levels.min(atom.level_count());

    let mut matrix = DMatrix::zeros(count, count);
    for target in 0..count {
        let mut outflow = 0.0;
        for source in 0..count {
            if source == target {
                continue;
            }

            // into `target` from `source`: collisional, plus radiative decay
            // when the source lies above
            let mut inflow = ne * collisions[(source, target)];
            if source > target {
                inflow += atom.radiative.a(source, target);
            }
            matrix[(target, source)] = inflow;

            // out of `target` toward `source`
            outflow += ne * collisions[(target, source)];
            if source < target {
                outflow += atom.radiative.a(target, source);
            }
        }
        matrix[(target, target)] = -outflow;
    }

    // conservation constraint replaces the first balance row
    for column in 0..count {
        matrix[(0, column)] = 1.0;
    }

    Ok(matrix)
}
