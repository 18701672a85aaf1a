//! Line-ratio diagnostics for electron temperature and density
//!
//! Inverts an observed emission-line ratio into the free plasma variable by
//! nested bracket refinement: nine passes over a four-point grid, each pass
//! shrinking the window around the best anchor by the grid factor. The
//! fixed depth keeps the cost bounded and the result reproducible, with a
//! final resolution far below the uncertainty of the atomic data.

use crate::emissivity::emissivity_ratio;
use crate::error::{Error, Result};
use crate::populations::populations;
use crate::selection::LineSelection;

use nebtools_atomic::Atom;

use log::debug;
use nebtools_utils::ValueExt;

/// Refinement passes; resolution is window/(points-1)^passes
const PASSES: i32 = 9;

/// Grid points per pass
const GRID_POINTS: usize = 4;

/// Temperature search window (K) above the floor
const TEMPERATURE_WINDOW: f64 = 15000.0;

/// Density search window (cm⁻³)
const DENSITY_WINDOW: f64 = 100000.0;

/// Temperatures below this are floored during evaluation (K)
const TEMPERATURE_FLOOR: f64 = 5000.0;

/// Densities below this are floored during evaluation (cm⁻³)
const DENSITY_FLOOR: f64 = 1.0;

/// Which plasma variable a search solves for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variable {
    Temperature,
    Density,
}

impl Variable {
    fn window(&self) -> f64 {
        match self {
            Variable::Temperature => TEMPERATURE_WINDOW,
            Variable::Density => DENSITY_WINDOW,
        }
    }

    fn start(&self) -> f64 {
        match self {
            Variable::Temperature => TEMPERATURE_FLOOR,
            Variable::Density => 0.0,
        }
    }

    fn floor(&self, value: f64) -> f64 {
        match self {
            Variable::Temperature => value.max(TEMPERATURE_FLOOR),
            Variable::Density => value.max(DENSITY_FLOOR),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Variable::Temperature => "Te",
            Variable::Density => "Ne",
        }
    }
}

/// Electron temperature (K) from an observed line ratio at fixed density
///
/// The ratio is numerator over denominator of the given selections with all
/// fluxes on the same scale. Searches 5000–20000 K; a ratio produced by a
/// plasma outside that window resolves to the nearer window edge (low side)
/// or drifts a bounded distance past it (high side) rather than failing.
///
/// ```rust, no_run
/// # use nebtools_atomic::{read_levels, read_omij, read_aij, Atom};
/// # use nebtools_cel::{temperature, LineSelection};
/// # let levels = read_levels("data/levels.json", "s", "ii", 5).unwrap();
/// # let omij = read_omij("data/omij.json", "s", "ii").unwrap();
/// # let aij = read_aij("data/aij.json", "s", "ii").unwrap();
/// let atom = Atom::new("s", "ii", levels, omij, aij).unwrap();
///
/// // [S II] nebular-to-auroral ratio
/// let nebular = LineSelection::parse("1,2,1,3/");
/// let auroral = LineSelection::parse("1,5/");
///
/// let te = temperature(&atom, 10.753, 2550.0, &nebular, &auroral).unwrap();
/// ```
pub fn temperature(
    atom: &Atom,
    observed: f64,
    ne: f64,
    numerator: &LineSelection,
    denominator: &LineSelection,
) -> Result<f64> {
    if !ne.is_finite() || ne <= 0.0 {
        return Err(Error::InvalidDensity(ne));
    }
    refine(atom, Variable::Temperature, observed, ne, numerator, denominator)
}

/// Electron density (cm⁻³) from an observed line ratio at fixed temperature
///
/// Searches 0–100000 cm⁻³ with evaluation floored at 1 cm⁻³, so the
/// smallest resolvable density is set by the first-pass grid step.
pub fn density(
    atom: &Atom,
    observed: f64,
    te: f64,
    numerator: &LineSelection,
    denominator: &LineSelection,
) -> Result<f64> {
    if !te.is_finite() || te <= 0.0 {
        return Err(Error::InvalidTemperature(te));
    }
    refine(atom, Variable::Density, observed, te, numerator, denominator)
}

/// Nested bracket refinement shared by both diagnostics
fn refine(
    atom: &Atom,
    variable: Variable,
    observed: f64,
    fixed: f64,
    numerator: &LineSelection,
    denominator: &LineSelection,
) -> Result<f64> {
    if !observed.is_finite() || observed <= 0.0 {
        return Err(Error::InvalidRatio(observed));
    }
    numerator.validate(atom.level_count())?;
    denominator.validate(atom.level_count())?;

    let window = variable.window();
    let mut anchor = variable.start();

    for pass in 1..=PASSES {
        let step = window / ((GRID_POINTS - 1) as f64).powi(pass);

        let mut residuals = [0.0; GRID_POINTS];
        for (point, residual) in residuals.iter_mut().enumerate() {
            let x = variable.floor(anchor + step * point as f64);

            let (te, ne) = match variable {
                Variable::Temperature => (x, fixed),
                Variable::Density => (fixed, x),
            };
            let n = populations(atom, te, ne)?;
            let modeled = emissivity_ratio(atom, &n, numerator, denominator)?;

            if !modeled.is_finite() {
                return Err(Error::NonFiniteRatio {
                    variable: variable.name(),
                    value: x,
                });
            }
            *residual = modeled - observed;
        }

        // first sign change against the leftmost point wins; otherwise fall
        // back to the endpoint that sits closer to the observed ratio
        let crossing =
            (1..GRID_POINTS).find(|&point| residuals[point].signum() != residuals[0].signum());
        anchor = match crossing {
            Some(point) => anchor + step * (point - 1) as f64,
            None if residuals[0].abs() <= residuals[GRID_POINTS - 1].abs() => anchor,
            None => anchor + step * (GRID_POINTS - 1) as f64,
        };

        debug!(
            "{} pass {pass}: step {}, anchor {}",
            variable.name(),
            step.sci(3, 2),
            anchor.sci(5, 2)
        );
    }

    Ok(variable.floor(anchor))
}
