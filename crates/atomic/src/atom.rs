//! The per-ion bundle consumed by the CEL machinery

use crate::collision::CollisionStrengths;
use crate::error::{Error, Result};
use crate::level::EnergyLevels;
use crate::transition::TransitionProbabilities;

use nebtools_utils::f;

/// Everything needed to solve the level-population problem for one ion
///
/// Bundles the three collisionally-excited-line payloads and cross-validates
/// them once, so downstream code can index freely: the level count of the
/// ladder fixes the A-matrix dimension, and every tabulated Ω transition
/// must reference levels inside the ladder.
///
/// The bundle is immutable after construction and can be shared across
/// threads; each evaluation owns its own working buffers.
///
/// ```rust, no_run
/// # use nebtools_atomic::{read_levels, read_omij, read_aij, Atom};
/// let levels = read_levels("data/levels.json", "s", "ii", 5).unwrap();
/// let omij = read_omij("data/omij.json", "s", "ii").unwrap();
/// let aij = read_aij("data/aij.json", "s", "ii").unwrap();
///
/// let atom = Atom::new("s", "ii", levels, omij, aij).unwrap();
/// assert_eq!(atom.level_count(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Atom {
    /// Element symbol, lower case (e.g. "s")
    pub element: String,
    /// Ionization stage in roman numerals, lower case (e.g. "ii")
    pub ion: String,
    /// Energy-level ladder
    pub levels: EnergyLevels,
    /// Collision-strength table
    pub collisions: CollisionStrengths,
    /// Spontaneous transition probabilities
    pub radiative: TransitionProbabilities,
}

impl Atom {
    /// Bundle and cross-validate the three payloads
    pub fn new(
        element: &str,
        ion: &str,
        levels: EnergyLevels,
        collisions: CollisionStrengths,
        radiative: TransitionProbabilities,
    ) -> Result<Self> {
        let count = levels.len();
        if count == 0 {
            return Err(Error::TooFewLevels {
                requested: 1,
                found: 0,
            });
        }

        if radiative.level_count() != count {
            return Err(Error::InconsistentPayload {
                name: "transition probability rows",
                expected: count,
                found: radiative.level_count(),
            });
        }

        for transition in &collisions.transitions {
            if transition.upper >= count {
                return Err(Error::LevelBeyondModel {
                    lower: transition.lower + 1,
                    upper: transition.upper + 1,
                    count,
                });
            }
        }

        Ok(Self {
            element: element.trim().to_lowercase(),
            ion: ion.trim().to_lowercase(),
            levels,
            collisions,
            radiative,
        })
    }

    /// Number of levels in the model
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Store key for this ion, e.g. "s_ii"
    pub fn key(&self) -> String {
        f!("{}_{}", self.element, self.ion)
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            fmt,
            "[{} {}] {} levels, {} tabulated transitions",
            self.element,
            self.ion,
            self.level_count(),
            self.collisions.transitions.len()
        )
    }
}
