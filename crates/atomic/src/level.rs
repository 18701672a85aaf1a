//! Energy-level ladder records

use crate::error::{Error, Result};

use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Serialize};

/// A single term in the energy-level ladder of an ion
///
/// Energies are excitation energies above ground in cm⁻¹. The total angular
/// momentum J may be half-integer and is stored as a float; the statistical
/// weight `g = 2J + 1` is then always an integer in practice.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct EnergyLevel {
    /// Excitation energy above ground (cm⁻¹)
    pub energy: f64,
    /// Total angular momentum quantum number
    pub j: f64,
}

impl EnergyLevel {
    /// Statistical weight `g = 2J + 1`
    pub fn weight(&self) -> f64 {
        2.0 * self.j + 1.0
    }
}

/// Ordered energy-level ladder for one ion
///
/// The number of levels fixes the dimension of every downstream structure:
/// the Ω table, the A matrix, and the population vector all use this count.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EnergyLevels {
    /// Levels in ascending energy order, ground first
    pub levels: Vec<EnergyLevel>,
}

impl EnergyLevels {
    /// Validate the ladder ordering, consuming and returning the record
    ///
    /// Energies must be strictly ascending. A non-zero ground energy is
    /// tolerated with a warning since some compilations keep the absolute
    /// term value.
    pub fn validated(self) -> Result<Self> {
        if let Some((index, _)) = self
            .levels
            .iter()
            .tuple_windows()
            .find_position(|(a, b)| a.energy >= b.energy)
        {
            return Err(Error::UnorderedLevels { index: index + 1 });
        }

        if let Some(ground) = self.levels.first() {
            if ground.energy != 0.0 {
                warn!("ground level energy is {} cm^-1, not 0", ground.energy);
            }
        }

        Ok(self)
    }

    /// Number of levels in the ladder
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True for a ladder with no levels at all
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Excitation energy of a zero-based level index (cm⁻¹)
    pub fn energy(&self, idx: usize) -> f64 {
        self.levels[idx].energy
    }

    /// Statistical weight of a zero-based level index
    pub fn weight(&self, idx: usize) -> f64 {
        self.levels[idx].weight()
    }

    /// Emission wavelength of the upper→lower transition (Å)
    ///
    /// Both indices are zero-based; `upper` must lie above `lower` in the
    /// ladder for a physical wavelength.
    pub fn wavelength(&self, upper: usize, lower: usize) -> f64 {
        crate::constants::ANGSTROM_PER_CM / (self.energy(upper) - self.energy(lower))
    }
}
