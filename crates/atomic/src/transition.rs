//! Spontaneous transition probability records

use crate::error::{Error, Result};

use serde::{Deserialize, Serialize};

/// Dense matrix of spontaneous transition probabilities (s⁻¹)
///
/// Stored row-major as `rates[upper][lower]`, the rate of the downward
/// upper→lower decay. Only entries below the diagonal are physically
/// populated; the diagonal is zero and upward entries are kept at zero.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransitionProbabilities {
    /// `rates[upper][lower]` in s⁻¹
    pub rates: Vec<Vec<f64>>,
}

impl TransitionProbabilities {
    /// Validate shape and signs, consuming and returning the record
    pub fn validated(self) -> Result<Self> {
        let expected = self.rates.len();
        for (row, entries) in self.rates.iter().enumerate() {
            if entries.len() != expected {
                return Err(Error::RaggedRateMatrix {
                    row: row + 1,
                    expected,
                    found: entries.len(),
                });
            }
            if let Some(col) = entries.iter().position(|rate| *rate < 0.0) {
                return Err(Error::NegativeRate {
                    upper: row + 1,
                    lower: col + 1,
                });
            }
        }
        Ok(self)
    }

    /// Matrix dimension, the level count of the ion
    pub fn level_count(&self) -> usize {
        self.rates.len()
    }

    /// Rate of the upper→lower decay (s⁻¹), zero-based indices
    pub fn a(&self, upper: usize, lower: usize) -> f64 {
        self.rates[upper][lower]
    }
}
