//! Collision-strength table records

use crate::error::{Error, Result};

use nebtools_utils::GridExt;
use serde::{Deserialize, Serialize};

/// Raw Ω record as stored
///
/// Mirrors the on-disk layout: the zeroth record of a table carries the
/// temperature axis in its `strength` field with both level indices at 0,
/// and every following record holds one tabulated transition with 1-based
/// level indices.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OmijRecord {
    /// Lower level, 1-based (0 on the axis record)
    #[serde(default)]
    pub level1: usize,
    /// Upper level, 1-based (0 on the axis record)
    #[serde(default)]
    pub level2: usize,
    /// Axis nodes (K) or per-node collision strengths
    pub strength: Vec<f64>,
}

/// One tabulated transition of the typed Ω table
///
/// Level indices are zero-based here; conversion from the stored 1-based
/// records happens once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionStrengths {
    /// Lower level, zero-based
    pub lower: usize,
    /// Upper level, zero-based
    pub upper: usize,
    /// Ω at each node of the shared temperature axis
    pub strengths: Vec<f64>,
}

/// Typed collision-strength table for one ion
///
/// The temperature axis is shared by every transition of the ion. Any pair
/// not listed has Ω ≡ 0. The `irats` flag distinguishes dimensionless
/// collision *strengths* (0) from tabulated downward collision *rates*
/// scaled by 10^irats, which changes the excitation-rate formula downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionStrengths {
    /// Shared temperature axis (K), strictly positive and ascending
    pub temperatures: Vec<f64>,
    /// Tabulated transitions, unordered
    pub transitions: Vec<TransitionStrengths>,
    /// 0 for collision strengths, otherwise the decimal scaling of rates
    pub irats: i32,
}

impl CollisionStrengths {
    /// Build the typed table from the stored record sequence
    ///
    /// The zeroth record must carry the temperature axis; all remaining
    /// records must hold upward 1-based pairs with one strength per axis
    /// node.
    pub fn from_records(records: Vec<OmijRecord>, irats: i32) -> Result<Self> {
        let mut records = records.into_iter();
        let axis = records.next().ok_or(Error::EmptyCollisionTable)?;

        let temperatures = axis.strength;
        if temperatures.len() < 2
            || temperatures.try_min().map_or(true, |t| t <= 0.0)
            || temperatures.try_ascending().is_err()
        {
            return Err(Error::BadTemperatureAxis);
        }

        let nodes = temperatures.len();
        let transitions = records
            .map(|record| {
                if record.level1 == 0 || record.level2 <= record.level1 {
                    return Err(Error::BadTransitionPair {
                        lower: record.level1,
                        upper: record.level2,
                    });
                }
                if record.strength.len() != nodes {
                    return Err(Error::RaggedStrengths {
                        lower: record.level1,
                        upper: record.level2,
                        expected: nodes,
                        found: record.strength.len(),
                    });
                }
                Ok(TransitionStrengths {
                    lower: record.level1 - 1,
                    upper: record.level2 - 1,
                    strengths: record.strength,
                })
            })
            .collect::<Result<Vec<TransitionStrengths>>>()?;

        Ok(Self {
            temperatures,
            transitions,
            irats,
        })
    }

    /// Number of nodes on the temperature axis
    pub fn nodes(&self) -> usize {
        self.temperatures.len()
    }

    /// Highest zero-based level index referenced by any transition
    pub fn max_level(&self) -> usize {
        self.transitions
            .iter()
            .map(|t| t.upper)
            .max()
            .unwrap_or(0)
    }
}
