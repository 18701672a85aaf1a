//! Typed atomic-data records and store readers
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod atom;
mod collision;
mod error;
mod level;
mod recomb;
mod transition;

pub mod constants;
pub mod reader;

#[doc(inline)]
pub use reader::{
    read_aeff_collection, read_aeff_he_i_pfsd12, read_aeff_ppb91, read_aeff_sh95, read_aij,
    read_branching, read_levels, read_omij,
};

#[doc(inline)]
pub use atom::Atom;

#[doc(inline)]
pub use level::{EnergyLevel, EnergyLevels};

#[doc(inline)]
pub use collision::{CollisionStrengths, OmijRecord, TransitionStrengths};

#[doc(inline)]
pub use transition::TransitionProbabilities;

#[doc(inline)]
pub use recomb::{AeffGrid, AeffHeI, BranchingRatio, BranchingRatios, RecombLine};

#[doc(inline)]
pub use error::{Error, Result};
