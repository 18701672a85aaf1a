//! Recombination-line emissivities and abundances
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod abundance;
mod error;
mod fits;
mod grid;
mod helium;

#[doc(inline)]
pub use abundance::{
    abund_collection_rl, abund_he_i_rl, abund_he_ii_rl, abund_ppb91_rl, ionic_abundance,
};

#[doc(inline)]
pub use fits::{emiss_collection, emiss_ppb91};

#[doc(inline)]
pub use grid::{emiss_hbeta, emiss_he_ii};

#[doc(inline)]
pub use helium::emiss_he_i;

#[doc(inline)]
pub use error::{Error, Result};
