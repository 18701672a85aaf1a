//! Collisionally excited line diagnostics
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod diagnostics;
mod emissivity;
mod error;
mod populations;
mod rates;
mod selection;
mod spline;

#[doc(inline)]
pub use diagnostics::{density, temperature};

#[doc(inline)]
pub use emissivity::{emissivity_ratio, emissivity_sum, line_emissivity};

#[doc(inline)]
pub use populations::{critical_densities, populations, populations_limited};

#[doc(inline)]
pub use rates::{collision_rate_matrix, effective_omega, rate_matrix};

#[doc(inline)]
pub use selection::LineSelection;

#[doc(inline)]
pub use spline::CubicSpline;

#[doc(inline)]
pub use error::{Error, Result};
