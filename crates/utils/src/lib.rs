//! Common utility for extended `std` types
//!
#![doc = include_str!("../readme.md")]

// Alias for the format! macro
pub use std::format as f;

// Modules
mod error;
mod grid_ext;
mod value_ext;

// Flatten
pub use error::{Error, Result};
pub use grid_ext::GridExt;
pub use value_ext::ValueExt;
