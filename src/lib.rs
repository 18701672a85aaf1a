//! A semi-modular toolkit of fast and reliable libraries for nebular
//! emission-line analysis
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Flatten the default crates
#[doc(inline)]
pub use nebtools_atomic as atomic;

#[doc(inline)]
pub use nebtools_utils as utils;

// Re-exports of crates that are behind feature flags
#[cfg(feature = "cel")]
#[cfg_attr(docsrs, doc(cfg(feature = "cel")))]
#[doc(inline)]
pub use nebtools_cel as cel;

#[cfg(feature = "rl")]
#[cfg_attr(docsrs, doc(cfg(feature = "rl")))]
#[doc(inline)]
pub use nebtools_rl as rl;
