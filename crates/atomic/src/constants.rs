//! Physical constants shared across the toolkit
//!
//! Values follow the conventions of the published recombination and
//! collision-strength fits: CGS units, energies in cm⁻¹, wavelengths in Å.

/// Planck constant (erg s)
pub const PLANCK: f64 = 6.62606957e-27;

/// Speed of light (cm s⁻¹)
pub const SPEED_OF_LIGHT: f64 = 2.99792458e10;

/// hc (erg cm), the photon energy per wavenumber
pub const HC: f64 = PLANCK * SPEED_OF_LIGHT;

/// hc/k (cm K) as used in the Boltzmann factor ΔE/kT = 1.4388 E[cm⁻¹]/T
pub const HC_OVER_K: f64 = 1.4388;

/// Å per cm
pub const ANGSTROM_PER_CM: f64 = 1.0e8;

/// Downward collision rate prefactor 8.629e-6 (cm³ s⁻¹ K^½)
pub const COLLISION_RATE_COEFF: f64 = 8.629e-6;

/// Hβ reference wavelength (Å)
pub const HBETA_WAVELENGTH: f64 = 4861.33;
