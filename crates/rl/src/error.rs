//! Result and Error types for nebtools-rl

/// Type alias for Result<T, rl::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `nebtools-rl` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("electron temperature must be positive, found {0}")]
    InvalidTemperature(f64),

    #[error("electron density must be positive, found {0}")]
    InvalidDensity(f64),

    #[error("no recombination line within {tolerance} Å of {wavelength} Å")]
    NoWavelengthMatch { wavelength: f64, tolerance: f64 },

    #[error("line index {index} outside the 1..={count} published table")]
    LineIndexOutOfRange { index: usize, count: usize },

    #[error("observed flux must be positive, found {0}")]
    InvalidFlux(f64),

    #[error("emissivity vanished for the selected line")]
    ZeroEmissivity,

    #[error("recombination grid axis is invalid")]
    BadAxis(#[from] nebtools_utils::Error),
}
