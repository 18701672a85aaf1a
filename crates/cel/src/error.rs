//! Result and Error types for nebtools-cel

/// Type alias for Result<T, cel::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `nebtools-cel` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("electron temperature must be positive, found {0}")]
    InvalidTemperature(f64),

    #[error("electron density must be positive, found {0}")]
    InvalidDensity(f64),

    #[error("observed line ratio must be positive and finite, found {0}")]
    InvalidRatio(f64),

    #[error("transition selection holds no valid pairs")]
    EmptySelection,

    #[error("selection references level {level} beyond the {count}-level model")]
    LevelOutOfRange { level: usize, count: usize },

    #[error("rate matrix factorization failed at Te={te}, Ne={ne}")]
    SingularRateMatrix { te: f64, ne: f64 },

    #[error("selected transitions have no radiative decay, ratio denominator is zero")]
    ZeroDenominator,

    #[error("modeled ratio is not finite at {variable} = {value}")]
    NonFiniteRatio { variable: &'static str, value: f64 },

    #[error("spline needs at least two nodes, found {0}")]
    TooFewNodes(usize),

    #[error("spline expects one value per node ({nodes} nodes, {values} values)")]
    NodeValueMismatch { nodes: usize, values: usize },

    #[error("spline axis is invalid")]
    BadAxis(#[from] nebtools_utils::Error),
}
