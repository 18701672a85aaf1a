//! Result and Error types for nebtools-atomic

/// Type alias for Result<T, atomic::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `nebtools-atomic` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("failed to deserialize store record")]
    JsonError(#[from] serde_json::Error),

    #[error("no entry for \"{key}\" in {path}")]
    IonNotFound { key: String, path: String },

    #[error("expected at least {requested} energy levels, found {found}")]
    TooFewLevels { requested: usize, found: usize },

    #[error("energy levels must be strictly ascending (level {index})")]
    UnorderedLevels { index: usize },

    #[error("collision strength table holds no records")]
    EmptyCollisionTable,

    #[error("collision temperature axis must be positive, finite and ascending")]
    BadTemperatureAxis,

    #[error("transition {lower}-{upper} is not an upward pair of 1-based level indices")]
    BadTransitionPair { lower: usize, upper: usize },

    #[error("transition {lower}-{upper} carries {found} strengths, expected {expected}")]
    RaggedStrengths {
        lower: usize,
        upper: usize,
        expected: usize,
        found: usize,
    },

    #[error("transition {lower}-{upper} references a level beyond the {count}-level model")]
    LevelBeyondModel {
        lower: usize,
        upper: usize,
        count: usize,
    },

    #[error("transition probabilities must be square (row {row} holds {found} of {expected} entries)")]
    RaggedRateMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("negative transition probability A[{upper},{lower}]")]
    NegativeRate { upper: usize, lower: usize },

    #[error("payload sizes disagree: {found} {name}, expected {expected}")]
    InconsistentPayload {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("recombination axis is invalid")]
    BadRecombAxis(#[from] nebtools_utils::Error),
}
