//! Result and Error types for the utils module

/// Type alias for `Result<T, utils::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, PartialEq)]
/// The error type for `nebtools_utils`
pub enum Error {
    /// An empty slice of floats passed to a GridExt method
    SliceContainsNoValues,

    /// The slice of float values contains things like NAN or INFINITY
    SliceContainsUndefinedValues,

    /// An axis needs at least two nodes to define an interval
    BelowMinimumSliceLength {
        length: usize,
        minimum_required: usize,
    },

    /// Axis nodes must be strictly ascending to be searchable
    UnorderedAxisNodes { index: usize },
}

// error boilerplate
impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

// implement standard error trait to use with ? operator
impl std::error::Error for Error {}
