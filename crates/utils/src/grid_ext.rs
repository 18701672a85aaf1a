use crate::error::{Error, Result};

/// Extends float slices treated as tabulated interpolation axes
pub trait GridExt<T> {
    /// Find the minimum value in float arrays
    ///
    /// Only provides the minimum value from a collection of valid numbers.
    /// Any NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use nebtools_utils::GridExt;
    /// # use nebtools_utils::Error;
    /// assert_eq!([5000.0, 1000.0, 20000.0].try_min(), Ok(1000.0));
    /// assert_eq!(
    ///     [1.0, f64::NAN].try_min(),
    ///     Err(Error::SliceContainsUndefinedValues)
    /// );
    /// assert_eq!(Vec::<f64>::new().try_min(), Err(Error::SliceContainsNoValues));
    /// ```
    ///
    /// The float primitives do not implement `Ord` due to `NaN` being
    /// incomparable, so `min()` on a collection of floats is not implemented
    /// in the standard library. This extension uses `total_cmp` for a
    /// guaranteed ordering.
    fn try_min(&self) -> Result<T>;

    /// Find the maximum value in float arrays
    ///
    /// Counterpart to [GridExt::try_min], with the same error cases.
    ///
    /// ```rust
    /// # use nebtools_utils::GridExt;
    /// assert_eq!([5000.0, 1000.0, 20000.0].try_max(), Ok(20000.0));
    /// ```
    fn try_max(&self) -> Result<T>;

    /// Check that every node is strictly larger than the previous
    ///
    /// Interpolation axes are required to be strictly ascending. The reported
    /// index is the first node that breaks the ordering.
    ///
    /// ```rust
    /// # use nebtools_utils::GridExt;
    /// # use nebtools_utils::Error;
    /// assert_eq!([1.0, 2.0, 3.0].try_ascending(), Ok(()));
    /// assert_eq!(
    ///     [1.0, 2.0, 2.0].try_ascending(),
    ///     Err(Error::UnorderedAxisNodes { index: 2 })
    /// );
    /// ```
    fn try_ascending(&self) -> Result<()>;

    /// Index of the interval a value should be interpolated in
    ///
    /// Returns the index of the lower node of the bracketing interval, in
    /// `0..=n-2`. Values outside the axis clamp to the first or last
    /// interval, so interpolators extrapolate from the end segments rather
    /// than fail.
    ///
    /// ```rust
    /// # use nebtools_utils::GridExt;
    /// let axis = vec![3.0, 3.5, 4.0, 4.5];
    ///
    /// // in range
    /// assert_eq!(axis.lookup_interval(3.2), Ok(0));
    /// assert_eq!(axis.lookup_interval(4.2), Ok(2));
    ///
    /// // node values fall in the interval above, except the last
    /// assert_eq!(axis.lookup_interval(3.5), Ok(1));
    /// assert_eq!(axis.lookup_interval(4.5), Ok(2));
    ///
    /// // out of range clamps to the end intervals
    /// assert_eq!(axis.lookup_interval(1.0), Ok(0));
    /// assert_eq!(axis.lookup_interval(9.0), Ok(2));
    /// ```
    fn lookup_interval(&self, value: T) -> Result<usize>;
}

impl GridExt<f64> for [f64] {
    fn try_min(&self) -> Result<f64> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        };

        self.iter()
            .min_by(|a, b| a.total_cmp(b))
            .copied()
            .ok_or(Error::SliceContainsNoValues)
    }

    fn try_max(&self) -> Result<f64> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        };

        self.iter()
            .max_by(|a, b| a.total_cmp(b))
            .copied()
            .ok_or(Error::SliceContainsNoValues)
    }

    fn try_ascending(&self) -> Result<()> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        };

        match self.windows(2).position(|pair| pair[0] >= pair[1]) {
            Some(idx) => Err(Error::UnorderedAxisNodes { index: idx + 1 }),
            None => Ok(()),
        }
    }

    fn lookup_interval(&self, value: f64) -> Result<usize> {
        let n = self.len();
        if n < 2 {
            return Err(Error::BelowMinimumSliceLength {
                length: n,
                minimum_required: 2,
            });
        }

        if !value.is_finite() {
            return Err(Error::SliceContainsUndefinedValues);
        }

        // clamped to the end intervals for extrapolation
        let idx = self.partition_point(|node| *node <= value);
        Ok(idx.saturating_sub(1).min(n - 2))
    }
}
