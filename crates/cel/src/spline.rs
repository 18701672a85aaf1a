//! Natural cubic spline for collision-strength interpolation

use crate::error::{Error, Result};

use itertools::Itertools;
use nebtools_utils::GridExt;

/// Natural cubic spline with precomputed second derivatives
///
/// Collision strengths are tabulated on a shared temperature axis and
/// queried once per solver call, so the second derivatives are computed at
/// construction and evaluation is a cheap Hermite form. Queries outside the
/// node range extrapolate the end-interval cubics; callers are expected to
/// stay in range.
///
/// ```rust
/// # use nebtools_cel::CubicSpline;
/// let spline = CubicSpline::fit(&[3.0, 3.5, 4.0, 4.5], &[1.2, 1.4, 1.9, 2.1]).unwrap();
///
/// // interpolation passes through the nodes
/// assert!((spline.eval(3.5) - 1.4).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    nodes: Vec<f64>,
    values: Vec<f64>,
    second: Vec<f64>,
}

impl CubicSpline {
    /// Fit the spline through `values` at strictly ascending `nodes`
    ///
    /// Natural boundary conditions: the second derivative vanishes at both
    /// end nodes. Solved by the standard tridiagonal sweep.
    pub fn fit(nodes: &[f64], values: &[f64]) -> Result<Self> {
        let n = nodes.len();
        if n < 2 {
            return Err(Error::TooFewNodes(n));
        }
        if values.len() != n {
            return Err(Error::NodeValueMismatch {
                nodes: n,
                values: values.len(),
            });
        }
        nodes.try_ascending()?;

        // decomposition sweep of the tridiagonal system
        let mut second = vec![0.0; n];
        let mut scratch = vec![0.0; n];
        for i in 1..n - 1 {
            let sig = (nodes[i] - nodes[i - 1]) / (nodes[i + 1] - nodes[i - 1]);
            let p = sig * second[i - 1] + 2.0;
            second[i] = (sig - 1.0) / p;

            let slope_above = (values[i + 1] - values[i]) / (nodes[i + 1] - nodes[i]);
            let slope_below = (values[i] - values[i - 1]) / (nodes[i] - nodes[i - 1]);
            scratch[i] = (6.0 * (slope_above - slope_below) / (nodes[i + 1] - nodes[i - 1])
                - sig * scratch[i - 1])
                / p;
        }

        // back-substitution, second[n-1] stays 0 for the natural boundary
        for i in (0..n - 1).rev() {
            second[i] = second[i] * second[i + 1] + scratch[i];
        }

        Ok(Self {
            nodes: nodes.to_vec(),
            values: values.to_vec(),
            second,
        })
    }

    /// Evaluate the spline at `x`
    ///
    /// Out-of-range queries evaluate the first or last interval cubic.
    /// A non-finite query returns NaN.
    pub fn eval(&self, x: f64) -> f64 {
        let Ok(k) = self.nodes.lookup_interval(x) else {
            return f64::NAN;
        };

        let h = self.nodes[k + 1] - self.nodes[k];
        let a = (self.nodes[k + 1] - x) / h;
        let b = (x - self.nodes[k]) / h;

        a * self.values[k]
            + b * self.values[k + 1]
            + ((a.powi(3) - a) * self.second[k] + (b.powi(3) - b) * self.second[k + 1]) * h * h
                / 6.0
    }

    /// The node axis the spline was fitted on
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }
}

/// Fit a spline over `log10` of a temperature axis
///
/// The Ω tables are tabulated against temperature in K but interpolated
/// against log₁₀ T; this keeps the transform in one place.
pub(crate) fn fit_log10(temperatures: &[f64], values: &[f64]) -> Result<CubicSpline> {
    let log_nodes = temperatures.iter().map(|t| t.log10()).collect_vec();
    CubicSpline::fit(&log_nodes, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_through_nodes() {
        let nodes = [3.0, 3.5, 4.0, 4.2, 4.5];
        let values = [2.2, 2.9, 3.1, 2.8, 2.5];
        let spline = CubicSpline::fit(&nodes, &values).unwrap();

        for (x, y) in nodes.iter().zip(values.iter()) {
            assert!((spline.eval(*x) - y).abs() < 1e-12);
        }
    }

    #[test]
    fn reproduces_linear_data() {
        // all second derivatives vanish, so the spline is the line itself,
        // both inside the axis and extrapolated beyond it
        let nodes = [1.0, 2.0, 4.0, 7.0];
        let values: Vec<f64> = nodes.iter().map(|x| 3.0 * x - 5.0).collect();
        let spline = CubicSpline::fit(&nodes, &values).unwrap();

        for x in [1.0, 1.3, 3.9, 6.2, 7.0, 0.2, 9.5] {
            assert!((spline.eval(x) - (3.0 * x - 5.0)).abs() < 1e-10);
        }
    }

    #[test]
    fn constant_data_is_constant_everywhere() {
        let spline = CubicSpline::fit(&[1.0, 2.0, 3.0], &[4.2, 4.2, 4.2]).unwrap();
        for x in [0.5, 1.0, 2.7, 8.0] {
            assert!((spline.eval(x) - 4.2).abs() < 1e-12);
        }
    }

    #[test]
    fn rejects_bad_input() {
        assert!(CubicSpline::fit(&[1.0], &[2.0]).is_err());
        assert!(CubicSpline::fit(&[1.0, 2.0], &[1.0, 2.0, 3.0]).is_err());
        assert!(CubicSpline::fit(&[2.0, 1.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn non_finite_query_is_nan() {
        let spline = CubicSpline::fit(&[1.0, 2.0], &[1.0, 2.0]).unwrap();
        assert!(spline.eval(f64::NAN).is_nan());
    }
}
