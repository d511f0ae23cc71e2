use core::ops::Range;

use super::comparison::PmfComparison;
use crate::error::{Error, Result};
use crate::grid;

/// Aggregated Binomial-vs-Poisson PMF difference over an `(n, p)` mesh.
///
/// Rows follow `p`, columns follow `n`: `heights()[i][j]` is the total
/// difference for `p_values()[i]` and `n_values()[j]`.
///
/// # Examples
///
/// ```
/// use kdelab::DifferenceSurface;
///
/// let surface = DifferenceSurface::compute(1..50, 0.01, 1.0, 50).unwrap();
/// assert_eq!(surface.n_values().len(), 49);
/// assert_eq!(surface.p_values().len(), 50);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DifferenceSurface {
    n_values: Vec<u32>,
    p_values: Vec<f64>,
    heights: Vec<Vec<f64>>,
}

impl DifferenceSurface {
    /// Computes the surface for `n` in `n_range` (end exclusive) and
    /// `p_points` evenly spaced probabilities in `[p_low, p_high]`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `n_range` is empty, `p_points` is
    /// below 2, or the probability range is not an increasing sub-range
    /// of `[0, 1]`.
    pub fn compute(n_range: Range<u32>, p_low: f64, p_high: f64, p_points: usize) -> Result<Self> {
        if n_range.is_empty() {
            return Err(Error::invalid(format!(
                "n range {}..{} is empty",
                n_range.start, n_range.end
            )));
        }
        if p_points < 2 {
            return Err(Error::invalid(format!(
                "surface needs at least 2 probabilities, got {p_points}"
            )));
        }
        if !(0.0..=1.0).contains(&p_low) || !(0.0..=1.0).contains(&p_high) || p_low >= p_high {
            return Err(Error::invalid(format!(
                "probability range must satisfy 0 <= low < high <= 1, got [{p_low}, {p_high}]"
            )));
        }

        let n_values: Vec<u32> = n_range.collect();
        let p_values = grid::linspace(p_low, p_high, p_points);

        let heights = p_values
            .iter()
            .map(|&p| {
                n_values
                    .iter()
                    .map(|&n| PmfComparison::new(n, p).map(|c| c.total_difference()))
                    .collect::<Result<Vec<f64>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        trace_info!(
            n_count = n_values.len(),
            p_count = p_values.len(),
            "pmf difference surface computed"
        );

        Ok(Self {
            n_values,
            p_values,
            heights,
        })
    }

    #[must_use]
    pub fn n_values(&self) -> &[u32] {
        &self.n_values
    }

    #[must_use]
    pub fn p_values(&self) -> &[f64] {
        &self.p_values
    }

    /// Heights indexed `[p_index][n_index]`.
    #[must_use]
    pub fn heights(&self) -> &[Vec<f64>] {
        &self.heights
    }

    /// Height at trial count `n` and the `p_index`-th probability, if both
    /// are on the mesh.
    #[must_use]
    pub fn height(&self, n: u32, p_index: usize) -> Option<f64> {
        let n_index = self.n_values.iter().position(|&v| v == n)?;
        self.heights.get(p_index)?.get(n_index).copied()
    }

    /// `(min, max)` over all heights.
    #[must_use]
    pub fn height_range(&self) -> (f64, f64) {
        self.heights
            .iter()
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &h| {
                (lo.min(h), hi.max(h))
            })
    }

    /// Position of the marker for an arbitrary `(n, p)`, on or off the
    /// mesh: `(n, p, total difference)`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `p` is outside `[0, 1]`.
    pub fn point(n: u32, p: f64) -> Result<(f64, f64, f64)> {
        let height = PmfComparison::new(n, p)?.total_difference();
        Ok((f64::from(n), p, height))
    }
}
