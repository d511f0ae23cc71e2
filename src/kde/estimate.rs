use crate::grid;
use crate::kernel::gaussian;

/// A Gaussian kernel density estimate evaluated on a fixed grid.
///
/// Produced by [`IncrementalKdeEstimator::recompute`](super::IncrementalKdeEstimator::recompute).
/// Holds the grid, the normalized density at each grid point, and the raw
/// kernel curve of every sample so a renderer can draw the individual
/// kernels stacked under the aggregate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DensityEstimate {
    grid: Vec<f64>,
    density: Vec<f64>,
    contributions: Vec<Vec<f64>>,
    bandwidth: f64,
}

impl DensityEstimate {
    /// Evaluates the estimate of `samples` on `grid`.
    ///
    /// Kernels are accumulated in sample order, so repeated evaluation of
    /// the same inputs is bit-identical. `samples` must be non-empty.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn evaluate(samples: &[f64], grid: Vec<f64>, bandwidth: f64) -> Self {
        debug_assert!(!samples.is_empty());
        let n = samples.len() as f64;

        let contributions: Vec<Vec<f64>> = samples
            .iter()
            .map(|&center| grid.iter().map(|&g| gaussian(g, center, bandwidth)).collect())
            .collect();

        let mut sums = vec![0.0; grid.len()];
        for kernel in &contributions {
            for (sum, value) in sums.iter_mut().zip(kernel) {
                *sum += value;
            }
        }
        let density = sums.into_iter().map(|sum| sum / n).collect();

        Self {
            grid,
            density,
            contributions,
            bandwidth,
        }
    }

    /// The evaluation grid, strictly increasing.
    #[must_use]
    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    /// Estimated density at each grid point.
    #[must_use]
    pub fn density(&self) -> &[f64] {
        &self.density
    }

    /// Number of grid points.
    /// Number of grid points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Number of samples summed into the estimate.
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.contributions.len()
    }

    /// Bandwidth the estimate was computed with.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Spacing between adjacent grid points.
    #[must_use]
    pub fn step(&self) -> f64 {
        match (self.grid.first(), self.grid.get(1)) {
            (Some(a), Some(b)) => b - a,
            _ => 0.0,
        }
    }

    /// Iterates `(grid point, density)` pairs in grid order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.grid.iter().copied().zip(self.density.iter().copied())
    }

    /// Linearly interpolates the estimate at `x`.
    ///
    /// Locations outside the grid take the nearest endpoint's density.
    #[must_use]
    pub fn interpolate(&self, x: f64) -> f64 {
        grid::interpolate(&self.grid, &self.density, x)
    }

    /// `Σ density(g_k) * step`, which approaches 1 as the grid gets finer
    /// and the margin wider.
    #[must_use]
    pub fn riemann_sum(&self) -> f64 {
        self.density.iter().sum::<f64>() * self.step()
    }

    /// Un-normalized kernel curve of each sample on the grid, in sample order.
    #[must_use]
    pub fn kernel_contributions(&self) -> &[Vec<f64>] {
        &self.contributions
    }

    /// Grid point with the highest density (first one on ties).
    #[must_use]
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.points()
            .fold(None, |best: Option<(f64, f64)>, (g, f)| match best {
                Some((_, best_f)) if best_f >= f => best,
                _ => Some((g, f)),
            })
    }
}
