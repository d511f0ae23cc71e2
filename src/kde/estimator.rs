//! Incremental Gaussian kernel density estimation.
//!
//! The estimator keeps a growing sample set and materializes the density
//! estimate only on [`recompute`](IncrementalKdeEstimator::recompute), so a
//! caller can add a batch of observations and pay for one evaluation.

use super::config::KdeConfig;
use super::estimate::DensityEstimate;
use super::report::ErrorReport;
use crate::error::{Error, Result};
use crate::grid;
use crate::reference::ReferenceDensity;

/// Whether the cached estimate matches the current samples and configuration.
#[derive(Clone, Debug, Default)]
enum EstimateState {
    /// No estimate, or one computed before the last mutation.
    #[default]
    Dirty,
    /// The estimate matches the current samples and configuration.
    Fresh(DensityEstimate),
}

/// A Gaussian kernel density estimator over an append-only sample set.
///
/// Every mutation ([`add_sample`](Self::add_sample), [`reset`](Self::reset),
/// [`configure`](Self::configure)) marks the estimate stale. The grid and
/// density are rebuilt from scratch by [`recompute`](Self::recompute), and
/// [`error_against`](Self::error_against) only runs on a fresh estimate.
///
/// # Examples
///
/// ```
/// use kdelab::{IncrementalKdeEstimator, Normal};
///
/// let mut kde = IncrementalKdeEstimator::default();
/// kde.reset(&[2.1, 3.4, 2.9]).unwrap();
/// kde.add_sample(3.2).unwrap();
///
/// let estimate = kde.recompute().unwrap();
/// assert_eq!(estimate.len(), 10);
/// assert!(estimate.density().iter().all(|&f| f >= 0.0));
///
/// let population = Normal::new(3.0, 1.0).unwrap();
/// let report = kde.error_against(&population).unwrap();
/// assert_eq!(report.len(), 4);
/// assert!(report.rmse() >= 0.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct IncrementalKdeEstimator {
    config: KdeConfig,
    samples: Vec<f64>,
    state: EstimateState,
}

impl IncrementalKdeEstimator {
    /// Creates an empty estimator with the given configuration.
    #[must_use]
    pub fn new(config: KdeConfig) -> Self {
        Self {
            config,
            samples: Vec::new(),
            state: EstimateState::Dirty,
        }
    }

    /// Sets the bandwidth, grid resolution, and margin used by the next
    /// [`recompute`](Self::recompute). Samples are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `bandwidth` is not finite and
    /// positive, `grid_resolution` is below 2, or `margin` is negative or
    /// not finite. The estimator is unchanged on error.
    pub fn configure(&mut self, bandwidth: f64, grid_resolution: usize, margin: f64) -> Result<()> {
        let config = KdeConfig::new(bandwidth, grid_resolution, margin)?;
        self.set_config(config);
        Ok(())
    }

    /// Replaces the configuration with an already validated one.
    pub fn set_config(&mut self, config: KdeConfig) {
        self.config = config;
        self.state = EstimateState::Dirty;
    }

    /// Replaces the sample set.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `initial_samples` is empty or holds
    /// a non-finite value. The estimator is unchanged on error.
    pub fn reset(&mut self, initial_samples: &[f64]) -> Result<()> {
        if initial_samples.is_empty() {
            return Err(Error::invalid("cannot reset with an empty sample set"));
        }
        check_finite(initial_samples)?;

        self.samples.clear();
        self.samples.extend_from_slice(initial_samples);
        self.state = EstimateState::Dirty;
        trace_debug!(n_samples = self.samples.len(), "kde samples reset");
        Ok(())
    }

    /// Appends one observation without recomputing.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `value` is not finite.
    pub fn add_sample(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(Error::invalid(format!("sample must be finite, got {value}")));
        }
        self.samples.push(value);
        self.state = EstimateState::Dirty;
        Ok(())
    }

    /// Appends a batch of observations without recomputing.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if any value is not finite. No value is
    /// appended in that case.
    pub fn extend_samples(&mut self, values: &[f64]) -> Result<()> {
        check_finite(values)?;
        if values.is_empty() {
            return Ok(());
        }
        self.samples.extend_from_slice(values);
        self.state = EstimateState::Dirty;
        Ok(())
    }

    /// Rebuilds the grid and density estimate from the current samples.
    ///
    /// The grid has `grid_resolution` evenly spaced points from
    /// `min(samples) - margin` to `max(samples) + margin` inclusive. Each
    /// density value is the mean of the Gaussian kernels centered on the
    /// samples, summed in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `Error::InsufficientData` if there are no samples, and
    /// `Error::InvalidInput` if every sample is identical and the margin is
    /// zero (the grid would collapse to a single location) or the widened
    /// sample range overflows `f64`.
    pub fn recompute(&mut self) -> Result<&DensityEstimate> {
        if self.samples.is_empty() {
            return Err(Error::InsufficientData);
        }

        let (min, max) = self
            .samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        let low = min - self.config.margin();
        let high = max + self.config.margin();
        if low >= high {
            return Err(Error::invalid(
                "grid span is zero: samples are identical and margin is 0",
            ));
        }
        if !(high - low).is_finite() {
            return Err(Error::invalid(format!(
                "grid span [{low}, {high}] is not representable"
            )));
        }

        let grid = grid::linspace(low, high, self.config.grid_resolution());
        let estimate = DensityEstimate::evaluate(&self.samples, grid, self.config.bandwidth());
        trace_debug!(
            n_samples = self.samples.len(),
            grid_resolution = self.config.grid_resolution(),
            bandwidth = self.config.bandwidth(),
            "kde recomputed"
        );

        self.state = EstimateState::Fresh(estimate);
        self.estimate()
            .ok_or(Error::Internal("estimate missing right after recompute"))
    }

    /// Measures the fresh estimate against `reference` at every sample.
    ///
    /// # Errors
    ///
    /// Returns `Error::StaleEstimate` if the samples or configuration changed
    /// since the last [`recompute`](Self::recompute), or it never ran.
    pub fn error_against<R>(&self, reference: &R) -> Result<ErrorReport>
    where
        R: ReferenceDensity + ?Sized,
    {
        let EstimateState::Fresh(estimate) = &self.state else {
            return Err(Error::StaleEstimate);
        };

        let truth = self.samples.iter().map(|&s| reference.density(s)).collect();
        let estimated = self
            .samples
            .iter()
            .map(|&s| estimate.interpolate(s))
            .collect();

        let report = ErrorReport::new(self.samples.clone(), truth, estimated);
        trace_debug!(
            n_samples = report.len(),
            mse = report.mse(),
            rmse = report.rmse(),
            "kde error measured"
        );
        Ok(report)
    }

    /// The fresh estimate, or `None` while stale.
    #[must_use]
    pub fn estimate(&self) -> Option<&DensityEstimate> {
        match &self.state {
            EstimateState::Fresh(estimate) => Some(estimate),
            EstimateState::Dirty => None,
        }
    }

    /// Returns `true` if the estimate matches the current samples and configuration.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        matches!(self.state, EstimateState::Fresh(_))
    }

    /// Samples in insertion order.
    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no sample has been added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Configuration used by the next [`recompute`](Self::recompute).
    #[must_use]
    pub fn config(&self) -> &KdeConfig {
        &self.config
    }
}

fn check_finite(values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(Error::invalid(format!(
            "sample {index} is not finite: {}",
            values[index]
        ))),
        None => Ok(()),
    }
}
