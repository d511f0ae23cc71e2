//! Frame-by-frame replay of a fixed sample pool.
//!
//! Frame `k` estimates the density from the first `k` observations of the
//! pool and measures the error against the reference density at those
//! observations. Replaying `1..=n` frames reproduces an animation in which
//! observations arrive one at a time; [`KdeReplay::explore`] reproduces an
//! interactive view where observation count, grid resolution, and bandwidth
//! are chosen freely, within the ranges of a [`SimulatorConfig`].

use crate::error::{Error, Result};
use crate::kde::{DensityEstimate, ErrorReport, IncrementalKdeEstimator, KdeConfig};
use crate::reference::ReferenceDensity;

/// The estimate and its error after a given number of observations.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplayFrame {
    /// Number of pool observations included.
    pub observations: usize,
    /// Density estimate over those observations.
    pub estimate: DensityEstimate,
    /// Error against the reference density at those observations.
    pub report: ErrorReport,
}

/// Replays a sample pool through an [`IncrementalKdeEstimator`].
///
/// # Examples
///
/// ```
/// use kdelab::{KdeConfig, KdeReplay, Normal, NormalSampler};
///
/// let population = Normal::new(3.0, 1.0).unwrap();
/// let pool = NormalSampler::with_seed(3.0, 1.0, 11).unwrap().sample_n(50);
/// let mut replay = KdeReplay::new(pool, KdeConfig::default(), population).unwrap();
///
/// let frames: Vec<_> = replay.frames().collect::<Result<_, _>>().unwrap();
/// assert_eq!(frames.len(), 50);
/// assert_eq!(frames[9].observations, 10);
/// assert_eq!(frames[9].report.len(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct KdeReplay<R> {
    pool: Vec<f64>,
    estimator: IncrementalKdeEstimator,
    reference: R,
    frame_limit: usize,
}

impl<R: ReferenceDensity> KdeReplay<R> {
    /// Creates a replay over `pool`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `pool` is empty or holds a
    /// non-finite value.
    pub fn new(pool: Vec<f64>, config: KdeConfig, reference: R) -> Result<Self> {
        if pool.is_empty() {
            return Err(Error::invalid("replay pool must not be empty"));
        }
        if let Some(index) = pool.iter().position(|x| !x.is_finite()) {
            return Err(Error::invalid(format!(
                "replay pool value {index} is not finite"
            )));
        }

        let frame_limit = pool.len();
        Ok(Self {
            pool,
            estimator: IncrementalKdeEstimator::new(config),
            reference,
            frame_limit,
        })
    }

    /// Caps [`frames`](Self::frames) at `limit` frames (never more than the
    /// pool holds).
    #[must_use]
    pub fn with_frame_limit(mut self, limit: usize) -> Self {
        self.frame_limit = limit.min(self.pool.len());
        self
    }

    /// Computes the frame that includes the first `observations` samples.
    ///
    /// # Errors
    ///
    /// Returns `Error::InsufficientData` for zero observations and
    /// `Error::InvalidInput` when `observations` exceeds the pool size.
    pub fn frame(&mut self, observations: usize) -> Result<ReplayFrame> {
        if observations == 0 {
            return Err(Error::InsufficientData);
        }
        if observations > self.pool.len() {
            return Err(Error::invalid(format!(
                "frame needs {observations} observations but the pool holds {}",
                self.pool.len()
            )));
        }

        self.estimator.reset(&self.pool[..observations])?;
        let estimate = self.estimator.recompute()?.clone();
        let report = self.estimator.error_against(&self.reference)?;
        trace_info!(observations, mse = report.mse(), "replay frame computed");

        Ok(ReplayFrame {
            observations,
            estimate,
            report,
        })
    }

    /// Yields frames `1..=frame_limit` in order.
    pub fn frames(&mut self) -> impl Iterator<Item = Result<ReplayFrame>> + '_ {
        let limit = self.frame_limit;
        (1..=limit).map(move |k| self.frame(k))
    }

    /// Reconfigures the estimator, keeping the current margin, and computes
    /// the frame for `observations`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` for an invalid bandwidth or grid
    /// resolution, or any error of [`frame`](Self::frame).
    pub fn explore(
        &mut self,
        observations: usize,
        grid_resolution: usize,
        bandwidth: f64,
    ) -> Result<ReplayFrame> {
        let margin = self.estimator.config().margin();
        self.estimator
            .configure(bandwidth, grid_resolution, margin)?;
        self.frame(observations)
    }

    /// The whole pool sorted, paired with the reference density, for
    /// drawing the population curve.
    #[must_use]
    pub fn population_curve(&self) -> Vec<(f64, f64)> {
        let mut sorted = self.pool.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
            .into_iter()
            .map(|x| (x, self.reference.density(x)))
            .collect()
    }

    /// Smallest and largest pool value, widened by the configured margin.
    #[must_use]
    pub fn pool_span(&self) -> (f64, f64) {
        let margin = self.estimator.config().margin();
        let (lo, hi) = self
            .pool
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        (lo - margin, hi + margin)
    }

    /// The full sample pool in draw order.
    #[must_use]
    pub fn pool(&self) -> &[f64] {
        &self.pool
    }

    #[must_use]
    pub fn config(&self) -> &KdeConfig {
        self.estimator.config()
    }
}

/// Parameter ranges for the interactive view driven by [`KdeReplay::explore`].
///
/// # Defaults
///
/// - Pool: 1000 observations
/// - Observations: `5..=50`, initially `5`
/// - Grid resolution: `10..=200`, initially `10`
/// - Bandwidth: `[0.1, 2.0]` in steps of `0.05`, initially `0.5`
///
/// # Examples
///
/// ```
/// use kdelab::{KdeConfig, KdeReplay, Normal, NormalSampler, SimulatorConfig};
///
/// let simulator = SimulatorConfig::default();
/// let pool = NormalSampler::with_seed(3.0, 1.0, 5)
///     .unwrap()
///     .sample_n(simulator.pool_size);
/// let mut replay =
///     KdeReplay::new(pool, KdeConfig::default(), Normal::new(3.0, 1.0).unwrap()).unwrap();
///
/// let frame = simulator.initial_frame(&mut replay).unwrap();
/// assert_eq!(frame.observations, 5);
/// assert_eq!(frame.estimate.len(), 10);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulatorConfig {
    /// Number of observations drawn for the pool.
    pub pool_size: usize,
    /// Fewest observations in a frame.
    pub observations_min: usize,
    /// Most observations in a frame.
    pub observations_max: usize,
    /// Observations shown first.
    pub observations_initial: usize,
    /// Coarsest grid.
    pub grid_min: usize,
    /// Finest grid.
    pub grid_max: usize,
    /// Grid resolution shown first.
    pub grid_initial: usize,
    /// Narrowest kernel.
    pub bandwidth_min: f64,
    /// Widest kernel.
    pub bandwidth_max: f64,
    /// Bandwidth increment.
    pub bandwidth_step: f64,
    /// Bandwidth shown first.
    pub bandwidth_initial: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            pool_size: 1000,
            observations_min: 5,
            observations_max: 50,
            observations_initial: 5,
            grid_min: 10,
            grid_max: 200,
            grid_initial: 10,
            bandwidth_min: 0.1,
            bandwidth_max: 2.0,
            bandwidth_step: 0.05,
            bandwidth_initial: 0.5,
        }
    }
}

impl SimulatorConfig {
    /// Rounds `bandwidth` to the nearest step above `bandwidth_min`,
    /// clamped to the bandwidth range.
    #[must_use]
    pub fn snap_bandwidth(&self, bandwidth: f64) -> f64 {
        let steps = ((bandwidth - self.bandwidth_min) / self.bandwidth_step).round();
        (self.bandwidth_min + steps * self.bandwidth_step)
            .clamp(self.bandwidth_min, self.bandwidth_max)
    }

    /// Checks that the values lie inside the configured ranges.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` naming the first value out of range.
    pub fn check(&self, observations: usize, grid_resolution: usize, bandwidth: f64) -> Result<()> {
        if !(self.observations_min..=self.observations_max).contains(&observations) {
            return Err(Error::invalid(format!(
                "observations = {observations} outside {}..={}",
                self.observations_min, self.observations_max
            )));
        }
        if !(self.grid_min..=self.grid_max).contains(&grid_resolution) {
            return Err(Error::invalid(format!(
                "grid resolution = {grid_resolution} outside {}..={}",
                self.grid_min, self.grid_max
            )));
        }
        if !(self.bandwidth_min..=self.bandwidth_max).contains(&bandwidth) {
            return Err(Error::invalid(format!(
                "bandwidth = {bandwidth} outside [{}, {}]",
                self.bandwidth_min, self.bandwidth_max
            )));
        }
        Ok(())
    }

    /// Checks the values, snaps the bandwidth, and explores `replay`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` for out-of-range values, or any error
    /// of [`KdeReplay::explore`].
    pub fn explore<R: ReferenceDensity>(
        &self,
        replay: &mut KdeReplay<R>,
        observations: usize,
        grid_resolution: usize,
        bandwidth: f64,
    ) -> Result<ReplayFrame> {
        self.check(observations, grid_resolution, bandwidth)?;
        replay.explore(observations, grid_resolution, self.snap_bandwidth(bandwidth))
    }

    /// The frame at the initial observations, grid resolution, and bandwidth.
    ///
    /// # Errors
    ///
    /// Same as [`explore`](Self::explore).
    pub fn initial_frame<R: ReferenceDensity>(
        &self,
        replay: &mut KdeReplay<R>,
    ) -> Result<ReplayFrame> {
        self.explore(
            replay,
            self.observations_initial,
            self.grid_initial,
            self.bandwidth_initial,
        )
    }
}
