//! Binomial vs Poisson comparison.
//!
//! - [`Binomial`], [`Poisson`] - PMF and moment generating function
//! - [`PmfComparison`] - both PMFs over `0..=n` with `lambda = n p`
//! - [`MgfComparison`] - both MGFs on a `t` grid, with a zoom around `t = 0`
//! - [`DifferenceSurface`] - aggregated PMF difference over an `(n, p)` mesh
//! - [`DiscreteConfig`] - parameter ranges and curve resolutions

mod comparison;
mod distributions;
mod surface;

pub use comparison::{MgfComparison, PmfComparison};
pub use distributions::{Binomial, Poisson};
pub use surface::DifferenceSurface;

use crate::error::{Error, Result};

/// Parameter ranges and curve resolutions for the Binomial/Poisson views.
///
/// # Defaults
///
/// - `n`: `1..50`, initially `10`
/// - `p`: `[0.01, 1.0]` with 50 surface points, initially `0.5`
/// - MGF `t`: `[-1, 1]` with 100 points, zoom epsilon `0.05`
///
/// # Examples
///
/// ```
/// use kdelab::DiscreteConfig;
///
/// let config = DiscreteConfig::default();
/// let comparison = config.initial_comparison().unwrap();
/// assert_eq!(comparison.successes().len(), 11);
///
/// let mgf = config.mgf(10, 0.5).unwrap();
/// assert_eq!(mgf.t().len(), 100);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscreteConfig {
    /// Smallest trial count on the surface (inclusive).
    pub n_min: u32,
    /// Largest trial count on the surface (exclusive).
    pub n_max: u32,
    /// Trial count shown first.
    pub n_initial: u32,
    /// Smallest success probability.
    pub p_min: f64,
    /// Largest success probability.
    pub p_max: f64,
    /// Success probability shown first.
    pub p_initial: f64,
    /// Number of probabilities on the surface.
    pub p_points: usize,
    /// Lower end of the MGF `t` range.
    pub t_min: f64,
    /// Upper end of the MGF `t` range.
    pub t_max: f64,
    /// Number of points on each MGF curve.
    pub t_points: usize,
    /// Half-width of the zoomed MGF view around `t = 0`.
    pub zoom_epsilon: f64,
}

impl Default for DiscreteConfig {
    fn default() -> Self {
        Self {
            n_min: 1,
            n_max: 50,
            n_initial: 10,
            p_min: 0.01,
            p_max: 1.0,
            p_initial: 0.5,
            p_points: 50,
            t_min: -1.0,
            t_max: 1.0,
            t_points: 100,
            zoom_epsilon: 0.05,
        }
    }
}

impl DiscreteConfig {
    /// Checks that `(n, p)` lies inside the configured ranges.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `n` is outside `n_min..n_max` or
    /// `p` is outside `[p_min, p_max]`.
    pub fn check(&self, n: u32, p: f64) -> Result<()> {
        if !(self.n_min..self.n_max).contains(&n) {
            return Err(Error::invalid(format!(
                "n = {n} outside {}..{}",
                self.n_min, self.n_max
            )));
        }
        if !(self.p_min..=self.p_max).contains(&p) {
            return Err(Error::invalid(format!(
                "p = {p} outside [{}, {}]",
                self.p_min, self.p_max
            )));
        }
        Ok(())
    }

    /// PMF comparison at the initial `(n, p)`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the initial values are out of range.
    pub fn initial_comparison(&self) -> Result<PmfComparison> {
        self.check(self.n_initial, self.p_initial)?;
        PmfComparison::new(self.n_initial, self.p_initial)
    }

    /// MGF comparison over the configured `t` range.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `(n, p)` is out of range or the
    /// `t` range is invalid.
    pub fn mgf(&self, n: u32, p: f64) -> Result<MgfComparison> {
        self.check(n, p)?;
        MgfComparison::new(n, p, self.t_min, self.t_max, self.t_points)
    }

    /// MGF comparison zoomed to `[-zoom_epsilon, zoom_epsilon]`.
    ///
    /// # Errors
    ///
    /// Same as [`mgf`](Self::mgf).
    pub fn mgf_zoom(&self, n: u32, p: f64) -> Result<MgfComparison> {
        self.mgf(n, p)?.zoom(self.zoom_epsilon, self.t_points)
    }

    /// Difference surface over the configured mesh.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the configured ranges are invalid.
    pub fn surface(&self) -> Result<DifferenceSurface> {
        DifferenceSurface::compute(self.n_min..self.n_max, self.p_min, self.p_max, self.p_points)
    }
}
