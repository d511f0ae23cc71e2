use super::distributions::{Binomial, Poisson};
use crate::error::{Error, Result};
use crate::grid;

/// Binomial PMF next to its Poisson approximation (`lambda = n p`) over
/// the binomial support `0..=n`.
///
/// # Examples
///
/// ```
/// use kdelab::PmfComparison;
///
/// let comparison = PmfComparison::new(40, 0.05).unwrap();
/// assert_eq!(comparison.successes().len(), 41);
/// // The Poisson tail beyond n is missing, so the total difference is small and positive.
/// assert!(comparison.total_difference() >= 0.0);
/// assert!(comparison.total_difference() < 1e-6);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PmfComparison {
    binomial: Binomial,
    poisson: Poisson,
    successes: Vec<u32>,
    binomial_pmf: Vec<f64>,
    poisson_pmf: Vec<f64>,
}

impl PmfComparison {
    /// Evaluates both PMFs for `n` trials with success probability `p`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `p` is outside `[0, 1]`.
    pub fn new(n: u32, p: f64) -> Result<Self> {
        let binomial = Binomial::new(n, p)?;
        let poisson = Poisson::approximating(&binomial);

        let successes: Vec<u32> = (0..=n).collect();
        let binomial_pmf = successes.iter().map(|&k| binomial.pmf(k)).collect();
        let poisson_pmf = successes.iter().map(|&k| poisson.pmf(k)).collect();

        Ok(Self {
            binomial,
            poisson,
            successes,
            binomial_pmf,
            poisson_pmf,
        })
    }

    #[must_use]
    pub fn binomial(&self) -> &Binomial {
        &self.binomial
    }

    #[must_use]
    pub fn poisson(&self) -> &Poisson {
        &self.poisson
    }

    /// Success counts `0..=n`.
    #[must_use]
    pub fn successes(&self) -> &[u32] {
        &self.successes
    }

    #[must_use]
    pub fn binomial_pmf(&self) -> &[f64] {
        &self.binomial_pmf
    }

    #[must_use]
    pub fn poisson_pmf(&self) -> &[f64] {
        &self.poisson_pmf
    }

    /// Pointwise `binomial - poisson` at each success count.
    #[must_use]
    pub fn difference(&self) -> Vec<f64> {
        self.binomial_pmf
            .iter()
            .zip(&self.poisson_pmf)
            .map(|(b, p)| b - p)
            .collect()
    }

    /// Sum of the pointwise differences.
    #[must_use]
    pub fn total_difference(&self) -> f64 {
        self.binomial_pmf
            .iter()
            .zip(&self.poisson_pmf)
            .map(|(b, p)| b - p)
            .sum()
    }
}

/// Binomial and Poisson moment generating functions on a common `t` grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MgfComparison {
    binomial: Binomial,
    t: Vec<f64>,
    binomial_mgf: Vec<f64>,
    poisson_mgf: Vec<f64>,
}

impl MgfComparison {
    /// Evaluates both MGFs at `points` evenly spaced values of `t` in
    /// `[t_low, t_high]`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `p` is outside `[0, 1]`, the range
    /// is empty or not finite, or `points` is below 2.
    pub fn new(n: u32, p: f64, t_low: f64, t_high: f64, points: usize) -> Result<Self> {
        let binomial = Binomial::new(n, p)?;
        Self::over(binomial, t_low, t_high, points)
    }

    fn over(binomial: Binomial, t_low: f64, t_high: f64, points: usize) -> Result<Self> {
        if !t_low.is_finite() || !t_high.is_finite() || t_low >= t_high {
            return Err(Error::invalid(format!(
                "t range must be finite and increasing, got [{t_low}, {t_high}]"
            )));
        }
        if points < 2 {
            return Err(Error::invalid(format!(
                "MGF curve needs at least 2 points, got {points}"
            )));
        }

        let poisson = Poisson::approximating(&binomial);
        let t = grid::linspace(t_low, t_high, points);
        let binomial_mgf = t.iter().map(|&t| binomial.mgf(t)).collect();
        let poisson_mgf = t.iter().map(|&t| poisson.mgf(t)).collect();

        Ok(Self {
            binomial,
            t,
            binomial_mgf,
            poisson_mgf,
        })
    }

    /// The same comparison restricted to `[-epsilon, epsilon]`, where both
    /// MGFs meet at `1` with equal slope.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `epsilon` is not finite and
    /// positive, or `points` is below 2.
    pub fn zoom(&self, epsilon: f64, points: usize) -> Result<Self> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(Error::invalid(format!(
                "zoom epsilon must be finite and positive, got {epsilon}"
            )));
        }
        Self::over(self.binomial, -epsilon, epsilon, points)
    }

    #[must_use]
    pub fn t(&self) -> &[f64] {
        &self.t
    }

    #[must_use]
    pub fn binomial_mgf(&self) -> &[f64] {
        &self.binomial_mgf
    }

    #[must_use]
    pub fn poisson_mgf(&self) -> &[f64] {
        &self.poisson_mgf
    }

    /// Largest `|binomial - poisson|` over the grid.
    #[must_use]
    pub fn max_gap(&self) -> f64 {
        self.binomial_mgf
            .iter()
            .zip(&self.poisson_mgf)
            .fold(0.0, |acc: f64, (b, p)| acc.max((b - p).abs()))
    }

    /// Smallest and largest value across both curves, for axis limits.
    #[must_use]
    pub fn value_range(&self) -> (f64, f64) {
        self.binomial_mgf
            .iter()
            .chain(&self.poisson_mgf)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}
