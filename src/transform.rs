//! Probability integral transform.
//!
//! A uniform draw `u` in `(0, 1)` pushed through the inverse CDF of a
//! target distribution yields a draw `x = F⁻¹(u)` from that target; going
//! the other way, `F(x)` is uniform. [`IntegralTransform`] produces such
//! pairs one step at a time and keeps the trail of every pair seen.

use crate::kernel::Normal;
use crate::rng_util;

/// One step of the transform.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformDraw {
    /// Uniform draw in `(0, 1)`.
    pub uniform: f64,
    /// `target.quantile(uniform)`.
    pub value: f64,
    /// `target.pdf(value)`, the height of the stem drawn at `value`.
    pub density: f64,
}

/// Maps uniform draws onto a normal target through its inverse CDF.
///
/// # Examples
///
/// ```
/// use kdelab::{IntegralTransform, Normal};
///
/// let mut transform = IntegralTransform::with_seed(Normal::standard(), 3);
/// let draw = transform.step();
///
/// assert!(draw.uniform > 0.0 && draw.uniform < 1.0);
/// assert!((Normal::standard().cdf(draw.value) - draw.uniform).abs() < 1e-6);
/// assert_eq!(transform.history().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct IntegralTransform {
    target: Normal,
    rng: fastrand::Rng,
    history: Vec<TransformDraw>,
}

impl IntegralTransform {
    /// Creates a transform with a random seed.
    #[must_use]
    pub fn new(target: Normal) -> Self {
        Self {
            target,
            rng: fastrand::Rng::new(),
            history: Vec::new(),
        }
    }

    /// Creates a transform with a fixed seed for reproducibility.
    #[must_use]
    pub fn with_seed(target: Normal, seed: u64) -> Self {
        Self {
            target,
            rng: fastrand::Rng::with_seed(seed),
            history: Vec::new(),
        }
    }

    /// Maps a given uniform value without recording it.
    ///
    /// Values at or outside `0` and `1` map to infinite or NaN locations,
    /// mirroring the inverse CDF.
    #[must_use]
    pub fn map(&self, uniform: f64) -> TransformDraw {
        let value = self.target.quantile(uniform);
        TransformDraw {
            uniform,
            value,
            density: self.target.pdf(value),
        }
    }

    /// Draws a uniform value, maps it, and records the pair.
    pub fn step(&mut self) -> TransformDraw {
        let uniform = rng_util::open_unit(&mut self.rng);
        let draw = self.map(uniform);
        self.history.push(draw);
        draw
    }

    /// Performs `n` steps and returns the draws they produced.
    pub fn run(&mut self, n: usize) -> &[TransformDraw] {
        let start = self.history.len();
        for _ in 0..n {
            self.step();
        }
        &self.history[start..]
    }

    /// Every draw so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[TransformDraw] {
        &self.history
    }

    /// The most recent draw.
    #[must_use]
    pub fn latest(&self) -> Option<&TransformDraw> {
        self.history.last()
    }

    #[must_use]
    pub fn target(&self) -> &Normal {
        &self.target
    }

    /// Forgets all recorded draws. The random stream continues.
    pub fn clear(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_median() {
        let transform = IntegralTransform::new(Normal::new(3.0, 2.0).unwrap());
        let draw = transform.map(0.5);
        assert!((draw.value - 3.0).abs() < 1e-9);
        assert!((draw.density - Normal::new(3.0, 2.0).unwrap().pdf(3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_map_edges() {
        let transform = IntegralTransform::new(Normal::standard());
        assert!(transform.map(0.0).value.is_infinite());
        assert!(transform.map(0.0).density.abs() < f64::EPSILON);
    }

    #[test]
    fn test_run_appends_history() {
        let mut transform = IntegralTransform::with_seed(Normal::standard(), 9);
        assert_eq!(transform.run(5).len(), 5);
        assert_eq!(transform.run(3).len(), 3);
        assert_eq!(transform.history().len(), 8);
        assert_eq!(transform.latest(), transform.history().last());

        transform.clear();
        assert!(transform.history().is_empty());
        assert!(transform.latest().is_none());
    }

    #[test]
    fn test_draws_are_consistent() {
        let mut transform = IntegralTransform::with_seed(Normal::standard(), 21);
        for draw in transform.run(200) {
            assert!(draw.uniform > 0.0 && draw.uniform < 1.0);
            assert!(draw.value.is_finite());
            assert!((Normal::standard().cdf(draw.value) - draw.uniform).abs() < 1e-6);
        }
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = IntegralTransform::with_seed(Normal::standard(), 5);
        let mut b = IntegralTransform::with_seed(Normal::standard(), 5);
        assert_eq!(a.run(20), b.run(20));
    }
}
