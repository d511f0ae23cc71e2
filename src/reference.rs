//! The [`ReferenceDensity`] trait describes the true density a KDE is
//! compared against.
//!
//! Closures implement it directly:
//!
//! ```
//! use kdelab::ReferenceDensity;
//!
//! let uniform = |x: f64| if (0.0..=1.0).contains(&x) { 1.0 } else { 0.0 };
//! assert!((uniform.density(0.5) - 1.0).abs() < f64::EPSILON);
//! ```
//!
//! [`Normal`] implements it through its PDF:
//!
//! ```
//! use kdelab::{Normal, ReferenceDensity};
//!
//! let population = Normal::new(3.0, 1.0).unwrap();
//! assert!((population.density(3.0) - population.pdf(3.0)).abs() < f64::EPSILON);
//! ```

use crate::kernel::Normal;

/// A known probability density evaluated at arbitrary locations.
///
/// Implementations must be pure: the estimator may call
/// [`density`](ReferenceDensity::density) any number of times, in sample
/// order, and expects the same value for the same location.
pub trait ReferenceDensity {
    /// Returns the true density at `x`.
    fn density(&self, x: f64) -> f64;
}

impl<F> ReferenceDensity for F
where
    F: Fn(f64) -> f64,
{
    fn density(&self, x: f64) -> f64 {
        self(x)
    }
}

impl ReferenceDensity for Normal {
    fn density(&self, x: f64) -> f64 {
        self.pdf(x)
    }
}
