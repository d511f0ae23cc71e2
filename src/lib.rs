#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Numeric cores for statistics teaching visualizations: an incremental
//! Gaussian kernel density estimator that tracks its error against a known
//! population density, a Binomial vs Poisson comparison of PMFs and moment
//! generating functions, and the probability integral transform. Every type
//! computes the numbers a plot needs; drawing them is left to the caller.
//!
//! # Getting Started
//!
//! Estimate a density from observations arriving one at a time:
//!
//! ```
//! use kdelab::prelude::*;
//!
//! let population = Normal::new(3.0, 1.0).unwrap();
//! let mut sampler = NormalSampler::with_seed(3.0, 1.0, 42).unwrap();
//!
//! let mut kde = IncrementalKdeEstimator::new(
//!     KdeConfig::builder().bandwidth(0.5).grid_resolution(50).build().unwrap(),
//! );
//! kde.reset(&sampler.sample_n(5)).unwrap();
//!
//! for _ in 0..20 {
//!     kde.add_sample(sampler.sample()).unwrap();
//!     let estimate = kde.recompute().unwrap();
//!     assert_eq!(estimate.len(), 50);
//!
//!     let report = kde.error_against(&population).unwrap();
//!     assert_eq!(report.len(), kde.len());
//! }
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`IncrementalKdeEstimator`] | Growing sample set; the estimate is rebuilt on [`recompute`](IncrementalKdeEstimator::recompute) and is either fresh or stale. |
//! | [`KdeConfig`] | Bandwidth, grid resolution, and grid margin. |
//! | [`DensityEstimate`] | Grid, density, and the kernel curve of every sample. |
//! | [`ErrorReport`] | Per-sample error, MSE, and RMSE against a [`ReferenceDensity`]. |
//! | [`KdeReplay`] | Frame `k` of a fixed sample pool: estimate and error from the first `k` observations. |
//! | [`SimulatorConfig`] | Observation, grid, and bandwidth ranges for exploring a replay. |
//! | [`PmfComparison`], [`MgfComparison`], [`DifferenceSurface`] | Binomial vs Poisson. |
//! | [`IntegralTransform`] | Uniform draws mapped through the normal inverse CDF. |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on configs, estimates, reports, frames, and draws | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) on reset, recompute, error reports, replay frames, and surfaces | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod discrete;
mod error;
pub mod grid;
pub mod kde;
pub mod kernel;
mod reference;
pub mod replay;
mod rng_util;
mod sampling;
pub mod transform;

pub use discrete::{
    Binomial, DifferenceSurface, DiscreteConfig, MgfComparison, PmfComparison, Poisson,
};
pub use error::{Error, Result};
pub use kde::{DensityEstimate, ErrorReport, IncrementalKdeEstimator, KdeConfig, KdeConfigBuilder};
pub use kernel::Normal;
pub use reference::ReferenceDensity;
pub use replay::{KdeReplay, ReplayFrame, SimulatorConfig};
pub use sampling::NormalSampler;
pub use transform::{IntegralTransform, TransformDraw};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use kdelab::prelude::*;
/// ```
pub mod prelude {
    pub use crate::discrete::{
        Binomial, DifferenceSurface, DiscreteConfig, MgfComparison, PmfComparison, Poisson,
    };
    pub use crate::error::{Error, Result};
    pub use crate::kde::{DensityEstimate, ErrorReport, IncrementalKdeEstimator, KdeConfig};
    pub use crate::kernel::Normal;
    pub use crate::reference::ReferenceDensity;
    pub use crate::replay::{KdeReplay, ReplayFrame, SimulatorConfig};
    pub use crate::sampling::NormalSampler;
    pub use crate::transform::{IntegralTransform, TransformDraw};
}
