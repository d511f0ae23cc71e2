//! Kernel Density Estimation with online error tracking.
//!
//! - [`IncrementalKdeEstimator`] - growing sample set, lazily recomputed estimate
//! - [`KdeConfig`] - bandwidth, grid resolution, and grid margin
//! - [`DensityEstimate`] - grid, density, and per-sample kernel curves
//! - [`ErrorReport`] - per-sample error, MSE, and RMSE against a reference density

pub mod config;
mod estimate;
mod estimator;
mod report;

pub use config::{KdeConfig, KdeConfigBuilder};
pub use estimate::DensityEstimate;
pub use estimator::IncrementalKdeEstimator;
pub use report::ErrorReport;
