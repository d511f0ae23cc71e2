#![allow(clippy::cast_precision_loss)]

mod estimator;
mod properties;
mod replay;
