/// Errors returned by estimator, replay, and distribution operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned for non-finite or empty input, or an invalid configuration.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Returned when a density estimate is requested with no samples.
    #[error("KDE requires at least one sample")]
    InsufficientData,

    /// Returned when an error report is requested before `recompute()`
    /// has run against the current samples and configuration.
    #[error("density estimate is stale: call recompute() first")]
    StaleEstimate,

    /// Returned when an internal invariant is violated.
    #[error("internal error: {0}")]
    Internal(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Error::InvalidInput(reason.into())
    }
}
