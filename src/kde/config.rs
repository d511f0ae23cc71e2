use crate::error::{Error, Result};

/// Default kernel bandwidth.
pub const DEFAULT_BANDWIDTH: f64 = 0.5;
/// Default number of evaluation grid points.
pub const DEFAULT_GRID_RESOLUTION: usize = 10;
/// Default extra span beyond the sample range on each side of the grid.
pub const DEFAULT_MARGIN: f64 = 1.0;

/// Parameters controlling how the density estimate is evaluated.
///
/// # Defaults
///
/// - Bandwidth: `0.5`
/// - Grid resolution: `10`
/// - Margin: `1.0`
///
/// # Examples
///
/// ```
/// use kdelab::KdeConfig;
///
/// let config = KdeConfig::builder()
///     .bandwidth(0.25)
///     .grid_resolution(200)
///     .build()
///     .unwrap();
///
/// assert!((config.bandwidth() - 0.25).abs() < f64::EPSILON);
/// assert_eq!(config.grid_resolution(), 200);
/// assert!((config.margin() - 1.0).abs() < f64::EPSILON);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KdeConfig {
    bandwidth: f64,
    grid_resolution: usize,
    margin: f64,
}

impl KdeConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `bandwidth` is not finite and
    /// positive, `grid_resolution` is below 2, or `margin` is not finite
    /// and non-negative.
    pub fn new(bandwidth: f64, grid_resolution: usize, margin: f64) -> Result<Self> {
        if !bandwidth.is_finite() || bandwidth <= 0.0 {
            return Err(Error::invalid(format!(
                "bandwidth must be finite and positive, got {bandwidth}"
            )));
        }
        if grid_resolution < 2 {
            return Err(Error::invalid(format!(
                "grid resolution must be at least 2, got {grid_resolution}"
            )));
        }
        if !margin.is_finite() || margin < 0.0 {
            return Err(Error::invalid(format!(
                "margin must be finite and non-negative, got {margin}"
            )));
        }

        Ok(Self {
            bandwidth,
            grid_resolution,
            margin,
        })
    }

    /// Returns a builder starting from the default configuration.
    #[must_use]
    pub fn builder() -> KdeConfigBuilder {
        KdeConfigBuilder::default()
    }

    /// Standard deviation of each Gaussian kernel.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Number of evaluation grid points.
    #[must_use]
    pub fn grid_resolution(&self) -> usize {
        self.grid_resolution
    }

    /// Extra span added on both sides of the sample range.
    #[must_use]
    pub fn margin(&self) -> f64 {
        self.margin
    }
}

impl Default for KdeConfig {
    fn default() -> Self {
        Self {
            bandwidth: DEFAULT_BANDWIDTH,
            grid_resolution: DEFAULT_GRID_RESOLUTION,
            margin: DEFAULT_MARGIN,
        }
    }
}

/// Deserialized values go through [`KdeConfig::new`].
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for KdeConfig {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Fields {
            bandwidth: f64,
            grid_resolution: usize,
            margin: f64,
        }

        let Fields {
            bandwidth,
            grid_resolution,
            margin,
        } = Fields::deserialize(deserializer)?;
        Self::new(bandwidth, grid_resolution, margin).map_err(serde::de::Error::custom)
    }
}

/// Builder for [`KdeConfig`]. Values are validated in [`build`](Self::build).
#[derive(Clone, Copy, Debug)]
pub struct KdeConfigBuilder {
    bandwidth: f64,
    grid_resolution: usize,
    margin: f64,
}

impl KdeConfigBuilder {
    #[must_use]
    pub fn bandwidth(mut self, bandwidth: f64) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    #[must_use]
    pub fn grid_resolution(mut self, grid_resolution: usize) -> Self {
        self.grid_resolution = grid_resolution;
        self
    }

    #[must_use]
    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` under the same conditions as
    /// [`KdeConfig::new`].
    pub fn build(self) -> Result<KdeConfig> {
        KdeConfig::new(self.bandwidth, self.grid_resolution, self.margin)
    }
}

impl Default for KdeConfigBuilder {
    fn default() -> Self {
        let defaults = KdeConfig::default();
        Self {
            bandwidth: defaults.bandwidth,
            grid_resolution: defaults.grid_resolution,
            margin: defaults.margin,
        }
    }
}
