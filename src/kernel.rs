//! Gaussian kernel and normal distribution helpers.

use crate::error::{Error, Result};

const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Gaussian kernel `exp(-(x - mean)² / (2 std²)) / (std √(2π))`.
///
/// # Examples
///
/// ```
/// use kdelab::kernel::gaussian;
///
/// let peak = gaussian(3.0, 3.0, 0.5);
/// assert!((peak - 0.797_884_560_802_865_4).abs() < 1e-12);
/// ```
#[inline]
#[must_use]
pub fn gaussian(x: f64, mean: f64, std: f64) -> f64 {
    let z = (x - mean) / std;
    INV_SQRT_2PI * (-0.5 * z * z).exp() / std
}

/// Standard normal PDF.
#[inline]
#[must_use]
pub fn standard_normal_pdf(z: f64) -> f64 {
    INV_SQRT_2PI * (-0.5 * z * z).exp()
}

/// Standard normal CDF (Hart rational approximation, absolute error below 1e-7).
#[must_use]
pub fn standard_normal_cdf(z: f64) -> f64 {
    if z < -8.0 {
        return 0.0;
    }
    if z > 8.0 {
        return 1.0;
    }

    let abs_z = z.abs();
    let t = 1.0 / (1.0 + 0.231_641_9 * abs_z);
    let poly = t
        * (0.319_381_530
            + t * (-0.356_563_782 + t * (1.781_477_937 + t * (-1.821_255_978 + t * 1.330_274_429))));
    let upper = 1.0 - standard_normal_pdf(abs_z) * poly;

    if z >= 0.0 { upper } else { 1.0 - upper }
}

/// Standard normal quantile (Acklam's rational approximation).
///
/// Relative error is below 1.15e-9 on the open interval `(0, 1)`. Returns
/// `-inf` at `0`, `+inf` at `1`, and NaN outside `[0, 1]`.
#[must_use]
#[allow(clippy::excessive_precision, clippy::unreadable_literal)]
pub fn standard_normal_quantile(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969683028665376e+01,
        2.209460984245205e+02,
        -2.759285104469687e+02,
        1.383577518672690e+02,
        -3.066479806614716e+01,
        2.506628277459239e+00,
    ];
    const B: [f64; 5] = [
        -5.447609879822406e+01,
        1.615858368580409e+02,
        -1.556989798598866e+02,
        6.680131188771972e+01,
        -1.328068155288572e+01,
    ];
    const C: [f64; 6] = [
        -7.784894002430293e-03,
        -3.223964580411365e-01,
        -2.400758277161838e+00,
        -2.549732539343734e+00,
        4.374664141464968e+00,
        2.938163982698783e+00,
    ];
    const D: [f64; 4] = [
        7.784695709041462e-03,
        3.224671290700398e-01,
        2.445134137142996e+00,
        3.754408661907416e+00,
    ];
    const P_LOW: f64 = 0.02425;

    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    let tail = |q: f64| {
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    };

    if p < P_LOW {
        tail((-2.0 * p.ln()).sqrt())
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        -tail((-2.0 * (1.0 - p).ln()).sqrt())
    }
}

/// A normal distribution `N(mean, std²)`.
///
/// Used as the reference density for KDE error reports and as the target
/// of the probability integral transform.
///
/// # Examples
///
/// ```
/// use kdelab::Normal;
///
/// let normal = Normal::new(3.0, 1.0).unwrap();
/// assert!((normal.cdf(3.0) - 0.5).abs() < 1e-7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Normal {
    mean: f64,
    std: f64,
}

impl Normal {
    /// Creates a normal distribution.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `mean` is not finite or `std` is not
    /// finite and positive.
    pub fn new(mean: f64, std: f64) -> Result<Self> {
        if !mean.is_finite() || !std.is_finite() || std <= 0.0 {
            return Err(Error::invalid(format!(
                "normal distribution requires finite mean and std > 0, got mean={mean}, std={std}"
            )));
        }
        Ok(Self { mean, std })
    }

    /// The standard normal `N(0, 1)`.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            std: 1.0,
        }
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    #[must_use]
    pub fn std(&self) -> f64 {
        self.std
    }

    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        gaussian(x, self.mean, self.std)
    }

    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        standard_normal_cdf((x - self.mean) / self.std)
    }

    /// Inverse CDF: `mean + std * Φ⁻¹(p)`.
    #[must_use]
    pub fn quantile(&self, p: f64) -> f64 {
        self.mean + self.std * standard_normal_quantile(p)
    }
}

impl Default for Normal {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Normal {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Fields {
            mean: f64,
            std: f64,
        }

        let Fields { mean, std } = Fields::deserialize(deserializer)?;
        Self::new(mean, std).map_err(serde::de::Error::custom)
    }
}
