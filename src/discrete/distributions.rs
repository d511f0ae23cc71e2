use crate::error::{Error, Result};

/// `ln(k!)` by direct summation. Exact enough for the trial counts an
/// interactive comparison uses.
fn ln_factorial(k: u32) -> f64 {
    (2..=k).map(|i| f64::from(i).ln()).sum()
}

/// Binomial distribution: number of successes in `n` trials with success
/// probability `p`.
///
/// # Examples
///
/// ```
/// use kdelab::Binomial;
///
/// let binomial = Binomial::new(10, 0.5).unwrap();
/// assert!((binomial.pmf(5) - 0.246_093_75).abs() < 1e-12);
/// assert!((binomial.mgf(0.0) - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Binomial {
    n: u32,
    p: f64,
}

impl Binomial {
    /// Creates a binomial distribution.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `p` is outside `[0, 1]`.
    pub fn new(n: u32, p: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::invalid(format!(
                "binomial probability must be in [0, 1], got {p}"
            )));
        }
        Ok(Self { n, p })
    }

    #[must_use]
    pub fn n(&self) -> u32 {
        self.n
    }

    #[must_use]
    pub fn p(&self) -> f64 {
        self.p
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        f64::from(self.n) * self.p
    }

    #[must_use]
    pub fn variance(&self) -> f64 {
        f64::from(self.n) * self.p * (1.0 - self.p)
    }

    /// Probability of exactly `k` successes.
    #[must_use]
    pub fn pmf(&self, k: u32) -> f64 {
        if k > self.n {
            return 0.0;
        }
        // Degenerate endpoints put all mass on 0 or n successes.
        if self.p <= 0.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        if self.p >= 1.0 {
            return if k == self.n { 1.0 } else { 0.0 };
        }

        let ln_choose = ln_factorial(self.n) - ln_factorial(k) - ln_factorial(self.n - k);
        let ln_pmf = ln_choose
            + f64::from(k) * self.p.ln()
            + f64::from(self.n - k) * (1.0 - self.p).ln();
        ln_pmf.exp()
    }

    /// Moment generating function `(p eᵗ + 1 - p)ⁿ`.
    #[must_use]
    pub fn mgf(&self, t: f64) -> f64 {
        (self.p * t.exp() + (1.0 - self.p)).powf(f64::from(self.n))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Binomial {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Fields {
            n: u32,
            p: f64,
        }

        let Fields { n, p } = Fields::deserialize(deserializer)?;
        Self::new(n, p).map_err(serde::de::Error::custom)
    }
}

/// Poisson distribution with rate `lambda`.
///
/// # Examples
///
/// ```
/// use kdelab::Poisson;
///
/// let poisson = Poisson::new(2.0).unwrap();
/// assert!((poisson.pmf(0) - (-2.0_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Poisson {
    lambda: f64,
}

impl Poisson {
    /// Creates a Poisson distribution.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `lambda` is negative or not finite.
    pub fn new(lambda: f64) -> Result<Self> {
        if !lambda.is_finite() || lambda < 0.0 {
            return Err(Error::invalid(format!(
                "poisson rate must be finite and non-negative, got {lambda}"
            )));
        }
        Ok(Self { lambda })
    }

    /// The Poisson approximation of a binomial: `lambda = n p`.
    #[must_use]
    pub fn approximating(binomial: &Binomial) -> Self {
        Self {
            lambda: binomial.mean(),
        }
    }

    #[must_use]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Probability of exactly `k` events.
    #[must_use]
    pub fn pmf(&self, k: u32) -> f64 {
        if self.lambda <= 0.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        (f64::from(k) * self.lambda.ln() - self.lambda - ln_factorial(k)).exp()
    }

    /// Moment generating function `exp(lambda (eᵗ - 1))`.
    #[must_use]
    pub fn mgf(&self, t: f64) -> f64 {
        (self.lambda * (t.exp() - 1.0)).exp()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Poisson {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Fields {
            lambda: f64,
        }

        let Fields { lambda } = Fields::deserialize(deserializer)?;
        Self::new(lambda).map_err(serde::de::Error::custom)
    }
}
