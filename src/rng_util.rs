/// Draw a uniform `f64` from the open interval `(0, 1)`.
#[inline]
pub(crate) fn open_unit(rng: &mut fastrand::Rng) -> f64 {
    loop {
        let u = rng.f64();
        if u > 0.0 {
            return u;
        }
    }
}

/// Draw a standard normal variate with the Box-Muller transform.
#[inline]
pub(crate) fn standard_normal(rng: &mut fastrand::Rng) -> f64 {
    let u1 = open_unit(rng);
    let u2 = rng.f64();
    (-2.0 * u1.ln()).sqrt() * (2.0 * core::f64::consts::PI * u2).cos()
}
