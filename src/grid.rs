//! Evaluation grid construction and linear interpolation.

/// Generates `n_points` evenly spaced values from `low` to `high` inclusive.
///
/// The first and last points are exactly `low` and `high`.
///
/// # Examples
///
/// ```
/// use kdelab::grid::linspace;
///
/// assert_eq!(linspace(2.0, 4.0, 5), vec![2.0, 2.5, 3.0, 3.5, 4.0]);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linspace(low: f64, high: f64, n_points: usize) -> Vec<f64> {
    if n_points == 0 {
        return vec![];
    }
    if n_points == 1 {
        return vec![low];
    }

    let range = high - low;
    let last = n_points - 1;
    let mut result = Vec::with_capacity(n_points);

    for i in 0..last {
        let fraction = i as f64 / last as f64;
        result.push(low + fraction * range);
    }
    result.push(high);

    result
}

/// Linearly interpolates `values` (sampled at `xs`) at `x`.
///
/// `xs` must be increasing and the same length as `values`. Locations
/// outside `[xs[0], xs[last]]` take the nearest endpoint's value. Returns
/// NaN for an empty table or a NaN location.
#[must_use]
pub fn interpolate(xs: &[f64], values: &[f64], x: f64) -> f64 {
    debug_assert_eq!(xs.len(), values.len());
    let (Some(&first_x), Some(&last_x), Some(&first_y), Some(&last_y)) =
        (xs.first(), xs.last(), values.first(), values.last())
    else {
        return f64::NAN;
    };
    if x.is_nan() {
        return f64::NAN;
    }

    if x <= first_x {
        return first_y;
    }
    if x >= last_x {
        return last_y;
    }

    // First index whose grid point is strictly greater than x; 1..len-1 here.
    let hi = xs.partition_point(|&g| g <= x);
    let lo = hi - 1;
    let (x0, x1) = (xs[lo], xs[hi]);
    let (y0, y1) = (values[lo], values[hi]);

    let t = (x - x0) / (x1 - x0);
    y0 + t * (y1 - y0)
}

/// Returns `true` if every point is strictly greater than the previous one.
#[must_use]
pub fn is_strictly_increasing(points: &[f64]) -> bool {
    points.windows(2).all(|w| w[0] < w[1])
}
