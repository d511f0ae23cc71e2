/// Per-sample and aggregate error of a density estimate against a
/// reference density.
///
/// All per-sample sequences are in sample insertion order. Each error is
/// `reference(s_i) - estimate(s_i)`, where the estimate is interpolated on
/// the grid with flat extrapolation past the grid bounds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorReport {
    locations: Vec<f64>,
    reference: Vec<f64>,
    estimated: Vec<f64>,
    errors: Vec<f64>,
    mse: f64,
    rmse: f64,
}

impl ErrorReport {
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn new(locations: Vec<f64>, reference: Vec<f64>, estimated: Vec<f64>) -> Self {
        debug_assert_eq!(locations.len(), reference.len());
        debug_assert_eq!(locations.len(), estimated.len());

        let errors: Vec<f64> = reference
            .iter()
            .zip(&estimated)
            .map(|(truth, est)| truth - est)
            .collect();

        let mse = if errors.is_empty() {
            0.0
        } else {
            errors.iter().map(|e| e * e).sum::<f64>() / errors.len() as f64
        };

        Self {
            locations,
            reference,
            estimated,
            errors,
            mse,
            rmse: mse.sqrt(),
        }
    }

    /// Signed errors, one per sample.
    #[must_use]
    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    /// Sample locations the errors were measured at.
    #[must_use]
    pub fn locations(&self) -> &[f64] {
        &self.locations
    }

    /// Reference density at each sample.
    #[must_use]
    pub fn reference(&self) -> &[f64] {
        &self.reference
    }

    /// Interpolated estimate at each sample.
    #[must_use]
    pub fn estimated(&self) -> &[f64] {
        &self.estimated
    }

    /// Mean squared error.
    #[must_use]
    pub fn mse(&self) -> f64 {
        self.mse
    }

    /// Root mean squared error.
    #[must_use]
    pub fn rmse(&self) -> f64 {
        self.rmse
    }

    /// Number of samples measured.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if the report covers no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Largest absolute error, or `0.0` for an empty report.
    #[must_use]
    pub fn max_abs_error(&self) -> f64 {
        self.errors.iter().fold(0.0, |acc: f64, e| acc.max(e.abs()))
    }

    /// `(location, error)` pairs for an error scatter plot.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.locations
            .iter()
            .copied()
            .zip(self.errors.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mse_and_rmse() {
        let report = ErrorReport::new(
            vec![0.0, 1.0],
            vec![0.5, 0.2],
            vec![0.2, 0.6],
        );
        // errors: 0.3, -0.4 -> mse = (0.09 + 0.16) / 2
        assert!((report.errors()[0] - 0.3).abs() < 1e-12);
        assert!((report.errors()[1] + 0.4).abs() < 1e-12);
        assert!((report.mse() - 0.125).abs() < 1e-12);
        assert!((report.rmse() - 0.125_f64.sqrt()).abs() < 1e-12);
        assert!((report.max_abs_error() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_points_pair_locations_with_errors() {
        let report = ErrorReport::new(vec![2.0, 3.0], vec![1.0, 1.0], vec![0.5, 1.5]);
        let points: Vec<_> = report.points().collect();
        assert_eq!(points.len(), 2);
        assert!((points[0].0 - 2.0).abs() < f64::EPSILON);
        assert!((points[1].1 + 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_report() {
        let report = ErrorReport::new(vec![], vec![], vec![]);
        assert!(report.is_empty());
        assert!(report.mse().abs() < f64::EPSILON);
        assert!(report.max_abs_error().abs() < f64::EPSILON);
    }
}
