use kdelab::kernel::gaussian;
use kdelab::{Error, IncrementalKdeEstimator, KdeConfig, Normal};

// =============================================================================
// Worked examples
// =============================================================================

#[test]
fn test_single_sample_on_five_point_grid() {
    let mut kde = IncrementalKdeEstimator::default();
    kde.reset(&[3.0]).unwrap();
    kde.configure(0.5, 5, 1.0).unwrap();

    let estimate = kde.recompute().unwrap();
    let expected_grid = [2.0, 2.5, 3.0, 3.5, 4.0];

    assert_eq!(estimate.len(), 5);
    for (g, e) in estimate.grid().iter().zip(expected_grid) {
        assert!((g - e).abs() < 1e-12, "grid point {g} should be {e}");
    }
    assert!(
        (estimate.density()[2] - 0.7979).abs() < 1e-4,
        "density at 3.0 = {}",
        estimate.density()[2]
    );
    assert_eq!(estimate.n_samples(), 1);
}

#[test]
fn test_two_samples_without_margin() {
    let mut kde = IncrementalKdeEstimator::new(KdeConfig::new(1.0, 3, 0.0).unwrap());
    kde.reset(&[1.0, 5.0]).unwrap();

    let estimate = kde.recompute().unwrap();
    assert_eq!(estimate.grid(), &[1.0, 3.0, 5.0]);

    let expected = (gaussian(3.0, 1.0, 1.0) + gaussian(3.0, 5.0, 1.0)) / 2.0;
    assert!((estimate.density()[1] - expected).abs() < 1e-15);
    assert!((estimate.density()[1] - 0.1080).abs() < 1e-4);
}

#[test]
fn test_grid_follows_sample_span() {
    let mut kde = IncrementalKdeEstimator::new(KdeConfig::new(0.5, 11, 1.0).unwrap());
    kde.reset(&[0.0, 1.0]).unwrap();
    let first = kde.recompute().unwrap().grid().to_vec();

    kde.add_sample(9.0).unwrap();
    let second = kde.recompute().unwrap().grid().to_vec();

    assert_eq!(first.len(), second.len());
    assert!((first[10] - 2.0).abs() < 1e-12);
    assert!((second[10] - 10.0).abs() < 1e-12);
    assert!((second[0] - -1.0).abs() < 1e-12);
}

#[test]
fn test_estimate_never_reuses_partial_sums() {
    let samples = [0.2, 1.7, -0.4, 2.5, 0.9];

    let mut incremental = IncrementalKdeEstimator::default();
    incremental.reset(&samples[..1]).unwrap();
    for &s in &samples[1..] {
        incremental.recompute().unwrap();
        incremental.add_sample(s).unwrap();
    }
    let grown = incremental.recompute().unwrap().clone();

    let mut batch = IncrementalKdeEstimator::default();
    batch.reset(&samples).unwrap();
    let direct = batch.recompute().unwrap().clone();

    assert_eq!(grown, direct);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_reset_empty_is_invalid_input() {
    let mut kde = IncrementalKdeEstimator::default();
    let err = kde.reset(&[]).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(err.to_string().contains("empty"));
}

#[test]
fn test_stale_after_add_sample() {
    let mut kde = IncrementalKdeEstimator::default();
    kde.reset(&[1.0, 2.0, 3.0]).unwrap();
    kde.recompute().unwrap();
    kde.add_sample(4.0).unwrap();

    let population = Normal::new(2.0, 1.0).unwrap();
    assert!(matches!(
        kde.error_against(&population),
        Err(Error::StaleEstimate)
    ));

    kde.recompute().unwrap();
    let report = kde.error_against(&population).unwrap();
    assert_eq!(report.len(), 4);
}

#[test]
fn test_stale_after_configure() {
    let mut kde = IncrementalKdeEstimator::default();
    kde.reset(&[1.0, 2.0]).unwrap();
    kde.recompute().unwrap();
    kde.configure(1.0, 30, 2.0).unwrap();
    assert!(matches!(
        kde.error_against(&|_x: f64| 0.1),
        Err(Error::StaleEstimate)
    ));
}

#[test]
fn test_recompute_with_no_samples() {
    let mut kde = IncrementalKdeEstimator::default();
    assert!(kde.add_sample(f64::NAN).is_err());
    assert!(matches!(kde.recompute(), Err(Error::InsufficientData)));
}

#[test]
fn test_configure_rejects_invalid_parameters() {
    let mut kde = IncrementalKdeEstimator::default();
    assert!(kde.configure(0.0, 10, 1.0).is_err());
    assert!(kde.configure(0.5, 1, 1.0).is_err());
    assert!(kde.configure(0.5, 10, -1.0).is_err());
    assert!(kde.configure(0.5, 10, f64::NAN).is_err());
}

// =============================================================================
// Error report
// =============================================================================

#[test]
fn test_error_report_interpolates_between_grid_points() {
    let mut kde = IncrementalKdeEstimator::new(KdeConfig::new(1.0, 3, 0.0).unwrap());
    kde.reset(&[1.0, 5.0]).unwrap();
    kde.add_sample(2.0).unwrap();
    let estimate = kde.recompute().unwrap().clone();

    let report = kde.error_against(&|_x: f64| 0.0).unwrap();
    // 2.0 lies halfway between grid points 1.0 and 3.0.
    let expected = 0.5 * (estimate.density()[0] + estimate.density()[1]);
    assert!((report.estimated()[2] - expected).abs() < 1e-15);
    assert!((report.errors()[2] + expected).abs() < 1e-15);
}

#[test]
fn test_error_report_aggregates() {
    let mut kde = IncrementalKdeEstimator::default();
    kde.reset(&[2.0, 2.5, 3.0, 3.5, 4.0]).unwrap();
    kde.recompute().unwrap();

    let population = Normal::new(3.0, 1.0).unwrap();
    let report = kde.error_against(&population).unwrap();

    let mse = report.errors().iter().map(|e| e * e).sum::<f64>() / report.len() as f64;
    assert!((report.mse() - mse).abs() < 1e-15);
    assert!((report.rmse() - mse.sqrt()).abs() < 1e-15);
    for ((reference, estimated), error) in report
        .reference()
        .iter()
        .zip(report.estimated())
        .zip(report.errors())
    {
        assert!((reference - estimated - error).abs() < 1e-15);
    }
}

#[test]
fn test_error_against_dyn_reference() {
    let mut kde = IncrementalKdeEstimator::default();
    kde.reset(&[0.0]).unwrap();
    kde.recompute().unwrap();

    let reference: Box<dyn kdelab::ReferenceDensity> = Box::new(Normal::standard());
    let report = kde.error_against(reference.as_ref()).unwrap();
    assert_eq!(report.len(), 1);
}
