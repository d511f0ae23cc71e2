use kdelab::grid::is_strictly_increasing;
use kdelab::{IncrementalKdeEstimator, KdeConfig, Normal, NormalSampler};

fn seeded_estimator(n: usize, config: KdeConfig, seed: u64) -> IncrementalKdeEstimator {
    let mut sampler = NormalSampler::with_seed(3.0, 1.0, seed).unwrap();
    let mut kde = IncrementalKdeEstimator::new(config);
    kde.reset(&sampler.sample_n(n)).unwrap();
    kde
}

#[test]
fn test_density_is_non_negative() {
    for seed in 0..10 {
        let mut kde = seeded_estimator(25, KdeConfig::default(), seed);
        let estimate = kde.recompute().unwrap();
        assert!(estimate.density().iter().all(|&f| f >= 0.0));
    }
}

#[test]
fn test_density_normalizes_on_fine_grid() {
    let config = KdeConfig::new(0.5, 4000, 5.0).unwrap();
    let mut kde = seeded_estimator(40, config, 17);
    let estimate = kde.recompute().unwrap();
    let total = estimate.riemann_sum();
    assert!((total - 1.0).abs() < 1e-2, "riemann sum = {total}");
}

#[test]
fn test_normalization_improves_with_resolution() {
    let coarse = KdeConfig::new(0.3, 8, 0.0).unwrap();
    let fine = KdeConfig::new(0.3, 2000, 3.0).unwrap();

    let coarse_total = seeded_estimator(30, coarse, 5).recompute().unwrap().riemann_sum();
    let fine_total = seeded_estimator(30, fine, 5).recompute().unwrap().riemann_sum();
    assert!((fine_total - 1.0).abs() <= (coarse_total - 1.0).abs());
}

#[test]
fn test_recompute_is_idempotent() {
    let mut kde = seeded_estimator(100, KdeConfig::new(0.35, 64, 1.0).unwrap(), 3);
    let first = kde.recompute().unwrap().clone();
    let second = kde.recompute().unwrap().clone();
    assert_eq!(first.grid(), second.grid());
    assert_eq!(first.density(), second.density());
}

#[test]
fn test_grid_strictly_increasing() {
    for resolution in [2, 3, 10, 57, 200] {
        for margin in [0.0, 0.5, 1.0] {
            let config = KdeConfig::new(0.5, resolution, margin).unwrap();
            let mut kde = seeded_estimator(12, config, 8);
            let estimate = kde.recompute().unwrap();
            assert_eq!(estimate.len(), resolution);
            assert!(is_strictly_increasing(estimate.grid()));
        }
    }
}

#[test]
fn test_rmse_shrinks_with_many_samples() {
    let population = Normal::new(3.0, 1.0).unwrap();

    let mut small = seeded_estimator(20, KdeConfig::new(0.5, 100, 1.0).unwrap(), 99);
    small.recompute().unwrap();
    let small_rmse = small.error_against(&population).unwrap().rmse();

    let mut large = seeded_estimator(5000, KdeConfig::new(0.2, 400, 1.0).unwrap(), 99);
    large.recompute().unwrap();
    let large_rmse = large.error_against(&population).unwrap().rmse();

    assert!(large_rmse < 0.03, "rmse with 5000 samples = {large_rmse}");
    assert!(
        large_rmse < small_rmse,
        "rmse should shrink: {small_rmse} -> {large_rmse}"
    );
}
