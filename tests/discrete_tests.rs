use kdelab::{Binomial, DifferenceSurface, DiscreteConfig, MgfComparison, PmfComparison, Poisson};

#[test]
fn test_pmf_comparison_default_view() {
    let config = DiscreteConfig::default();
    let comparison = config.initial_comparison().unwrap();

    assert_eq!(comparison.binomial().n(), 10);
    assert!((comparison.poisson().lambda() - 5.0).abs() < 1e-12);

    let binomial_mass: f64 = comparison.binomial_pmf().iter().sum();
    assert!((binomial_mass - 1.0).abs() < 1e-10);

    let poisson_mass: f64 = comparison.poisson_pmf().iter().sum();
    assert!(poisson_mass < 1.0);
}

#[test]
fn test_poisson_approximation_improves_for_small_p() {
    // Same mean, more trials: the binomial approaches the Poisson.
    let coarse = PmfComparison::new(10, 0.4).unwrap();
    let fine = PmfComparison::new(400, 0.01).unwrap();

    let max_gap = |c: &PmfComparison| {
        c.difference()
            .iter()
            .fold(0.0_f64, |acc, d| acc.max(d.abs()))
    };
    assert!(max_gap(&fine) < max_gap(&coarse));
}

#[test]
fn test_pmf_matches_closed_form() {
    let binomial = Binomial::new(4, 0.25).unwrap();
    // C(4, 2) * 0.25² * 0.75²
    assert!((binomial.pmf(2) - 6.0 * 0.0625 * 0.5625).abs() < 1e-12);

    let poisson = Poisson::new(1.5).unwrap();
    // 1.5³ e^-1.5 / 3!
    let expected = 1.5_f64.powi(3) * (-1.5_f64).exp() / 6.0;
    assert!((poisson.pmf(3) - expected).abs() < 1e-12);
}

#[test]
fn test_mgf_closed_forms() {
    let mgf = MgfComparison::new(12, 0.3, -1.0, 1.0, 5).unwrap();
    let binomial = Binomial::new(12, 0.3).unwrap();
    let poisson = Poisson::approximating(&binomial);

    for ((t, b), p) in mgf.t().iter().zip(mgf.binomial_mgf()).zip(mgf.poisson_mgf()) {
        assert!((b - (0.3 * t.exp() + 0.7).powi(12)).abs() < 1e-9);
        assert!((p - poisson.mgf(*t)).abs() < 1e-12);
    }
}

#[test]
fn test_mgfs_agree_to_first_order_at_zero() {
    let config = DiscreteConfig::default();
    let zoomed = config.mgf_zoom(30, 0.2).unwrap();
    let full = config.mgf(30, 0.2).unwrap();

    // Matching value and slope at t = 0 leaves a second-order gap near 0.
    assert!(zoomed.max_gap() < 0.05 * full.max_gap());
}

#[test]
fn test_default_surface_and_marker() {
    let config = DiscreteConfig::default();
    let surface = config.surface().unwrap();

    assert_eq!(surface.heights().len(), config.p_points);
    assert_eq!(surface.heights()[0].len(), 49);

    let (n, p, z) = DifferenceSurface::point(config.n_initial, config.p_initial).unwrap();
    assert!((n - 10.0).abs() < f64::EPSILON);
    assert!((p - 0.5).abs() < f64::EPSILON);
    let direct = PmfComparison::new(10, 0.5).unwrap().total_difference();
    assert!((z - direct).abs() < f64::EPSILON);

    let (lo, hi) = surface.height_range();
    assert!(lo >= -1e-12);
    assert!(hi <= 1.0);
}

#[test]
fn test_invalid_probability_rejected() {
    assert!(PmfComparison::new(5, 1.2).is_err());
    assert!(MgfComparison::new(5, -0.2, -1.0, 1.0, 10).is_err());
    assert!(DifferenceSurface::point(5, 2.0).is_err());
    assert!(DiscreteConfig::default().mgf(100, 0.5).is_err());
}
