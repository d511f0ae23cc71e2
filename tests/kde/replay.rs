use kdelab::{Error, KdeConfig, KdeReplay, Normal, NormalSampler, SimulatorConfig};

fn pool(n: usize) -> Vec<f64> {
    NormalSampler::with_seed(3.0, 1.0, 2024).unwrap().sample_n(n)
}

#[test]
fn test_frames_grow_one_observation_at_a_time() {
    let population = Normal::new(3.0, 1.0).unwrap();
    let mut replay = KdeReplay::new(pool(30), KdeConfig::default(), population).unwrap();

    for (i, frame) in replay.frames().enumerate() {
        let frame = frame.unwrap();
        assert_eq!(frame.observations, i + 1);
        assert_eq!(frame.estimate.n_samples(), i + 1);
        assert_eq!(frame.report.len(), i + 1);
        assert_eq!(frame.estimate.len(), 10);
    }
}

#[test]
fn test_frame_matches_direct_estimator() {
    let population = Normal::new(3.0, 1.0).unwrap();
    let samples = pool(15);
    let mut replay = KdeReplay::new(samples.clone(), KdeConfig::default(), population).unwrap();
    let frame = replay.frame(8).unwrap();

    let mut kde = kdelab::IncrementalKdeEstimator::default();
    kde.reset(&samples[..8]).unwrap();
    let estimate = kde.recompute().unwrap().clone();
    let report = kde.error_against(&population).unwrap();

    assert_eq!(frame.estimate, estimate);
    assert_eq!(frame.report, report);
}

#[test]
fn test_explore_changes_resolution_and_bandwidth() {
    let population = Normal::new(3.0, 1.0).unwrap();
    let mut replay = KdeReplay::new(pool(50), KdeConfig::default(), population).unwrap();

    let narrow = replay.explore(50, 200, 0.1).unwrap();
    let wide = replay.explore(50, 200, 2.0).unwrap();

    assert_eq!(narrow.estimate.len(), 200);
    let narrow_peak = narrow.estimate.peak().unwrap().1;
    let wide_peak = wide.estimate.peak().unwrap().1;
    assert!(narrow_peak > wide_peak);
}

#[test]
fn test_explore_invalid_inputs() {
    let population = Normal::new(3.0, 1.0).unwrap();
    let mut replay = KdeReplay::new(pool(5), KdeConfig::default(), population).unwrap();
    assert!(matches!(replay.explore(0, 10, 0.5), Err(Error::InsufficientData)));
    assert!(matches!(replay.explore(6, 10, 0.5), Err(Error::InvalidInput(_))));
    assert!(matches!(replay.explore(3, 10, -0.5), Err(Error::InvalidInput(_))));
}

#[test]
fn test_simulator_sweeps_every_slider_position() {
    let simulator = SimulatorConfig::default();
    let population = Normal::new(3.0, 1.0).unwrap();
    let mut replay =
        KdeReplay::new(pool(simulator.pool_size), KdeConfig::default(), population).unwrap();

    for observations in [simulator.observations_min, simulator.observations_max] {
        for grid in [simulator.grid_min, simulator.grid_max] {
            for bandwidth in [simulator.bandwidth_min, simulator.bandwidth_max] {
                let frame = simulator
                    .explore(&mut replay, observations, grid, bandwidth)
                    .unwrap();
                assert_eq!(frame.report.len(), observations);
                assert_eq!(frame.estimate.len(), grid);
                assert!(frame.estimate.density().iter().all(|&f| f >= 0.0));
            }
        }
    }
}
