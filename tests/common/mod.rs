use psychro::{Psychrometrics, UnitSystem};

/// Route `log` output through the test harness; safe to call from every test.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn ip() -> Psychrometrics {
    init_logging();
    Psychrometrics::new(UnitSystem::Imperial)
}

#[allow(dead_code)]
pub fn si() -> Psychrometrics {
    init_logging();
    Psychrometrics::new(UnitSystem::Metric)
}

#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64, rel_tol: f64, abs_tol: f64, context: &str) {
    let diff = (actual - expected).abs();
    let tol = abs_tol.max(expected.abs() * rel_tol);
    assert!(
        diff <= tol,
        "{context} mismatch: actual={actual}, expected={expected}, diff={diff}, tol={tol}"
    );
}

/// Dry-bulb temperatures and pressures swept by the round-trip tests.
#[allow(dead_code)]
pub fn sweep_grid(units: UnitSystem) -> (Vec<f64>, Vec<f64>) {
    match units {
        UnitSystem::Metric => (
            (-50..=100).map(|i| f64::from(i) * 2.0).collect(),
            (6..=11).map(|i| f64::from(i) * 10_000.0).collect(),
        ),
        UnitSystem::Imperial => (
            (0..=135).map(|i| -148.0 + f64::from(i) * 4.0).collect(),
            (0..=8).map(|i| 8.6 + f64::from(i)).collect(),
        ),
    }
}
