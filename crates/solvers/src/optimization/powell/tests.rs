use approx::assert_abs_diff_eq;
use nalgebra::DVector;

use super::{Action, Config, Error, Event, Status, minimize, minimize_unobserved};

fn bowl(x: &[f64; 2]) -> f64 {
    x[0] * x[0] + x[1] * x[1]
}

/// A narrow valley along the diagonal, with its minimum at (1, 2).
fn tilted_valley(x: &[f64; 2]) -> f64 {
    (x[0] + x[1] - 3.0).powi(2) + 10.0 * (x[0] - x[1] + 1.0).powi(2)
}

#[test]
fn minimizes_bowl_with_non_increasing_values() {
    let mut x = [5.0, 5.0];
    let mut values = Vec::new();

    let observer = |event: &Event<'_, [f64; 2]>| -> Option<Action> {
        assert!(event.value <= event.previous_value);
        values.push(event.value);
        None
    };

    let solution = minimize(&bowl, &mut x, &Config::default(), observer).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_abs_diff_eq!(x[0], 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(x[1], 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(solution.value, 0.0, epsilon = 1e-12);

    assert_eq!(values.len(), solution.iters);
    assert!(values.windows(2).all(|pair| pair[1] <= pair[0]));
}

#[test]
fn follows_tilted_valley() {
    let mut x = [-2.0, 4.0];

    let solution = minimize_unobserved(&tilted_valley, &mut x, &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_abs_diff_eq!(x[0], 1.0, epsilon = 1e-5);
    assert_abs_diff_eq!(x[1], 2.0, epsilon = 1e-5);
}

#[test]
fn minimizes_in_three_dimensions_with_nalgebra() {
    let f = |x: &DVector<f64>| {
        x.iter()
            .enumerate()
            .map(|(i, c)| (i + 1) as f64 * (c - i as f64).powi(2))
            .sum::<f64>()
    };
    let mut x: DVector<f64> = DVector::from_element(3, 5.0);

    let solution = minimize_unobserved(&f, &mut x, &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    for (i, c) in x.iter().enumerate() {
        assert_abs_diff_eq!(*c, i as f64, epsilon = 1e-5);
    }
}

#[test]
fn resets_directions_every_n_iterations() {
    let mut x = [-2.0, 4.0];
    let mut resets = Vec::new();

    let observer = |event: &Event<'_, [f64; 2]>| -> Option<Action> {
        if event.iter % 2 == 0 {
            resets.push(event.reset);
        }
        None
    };

    minimize(&tilted_valley, &mut x, &Config::default(), observer).expect("should converge");

    assert!(!resets.is_empty());
    assert!(resets.iter().all(|reset| *reset));
}

#[test]
fn resets_directions_when_nothing_moves() {
    let f = |x: &[f64; 3]| (x[0] - 1.0).powi(2) + (x[1] + 2.0).powi(2) + 3.0 * x[2] * x[2];
    let mut x = [1.0, -2.0, 0.0];
    let mut resets = Vec::new();

    let observer = |event: &Event<'_, [f64; 3]>| -> Option<Action> {
        resets.push((event.iter, event.reset));
        None
    };

    let solution = minimize(&f, &mut x, &Config::default(), observer).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 3);
    assert_eq!(resets, [(1, true), (2, true), (3, true)]);
}

#[test]
fn observer_can_stop_early() {
    let mut x = [-2.0, 4.0];

    let stop_at_one = |event: &Event<'_, [f64; 2]>| (event.iter == 1).then_some(Action::StopEarly);

    let solution =
        minimize(&tilted_valley, &mut x, &Config::default(), stop_at_one).expect("should stop");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 1);
    assert!(solution.value < tilted_valley(&[-2.0, 4.0]));
    assert_abs_diff_eq!(solution.value, tilted_valley(&x), epsilon = 1e-12);
}

#[test]
fn reports_iteration_limit() {
    let mut x = [5.0, 5.0];
    let config = Config {
        max_iters: 1,
        ..Config::default()
    };

    let solution = minimize_unobserved(&bowl, &mut x, &config).expect("should run");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 1);
}

#[test]
fn unbounded_objective_is_poorly_conditioned() {
    let mut x = [1.0, 1.0];
    let dome = |x: &[f64; 2]| -bowl(x);

    let error = minimize_unobserved(&dome, &mut x, &Config::default()).expect_err("no minimum");

    assert!(error.is_poorly_conditioned());
}

#[test]
fn rejects_bad_inputs() {
    let empty = |_: &Vec<f64>| 0.0;
    let result = minimize_unobserved(&empty, &mut Vec::<f64>::new(), &Config::default());
    assert_eq!(result, Err(Error::EmptyDomain));

    let pole = |x: &[f64; 1]| 1.0 / x[0];
    let result = minimize_unobserved(&pole, &mut [0.0], &Config::default());
    assert!(matches!(result, Err(Error::NonFiniteStart { .. })));

    let config = Config {
        tolerance: 0.0,
        ..Config::default()
    };
    let result = minimize_unobserved(&bowl, &mut [1.0, 1.0], &config);
    assert!(matches!(result, Err(Error::InvalidConfig { .. })));
}
