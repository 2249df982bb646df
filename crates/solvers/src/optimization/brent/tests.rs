use std::cell::Cell;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use descent_core::{GradientPoint, Point};

use crate::optimization::{Negate, bracket};

use super::{
    Action, Config, Error, Event, Status, Step, minimize, minimize_unobserved,
    minimize_with_derivative, minimize_with_derivative_unobserved,
};

fn bracket_of<F: Fn(f64) -> f64>(f: &F, x1: f64, x2: f64) -> bracket::Bracket<Point> {
    bracket::find(f, x1, x2, &bracket::Config::default()).expect("should bracket")
}

/// f(x) = eˣ - 2x, minimized at x = ln 2.
fn exp_valley(x: f64) -> f64 {
    x.exp() - 2.0 * x
}

fn exp_valley_with_slope(x: f64) -> (f64, f64) {
    (exp_valley(x), x.exp() - 2.0)
}

#[test]
fn minimizes_parabola_at_origin() {
    let f = |x: f64| x * x;
    let config = Config {
        tolerance: 1e-8,
        ..Config::default()
    };

    let solution = minimize_unobserved(&f, &bracket_of(&f, 0.0, 1.0), &config)
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_abs_diff_eq!(solution.x(), 0.0, epsilon = 1e-8);
    assert_abs_diff_eq!(solution.value(), 0.0, epsilon = 1e-16);
}

#[test]
fn minimizes_shifted_parabola() {
    let f = |x: f64| (x - 3.0).powi(2) + 5.0;

    let solution = minimize_unobserved(&f, &bracket_of(&f, 0.0, 1.0), &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x(), 3.0, epsilon = 1e-7);
    assert_relative_eq!(solution.value(), 5.0, epsilon = 1e-12);
}

#[test]
fn minimizes_non_quadratic() {
    let f = exp_valley;

    let solution = minimize_unobserved(&f, &bracket_of(&f, 0.0, 1.0), &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x(), 2.0_f64.ln(), epsilon = 1e-7);
}

#[test]
fn result_is_no_worse_than_bracket_ends() {
    let f = |x: f64| x.powi(4) - 3.0 * x;
    let bracket = bracket_of(&f, -1.0, 0.0);

    let solution = minimize_unobserved(&f, &bracket, &Config::default()).expect("should converge");

    assert!(solution.value() <= bracket.left().value.min(bracket.right().value));
    assert!(solution.left.x < solution.x() && solution.x() < solution.right.x);
}

#[test]
fn converged_bracket_needs_no_evaluations() {
    let calls = Cell::new(0_usize);
    let f = |x: f64| {
        calls.set(calls.get() + 1);
        (x - 3.0).powi(2)
    };
    let config = Config::default();

    let first =
        minimize_unobserved(&f, &bracket_of(&f, 0.0, 1.0), &config).expect("should converge");
    assert_eq!(first.status, Status::Converged);

    calls.set(0);
    let rebracket = first.bracket().expect("strict bracket");
    let again = minimize_unobserved(&f, &rebracket, &config).expect("should converge");

    assert_eq!(calls.get(), 0);
    assert_eq!(again.status, Status::Converged);
    assert_eq!(again.iters, 0);
    assert_eq!(again.point, first.point);
}

#[test]
fn derivative_variant_minimizes_shifted_parabola() {
    let f = |x: f64| ((x - 3.0).powi(2) + 5.0, 2.0 * (x - 3.0));
    let bracket = bracket::find_with_derivative(&f, 0.0, 1.0, &bracket::Config::default())
        .expect("should bracket");

    let solution = minimize_with_derivative_unobserved(&f, &bracket, &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x(), 3.0, epsilon = 1e-7);
    assert_relative_eq!(solution.value(), 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(solution.point.derivative, 0.0, epsilon = 1e-6);
}

#[test]
fn derivative_variant_minimizes_non_quadratic() {
    let f = exp_valley_with_slope;
    let bracket = bracket::find_with_derivative(&f, 0.0, 1.0, &bracket::Config::default())
        .expect("should bracket");

    let solution = minimize_with_derivative_unobserved(&f, &bracket, &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x(), 2.0_f64.ln(), epsilon = 1e-6);
}

#[test]
fn derivative_variant_uses_secant_steps() {
    let f = exp_valley_with_slope;
    let bracket = bracket::find_with_derivative(&f, 0.0, 1.0, &bracket::Config::default())
        .expect("should bracket");
    let mut steps = Vec::new();

    let observer = |event: &Event<GradientPoint>| -> Option<Action> {
        steps.push(event.step);
        None
    };

    minimize_with_derivative(&f, &bracket, &Config::default(), observer).expect("should converge");

    assert!(steps.contains(&Step::Secant));
    assert!(!steps.contains(&Step::Parabolic));
}

#[test]
fn events_track_best_point_and_bracket() {
    let f = exp_valley;
    let mut events = Vec::new();

    let observer = |event: &Event<Point>| -> Option<Action> {
        events.push(*event);
        None
    };

    let solution = minimize(&f, &bracket_of(&f, 0.0, 1.0), &Config::default(), observer)
        .expect("should converge");

    assert_eq!(events.len(), solution.iters);
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.iter, i + 1);
        assert!(event.best.value <= event.point.value);
        assert!(event.bracket[0] < event.best.x && event.best.x < event.bracket[1]);
    }
    for pair in events.windows(2) {
        assert!(pair[1].best.value <= pair[0].best.value);
        assert!(pair[1].bracket[1] - pair[1].bracket[0] <= pair[0].bracket[1] - pair[0].bracket[0]);
    }
}

#[test]
fn observer_can_stop_early() {
    let f = exp_valley;

    let stop_at_two = |event: &Event<Point>| (event.iter == 2).then_some(Action::StopEarly);

    let solution = minimize(&f, &bracket_of(&f, 0.0, 1.0), &Config::default(), stop_at_two)
        .expect("should stop");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
}

#[test]
fn reports_iteration_limit() {
    let f = exp_valley;
    let config = Config {
        max_iters: 1,
        ..Config::default()
    };

    let solution = minimize_unobserved(&f, &bracket_of(&f, 0.0, 1.0), &config).expect("should run");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 1);
}

#[test]
fn nan_trial_points_only_shrink_the_bracket() {
    // The parabola through the bracket points has its vertex in the hole.
    let f = |x: f64| match x {
        x if x <= 1.4 => (x - 1.2).powi(2),
        x if x < 2.5 => f64::NAN,
        _ => 0.3,
    };
    let point = |x: f64| Point::new(x, f(x));
    let bracket = bracket::Bracket::new(point(0.0), point(1.0), point(3.0)).expect("valid bracket");
    let mut saw_nan = false;

    let observer = |event: &Event<Point>| -> Option<Action> {
        saw_nan |= event.point.value.is_nan();
        assert!(event.best.value.is_finite());
        None
    };

    let solution = minimize(&f, &bracket, &Config::default(), observer).expect("should converge");

    assert!(saw_nan);
    assert_eq!(solution.status, Status::Converged);
    assert_abs_diff_eq!(solution.x(), 1.2, epsilon = 1e-6);
    assert_abs_diff_eq!(solution.value(), 0.0, epsilon = 1e-12);
}

#[test]
fn rejects_invalid_tolerance() {
    let f = |x: f64| x * x;
    let config = Config {
        tolerance: 1.5,
        ..Config::default()
    };

    let result = minimize_unobserved(&f, &bracket_of(&f, 0.0, 1.0), &config);

    assert!(matches!(result, Err(Error::InvalidConfig { .. })));
}

#[test]
fn negated_objective_finds_maximum() {
    let hill = |x: f64| 1.0 - (x - 2.0).powi(2);
    let f = Negate(hill);
    let bracket = bracket::find(&f, 0.0, 0.5, &bracket::Config::default()).expect("should bracket");

    let solution = minimize_unobserved(&f, &bracket, &Config::default()).expect("should converge");

    assert_relative_eq!(solution.x(), 2.0, epsilon = 1e-7);
    assert_relative_eq!(-solution.value(), 1.0, epsilon = 1e-12);
}
