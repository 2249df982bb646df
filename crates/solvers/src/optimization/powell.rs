//! Powell's direction-set method for derivative-free minimization.
//!
//! # Algorithm
//!
//! Each iteration runs one line search along every direction in the set,
//! starting from the coordinate axes. The net displacement of the iteration
//! then replaces the oldest direction, so the set gradually aligns with the
//! valleys of the objective.
//!
//! This is the basic update, without Powell's heuristic for choosing which
//! direction to discard. To keep the set from collapsing onto a subspace it
//! is reset to the axes every N iterations, and whenever an iteration moves
//! less than the tolerance.
//!
//! # Convergence
//!
//! After at least N iterations the search stops once an iteration lowers the
//! objective by a relative amount below `tolerance`:
//! `2 (f_start - f_end) <= tolerance (|f_start| + |f_end|)`.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after all of its line
//! searches. Observers can return [`Action::StopEarly`] to halt at the
//! current position.

mod action;
mod config;
mod directions;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use descent_core::{Observer, ScalarND, VectorSpace};
use tracing::{debug, warn};

use crate::optimization::line_search;

use directions::Directions;

/// Guards the convergence test when the minimum value is exactly zero.
const TINY: f64 = 1e-25;

/// Minimizes `f` starting from `x`, leaving the minimum in `x`.
///
/// The observer receives an [`Event`] at the end of each iteration.
///
/// # Errors
///
/// Returns an error if `x` is empty, the config is invalid, `f` is not
/// finite at the start, or a line search fails. A line search failure on a
/// poorly conditioned function can be detected with
/// [`Error::is_poorly_conditioned`].
pub fn minimize<V, F, Obs>(
    f: &F,
    x: &mut V,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    V: VectorSpace,
    F: ScalarND<V>,
    Obs: for<'a> Observer<Event<'a, V>, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let n = x.dimension();
    if n == 0 {
        return Err(Error::EmptyDomain);
    }

    let mut value = f.value(x);
    if !value.is_finite() {
        return Err(Error::NonFiniteStart { value });
    }

    let mut directions = Directions::basis(x);

    for iter in 1..=config.max_iters {
        let start = x.clone();
        let start_value = value;

        for direction in directions.iter_mut() {
            match line_search::minimize_in_place(f, x, direction, &config.line_search) {
                Ok(minimum) => value = minimum,
                // A direction that collapsed last iteration has nothing left to search.
                Err(error) if error.is_degenerate_direction() => {}
                Err(error) => return Err(error.into()),
            }
        }

        let converged = iter >= n
            && 2.0 * (start_value - value)
                <= config.tolerance * (start_value.abs() + value.abs()) + TINY;

        let displacement = x.sub(&start);
        let reset = iter % n == 0 || displacement.max_abs_component() < config.tolerance;

        debug!(iter, value, decrease = start_value - value, reset, "powell iteration");

        let event = Event {
            iter,
            x: &*x,
            value,
            previous_value: start_value,
            reset,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(Status::StoppedByObserver, value, iter));
        }

        if converged {
            return Ok(Solution::new(Status::Converged, value, iter));
        }

        if reset {
            directions.reset(x);
        } else {
            directions.replace_oldest(displacement);
        }
    }

    warn!(max_iters = config.max_iters, value, "powell hit iteration limit");
    Ok(Solution::new(Status::MaxIters, value, config.max_iters))
}

/// Minimizes `f` starting from `x`, without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns the same errors as [`minimize`].
pub fn minimize_unobserved<V, F>(f: &F, x: &mut V, config: &Config) -> Result<Solution, Error>
where
    V: VectorSpace,
    F: ScalarND<V>,
{
    minimize(f, x, config, ())
}
