//! Nonlinear conjugate gradient minimization (Polak-Ribière).
//!
//! # Algorithm
//!
//! The search starts downhill along the negative gradient `g`. After each
//! line search the new negative gradient `g'` is combined with the previous
//! direction `h`:
//!
//! ```text
//! gamma = (g' - g) · g' / (g · g)
//! h'    = g' + gamma * h
//! ```
//!
//! On a quadratic with exact line searches the directions are mutually
//! conjugate and the minimum is reached in at most N iterations. The
//! Polak-Ribière choice of `gamma` restarts itself (`gamma ≈ 0`) when
//! progress stalls, which makes it more robust than Fletcher-Reeves on
//! general functions.
//!
//! # Convergence
//!
//! The search stops when either
//!
//! - an iteration decreases the objective by at most `tolerance² / 2` times
//!   the largest decrease seen so far, or
//! - `|gamma| <= tolerance`, meaning the gradient barely changed direction.
//!
//! A line search that finds the objective poorly conditioned, or a search
//! direction that has vanished, also ends the search as converged: no
//! further progress is possible from the current point.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration. Observers can return
//! [`Action::StopEarly`] to halt at the current point.

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use descent_core::{Observer, ScalarNDWithGradient, VectorPoint, VectorSpace};
use tracing::{debug, warn};

use crate::optimization::line_search;

/// Minimizes `f` starting from `x0`.
///
/// The observer receives an [`Event`] after each line search.
///
/// # Errors
///
/// Returns an error if `x0` is empty, the config is invalid, `f` is not
/// finite at the start, a gradient has the wrong dimension, or a line search
/// fails for a reason other than poor conditioning.
pub fn minimize<V, F, Obs>(
    f: &F,
    x0: &V,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<V>, Error>
where
    V: VectorSpace,
    F: ScalarNDWithGradient<V>,
    Obs: for<'a> Observer<Event<'a, V>, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    if x0.dimension() == 0 {
        return Err(Error::EmptyDomain);
    }

    let (value, gradient) = f.value_and_gradient(x0);
    if !value.is_finite() {
        return Err(Error::NonFiniteStart { value });
    }
    let mut point = VectorPoint::new(x0.clone(), value, gradient)?;

    let mut g = point.gradient().scale(-1.0);
    let mut h = if g.magnitude2() == 0.0 {
        x0.basis(0)
    } else {
        g.clone()
    };
    let mut f_scale = 0.0_f64;
    let converged_decrease = 0.5 * config.tolerance * config.tolerance;

    for iter in 1..=config.max_iters {
        let next = match line_search::minimize_with_gradient(f, &point, &h, &config.line_search) {
            Ok(next) => next,
            Err(error) if error.is_poorly_conditioned() || error.is_degenerate_direction() => {
                debug!(iter, %error, "conjugate gradient cannot progress");
                return Ok(Solution::new(Status::Converged, point, iter - 1));
            }
            Err(error) => return Err(error.into()),
        };

        let decrease = (point.value() - next.value()).max(0.0);
        f_scale = f_scale.max(decrease);
        point = next;

        let g_next = point.gradient().scale(-1.0);
        let g2 = g.magnitude2();
        let gamma = if g2 == 0.0 {
            0.0
        } else {
            g_next.sub(&g).dot(&g_next) / g2
        };

        debug!(iter, value = point.value(), decrease, gamma, "conjugate gradient iteration");

        let event = Event {
            iter,
            point: &point,
            decrease,
            gamma,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(Status::StoppedByObserver, point, iter));
        }

        let stalled = decrease <= f_scale * converged_decrease;
        let aligned = g2 != 0.0 && gamma.abs() <= config.tolerance;
        if stalled || aligned {
            return Ok(Solution::new(Status::Converged, point, iter));
        }

        h = g_next.add(&h.scale(gamma));
        g = g_next;
    }

    warn!(
        max_iters = config.max_iters,
        value = point.value(),
        "conjugate gradient hit iteration limit"
    );
    Ok(Solution::new(Status::MaxIters, point, config.max_iters))
}

/// Minimizes `f` starting from `x0`, without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns the same errors as [`minimize`].
pub fn minimize_unobserved<V, F>(f: &F, x0: &V, config: &Config) -> Result<Solution<V>, Error>
where
    V: VectorSpace,
    F: ScalarNDWithGradient<V>,
{
    minimize(f, x0, config, ())
}
