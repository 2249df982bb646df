//! Bracketing a local minimum of a one-dimensional function.
//!
//! # Algorithm
//!
//! Starting from two trial abscissas, the finder walks downhill: first by a
//! golden-ratio step past the better point, then by jumping to the vertex of
//! the parabola through the latest three points. Parabolic jumps are clamped
//! to [`Config::max_step`] times the last step so a nearly flat parabola
//! cannot throw the search arbitrarily far. The walk stops as soon as the
//! middle of three consecutive points lies below both of its neighbours.
//! When the seeds tie, the side between them is split before walking on.
//!
//! A trial point where the objective is NaN is treated as outside the domain:
//! the step toward it is halved until a usable value is found.
//!
//! # Failure
//!
//! Some functions have no minimum to find (`-x²`), or behave so badly that
//! extrapolation cannot make progress. These are reported as
//! [`Error::PoorlyConditioned`], distinct from invalid arguments, so callers
//! can treat them as an expected outcome.

mod config;
mod error;
mod extrapolate;
mod search;
mod triple;


pub use config::Config;
pub use error::{Conditioning, Error};
pub use triple::{Bracket, BracketError};

use descent_core::{GradientPoint, Point, Scalar1D, Scalar1DWithGradient};

use crate::optimization::probe::{Derivatives, Values};

use search::search;

/// Finds a bracket around a local minimum of `f`, starting from `x1` and `x2`.
///
/// # Errors
///
/// Returns an error if the seeds are non-finite or equal, the config is
/// invalid, or the function is poorly conditioned.
pub fn find<F: Scalar1D>(
    f: &F,
    x1: f64,
    x2: f64,
    config: &Config,
) -> Result<Bracket<Point>, Error> {
    search(&Values(f), x1, x2, config)
}

/// Finds a bracket around a local minimum of `f`, recording derivatives.
///
/// The derivatives are not used to steer the search, but the resulting
/// bracket carries them for [`brent::minimize_with_derivative`].
///
/// [`brent::minimize_with_derivative`]: crate::optimization::brent::minimize_with_derivative
///
/// # Errors
///
/// Returns an error if the seeds are non-finite or equal, the config is
/// invalid, or the function is poorly conditioned.
pub fn find_with_derivative<F: Scalar1DWithGradient>(
    f: &F,
    x1: f64,
    x2: f64,
    config: &Config,
) -> Result<Bracket<GradientPoint>, Error> {
    search(&Derivatives(f), x1, x2, config)
}
