use descent_core::{Observer, Sample};
use tracing::{trace, warn};

use crate::optimization::{bracket::Bracket, probe::Probe};

use super::{Action, Config, Error, Event, Solution, Status, propose::Refine, state::State};

/// Core Brent loop shared by the value-only and derivative refiners.
pub(super) fn search<Pr, Obs>(
    probe: &Pr,
    bracket: &Bracket<Pr::Point>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<Pr::Point>, Error>
where
    Pr: Probe,
    Pr::Point: Refine,
    Obs: Observer<Event<Pr::Point>, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let mut state = State::new(bracket);

    for iter in 1..=config.max_iters {
        if state.is_converged(config) {
            return Ok(state.into_solution(Status::Converged, iter - 1));
        }

        let proposal = Pr::Point::propose(&state, config);
        let point = probe.probe(state.inner().x() + proposal.step);
        let worse = point.value() > state.inner().value() || point.value().is_nan();
        state.apply(&proposal, point);

        trace!(
            iter,
            step = ?proposal.kind,
            x = point.x(),
            value = point.value(),
            width = state.width(),
            "brent step"
        );

        let event = Event {
            iter,
            step: proposal.kind,
            point,
            best: state.inner(),
            bracket: [state.left().x(), state.right().x()],
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(state.into_solution(Status::StoppedByObserver, iter));
        }

        if proposal.converges_if_worse && worse {
            return Ok(state.into_solution(Status::Converged, iter));
        }
    }

    if state.is_converged(config) {
        return Ok(state.into_solution(Status::Converged, config.max_iters));
    }

    warn!(
        max_iters = config.max_iters,
        x = state.inner().x(),
        width = state.width(),
        "brent refinement hit iteration limit"
    );
    Ok(state.into_solution(Status::MaxIters, config.max_iters))
}
