use descent_core::Sample;
use tracing::{trace, warn};

use crate::optimization::probe::Probe;

use super::{
    Bracket, Conditioning, Config, Error,
    extrapolate::{GOLDEN_RATIO, parabolic_vertex, strictly_between},
};

/// Core bracketing loop shared by the value-only and derivative finders.
pub(super) fn search<Pr: Probe>(
    probe: &Pr,
    x1: f64,
    x2: f64,
    config: &Config,
) -> Result<Bracket<Pr::Point>, Error> {
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    for value in [x1, x2] {
        if !value.is_finite() {
            return Err(Error::NonFiniteSeed { value });
        }
    }
    if x1 == x2 {
        return Err(Error::EqualSeeds { value: x1 });
    }

    let searcher = Searcher { probe, config };

    // Walk downhill from `a` toward `b`. A NaN seed is never the better one.
    let first = probe.probe(x1);
    let second = probe.probe(x2);
    let (worse, better) = if first.value() >= second.value() || first.value().is_nan() {
        (first, second)
    } else {
        (second, first)
    };
    if better.value().is_nan() {
        return Err(poorly_conditioned(better.x(), Conditioning::NoFiniteStep));
    }

    let mut a = worse;
    let mut b = bounded(better)?;
    let mut c = searcher.step_further(&a, &b)?;

    // Invariant: `a` is never lower than `b`, so only a tie (or a NaN `a`)
    // leaves `c` above `b` without a bracket.
    for iter in 0..config.max_iters {
        if b.value() < a.value() && b.value() < c.value() {
            return close(a, b, c);
        }

        if c.value() > b.value() {
            let p = probe.probe(0.5 * (a.x() + b.x()));
            trace!(iter, a = a.x(), b = b.x(), x = p.x(), "splitting tied side");
            if p.value() > b.value() {
                return close(p, b, c);
            }
            if p.value() < b.value() {
                c = b;
                b = bounded(p)?;
            } else {
                a = p;
            }
            continue;
        }

        let u = parabolic_vertex(&a, &b, &c);
        let limit = b.x() + config.max_step * (c.x() - b.x());
        trace!(iter, a = a.x(), b = b.x(), c = c.x(), vertex = u, "bracket step");

        let next = if strictly_between(u, b.x(), c.x()) {
            if let Some(p) = searcher.evaluate(u)? {
                if p.value() < c.value() {
                    return close(b, p, c);
                }
                if p.value() > b.value() && a.value() > b.value() {
                    return close(a, b, p);
                }
            }
            searcher.step_further(&b, &c)?
        } else if strictly_between(u, c.x(), limit) {
            match searcher.evaluate(u)? {
                Some(p) if p.value() < c.value() => {
                    let further = searcher.step_further(&c, &p)?;
                    a = c;
                    b = p;
                    c = further;
                    continue;
                }
                Some(p) => p,
                None => searcher.step_further(&b, &c)?,
            }
        } else if (u - limit) * (limit - c.x()) >= 0.0 {
            match searcher.evaluate(limit)? {
                Some(p) => p,
                None => searcher.step_further(&b, &c)?,
            }
        } else if strictly_between(u, a.x(), b.x()) {
            if let Some(p) = searcher.evaluate(u)? {
                if p.value() < b.value() {
                    return close(a, p, b);
                }
            }
            searcher.step_further(&b, &c)?
        } else {
            searcher.step_further(&b, &c)?
        };

        a = b;
        b = c;
        c = next;
    }

    warn!(
        max_iters = config.max_iters,
        x = c.x(),
        "bracket search still descending at iteration limit"
    );
    Err(poorly_conditioned(c.x(), Conditioning::NoProgress))
}

struct Searcher<'a, Pr> {
    probe: &'a Pr,
    config: &'a Config,
}

impl<Pr: Probe> Searcher<'_, Pr> {
    /// Steps past `to`, away from `from`, by a golden-ratio magnification.
    ///
    /// A step landing on NaN is halved and retried.
    fn step_further(&self, from: &Pr::Point, to: &Pr::Point) -> Result<Pr::Point, Error> {
        let mut step = GOLDEN_RATIO * (to.x() - from.x());

        for _ in 0..self.config.max_halvings {
            let x = to.x() + step;
            if !x.is_finite() {
                return Err(poorly_conditioned(to.x(), Conditioning::Diverged));
            }
            if x == to.x() {
                break;
            }

            let point = self.probe.probe(x);
            if !point.value().is_nan() {
                return bounded(point);
            }
            trace!(x, "NaN objective, halving step");
            step *= 0.5;
        }

        Err(poorly_conditioned(to.x(), Conditioning::NoFiniteStep))
    }

    /// Evaluates at `x`, returning `None` where the objective is NaN.
    fn evaluate(&self, x: f64) -> Result<Option<Pr::Point>, Error> {
        if !x.is_finite() {
            return Err(poorly_conditioned(x, Conditioning::Diverged));
        }

        let point = self.probe.probe(x);
        if point.value().is_nan() {
            trace!(x, "NaN objective at extrapolated point");
            Ok(None)
        } else {
            bounded(point).map(Some)
        }
    }
}

fn bounded<P: Sample>(point: P) -> Result<P, Error> {
    if point.value() == f64::NEG_INFINITY {
        Err(poorly_conditioned(point.x(), Conditioning::UnboundedBelow))
    } else {
        Ok(point)
    }
}

fn close<P: Sample>(a: P, inner: P, c: P) -> Result<Bracket<P>, Error> {
    Bracket::from_unordered(a, inner, c)
        .map_err(|_| poorly_conditioned(inner.x(), Conditioning::Degenerate))
}

fn poorly_conditioned(x: f64, reason: Conditioning) -> Error {
    Error::PoorlyConditioned { x, reason }
}
