/// Receives solver events and decides how the iteration should proceed.
///
/// Every iterative minimizer reports its progress through an observer, which
/// can record the trajectory, log it, or stop the search early.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer. Since `&mut F` is itself `FnMut`, a closure can
/// be lent to several solver calls in turn.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Stop {
        Now,
    }

    fn drive<O: Observer<usize, Stop>>(mut observer: O, events: usize) -> Option<usize> {
        (1..=events).find(|event| observer.observe(event).is_some())
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), 10), None);
    }

    #[test]
    fn closure_observer_can_stop() {
        let stop_at_three = |event: &usize| (*event == 3).then_some(Stop::Now);

        assert_eq!(drive(stop_at_three, 10), Some(3));
    }

    #[test]
    fn closures_can_record_events() {
        let mut seen = Vec::new();
        let record = |event: &usize| {
            seen.push(*event);
            None
        };

        drive(record, 4);

        assert_eq!(seen, vec![1, 2, 3, 4]);
    }
}
