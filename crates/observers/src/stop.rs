use substep_core::Observer;

use crate::traits::{CanStopEarly, HasFrame};

/// Stops a run once simulated time reaches a limit.
///
/// The substep that crosses the limit is still integrated; the driver stops
/// after observing it. Pair with a limit that falls on a frame boundary to end
/// a run on a whole frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopAtTime {
    limit: f64,
}

impl StopAtTime {
    /// Creates an observer that stops once `time_total >= limit`.
    #[must_use]
    pub fn new(limit: f64) -> Self {
        Self { limit }
    }

    /// Returns the time limit.
    #[must_use]
    pub fn limit(&self) -> f64 {
        self.limit
    }
}

impl<E: HasFrame, A: CanStopEarly> Observer<E, A> for StopAtTime {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.time_total() >= self.limit).then(A::stop_early)
    }
}
