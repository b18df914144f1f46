use substep_core::Observer;
use tracing::{debug, trace};

use crate::traits::HasFrame;

/// Logs every substep at `trace` and every frame boundary at `debug`.
///
/// The observer never stops a run. It tracks the substeps and step time spent
/// in the current frame, so each boundary record says how hard the frame was
/// and how far the fitted steps overshot before the clock was corrected.
/// Install a subscriber in the binary to see the output; library code never
/// does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TracingObserver {
    substeps_in_frame: usize,
    stepped_in_frame: f64,
    last_frame_stepped: f64,
    frames_logged: u64,
}

impl TracingObserver {
    /// Creates a new logging observer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many frame boundaries have been logged.
    #[must_use]
    pub fn frames_logged(&self) -> u64 {
        self.frames_logged
    }

    /// Returns the sum of the steps taken in the last completed frame.
    ///
    /// This is the frame length plus the small overshoot the controller
    /// discards at the boundary.
    #[must_use]
    pub fn last_frame_stepped(&self) -> f64 {
        self.last_frame_stepped
    }
}

impl<E: HasFrame, A> Observer<E, A> for TracingObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.substeps_in_frame += 1;
        self.stepped_in_frame += event.dt();

        trace!(
            frame = event.frame(),
            dt = event.dt(),
            time_total = event.time_total(),
            "substep"
        );

        if event.is_frame_boundary() {
            debug!(
                frame = event.frame(),
                time_total = event.time_total(),
                substeps = self.substeps_in_frame,
                stepped = self.stepped_in_frame,
                "frame boundary"
            );
            self.last_frame_stepped = self.stepped_in_frame;
            self.substeps_in_frame = 0;
            self.stepped_in_frame = 0.0;
            self.frames_logged += 1;
        }

        None
    }
}

/// Allows `&mut TracingObserver` to be passed to drivers that take an observer
/// by value, so its counters can be read after the run.
impl<E: HasFrame, A> Observer<E, A> for &mut TracingObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
