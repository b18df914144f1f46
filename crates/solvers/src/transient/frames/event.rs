use crate::timestep::{Adaptation, FramePhase};

/// Event emitted by the frame driver after each substep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Substep number within this run, starting at 1.
    pub substep: usize,

    /// The step the fields were integrated with.
    pub dt: f64,

    /// Which rule chose `dt`.
    pub adaptation: Adaptation,

    /// Phase of the frame clock after the substep.
    pub phase: FramePhase,

    /// Completed frames after the substep.
    pub frame: u64,

    /// Total simulated time after the substep.
    pub time_total: f64,
}

impl Event {
    /// Returns `true` if this substep completed a frame.
    #[must_use]
    pub fn is_frame_boundary(&self) -> bool {
        self.phase == FramePhase::AtBoundary
    }
}
