/// Where a substep left the frame clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FramePhase {
    /// Time remains in the current frame.
    WithinFrame,

    /// The substep consumed the rest of the frame and the clock rolled over.
    AtBoundary,
}

impl FramePhase {
    /// Classifies the frame clock after time has been accumulated.
    ///
    /// A frame counts as consumed once less than `epsilon` of it remains,
    /// which includes overshooting the boundary.
    pub(super) fn classify(elapsed: f64, frame_length: f64, epsilon: f64) -> Self {
        if frame_length - elapsed < epsilon {
            Self::AtBoundary
        } else {
            Self::WithinFrame
        }
    }
}

/// Which rule decided the step chosen by an adaptation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Adaptation {
    /// The step was locked by a previous split and kept unchanged.
    Locked,

    /// The clamped CFL step fit inside the frame as proposed.
    Cfl,

    /// The step was snapped to the exact remainder of the frame.
    SnappedToBoundary,

    /// The remainder was split in half and the step locked for the second half.
    SplitRemainder,
}

/// Summary of a completed substep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Substep {
    /// The step that was taken.
    pub dt: f64,

    /// Phase of the frame clock after the step.
    pub phase: FramePhase,

    /// Completed frames after the step.
    pub frame: u64,

    /// Total simulated time after the step.
    pub time_total: f64,
}
