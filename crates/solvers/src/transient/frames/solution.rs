/// Indicates how the driver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested frames.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a frame run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// How the driver terminated.
    pub status: Status,

    /// Frames completed during this run.
    pub frames: u64,

    /// Substeps taken during this run.
    pub substeps: usize,

    /// Total simulated time of the controller when the run ended.
    pub time_total: f64,
}
