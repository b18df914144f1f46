/// Control actions supported by the frame driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the driver after the current substep and return the run so far.
    StopEarly,
}
