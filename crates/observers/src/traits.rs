//! Capability traits for frame-aware observers.
//!
//! These traits abstract over driver-specific event and action types, so an
//! observer can be written once against the frame clock rather than against a
//! particular driver.
//!
//! # Event traits
//!
//! - [`HasFrame`] for events that report the frame clock after a substep
//!
//! # Action traits
//!
//! - [`CanStopEarly`] for actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use substep_core::Observer;
//! use substep_observers::traits::{CanStopEarly, HasFrame};
//!
//! /// Stops after a fixed number of completed frames.
//! struct FrameBudget {
//!     frames: u64,
//! }
//!
//! impl<E: HasFrame, A: CanStopEarly> Observer<E, A> for FrameBudget {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.frame() >= self.frames).then(A::stop_early)
//!     }
//! }
//! ```

use substep_solvers::transient::frames;

/// An event that reports the frame clock after a substep.
pub trait HasFrame {
    /// Returns the number of completed frames.
    fn frame(&self) -> u64;

    /// Returns the total simulated time.
    fn time_total(&self) -> f64;

    /// Returns the step that produced this event.
    fn dt(&self) -> f64;

    /// Returns `true` if the substep completed a frame.
    fn is_frame_boundary(&self) -> bool;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the driver early.
    fn stop_early() -> Self;
}

impl HasFrame for frames::Event {
    fn frame(&self) -> u64 {
        self.frame
    }

    fn time_total(&self) -> f64 {
        self.time_total
    }

    fn dt(&self) -> f64 {
        self.dt
    }

    fn is_frame_boundary(&self) -> bool {
        frames::Event::is_frame_boundary(self)
    }
}

impl CanStopEarly for frames::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
