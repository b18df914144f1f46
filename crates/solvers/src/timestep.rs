//! Adaptive timestep control for grid simulations.
//!
//! # Algorithm
//!
//! A [`TimeController`] picks each substep's `dt` in two stages:
//!
//! 1. **CFL bound.** The previous step is rescaled by
//!    `cfl / (max_velocity * dt + 1e-5)` and clamped to `[dt_min, dt_max]`,
//!    keeping the distance travelled per step below a multiple of the grid
//!    spacing.
//! 2. **Frame fitting.** If the step would overshoot the frame boundary, or
//!    land within 5% of it, the step is snapped to the exact remainder. If it
//!    would leave a remainder shorter than `dt_min`, or is more than 80% of the
//!    remainder, the remainder is split into two equal halves and the second
//!    half is locked against re-adaptation.
//!
//! Every completed frame resets the frame clock and recomputes total time as
//! `frame * frame_length`, so floating-point error never accumulates across
//! frames.
//!
//! # Usage
//!
//! ```
//! use substep_solvers::timestep::{StabilityConfig, TimeController};
//!
//! let mut clock = TimeController::new([64, 64, 64], 3, false)?;
//! clock.configure(StabilityConfig::new(4.0, 0.01, 0.2, 1.0)?)?;
//!
//! while clock.frame() < 2 {
//!     let max_velocity = 3.0; // measured from the velocity field
//!     clock.adapt_timestep(max_velocity)?;
//!     // integrate fields by clock.dt() ...
//!     clock.advance_substep();
//! }
//! assert_eq!(clock.time_total(), 2.0);
//! # Ok::<(), substep_solvers::timestep::Error>(())
//! ```
//!
//! # Errors
//!
//! Unsupported grid dimensionality and a committed step at or below
//! `dt_min / 2` are both fatal: the run must stop rather than continue with an
//! unstable clock.

mod config;
mod controller;
mod error;
mod grid;
mod phase;


pub use config::{ConfigError, StabilityConfig};
pub use controller::{BOUNDARY_EPSILON, TimeController};
pub use error::Error;
pub use grid::{Dimensionality, GridSpec};
pub use phase::{Adaptation, FramePhase, Substep};
