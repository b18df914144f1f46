//! Drivers for transient grid simulations.
//!
//! - [`frames`] runs a [`FieldSolver`] for a number of output frames under a
//!   [`TimeController`](crate::timestep::TimeController)
//!
//! [`FieldSolver`]: substep_core::FieldSolver

pub mod frames;
