//! Timestep control and frame drivers for grid simulations.
//!
//! # Modules
//!
//! - [`timestep`] holds the CFL-bounded, frame-fitting [`TimeController`]
//! - [`transient`] has drivers that run the adapt → integrate → advance loop
//!
//! [`TimeController`]: timestep::TimeController

pub mod timestep;
pub mod transient;
