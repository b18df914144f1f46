//! Core traits and types for the Substep framework.
//!
//! This crate defines the shared abstractions that the timestep controller,
//! the frame driver, and observers build on:
//!
//! - [`FieldSolver`] is the external grid solve as seen from the time-stepping layer
//! - [`Observer`] receives driver events and optionally returns control actions
//! - [`Vec3`] is a three-component vector used to measure velocity magnitudes

mod field;
mod observer;
pub mod vector;

pub use field::FieldSolver;
pub use observer::Observer;
pub use vector::Vec3;
