//! Reusable observers for the Substep frame driver.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with [`frames::run`] and any driver whose events expose a frame clock.
//!
//! # Modules
//!
//! - [`traits`] holds capability traits for frame-aware observers
//!   ([`HasFrame`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`StopAtTime`] stops a run once simulated time reaches a limit.
//! - [`TracingObserver`] logs substeps and frame boundaries via `tracing`.
//!
//! # Features
//!
//! - `plot`: enables [`TimestepPlot`] for visualizing the chosen timesteps via
//!   egui. This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: substep_core::Observer
//! [`frames::run`]: substep_solvers::transient::frames::run
//! [`HasFrame`]: traits::HasFrame
//! [`CanStopEarly`]: traits::CanStopEarly

mod stop;
mod tracing_observer;

pub mod traits;

#[cfg(feature = "plot")]
mod plot;

pub use stop::StopAtTime;
pub use tracing_observer::TracingObserver;

#[cfg(feature = "plot")]
pub use plot::{ShowConfig, TimestepPlot};
