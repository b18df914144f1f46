//! Frame driver for transient grid simulations.
//!
//! This module runs the canonical time-stepping loop of a grid simulation:
//!
//! ```text
//! loop {
//!     clock.adapt_timestep(solver.max_velocity())
//!     solver.integrate(clock.dt())
//!     clock.advance_substep()
//! }
//! ```
//!
//! until a requested number of output frames has completed.
//!
//! # Example
//!
//! ```ignore
//! use substep_solvers::transient::frames;
//!
//! let solution = frames::run_unobserved(&mut clock, &mut fields, 24, &frames::Config::default())?;
//! assert_eq!(solution.frames, 24);
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use substep_core::{FieldSolver, Observer};

use crate::timestep::{FramePhase, TimeController};

/// Advances `solver` by `frames` output frames under `clock`.
///
/// # Algorithm
///
/// For each substep:
///
/// 1. Ask the solver for its largest velocity magnitude.
/// 2. Let the controller adapt the timestep.
/// 3. Integrate the solver by the chosen `dt`.
/// 4. Advance the controller's frame clock.
/// 5. Emit an [`Event`] to the observer.
///    If the observer returns [`Action::StopEarly`], terminate.
///
/// The run ends once the controller has completed `frames` more frames than
/// it had on entry.
///
/// # Errors
///
/// - [`Error::Solver`] if the field solver fails.
/// - [`Error::Timestep`] if the controller rejects the velocity or reports a
///   degenerate timestep.
/// - [`Error::SubstepLimit`] if a single frame takes more substeps than
///   [`Config::max_substeps_per_frame`] allows.
pub fn run<S, Obs>(
    clock: &mut TimeController,
    solver: &mut S,
    frames: u64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    S: FieldSolver,
    Obs: Observer<Event, Action>,
{
    let start_frame = clock.frame();
    let target = start_frame.saturating_add(frames);

    let mut status = Status::Complete;
    let mut substeps = 0;
    let mut substeps_in_frame = 0;

    while clock.frame() < target {
        if substeps_in_frame >= config.max_substeps_per_frame() {
            return Err(Error::SubstepLimit(substeps_in_frame));
        }

        let max_velocity = solver.max_velocity().map_err(Error::solver)?;
        let adaptation = clock.adapt_timestep(max_velocity)?;
        solver.integrate(clock.dt()).map_err(Error::solver)?;
        let substep = clock.advance_substep();

        substeps += 1;
        substeps_in_frame = match substep.phase {
            FramePhase::AtBoundary => 0,
            FramePhase::WithinFrame => substeps_in_frame + 1,
        };

        let event = Event {
            substep: substeps,
            dt: substep.dt,
            adaptation,
            phase: substep.phase,
            frame: substep.frame,
            time_total: substep.time_total,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            status = Status::StoppedByObserver;
            break;
        }
    }

    Ok(Solution {
        status,
        frames: clock.frame() - start_frame,
        substeps,
        time_total: clock.time_total(),
    })
}

/// Advances `solver` by `frames` output frames without observation.
///
/// This is a convenience wrapper around [`run`] that discards events.
///
/// # Errors
///
/// Returns an error if the solver or the controller fails.
pub fn run_unobserved<S>(
    clock: &mut TimeController,
    solver: &mut S,
    frames: u64,
    config: &Config,
) -> Result<Solution, Error>
where
    S: FieldSolver,
{
    run(clock, solver, frames, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    use crate::timestep::{self, Adaptation, StabilityConfig};

    // --- Test fixtures ---

    /// A single tracer moving at constant speed.
    struct Tracer {
        speed: f64,
        position: f64,
        steps: Vec<f64>,
    }

    impl Tracer {
        fn new(speed: f64) -> Self {
            Self {
                speed,
                position: 0.0,
                steps: Vec::new(),
            }
        }
    }

    impl FieldSolver for Tracer {
        type Error = Infallible;

        fn max_velocity(&self) -> Result<f64, Self::Error> {
            Ok(self.speed)
        }

        fn integrate(&mut self, dt: f64) -> Result<(), Self::Error> {
            self.position += self.speed * dt;
            self.steps.push(dt);
            Ok(())
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("pressure solve diverged")]
    struct Diverged;

    /// Fails on the given integration call.
    struct Unstable {
        fail_on: usize,
        calls: usize,
    }

    impl FieldSolver for Unstable {
        type Error = Diverged;

        fn max_velocity(&self) -> Result<f64, Self::Error> {
            Ok(1.0)
        }

        fn integrate(&mut self, _dt: f64) -> Result<(), Self::Error> {
            self.calls += 1;
            if self.calls == self.fail_on {
                Err(Diverged)
            } else {
                Ok(())
            }
        }
    }

    fn clock(cfl_number: f64, dt_min: f64, dt_max: f64) -> TimeController {
        let mut clock = TimeController::new([32, 32, 1], 2, false).unwrap();
        clock
            .configure(StabilityConfig::new(cfl_number, dt_min, dt_max, 1.0).unwrap())
            .unwrap();
        clock
    }

    // --- Tests ---

    #[test]
    fn runs_requested_frames() {
        let mut clock = clock(2.0, 0.01, 0.3);
        let mut tracer = Tracer::new(8.0);

        let solution = run_unobserved(&mut clock, &mut tracer, 3, &Config::default())
            .expect("should run");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.frames, 3);
        assert_eq!(solution.time_total, 3.0);
        assert_eq!(solution.substeps, tracer.steps.len());
        assert!(solution.substeps > 3);
        assert_eq!(clock.frame(), 3);

        // CFL keeps steps below 2 / 8 time units; snapping to a boundary may
        // stretch one by at most 5%.
        assert!(tracer.steps.iter().all(|&dt| dt <= 0.25 * 1.05 + 1e-4));
    }

    #[test]
    fn events_mirror_integrated_steps() {
        let mut clock = clock(1.0, 0.05, 0.4);
        let mut tracer = Tracer::new(1.0);

        let mut events = Vec::new();
        run(
            &mut clock,
            &mut tracer,
            2,
            &Config::default(),
            |event: &Event| {
                events.push(*event);
                None
            },
        )
        .expect("should run");

        let dts: Vec<f64> = events.iter().map(|e| e.dt).collect();
        assert_eq!(dts, tracer.steps);
        assert_eq!(events.first().map(|e| e.substep), Some(1));

        let boundaries: Vec<_> = events.iter().filter(|e| e.is_frame_boundary()).collect();
        assert_eq!(boundaries.len(), 2);
        assert_eq!(boundaries[0].frame, 1);
        assert_eq!(boundaries[1].time_total, 2.0);

        // The last substep of a frame is always fitted to the boundary.
        assert!(boundaries.iter().all(|e| matches!(
            e.adaptation,
            Adaptation::SnappedToBoundary | Adaptation::Locked
        )));
    }

    #[test]
    fn observer_can_stop_early() {
        let mut clock = clock(1.0, 0.05, 0.2);
        let mut tracer = Tracer::new(1.0);

        let observer = |event: &Event| event.is_frame_boundary().then_some(Action::StopEarly);

        let solution = run(&mut clock, &mut tracer, 10, &Config::default(), observer)
            .expect("should stop early");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.frames, 1);
        assert_eq!(solution.time_total, 1.0);
    }

    #[test]
    fn zero_frames_never_calls_solver() {
        let mut clock = clock(1.0, 0.05, 0.2);
        let mut tracer = Tracer::new(1.0);

        let solution = run_unobserved(&mut clock, &mut tracer, 0, &Config::default())
            .expect("should return immediately");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.substeps, 0);
        assert!(tracer.steps.is_empty());
    }

    #[test]
    fn continues_from_current_frame() {
        let mut clock = clock(1.0, 0.05, 0.5);
        let mut tracer = Tracer::new(0.5);

        run_unobserved(&mut clock, &mut tracer, 2, &Config::default()).unwrap();
        let solution = run_unobserved(&mut clock, &mut tracer, 2, &Config::default()).unwrap();

        assert_eq!(solution.frames, 2);
        assert_eq!(clock.frame(), 4);
        assert_eq!(solution.time_total, 4.0);
        assert_relative_eq!(
            tracer.position,
            0.5 * tracer.steps.iter().sum::<f64>(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn solver_errors_propagate() {
        let mut clock = clock(1.0, 0.05, 0.2);
        let mut solver = Unstable {
            fail_on: 3,
            calls: 0,
        };

        let err = run_unobserved(&mut clock, &mut solver, 1, &Config::default()).unwrap_err();

        assert!(matches!(err, Error::Solver(_)));
        assert_eq!(err.to_string(), "field solver error: pressure solve diverged");
    }

    #[test]
    fn timestep_errors_propagate() {
        let mut clock = TimeController::new([8, 8, 8], 3, false).unwrap();
        clock
            .configure(StabilityConfig::new(1000.0, 0.5, 0.5, 0.1).unwrap())
            .unwrap();
        let mut tracer = Tracer::new(1.0);

        let err = run_unobserved(&mut clock, &mut tracer, 1, &Config::default()).unwrap_err();

        assert!(matches!(
            err,
            Error::Timestep(timestep::Error::InvalidTimestep { .. })
        ));
        assert!(tracer.steps.is_empty());
    }

    #[test]
    fn substep_limit_stops_runaway_frames() {
        // Ten fixed steps per frame against a limit of four.
        let mut clock = clock(1.0, 0.1, 0.1);
        let mut tracer = Tracer::new(0.0);
        let config = Config::new(4).unwrap();

        let err = run_unobserved(&mut clock, &mut tracer, 1, &config).unwrap_err();

        assert!(matches!(err, Error::SubstepLimit(4)));
        assert_eq!(tracer.steps.len(), 4);
    }

    #[test]
    fn config_rejects_zero_limit() {
        assert_eq!(Config::new(0), Err(ConfigError::MaxSubsteps));
        assert_eq!(Config::default().max_substeps_per_frame(), 10_000);
    }
}
