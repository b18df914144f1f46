use tracing::{debug, trace, warn};

use super::{Adaptation, Error, FramePhase, GridSpec, StabilityConfig, Substep};

/// Remaining frame time below which a frame counts as consumed.
pub const BOUNDARY_EPSILON: f64 = 1e-6;

/// Guards the CFL ratio against division by zero for still fields.
const VELOCITY_EPSILON: f64 = 1e-5;

/// Added to fitted steps so the frame clock always ends past the boundary.
const FIT_EPSILON: f64 = 1e-4;

/// Steps within 5% of the remaining frame time snap to the boundary.
const SNAP_MARGIN: f64 = 1.05;

/// Steps above 80% of the remaining frame time split the remainder instead.
const SPLIT_MARGIN: f64 = 1.25;

/// Owns the clock of a simulation run and chooses stable timesteps.
///
/// A controller is driven by a single loop that alternates
/// [`adapt_timestep`](Self::adapt_timestep), an external field integration
/// using [`dt`](Self::dt), and [`advance_substep`](Self::advance_substep).
/// See the [module docs](super) for the algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeController {
    grid: GridSpec,
    config: StabilityConfig,
    dt: f64,
    dt_locked: bool,
    time_elapsed_in_frame: f64,
    time_total: f64,
    frame: u64,
    adapting: bool,
}

impl TimeController {
    /// Creates a controller for a grid with the default stability config.
    ///
    /// The defaults are `dt = dt_min = dt_max = 1`, `cfl_number = 1000`, and
    /// `frame_length = 1`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensionality`] unless `dimensionality` is 2
    /// or 3. Four-dimensional grids must be requested as 3D grids with
    /// `use_4th_dimension` set.
    pub fn new(
        resolution: [i64; 3],
        dimensionality: u8,
        use_4th_dimension: bool,
    ) -> Result<Self, Error> {
        let grid = GridSpec::new(resolution, dimensionality, use_4th_dimension)?;
        Ok(Self::with_config(grid, StabilityConfig::default()))
    }

    /// Creates a controller for a validated grid and stability config.
    ///
    /// The first step starts at `dt_max`.
    #[must_use]
    pub fn with_config(grid: GridSpec, config: StabilityConfig) -> Self {
        Self {
            grid,
            config,
            dt: config.dt_max(),
            dt_locked: false,
            time_elapsed_in_frame: 0.0,
            time_total: 0.0,
            frame: 0,
            adapting: false,
        }
    }

    /// Replaces the stability config and restarts the step at `dt_max`.
    ///
    /// Frame and time bookkeeping are kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyAdapting`] once [`adapt_timestep`](Self::adapt_timestep)
    /// has been called.
    pub fn configure(&mut self, config: StabilityConfig) -> Result<(), Error> {
        if self.adapting {
            return Err(Error::AlreadyAdapting);
        }
        self.config = config;
        self.dt = config.dt_max();
        Ok(())
    }

    /// Chooses the timestep for the next substep.
    ///
    /// `max_velocity` is the largest velocity magnitude in the current fields,
    /// not yet scaled by the timestep. A locked step (the second half of a
    /// split remainder) is kept as is.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidVelocity`] if `max_velocity` is negative or not
    ///   finite. The controller is left untouched.
    /// - [`Error::InvalidTimestep`] if the committed step is at or below
    ///   `dt_min / 2`, which means the stability config cannot fit its frames.
    ///   This is fatal; the step stays committed for inspection.
    pub fn adapt_timestep(&mut self, max_velocity: f64) -> Result<Adaptation, Error> {
        if !max_velocity.is_finite() || max_velocity < 0.0 {
            return Err(Error::InvalidVelocity(max_velocity));
        }
        self.adapting = true;

        let adaptation = if self.dt_locked {
            Adaptation::Locked
        } else {
            let (dt, adaptation) = self.fit_to_frame(self.propose_cfl_step(max_velocity));
            self.dt = dt;
            self.dt_locked = adaptation == Adaptation::SplitRemainder;
            adaptation
        };

        trace!(
            dt = self.dt,
            ?adaptation,
            max_velocity,
            elapsed = self.time_elapsed_in_frame,
            "adapted timestep"
        );

        let dt_min = self.config.dt_min();
        if self.dt <= dt_min / 2.0 {
            warn!(dt = self.dt, dt_min, "timestep collapsed below dt_min / 2");
            return Err(Error::InvalidTimestep { dt: self.dt, dt_min });
        }

        Ok(adaptation)
    }

    /// Returns the clamped CFL step for `max_velocity`, before frame fitting.
    ///
    /// The result always lies in `[dt_min, dt_max]`, or equals `dt_min` when
    /// the bounds are inverted.
    #[must_use]
    pub fn propose_cfl_step(&self, max_velocity: f64) -> f64 {
        let effective_speed = max_velocity * self.dt;
        let raw = self.dt * self.config.cfl_number() / (effective_speed + VELOCITY_EPSILON);
        // `f64::clamp` panics on inverted bounds.
        raw.min(self.config.dt_max()).max(self.config.dt_min())
    }

    /// Accumulates the current step into the frame and total clocks.
    ///
    /// When the step consumes the rest of the frame, the frame counter
    /// advances, total time is recomputed as `frame * frame_length`, the frame
    /// clock restarts at zero, and any step lock is released.
    ///
    /// Calling this twice without adapting in between advances time twice.
    pub fn advance_substep(&mut self) -> Substep {
        let dt = self.dt;
        self.time_elapsed_in_frame += dt;
        self.time_total += dt;

        let frame_length = self.config.frame_length();
        let phase =
            FramePhase::classify(self.time_elapsed_in_frame, frame_length, BOUNDARY_EPSILON);

        if phase == FramePhase::AtBoundary {
            self.frame += 1;
            self.time_total = self.frame as f64 * frame_length;
            self.time_elapsed_in_frame = 0.0;
            self.dt_locked = false;
            debug!(frame = self.frame, time_total = self.time_total, "frame complete");
        }

        Substep {
            dt,
            phase,
            frame: self.frame,
            time_total: self.time_total,
        }
    }

    /// Fits a proposed step to the remainder of the current frame.
    fn fit_to_frame(&self, proposed: f64) -> (f64, Adaptation) {
        let elapsed = self.time_elapsed_in_frame;
        let frame_length = self.config.frame_length();
        let remainder = frame_length - elapsed + FIT_EPSILON;

        if elapsed + proposed * SNAP_MARGIN > frame_length {
            (remainder, Adaptation::SnappedToBoundary)
        } else if elapsed + proposed + self.config.dt_min() > frame_length
            || elapsed + proposed * SPLIT_MARGIN > frame_length
        {
            (remainder * 0.5, Adaptation::SplitRemainder)
        } else {
            (proposed, Adaptation::Cfl)
        }
    }

    /// Returns the current timestep.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns `true` while the next adaptation will keep the current step.
    #[must_use]
    pub fn dt_locked(&self) -> bool {
        self.dt_locked
    }

    /// Returns the time accumulated since the last frame boundary.
    #[must_use]
    pub fn time_elapsed_in_frame(&self) -> f64 {
        self.time_elapsed_in_frame
    }

    /// Returns the total simulated time.
    ///
    /// Exactly `frame * frame_length` right after a boundary.
    #[must_use]
    pub fn time_total(&self) -> f64 {
        self.time_total
    }

    /// Returns the number of completed frames.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[must_use]
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    #[must_use]
    pub fn config(&self) -> &StabilityConfig {
        &self.config
    }
}
