//! Advects tracer particles through a vortex and logs the frame clock.
//!
//! # Usage
//!
//! ```text
//! RUST_LOG=debug cargo run --example trace
//! RUST_LOG=trace cargo run --example trace -- 6
//! ```
//!
//! The optional argument is the number of frames to run (default 3). At
//! `debug` each frame boundary is logged with the substeps it took; at
//! `trace` every substep is logged with the rule that chose its step.

use std::{convert::Infallible, error::Error, f64::consts::TAU};

use substep_core::{FieldSolver, Vec3};
use substep_observers::TracingObserver;
use substep_solvers::{
    timestep::{StabilityConfig, TimeController},
    transient::frames,
};
use tracing_subscriber::EnvFilter;

/// Particles carried by a steady vortex about the z axis.
///
/// The swirl speeds up with radius, so the CFL step shrinks as particles
/// spread outward.
struct Vortex {
    strength: f64,
    particles: Vec<Vec3>,
}

impl Vortex {
    fn new(strength: f64, count: u32) -> Self {
        let particles = (0..count)
            .map(|i| {
                let angle = TAU * f64::from(i) / f64::from(count);
                let radius = 0.5 + f64::from(i % 4) * 0.5;
                Vec3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
            })
            .collect();
        Self {
            strength,
            particles,
        }
    }

    fn velocity(&self, p: Vec3) -> Vec3 {
        Vec3::new(0.0, 0.0, self.strength).cross(p)
    }
}

impl FieldSolver for Vortex {
    type Error = Infallible;

    fn max_velocity(&self) -> Result<f64, Self::Error> {
        Ok(Vec3::max_magnitude(
            self.particles.iter().map(|&p| self.velocity(p)),
        ))
    }

    fn integrate(&mut self, dt: f64) -> Result<(), Self::Error> {
        let strength = self.strength;
        for p in &mut self.particles {
            let v = Vec3::new(0.0, 0.0, strength).cross(*p);
            *p += v * dt;
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let frames = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<u64>)
        .transpose()?
        .unwrap_or(3);

    let mut clock = TimeController::new([64, 64, 1], 2, false)?;
    clock.configure(StabilityConfig::new(0.5, 1e-3, 0.1, 1.0 / 24.0)?)?;

    let mut vortex = Vortex::new(4.0, 32);
    let mut observer = TracingObserver::new();

    let solution = frames::run(
        &mut clock,
        &mut vortex,
        frames,
        &frames::Config::default(),
        &mut observer,
    )?;

    println!(
        "{} frames in {} substeps, t = {:.6}",
        solution.frames, solution.substeps, solution.time_total
    );

    Ok(())
}
