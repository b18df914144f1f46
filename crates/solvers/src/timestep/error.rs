use thiserror::Error;

use super::ConfigError;

/// Errors reported by a [`TimeController`](super::TimeController).
///
/// [`Error::InvalidDimensionality`] and [`Error::InvalidTimestep`] are fatal
/// configuration errors. The run must stop; the controller offers no recovery.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid dimensionality {}: {}", .0, dimensionality_hint(.0))]
    InvalidDimensionality(u8),

    #[error("invalid timestep {dt}: must exceed half of dt_min ({dt_min})")]
    InvalidTimestep { dt: f64, dt_min: f64 },

    #[error("max velocity must be finite and non-negative, got {0}")]
    InvalidVelocity(f64),

    #[error("stability config cannot change once adaptation has started")]
    AlreadyAdapting,

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}

fn dimensionality_hint(dimensionality: &u8) -> &'static str {
    if *dimensionality == 4 {
        "create a 3D grid with use_4th_dimension set instead"
    } else {
        "only 2D and 3D grids are supported"
    }
}
