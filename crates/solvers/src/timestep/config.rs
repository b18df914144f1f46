use thiserror::Error;

/// Stability configuration for a [`TimeController`](super::TimeController).
///
/// `dt_max < dt_min` is accepted here. The CFL clamp then pins every step to
/// `dt_min`, and a configuration that cannot fit its frames reports
/// [`Error::InvalidTimestep`](super::Error::InvalidTimestep) at adaptation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StabilityConfig {
    cfl_number: f64,
    dt_min: f64,
    dt_max: f64,
    frame_length: f64,
}

/// Errors that can occur when validating a stability config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cfl_number must be finite and positive")]
    CflNumber,

    #[error("dt_min must be finite and positive")]
    DtMin,

    #[error("dt_max must be finite and positive")]
    DtMax,

    #[error("frame_length must be finite and positive")]
    FrameLength,
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            cfl_number: 1000.0,
            dt_min: 1.0,
            dt_max: 1.0,
            frame_length: 1.0,
        }
    }
}

impl StabilityConfig {
    /// Creates a new config with validated values.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is zero, negative, or non-finite.
    pub fn new(
        cfl_number: f64,
        dt_min: f64,
        dt_max: f64,
        frame_length: f64,
    ) -> Result<Self, ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;

        if !positive(cfl_number) {
            return Err(ConfigError::CflNumber);
        }
        if !positive(dt_min) {
            return Err(ConfigError::DtMin);
        }
        if !positive(dt_max) {
            return Err(ConfigError::DtMax);
        }
        if !positive(frame_length) {
            return Err(ConfigError::FrameLength);
        }

        Ok(Self {
            cfl_number,
            dt_min,
            dt_max,
            frame_length,
        })
    }

    /// Returns the CFL number scaling the stable step.
    #[must_use]
    pub fn cfl_number(&self) -> f64 {
        self.cfl_number
    }

    /// Returns the smallest step the CFL clamp may propose.
    #[must_use]
    pub fn dt_min(&self) -> f64 {
        self.dt_min
    }

    /// Returns the largest step the CFL clamp may propose.
    #[must_use]
    pub fn dt_max(&self) -> f64 {
        self.dt_max
    }

    /// Returns the simulated duration of one output frame.
    #[must_use]
    pub fn frame_length(&self) -> f64 {
        self.frame_length
    }
}
