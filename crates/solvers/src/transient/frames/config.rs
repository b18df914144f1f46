use thiserror::Error;

/// Configuration for the frame driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_substeps_per_frame: usize,
}

/// Errors that can occur when validating a frame driver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_substeps_per_frame must be at least 1")]
    MaxSubsteps,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_substeps_per_frame: 10_000,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_substeps_per_frame` is zero.
    pub fn new(max_substeps_per_frame: usize) -> Result<Self, ConfigError> {
        if max_substeps_per_frame == 0 {
            return Err(ConfigError::MaxSubsteps);
        }
        Ok(Self {
            max_substeps_per_frame,
        })
    }

    /// Returns the number of substeps a single frame may take before the
    /// driver gives up.
    #[must_use]
    pub fn max_substeps_per_frame(&self) -> usize {
        self.max_substeps_per_frame
    }
}
