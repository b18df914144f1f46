use std::error::Error as StdError;

use crate::timestep;

/// Errors that can occur while driving frames.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("field solver error: {0}")]
    Solver(#[source] Box<dyn StdError + Send + Sync>),

    #[error("timestep error: {0}")]
    Timestep(#[from] timestep::Error),

    #[error("no frame boundary reached after {0} substeps")]
    SubstepLimit(usize),
}

impl Error {
    pub(crate) fn solver<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Solver(Box::new(err))
    }
}
