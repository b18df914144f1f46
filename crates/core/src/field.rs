/// The grid solve driven by the time-stepping layer.
///
/// A `FieldSolver` owns the simulation fields (velocity, density, pressure, ...)
/// and knows how to integrate them over a timestep. The time-stepping layer
/// never looks inside the fields; it only needs the largest velocity magnitude
/// to pick a stable step, and a way to advance the fields by that step.
///
/// How velocities are stored and how the maximum is found are up to the
/// implementor. [`Vec3::max_magnitude`](crate::Vec3::max_magnitude) covers the
/// common case of a flat slice of velocity vectors.
pub trait FieldSolver {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the largest velocity magnitude in the current fields.
    ///
    /// The value must not be pre-scaled by the timestep.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the velocity field cannot be inspected.
    fn max_velocity(&self) -> Result<f64, Self::Error>;

    /// Integrates the fields forward by `dt`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the solve fails.
    fn integrate(&mut self, dt: f64) -> Result<(), Self::Error>;
}
