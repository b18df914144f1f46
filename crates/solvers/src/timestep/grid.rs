use super::Error;

/// Spatial dimensionality of the simulation grid.
///
/// Four-dimensional grids are expressed as [`Dimensionality::Three`] with
/// [`GridSpec::use_4th_dimension`] set, never as a dimensionality of 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimensionality {
    Two,
    Three,
}

impl Dimensionality {
    /// Returns the number of spatial dimensions.
    #[must_use]
    pub fn get(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

impl TryFrom<u8> for Dimensionality {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(Error::InvalidDimensionality(other)),
        }
    }
}

/// Descriptive grid parameters carried by a controller.
///
/// The timestep algorithm never reads these; they travel with the clock so
/// output and checkpoint code can describe the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    resolution: [i64; 3],
    dimensionality: Dimensionality,
    use_4th_dimension: bool,
}

impl GridSpec {
    /// Validates and creates a grid description.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensionality`] unless `dimensionality` is 2
    /// or 3. A value of 4 is rejected even when `use_4th_dimension` is set.
    pub fn new(
        resolution: [i64; 3],
        dimensionality: u8,
        use_4th_dimension: bool,
    ) -> Result<Self, Error> {
        Ok(Self {
            resolution,
            dimensionality: Dimensionality::try_from(dimensionality)?,
            use_4th_dimension,
        })
    }

    #[must_use]
    pub fn resolution(&self) -> [i64; 3] {
        self.resolution
    }

    #[must_use]
    pub fn dimensionality(&self) -> Dimensionality {
        self.dimensionality
    }

    /// Returns `true` if the grid's third axis stands in for a fourth dimension.
    #[must_use]
    pub fn use_4th_dimension(&self) -> bool {
        self.use_4th_dimension
    }
}
