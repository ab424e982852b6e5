use thiserror::Error;

use crate::time_series::SeriesError;

/// Errors that can occur when evaluating the rocking model.
///
/// Both model errors describe a caller configuration that must be fixed.
/// Neither is transient, so no partial result is ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The flip angle exceeds the critical angle of the dish.
    ///
    /// Past the critical angle the free surface would cross the bottom of the
    /// dish, so the single-surface lubrication model no longer applies.
    /// Both angles are in radians.
    #[error("flip angle {angle} rad exceeds the critical angle {critical_angle} rad of the dish")]
    AngleExceeded { angle: f64, critical_angle: f64 },

    /// A parameter or parameter combination cannot produce a valid series.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A time series could not be built from the computed samples.
    #[error(transparent)]
    Series(#[from] SeriesError),
}

/// A result type alias using the crate [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Checks that a parameter, given in SI base units, is finite and positive.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfiguration(format!(
            "`{name}` must be finite and strictly positive, got {value}"
        )))
    }
}
