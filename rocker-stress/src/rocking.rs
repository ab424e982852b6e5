//! Flip angle profiles of the rocking platform.

mod constant;
mod sine;

pub use constant::ConstantRocking;
pub use sine::SineRocking;

use crate::{Error, time_series::TimeSeries};

/// A motion of the rocking platform.
///
/// Implementations are pure: the same `ntimes` always yields the same series.
pub trait RockingPattern {
    /// Returns the flip angle, in radians, sampled `ntimes` times over one
    /// cycle of the motion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `ntimes` is too small for
    /// the pattern.
    fn angle(&self, ntimes: usize) -> Result<TimeSeries, Error>;
}

impl<R: RockingPattern + ?Sized> RockingPattern for &R {
    fn angle(&self, ntimes: usize) -> Result<TimeSeries, Error> {
        (**self).angle(ntimes)
    }
}

impl<R: RockingPattern + ?Sized> RockingPattern for Box<R> {
    fn angle(&self, ntimes: usize) -> Result<TimeSeries, Error> {
        (**self).angle(ntimes)
    }
}

/// Checks that a differentiable series can be produced.
fn ensure_samples(ntimes: usize) -> Result<(), Error> {
    if ntimes < 2 {
        return Err(Error::InvalidConfiguration(format!(
            "at least 2 samples are needed, got {ntimes}"
        )));
    }
    Ok(())
}
