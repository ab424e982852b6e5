use std::f64::consts::PI;

use ndarray::Array1;
use uom::si::{
    angle::radian,
    f64::{Angle, Time},
    time::second,
};

use crate::{Error, error::ensure_positive, time_series::TimeSeries};

use super::{RockingPattern, ensure_samples};

/// A sinusoidal rocking motion.
///
/// The flip angle is `angle_max * sin(2π t / period)`, sampled over a single
/// period starting at rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineRocking {
    angle_max: Angle,
    period: Time,
}

impl SineRocking {
    /// Creates a sinusoidal motion with the given amplitude and period.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if either parameter is not
    /// finite and strictly positive.
    pub fn new(angle_max: Angle, period: Time) -> Result<Self, Error> {
        ensure_positive("angle_max", angle_max.get::<radian>())?;
        ensure_positive("period", period.get::<second>())?;
        Ok(Self { angle_max, period })
    }

    #[must_use]
    pub fn angle_max(&self) -> Angle {
        self.angle_max
    }

    #[must_use]
    pub fn period(&self) -> Time {
        self.period
    }
}

impl RockingPattern for SineRocking {
    fn angle(&self, ntimes: usize) -> Result<TimeSeries, Error> {
        ensure_samples(ntimes)?;

        let angle_max = self.angle_max.get::<radian>();
        let period = self.period.get::<second>();

        let times = Array1::linspace(0.0, period, ntimes);
        let values = times.mapv(|t| angle_max * (2.0 * PI * t / period).sin());

        Ok(TimeSeries::new(times, values)?)
    }
}
