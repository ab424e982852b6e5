use ndarray::{Array1, s};
use uom::si::{
    angle::radian,
    angular_velocity::radian_per_second,
    f64::{Angle, AngularVelocity},
};

use crate::{Error, error::ensure_positive, time_series::TimeSeries};

use super::{RockingPattern, ensure_samples};

/// A rocking motion at constant angular velocity in each direction.
///
/// The platform tilts from rest to `angle_max` at `forward_angular_vel`, then
/// returns to rest at `backward_angular_vel`.
///
/// Samples are split between the two phases in proportion to their
/// durations.
/// The forward phase gets `trunc(ntimes * backward / (forward + backward))`
/// intervals and the backward phase gets the remaining samples, with the
/// turning point shared between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantRocking {
    forward_angular_vel: AngularVelocity,
    backward_angular_vel: AngularVelocity,
    angle_max: Angle,
}

impl ConstantRocking {
    /// Creates a constant velocity motion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if any parameter is not finite
    /// and strictly positive.
    pub fn new(
        forward_angular_vel: AngularVelocity,
        backward_angular_vel: AngularVelocity,
        angle_max: Angle,
    ) -> Result<Self, Error> {
        ensure_positive(
            "forward_angular_vel",
            forward_angular_vel.get::<radian_per_second>(),
        )?;
        ensure_positive(
            "backward_angular_vel",
            backward_angular_vel.get::<radian_per_second>(),
        )?;
        ensure_positive("angle_max", angle_max.get::<radian>())?;

        Ok(Self {
            forward_angular_vel,
            backward_angular_vel,
            angle_max,
        })
    }

    #[must_use]
    pub fn forward_angular_vel(&self) -> AngularVelocity {
        self.forward_angular_vel
    }

    #[must_use]
    pub fn backward_angular_vel(&self) -> AngularVelocity {
        self.backward_angular_vel
    }

    #[must_use]
    pub fn angle_max(&self) -> Angle {
        self.angle_max
    }

    /// Splits `ntimes` into the forward and backward sample counts.
    fn phase_samples(&self, ntimes: usize) -> Result<(usize, usize), Error> {
        let forward = self.forward_angular_vel.get::<radian_per_second>();
        let backward = self.backward_angular_vel.get::<radian_per_second>();

        // Truncation, not rounding.
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        let n_fwd = (backward / (backward + forward) * ntimes as f64) as usize;
        let n_back = ntimes.saturating_sub(n_fwd);

        if n_fwd == 0 || n_back == 0 {
            return Err(Error::InvalidConfiguration(format!(
                "{ntimes} samples leave an empty rocking phase \
                 ({n_fwd} forward, {n_back} backward)"
            )));
        }

        Ok((n_fwd, n_back))
    }
}

impl RockingPattern for ConstantRocking {
    fn angle(&self, ntimes: usize) -> Result<TimeSeries, Error> {
        ensure_samples(ntimes)?;
        let (n_fwd, n_back) = self.phase_samples(ntimes)?;

        let angle_max = self.angle_max.get::<radian>();
        let dt_fwd = angle_max / self.forward_angular_vel.get::<radian_per_second>();
        let dt_back = angle_max / self.backward_angular_vel.get::<radian_per_second>();

        let mut times = Array1::<f64>::zeros(ntimes);
        let mut values = Array1::<f64>::zeros(ntimes);

        times
            .slice_mut(s![..=n_fwd])
            .assign(&Array1::linspace(0.0, dt_fwd, n_fwd + 1));
        values
            .slice_mut(s![..=n_fwd])
            .assign(&Array1::linspace(0.0, angle_max, n_fwd + 1));

        // The backward phase overwrites the turning point.
        times
            .slice_mut(s![n_fwd..])
            .assign(&Array1::linspace(dt_fwd, dt_fwd + dt_back, n_back));
        values
            .slice_mut(s![n_fwd..])
            .assign(&Array1::linspace(angle_max, 0.0, n_back));

        Ok(TimeSeries::new(times, values)?)
    }
}
