//! A rocking pattern applied to a dish of fluid.

use log::debug;
use uom::si::{dynamic_viscosity::pascal_second, f64::DynamicViscosity, length::meter};

use crate::{
    Error,
    dish::{Dish, fluid_flux},
    lubrication::LubricationModel,
    rocking::RockingPattern,
    time_series::TimeSeries,
};

/// A dish of fluid with a given viscosity, rocked with a given pattern.
///
/// Every method recomputes its result from scratch, so an experiment can be
/// evaluated at several resolutions or shared between threads freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Experiment<R, D> {
    pub rocking: R,
    pub dish: D,
    pub viscosity: DynamicViscosity,
}

impl<R: RockingPattern, D: Dish> Experiment<R, D> {
    #[must_use]
    pub fn new(rocking: R, dish: D, viscosity: DynamicViscosity) -> Self {
        Self {
            rocking,
            dish,
            viscosity,
        }
    }

    /// Returns the flip angle of the dish, in radians.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the rocking pattern cannot
    /// produce `ntimes` samples.
    pub fn flip_angle(&self, ntimes: usize) -> Result<TimeSeries, Error> {
        self.rocking.angle(ntimes)
    }

    /// Returns the fluid flux across the center line of the dish, in m³/s.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the rocking pattern cannot
    /// produce `ntimes` samples, or [`Error::AngleExceeded`] if the pattern
    /// tilts the dish past its critical angle.
    pub fn fluid_flux(&self, ntimes: usize) -> Result<TimeSeries, Error> {
        let angle = self.flip_angle(ntimes)?;
        debug!(
            "computing flux for {} samples over {} s, max flip angle {:.4} rad",
            angle.len(),
            angle.times()[angle.len() - 1],
            angle.max_abs(),
        );
        fluid_flux(&self.dish, &angle)
    }

    /// Returns the lubrication model for the fluid layer in the dish.
    #[must_use]
    pub fn lubrication(&self) -> LubricationModel {
        LubricationModel::new(
            self.viscosity,
            self.dish.fluid_height(),
            self.dish.cross_length(),
        )
    }

    /// Returns the shear stress at the bottom of the dish, in Pa.
    ///
    /// # Errors
    ///
    /// Fails for the same reasons as [`Experiment::fluid_flux`].
    pub fn shear_stress(&self, ntimes: usize) -> Result<TimeSeries, Error> {
        let lubrication = self.lubrication();
        debug!(
            "computing shear stress with viscosity {} Pa·s, fluid height {} m, cross length {} m",
            lubrication.dynamic_viscosity.get::<pascal_second>(),
            lubrication.height.get::<meter>(),
            lubrication.width.get::<meter>(),
        );
        let flux = self.fluid_flux(ntimes)?;
        Ok(lubrication.shear_stress_bottom(&flux))
    }
}
