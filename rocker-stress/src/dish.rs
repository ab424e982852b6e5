//! Dish geometries and the fluid flux they produce under rocking.

mod cylindrical;
mod rectangular;

pub use cylindrical::CylDish;
pub use rectangular::RectDish;

use uom::si::{
    angle::radian,
    f64::{Angle, Length},
};

use crate::{Error, time_series::TimeSeries};

/// The geometry of a fluid-filled dish.
///
/// A dish is rocked about its center line.
/// Tilting moves fluid from the raised half to the lowered half, and the
/// model tracks the volume retained in one of the halves.
pub trait Dish {
    /// Maximum flip angle for which the free surface stays above the bottom
    /// of the dish everywhere.
    fn critical_angle(&self) -> Angle;

    /// Depth of the fluid when the dish is at rest.
    fn fluid_height(&self) -> Length;

    /// Length of the dish perpendicular to the rocking direction.
    fn cross_length(&self) -> Length;

    /// Returns the fluid volume, in m³, on the raised side of the center line
    /// for each sample of a flip angle series given in radians.
    fn fluid_volume(&self, angle: &TimeSeries) -> TimeSeries;
}

impl<D: Dish + ?Sized> Dish for &D {
    fn critical_angle(&self) -> Angle {
        (**self).critical_angle()
    }

    fn fluid_height(&self) -> Length {
        (**self).fluid_height()
    }

    fn cross_length(&self) -> Length {
        (**self).cross_length()
    }

    fn fluid_volume(&self, angle: &TimeSeries) -> TimeSeries {
        (**self).fluid_volume(angle)
    }
}

impl<D: Dish + ?Sized> Dish for Box<D> {
    fn critical_angle(&self) -> Angle {
        (**self).critical_angle()
    }

    fn fluid_height(&self) -> Length {
        (**self).fluid_height()
    }

    fn cross_length(&self) -> Length {
        (**self).cross_length()
    }

    fn fluid_volume(&self, angle: &TimeSeries) -> TimeSeries {
        (**self).fluid_volume(angle)
    }
}

/// Computes the flux, in m³/s, across the center line of a rocked dish.
///
/// The flux is the rate at which fluid leaves the raised half, that is the
/// negated time derivative of [`Dish::fluid_volume`].
///
/// # Errors
///
/// Returns [`Error::AngleExceeded`] if any flip angle magnitude is above
/// [`Dish::critical_angle`].
pub fn fluid_flux<D: Dish + ?Sized>(dish: &D, angle: &TimeSeries) -> Result<TimeSeries, Error> {
    let critical_angle = dish.critical_angle().get::<radian>();

    if angle.values().iter().any(|a| a.abs() > critical_angle) {
        return Err(Error::AngleExceeded {
            angle: angle.max_abs(),
            critical_angle,
        });
    }

    Ok(dish.fluid_volume(angle).derivate().neg())
}
