use std::f64::consts::PI;

use uom::si::{
    angle::radian,
    f64::{Angle, Length, Volume},
    length::meter,
    ratio::ratio,
    volume::cubic_meter,
};

use crate::{Error, error::ensure_positive, time_series::TimeSeries};

use super::Dish;

/// A cylindrical dish (such as a well or a Petri dish) holding a given
/// volume of fluid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylDish {
    radius: Length,
    vol: Volume,
}

impl CylDish {
    /// Creates a cylindrical dish of the given inner radius filled with `vol`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the radius or the volume is
    /// not finite and strictly positive.
    pub fn new(radius: Length, vol: Volume) -> Result<Self, Error> {
        ensure_positive("radius", radius.get::<meter>())?;
        ensure_positive("vol", vol.get::<cubic_meter>())?;
        Ok(Self { radius, vol })
    }

    #[must_use]
    pub fn radius(&self) -> Length {
        self.radius
    }

    #[must_use]
    pub fn vol(&self) -> Volume {
        self.vol
    }
}

impl Dish for CylDish {
    fn critical_angle(&self) -> Angle {
        let slope = (self.fluid_height() / self.radius).get::<ratio>();
        Angle::new::<radian>(slope.atan())
    }

    fn fluid_height(&self) -> Length {
        self.vol / (PI * self.radius * self.radius)
    }

    fn cross_length(&self) -> Length {
        self.radius
    }

    fn fluid_volume(&self, angle: &TimeSeries) -> TimeSeries {
        let radius = self.radius.get::<meter>();
        let height = self.fluid_height().get::<meter>();

        angle.map(|a| radius * radius * (PI * height / 2.0 - 2.0 * radius / 3.0 * a.tan()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;
    use uom::si::{angle::degree, length::millimeter, volume::milliliter};

    fn well() -> CylDish {
        CylDish::new(Length::new::<meter>(0.0105), Volume::new::<milliliter>(1.0)).unwrap()
    }

    #[test]
    fn fluid_height_fills_the_cylinder() {
        let dish = well();
        let expected = 1e-6 / (PI * 0.0105 * 0.0105);

        assert_relative_eq!(dish.fluid_height().get::<meter>(), expected, max_relative = 1e-12);
        assert_relative_eq!(dish.fluid_height().get::<millimeter>(), 2.887, epsilon = 1e-3);
        assert_relative_eq!(dish.cross_length().get::<meter>(), 0.0105, max_relative = 1e-12);
    }

    #[test]
    fn critical_angle() {
        let dish = well();
        let expected = (dish.fluid_height().get::<meter>() / 0.0105).atan();

        assert_relative_eq!(dish.critical_angle().get::<radian>(), expected, max_relative = 1e-12);
        assert_relative_eq!(
            dish.critical_angle().get::<degree>(),
            15.3745,
            epsilon = 1e-4
        );
    }

    #[test]
    fn half_the_fluid_at_rest() {
        let dish = well();
        let angle = TimeSeries::new(array![0.0, 1.0], array![0.0, 0.1]).unwrap();

        let volume = dish.fluid_volume(&angle);
        let height = dish.fluid_height().get::<meter>();

        assert_relative_eq!(
            volume.values()[0],
            PI * 0.0105 * 0.0105 * height / 2.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(volume.values()[0], 0.5e-6, max_relative = 1e-12);
        assert!(volume.values()[1] < volume.values()[0]);
    }

    #[test]
    fn rejects_non_positive_parameters() {
        let radius = Length::new::<meter>(0.0105);
        assert!(CylDish::new(radius, Volume::new::<milliliter>(0.0)).is_err());
        assert!(CylDish::new(Length::new::<meter>(-1.0), Volume::new::<milliliter>(1.0)).is_err());
    }
}
