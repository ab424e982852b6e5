use uom::si::{
    angle::radian,
    f64::{Angle, Length},
    length::meter,
    ratio::ratio,
};

use crate::{Error, error::ensure_positive, time_series::TimeSeries};

use super::Dish;

/// A rectangular dish rocked along its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectDish {
    length: Length,
    width: Length,
    height: Length,
}

impl RectDish {
    /// Creates a rectangular dish.
    ///
    /// `length` is measured along the rocking direction, `width` across it,
    /// and `height` is the depth of the fluid at rest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if any dimension is not finite
    /// and strictly positive.
    pub fn new(length: Length, width: Length, height: Length) -> Result<Self, Error> {
        ensure_positive("length", length.get::<meter>())?;
        ensure_positive("width", width.get::<meter>())?;
        ensure_positive("height", height.get::<meter>())?;
        Ok(Self {
            length,
            width,
            height,
        })
    }

    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    #[must_use]
    pub fn width(&self) -> Length {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> Length {
        self.height
    }
}

impl Dish for RectDish {
    fn critical_angle(&self) -> Angle {
        let slope = (2.0 * self.height / self.length).get::<ratio>();
        Angle::new::<radian>(slope.atan())
    }

    fn fluid_height(&self) -> Length {
        self.height
    }

    fn cross_length(&self) -> Length {
        self.width
    }

    fn fluid_volume(&self, angle: &TimeSeries) -> TimeSeries {
        let length = self.length.get::<meter>();
        let width = self.width.get::<meter>();
        let height = self.height.get::<meter>();

        angle.map(|a| width * length / 2.0 * (height - length / 4.0 * a.tan()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;
    use uom::si::{length::millimeter, volume::cubic_meter};

    fn dish() -> RectDish {
        RectDish::new(
            Length::new::<millimeter>(80.0),
            Length::new::<millimeter>(40.0),
            Length::new::<millimeter>(4.0),
        )
        .unwrap()
    }

    #[test]
    fn geometry() {
        let dish = dish();

        assert_relative_eq!(
            dish.critical_angle().get::<radian>(),
            0.1_f64.atan(),
            epsilon = 1e-12
        );
        assert_relative_eq!(dish.fluid_height().get::<millimeter>(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(dish.cross_length().get::<millimeter>(), 40.0, epsilon = 1e-12);
    }

    #[test]
    fn half_the_fluid_at_rest() {
        let dish = dish();
        let angle = TimeSeries::new(array![0.0, 1.0], array![0.0, 0.0]).unwrap();

        let total = (dish.length * dish.width * dish.height).get::<cubic_meter>();
        let volume = dish.fluid_volume(&angle);

        assert_relative_eq!(volume.values()[0], total / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn emptied_side_at_the_critical_angle() {
        // At the critical angle the free surface meets the bottom at the rim,
        // leaving a wedge of half the resting volume on the raised side.
        let dish = dish();
        let critical = dish.critical_angle().get::<radian>();
        let angle = TimeSeries::new(array![0.0, 1.0], array![0.0, critical]).unwrap();

        let volume = dish.fluid_volume(&angle);

        assert_relative_eq!(volume.values()[1], volume.values()[0] / 2.0, epsilon = 1e-15);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let mm = Length::new::<millimeter>;
        assert!(RectDish::new(mm(0.0), mm(40.0), mm(4.0)).is_err());
        assert!(RectDish::new(mm(80.0), mm(-1.0), mm(4.0)).is_err());
        assert!(RectDish::new(mm(80.0), mm(40.0), mm(f64::NAN)).is_err());
    }
}
