//! Wall shear stress from the lubrication approximation (Lister 1992).

use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, Length},
    length::meter,
};

use crate::time_series::TimeSeries;

/// Thin-film flow of a viscous fluid layer of uniform depth.
///
/// The flux `q` through a cross section of width `b` is carried by a
/// half-Poiseuille profile over a fluid of depth `h`:
///
/// ```text
/// u(z) = 3q / (2bh³) · z · (2h − z)
/// ```
///
/// so the shear rate at the bottom wall (`z = 0`) is `3q / (bh²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LubricationModel {
    pub dynamic_viscosity: DynamicViscosity,
    pub height: Length,
    pub width: Length,
}

impl LubricationModel {
    #[must_use]
    pub fn new(dynamic_viscosity: DynamicViscosity, height: Length, width: Length) -> Self {
        Self {
            dynamic_viscosity,
            height,
            width,
        }
    }

    /// Returns the shear rate, in 1/s, at the bottom wall for a flux series
    /// given in m³/s.
    #[must_use]
    pub fn shear_rate_bottom(&self, flux: &TimeSeries) -> TimeSeries {
        let height = self.height.get::<meter>();
        let factor = 3.0 / (self.width.get::<meter>() * height * height);
        flux.map(|q| factor * q)
    }

    /// Returns the shear stress, in Pa, at the bottom wall for a flux series
    /// given in m³/s.
    #[must_use]
    pub fn shear_stress_bottom(&self, flux: &TimeSeries) -> TimeSeries {
        let viscosity = self.dynamic_viscosity.get::<pascal_second>();
        self.shear_rate_bottom(flux).map(|rate| viscosity * rate)
    }
}
