use rocker_stress::{Dish, Experiment, RockingPattern, TimeSeries};

/// A time series of an experiment together with its axis labels.
pub trait Plot {
    /// Computes the series to draw.
    ///
    /// # Errors
    ///
    /// Returns the model error if the series cannot be computed.
    fn series(&self) -> Result<TimeSeries, rocker_stress::Error>;

    /// Label of the horizontal axis.
    fn x_label(&self) -> &str {
        "time (s)"
    }

    /// Label of the vertical axis.
    fn y_label(&self) -> &str;
}

/// The shear stress at the bottom of the dish over one rocking cycle.
#[derive(Debug, Clone, Copy)]
pub struct ShearStressPlot<'a, R, D> {
    pub experiment: &'a Experiment<R, D>,
    pub ntimes: usize,
}

impl<R: RockingPattern, D: Dish> Plot for ShearStressPlot<'_, R, D> {
    fn series(&self) -> Result<TimeSeries, rocker_stress::Error> {
        self.experiment.shear_stress(self.ntimes)
    }

    fn y_label(&self) -> &str {
        "stress (Pa)"
    }
}

/// The fluid flux across the center line of the dish over one rocking cycle.
#[derive(Debug, Clone, Copy)]
pub struct FluidFluxPlot<'a, R, D> {
    pub experiment: &'a Experiment<R, D>,
    pub ntimes: usize,
}

impl<R: RockingPattern, D: Dish> Plot for FluidFluxPlot<'_, R, D> {
    fn series(&self) -> Result<TimeSeries, rocker_stress::Error> {
        self.experiment.fluid_flux(self.ntimes)
    }

    fn y_label(&self) -> &str {
        "flux (m3/s)"
    }
}
