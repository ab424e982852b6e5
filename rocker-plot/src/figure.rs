use std::{fs::File, io, path::Path};

use log::info;
use rocker_stress::TimeSeries;

use crate::{Error, plot::Plot};

/// A single plot, ready to be saved or shown.
///
/// The series is computed each time the figure is rendered.
#[derive(Debug, Clone)]
pub struct Figure<P> {
    plot: P,
}

impl<P: Plot> Figure<P> {
    #[must_use]
    pub fn new(plot: P) -> Self {
        Self { plot }
    }

    #[must_use]
    pub fn plot(&self) -> &P {
        &self.plot
    }

    /// Saves the series to a CSV file at `path`.
    ///
    /// The first row holds the axis labels, each following row one sample.
    ///
    /// # Errors
    ///
    /// Returns an error if the series cannot be computed or the file cannot
    /// be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let series = self.plot.series()?;
        self.write_series(&series, File::create(path)?)?;
        info!("saved {} samples to {}", series.len(), path.display());
        Ok(())
    }

    /// Writes the series as CSV to `writer` and returns the number of samples
    /// written.
    ///
    /// # Errors
    ///
    /// Returns an error if the series cannot be computed or written.
    pub fn write_to<W: io::Write>(&self, writer: W) -> Result<usize, Error> {
        let series = self.plot.series()?;
        self.write_series(&series, writer)?;
        Ok(series.len())
    }

    fn write_series<W: io::Write>(&self, series: &TimeSeries, writer: W) -> Result<(), Error> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record([self.plot.x_label(), self.plot.y_label()])?;
        for sample in series.iter() {
            out.serialize(sample)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Shows the series in an interactive window, blocking until it closes.
    ///
    /// # Errors
    ///
    /// Returns an error if the series cannot be computed or the window fails.
    #[cfg(feature = "gui")]
    pub fn show(&self, title: &str) -> Result<(), Error> {
        let series = self.plot.series()?;
        crate::PlotApp::new()
            .x_label(self.plot.x_label())
            .y_label(self.plot.y_label())
            .add_time_series(title, &series)
            .run(title)
            .map_err(|err| Error::Gui(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rocker_stress::{CylDish, Experiment, SineRocking};
    use uom::si::{
        angle::degree,
        dynamic_viscosity::pascal_second,
        f64::{Angle, DynamicViscosity, Length, Time, Volume},
        length::meter,
        time::second,
        volume::cubic_meter,
    };

    use crate::{FluidFluxPlot, ShearStressPlot};

    fn experiment(degrees: f64) -> Experiment<SineRocking, CylDish> {
        Experiment::new(
            SineRocking::new(Angle::new::<degree>(degrees), Time::new::<second>(10.0)).unwrap(),
            CylDish::new(Length::new::<meter>(0.0105), Volume::new::<cubic_meter>(1e-6)).unwrap(),
            DynamicViscosity::new::<pascal_second>(0.9e-3),
        )
    }

    #[test]
    fn writes_a_header_and_one_row_per_sample() {
        let experiment = experiment(5.0);
        let figure = Figure::new(ShearStressPlot {
            experiment: &experiment,
            ntimes: 5,
        });

        let mut buffer = Vec::new();
        assert_eq!(figure.write_to(&mut buffer).unwrap(), 5);

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "time (s),stress (Pa)");
        assert!(lines[1].starts_with("0.0,"));
        assert!(lines[3].starts_with("5.0,"));
    }

    #[test]
    fn rows_hold_the_computed_series() {
        let experiment = experiment(5.0);
        let plot = FluidFluxPlot {
            experiment: &experiment,
            ntimes: 8,
        };
        let expected = experiment.fluid_flux(8).unwrap();

        let mut buffer = Vec::new();
        Figure::new(plot).write_to(&mut buffer).unwrap();

        let mut reader = csv::Reader::from_reader(buffer.as_slice());
        let headers: Vec<_> = reader.headers().unwrap().iter().collect();
        assert_eq!(headers, ["time (s)", "flux (m3/s)"]);
        let rows: Vec<(f64, f64)> = reader.deserialize().map(Result::unwrap).collect();
        let expected: Vec<(f64, f64)> = expected.iter().collect();
        assert_eq!(rows, expected);
    }

    #[test]
    fn saves_to_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stress_sine_cyl.csv");
        let experiment = experiment(5.0);

        Figure::new(ShearStressPlot {
            experiment: &experiment,
            ntimes: 100,
        })
        .save_to(&path)
        .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 101);
    }

    #[test]
    fn model_errors_are_propagated() {
        let experiment = experiment(30.0);
        let figure = Figure::new(ShearStressPlot {
            experiment: &experiment,
            ntimes: 100,
        });

        let err = figure.write_to(io::sink()).unwrap_err();
        assert!(matches!(
            err,
            Error::Model(rocker_stress::Error::AngleExceeded { .. })
        ));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stress.csv");
        assert!(figure.save_to(&path).is_err());
        assert!(!path.exists(), "no file is left behind");
    }
}
