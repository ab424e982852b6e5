use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoint};
use rocker_stress::TimeSeries;

/// A runnable egui application for plotting time series.
#[derive(Default)]
pub struct PlotApp {
    series: Vec<Series>,
    x_label: Option<String>,
    y_label: Option<String>,
}

struct Series {
    name: String,
    points: Vec<PlotPoint>,
}

impl PlotApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels the horizontal axis.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Labels the vertical axis.
    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    /// Adds a series as a named line, one point per sample.
    #[must_use]
    pub fn add_time_series(mut self, name: &str, series: &TimeSeries) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            points: series.iter().map(|(t, v)| PlotPoint::new(t, v)).collect(),
        });
        self
    }

    /// Opens the window titled `title` and blocks until it is closed.
    #[allow(clippy::missing_errors_doc)]
    pub fn run(self, title: &str) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 540.0]),
            ..Default::default()
        };
        eframe::run_native(title, options, Box::new(|_cc| Ok(Box::new(self))))
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("rocker-plot").legend(Legend::default());
            if let Some(label) = &self.x_label {
                plot = plot.x_axis_label(label.as_str());
            }
            if let Some(label) = &self.y_label {
                plot = plot.y_axis_label(label.as_str());
            }

            plot.show(ui, |plot_ui| {
                for series in &self.series {
                    let points = series.points.as_slice();
                    let name = &series.name;

                    plot_ui.line(Line::new(points).name(name));
                }
            });
        });
    }
}
