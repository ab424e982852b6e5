//! Plotting and persistence for `rocker-stress` time series.
//!
//! A [`Plot`] describes which series of an experiment to draw and how to
//! label its axes.
//! A [`Figure`] computes the series of a plot and saves it to a CSV file, or,
//! with the `gui` feature, shows it in an interactive window.
//!
//! # Features
//!
//! - `gui`: enables [`PlotApp`] and [`Figure::show`] via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.

mod error;
mod figure;
mod plot;

#[cfg(feature = "gui")]
mod app;

pub use error::Error;
pub use figure::Figure;
pub use plot::{FluidFluxPlot, Plot, ShearStressPlot};

#[cfg(feature = "gui")]
pub use app::PlotApp;
