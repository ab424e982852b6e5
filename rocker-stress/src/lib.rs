//! Bottom shear stress in a rocked, liquid-filled dish.
//!
//! This crate implements the thin-film lubrication model of Zhou et al.
//! (2010), with the wall shear stress closure of Lister (1992).
//! A computation runs through four stages:
//!
//! 1. A [`RockingPattern`] produces the flip angle of the dish over time.
//! 2. A [`Dish`] maps the flip angle to the fluid volume retained on one side
//!    of its center line.
//! 3. [`fluid_flux`] differentiates that volume to get the flux across the
//!    center line.
//! 4. A [`LubricationModel`] converts the flux into the shear stress at the
//!    bottom of the dish.
//!
//! [`Experiment`] composes the stages into a single pipeline.
//!
//! # Modules
//!
//! - [`time_series`]: [`TimeSeries`], the sampled signal passed between stages
//! - [`rocking`]: [`SineRocking`] and [`ConstantRocking`]
//! - [`dish`]: [`RectDish`], [`CylDish`] and the shared [`fluid_flux`]
//! - [`lubrication`]: [`LubricationModel`]
//! - [`experiment`]: [`Experiment`]
//!
//! # Example
//!
//! ```
//! use rocker_stress::{CylDish, Experiment, SineRocking};
//! use uom::si::{
//!     angle::degree,
//!     dynamic_viscosity::pascal_second,
//!     f64::{Angle, DynamicViscosity, Length, Time, Volume},
//!     length::meter,
//!     time::second,
//!     volume::cubic_meter,
//! };
//!
//! let experiment = Experiment::new(
//!     SineRocking::new(Angle::new::<degree>(5.0), Time::new::<second>(10.0))?,
//!     CylDish::new(Length::new::<meter>(0.0105), Volume::new::<cubic_meter>(1e-6))?,
//!     DynamicViscosity::new::<pascal_second>(0.9e-3),
//! );
//!
//! let stress = experiment.shear_stress(100)?;
//! assert_eq!(stress.len(), 100);
//! # Ok::<(), rocker_stress::Error>(())
//! ```

pub mod dish;
mod error;
pub mod experiment;
pub mod lubrication;
pub mod rocking;
pub mod time_series;

pub use dish::{CylDish, Dish, RectDish, fluid_flux};
pub use error::{Error, Result};
pub use experiment::Experiment;
pub use lubrication::LubricationModel;
pub use rocking::{ConstantRocking, RockingPattern, SineRocking};
pub use time_series::{SeriesError, TimeSeries};
