//! TOML description of a set of experiments.
//!
//! ```toml
//! ntimes = 100
//!
//! [[experiment]]
//! name = "sine_cyl"
//! viscosity = 0.9e-3
//! rocking = { kind = "sine", angle_max_deg = 5.0, period_s = 10.0 }
//! dish = { kind = "cylindrical", radius_m = 0.0105, volume_m3 = 1e-6 }
//! ```

use std::path::Path;

use anyhow::{Context, Result, ensure};
use rocker_stress::{
    ConstantRocking, CylDish, Dish, Experiment, RectDish, RockingPattern, SineRocking,
};
use serde::Deserialize;
use uom::si::{
    angle::degree,
    angular_velocity::degree_per_second,
    dynamic_viscosity::pascal_second,
    f64::{Angle, AngularVelocity, DynamicViscosity, Length, Time, Volume},
    length::meter,
    time::second,
    volume::cubic_meter,
};

/// An experiment whose rocking pattern and dish are chosen at runtime.
pub type DynExperiment = Experiment<Box<dyn RockingPattern>, Box<dyn Dish>>;

fn default_ntimes() -> usize {
    100
}

/// Root configuration structure for experiment files.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Samples per experiment, unless the experiment overrides it.
    #[serde(default = "default_ntimes")]
    pub ntimes: usize,

    #[serde(default, rename = "experiment")]
    pub experiments: Vec<ExperimentConfig>,
}

/// One named experiment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExperimentConfig {
    /// Label used to name the output file.
    pub name: String,

    /// Dynamic viscosity of the fluid, in Pa·s.
    pub viscosity: f64,

    /// Samples for this experiment, overriding the file-wide `ntimes`.
    pub ntimes: Option<usize>,

    /// Motion of the rocking platform.
    pub rocking: RockingConfig,

    /// Geometry of the dish and its fluid.
    pub dish: DishConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RockingConfig {
    Sine {
        angle_max_deg: f64,
        period_s: f64,
    },
    Constant {
        forward_deg_per_s: f64,
        backward_deg_per_s: f64,
        angle_max_deg: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DishConfig {
    Cylindrical {
        radius_m: f64,
        volume_m3: f64,
    },
    Rectangular {
        length_m: f64,
        width_m: f64,
        height_m: f64,
    },
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// The reference set: sine and constant rocking of 1 mL of culture
    /// medium in a 2.1 cm well.
    #[must_use]
    pub fn demo() -> Self {
        let dish = DishConfig::Cylindrical {
            radius_m: 2.1e-2 / 2.0,
            volume_m3: 1e-6,
        };
        let experiment = |name: &str, rocking| ExperimentConfig {
            name: name.to_string(),
            viscosity: 0.9e-3,
            ntimes: None,
            rocking,
            dish,
        };

        Self {
            ntimes: default_ntimes(),
            experiments: vec![
                experiment(
                    "sine_cyl",
                    RockingConfig::Sine {
                        angle_max_deg: 5.0,
                        period_s: 10.0,
                    },
                ),
                experiment(
                    "constant_cyl",
                    RockingConfig::Constant {
                        forward_deg_per_s: 5.0,
                        backward_deg_per_s: 1.0,
                        angle_max_deg: 15.0,
                    },
                ),
            ],
        }
    }
}

impl ExperimentConfig {
    /// Number of samples for this experiment.
    #[must_use]
    pub fn ntimes(&self, config: &Config) -> usize {
        self.ntimes.unwrap_or(config.ntimes)
    }

    /// Builds the experiment, validating every parameter.
    pub fn build(&self) -> Result<DynExperiment> {
        // The name becomes a file name inside the output directory.
        ensure!(
            !self.name.is_empty()
                && self.name != "."
                && self.name != ".."
                && !self.name.contains(['/', '\\']),
            "experiment name `{}` must be a plain file name",
            self.name
        );
        ensure!(
            self.viscosity.is_finite() && self.viscosity > 0.0,
            "viscosity must be finite and strictly positive, got {}",
            self.viscosity
        );

        let rocking = self.rocking.build().context("invalid rocking pattern")?;
        let dish = self.dish.build().context("invalid dish")?;

        Ok(Experiment::new(
            rocking,
            dish,
            DynamicViscosity::new::<pascal_second>(self.viscosity),
        ))
    }
}

impl RockingConfig {
    pub fn build(&self) -> rocker_stress::Result<Box<dyn RockingPattern>> {
        let pattern: Box<dyn RockingPattern> = match *self {
            RockingConfig::Sine {
                angle_max_deg,
                period_s,
            } => Box::new(SineRocking::new(
                Angle::new::<degree>(angle_max_deg),
                Time::new::<second>(period_s),
            )?),
            RockingConfig::Constant {
                forward_deg_per_s,
                backward_deg_per_s,
                angle_max_deg,
            } => Box::new(ConstantRocking::new(
                AngularVelocity::new::<degree_per_second>(forward_deg_per_s),
                AngularVelocity::new::<degree_per_second>(backward_deg_per_s),
                Angle::new::<degree>(angle_max_deg),
            )?),
        };
        Ok(pattern)
    }
}

impl DishConfig {
    pub fn build(&self) -> rocker_stress::Result<Box<dyn Dish>> {
        let dish: Box<dyn Dish> = match *self {
            DishConfig::Cylindrical {
                radius_m,
                volume_m3,
            } => Box::new(CylDish::new(
                Length::new::<meter>(radius_m),
                Volume::new::<cubic_meter>(volume_m3),
            )?),
            DishConfig::Rectangular {
                length_m,
                width_m,
                height_m,
            } => Box::new(RectDish::new(
                Length::new::<meter>(length_m),
                Length::new::<meter>(width_m),
                Length::new::<meter>(height_m),
            )?),
        };
        Ok(dish)
    }
}
