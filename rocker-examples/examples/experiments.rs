//! # Rocked Well Experiments
//!
//! Computes the bottom shear stress of 1 mL of culture medium in a 2.1 cm
//! well under sine and constant rocking, and saves both series as CSV files
//! in the current directory.
//!
//! To run this example:
//!
//! ```sh
//! RUST_LOG=info cargo run --example experiments
//! ```

use log::info;
use rocker_plot::{Figure, ShearStressPlot};
use rocker_stress::{ConstantRocking, CylDish, Dish, Experiment, RockingPattern, SineRocking};
use uom::si::{
    angle::degree,
    angular_velocity::degree_per_second,
    dynamic_viscosity::pascal_second,
    f64::{Angle, AngularVelocity, DynamicViscosity, Length, Time, Volume},
    length::meter,
    time::second,
    volume::cubic_meter,
};

/// Samples per rocking cycle.
const NTIMES: usize = 100;

/// Well diameter, in m.
const DIAMETER_M: f64 = 2.1e-2;

/// Volume of culture medium, in m³.
const VOLUME_M3: f64 = 1e-6;

/// Viscosity of culture medium at 37 °C, in Pa·s.
const VISCOSITY_PA_S: f64 = 0.9e-3;

fn save<R: RockingPattern, D: Dish>(name: &str, experiment: &Experiment<R, D>) {
    let path = format!("stress_{name}.csv");
    Figure::new(ShearStressPlot {
        experiment,
        ntimes: NTIMES,
    })
    .save_to(&path)
    .unwrap();

    let stress = experiment.shear_stress(NTIMES).unwrap();
    info!("{name}: peak stress {:.4} Pa", stress.max_abs());
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let viscosity = DynamicViscosity::new::<pascal_second>(VISCOSITY_PA_S);
    let well = CylDish::new(
        Length::new::<meter>(DIAMETER_M / 2.0),
        Volume::new::<cubic_meter>(VOLUME_M3),
    )
    .unwrap();
    info!(
        "well tips over at {:.2}°",
        well.critical_angle().get::<degree>()
    );

    let sine = SineRocking::new(Angle::new::<degree>(5.0), Time::new::<second>(10.0)).unwrap();
    save("sine_cyl", &Experiment::new(sine, well, viscosity));

    let constant = ConstantRocking::new(
        AngularVelocity::new::<degree_per_second>(5.0),
        AngularVelocity::new::<degree_per_second>(1.0),
        Angle::new::<degree>(15.0),
    )
    .unwrap();
    save("constant_cyl", &Experiment::new(constant, well, viscosity));
}
