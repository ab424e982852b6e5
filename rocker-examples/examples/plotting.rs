use rocker_plot::PlotApp;
use rocker_stress::{ConstantRocking, CylDish, Experiment, SineRocking};
use uom::si::{
    angle::degree,
    angular_velocity::degree_per_second,
    dynamic_viscosity::pascal_second,
    f64::{Angle, AngularVelocity, DynamicViscosity, Length, Time, Volume},
    length::meter,
    time::second,
    volume::cubic_meter,
};

fn main() {
    let viscosity = DynamicViscosity::new::<pascal_second>(0.9e-3);
    let well = CylDish::new(
        Length::new::<meter>(0.0105),
        Volume::new::<cubic_meter>(1e-6),
    )
    .unwrap();

    let sine = Experiment::new(
        SineRocking::new(Angle::new::<degree>(5.0), Time::new::<second>(10.0)).unwrap(),
        well,
        viscosity,
    );
    let constant = Experiment::new(
        ConstantRocking::new(
            AngularVelocity::new::<degree_per_second>(5.0),
            AngularVelocity::new::<degree_per_second>(1.0),
            Angle::new::<degree>(15.0),
        )
        .unwrap(),
        well,
        viscosity,
    );

    let app = PlotApp::new()
        .x_label("time (s)")
        .y_label("stress (Pa)")
        .add_time_series("sine", &sine.shear_stress(200).unwrap())
        .add_time_series("constant", &constant.shear_stress(200).unwrap());

    app.run("Bottom Shear Stress").unwrap();
}
