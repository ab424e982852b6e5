//! # rocker
//!
//! Computes the bottom shear stress of rocked dishes and saves each series
//! to a CSV file named after its experiment.
//!
//! ## Usage
//!
//! ```bash
//! # Run the experiments described in a config file
//! rocker run experiments.toml --out-dir results
//!
//! # Run the reference sine and constant rocking experiments
//! rocker demo
//! ```

mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use rocker_plot::{Figure, FluidFluxPlot, ShearStressPlot};

use config::Config;

/// rocker - bottom shear stress in rocked culture dishes
#[derive(Parser)]
#[command(name = "rocker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the experiments described in a TOML file
    Run {
        /// Experiment configuration file
        #[arg(value_name = "CONFIG")]
        config: PathBuf,

        /// Directory receiving one CSV file per experiment
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Save the fluid flux instead of the shear stress
        #[arg(long)]
        flux: bool,
    },

    /// Run the reference experiments in a 2.1 cm well
    Demo {
        /// Directory receiving one CSV file per experiment
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Save the fluid flux instead of the shear stress
        #[arg(long)]
        flux: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let written = match cli.command {
        Commands::Run {
            config,
            out_dir,
            flux,
        } => {
            let config = Config::from_file(&config)?;
            run_experiments(&config, &out_dir, flux)?
        }
        Commands::Demo { out_dir, flux } => run_experiments(&Config::demo(), &out_dir, flux)?,
    };

    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

/// Saves one series per experiment and returns the written paths.
fn run_experiments(config: &Config, out_dir: &Path, flux: bool) -> Result<Vec<PathBuf>> {
    if config.experiments.is_empty() {
        warn!("no experiments to run");
    }

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let prefix = if flux { "flux" } else { "stress" };
    let mut written = Vec::with_capacity(config.experiments.len());

    for entry in &config.experiments {
        let experiment = entry
            .build()
            .with_context(|| format!("Invalid experiment `{}`", entry.name))?;
        let ntimes = entry.ntimes(config);
        let path = out_dir.join(format!("{prefix}_{}.csv", entry.name));

        info!("running `{}` with {ntimes} samples", entry.name);
        let saved = if flux {
            Figure::new(FluidFluxPlot {
                experiment: &experiment,
                ntimes,
            })
            .save_to(&path)
        } else {
            Figure::new(ShearStressPlot {
                experiment: &experiment,
                ntimes,
            })
            .save_to(&path)
        };
        saved.with_context(|| format!("Failed to compute experiment `{}`", entry.name))?;

        written.push(path);
    }

    Ok(written)
}
