use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::process;

use cfd::cli::{Args, USAGE};
use cfd::config::Config;
use cfd::sim;

fn main() -> Result<()> {
    env_logger::init();

    let args = match Args::parse(env::args().skip(1)) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{}", USAGE);
            log::error!("{}", e);
            process::exit(1);
        }
    };

    let mut cfg = match &args.config {
        Some(p) => Config::from_path(p)?,
        None => {
            let p = PathBuf::from("config.yaml");
            if p.exists() {
                Config::from_path(&p)?
            } else {
                Config::default()
            }
        }
    };
    cfg.simulation.scale_factor = args.scale_factor;
    cfg.simulation.iterations = args.iterations;
    log::info!("{}", cfg.summary());

    let stats = sim::run(&cfg)?;
    log::info!(
        "psi in [{:.6e}, {:.6e}], last rms delta {:.6e}",
        stats.psi_min,
        stats.psi_max,
        stats.rms_delta
    );
    Ok(())
}
