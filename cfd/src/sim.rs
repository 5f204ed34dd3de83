//! 箱内 2 次元流れの計算の本体。
//!
//! 概要:
//! - 倍率からダクト形状を決め，流れ関数 `psi` の境界条件を設定する。
//! - ヤコビ緩和を指定回数だけ行う（収束判定なし）。
//! - 結果を `output` でテキスト出力し，`render` で画像化する。

use crate::boundary::{init_field, DuctGeometry};
use crate::config::Config;
use crate::grid::Field;
use crate::jacobi::Jacobi;
use crate::output::write_data;
use crate::render::render_flow;
use anyhow::Result;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct RunStats {
    pub iterations: usize,
    pub m: usize,
    pub n: usize,
    pub psi_min: f64,
    pub psi_max: f64,
    /// 最後のスイープにおける内部セルの変化量の RMS
    pub rms_delta: f64,
    pub init_secs: f64,
    pub calc_secs: f64,
    pub field: Field,
}

pub fn run(cfg: &Config) -> Result<RunStats> {
    let scale = cfg.simulation.scale_factor;
    let niter = cfg.simulation.iterations;

    println!("\n2D CFD Simulation");
    println!("=================");
    println!("Scale factor = {}", scale);
    println!("Iterations   = {}", niter);

    let tstart = Instant::now();
    let geom = DuctGeometry::scaled(&cfg.geometry, scale);
    let psi = init_field(&geom);
    let init_secs = tstart.elapsed().as_secs_f64();
    println!("\nInitialisation took {:.5}s", init_secs);
    println!("\nGrid size = {} x {}", geom.m, geom.n);
    log::debug!("geometry {:?}", geom);

    println!("\nStarting main Jacobi loop...");
    let tstart = Instant::now();
    let mut solver = Jacobi::new(psi).with_progress_every(cfg.simulation.progress_every);
    solver.run(niter, |iter, rms| {
        println!("completed iteration {}", iter);
        log::debug!("iteration {} rms delta {:.6e}", iter, rms);
    });
    let calc_secs = tstart.elapsed().as_secs_f64();
    println!("\n...finished");
    println!("\nCalculation took {:.5}s\n", calc_secs);

    let rms_delta = solver.rms_delta();
    let field = solver.into_field();

    if cfg.output.enable {
        write_data(&field, scale, &cfg.output)?;
        if cfg.output.plot.enable {
            let path = PathBuf::from(&cfg.output.dir).join(&cfg.output.plot.file);
            render_flow(&field, &cfg.output.plot, &path)?;
        }
    }

    let (psi_min, psi_max) = field.min_max();
    Ok(RunStats {
        iterations: niter,
        m: geom.m,
        n: geom.n,
        psi_min,
        psi_max,
        rms_delta,
        init_secs,
        calc_secs,
        field,
    })
}
