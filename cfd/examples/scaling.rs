use anyhow::{Context, Result};
use std::env;
use std::time::Instant;

use cfd::boundary::{init_field, DuctGeometry};
use cfd::config::GeometryCfg;
use cfd::jacobi::Jacobi;

/// Jacobi timings for a range of scale factors, without any file output.
///
/// cargo run --release --example scaling -- [max_scale] [iterations]
fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let max_scale: usize = match args.next() {
        Some(s) => s.parse().with_context(|| format!("bad max_scale {:?}", s))?,
        None => 4,
    };
    let niter: usize = match args.next() {
        Some(s) => s.parse().with_context(|| format!("bad iterations {:?}", s))?,
        None => 1000,
    };

    let base = GeometryCfg::default();
    println!("# Jacobi scaling, {} iterations", niter);
    println!(
        "{:>5} {:>9} {:>12} {:>14} {:>14}",
        "scale", "grid", "secs", "ns/cell/iter", "rms delta"
    );
    for scale in 1..=max_scale {
        let geom = DuctGeometry::scaled(&base, scale);
        let mut solver = Jacobi::new(init_field(&geom)).with_progress_every(0);
        let t0 = Instant::now();
        solver.run(niter, |_, _| {});
        let secs = t0.elapsed().as_secs_f64();
        let cells = (geom.m * geom.n * niter.max(1)) as f64;
        println!(
            "{:>5} {:>4}x{:<4} {:>12.5} {:>14.3} {:>14.6e}",
            scale,
            geom.m,
            geom.n,
            secs,
            secs * 1e9 / cells,
            solver.rms_delta()
        );
    }
    Ok(())
}
