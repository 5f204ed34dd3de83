//! 速度ベクトルとカラーマップのテキスト出力。
//!
//! - `velocity.dat`: `scale x scale` ブロックごとに 1 本の速度ベクトル
//!   `i j ux uy`
//! - `colourmap.dat`: 全内部セルの `i j hue`（`hue = |u|^0.6`）
//!
//! インデックスは内部セルを 0 始まりで数えたもの。

use crate::config::OutputCfg;
use crate::grid::Field;
use crate::velocity::{hue, VelocityField};
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// [`write_data`] が書き出したファイルのパス。
#[derive(Debug, Clone)]
pub struct DataFiles {
    pub velocity: PathBuf,
    pub colourmap: PathBuf,
}

/// 内部セル `(i, j)`（0 始まり）が速度ベクトルを出力する対象かどうか。
#[inline]
pub fn samples_vector(i: usize, j: usize, scale: usize) -> bool {
    if scale == 0 {
        return false;
    }
    let mid = (scale - 1) / 2;
    i % scale == mid && j % scale == mid
}

pub fn write_data(psi: &Field, scale: usize, cfg: &OutputCfg) -> Result<DataFiles> {
    fs::create_dir_all(&cfg.dir).with_context(|| format!("cannot create {}", cfg.dir))?;
    let files = DataFiles {
        velocity: PathBuf::from(&cfg.dir).join(&cfg.velocity_file),
        colourmap: PathBuf::from(&cfg.dir).join(&cfg.colourmap_file),
    };

    let vel = VelocityField::from_psi(psi);
    let mut velout = BufWriter::new(
        File::create(&files.velocity)
            .with_context(|| format!("cannot create {}", files.velocity.display()))?,
    );
    let mut colout = BufWriter::new(
        File::create(&files.colourmap)
            .with_context(|| format!("cannot create {}", files.colourmap.display()))?,
    );

    for i in 1..=vel.m {
        for j in 1..=vel.n {
            let (ux, uy) = vel.at(i, j);
            let umod = (ux * ux + uy * uy).sqrt();
            writeln!(colout, "{:5} {:5} {:10.5}", i - 1, j - 1, hue(umod))
                .with_context(|| format!("write {}", files.colourmap.display()))?;
            if samples_vector(i - 1, j - 1, scale) {
                writeln!(velout, "{:5} {:5} {:10.5} {:10.5}", i - 1, j - 1, ux, uy)
                    .with_context(|| format!("write {}", files.velocity.display()))?;
            }
        }
    }
    velout
        .flush()
        .with_context(|| format!("write {}", files.velocity.display()))?;
    colout
        .flush()
        .with_context(|| format!("write {}", files.colourmap.display()))?;

    log::info!(
        "wrote {} and {}",
        files.velocity.display(),
        files.colourmap.display()
    );
    Ok(files)
}
