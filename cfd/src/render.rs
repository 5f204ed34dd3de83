use crate::config::{Colormap, Interp, OutFmt, PlotCfg, ScaleCfg};
use crate::grid::{idx, Field};
use crate::velocity::VelocityField;
use anyhow::{Context, Result};
use image::{ImageBuffer, ImageFormat, Rgb};
use std::fs;
use std::io::Write;
use std::path::Path;

const CONTOUR_COLOR: [u8; 3] = [0, 0, 0];
const FRAME_COLOR: [u8; 3] = [0, 0, 0];

/// RGB ラスタ画像。`buf` は `w * h * 3` バイト，行優先。
pub struct Raster {
    pub w: usize,
    pub h: usize,
    pub buf: Vec<u8>,
}

/// 流れ場を画像として書き出す。
///
/// 背景は内部セルの速さ `|u|` をカラーマップで塗り，`psi` の等値線を
/// 流線として重ねる。
pub fn render_flow(psi: &Field, cfg: &PlotCfg, path: &Path) -> Result<()> {
    let img = rasterize(psi, cfg);
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;
        }
    }
    match cfg.format {
        OutFmt::Png => {
            let out: ImageBuffer<Rgb<u8>, _> =
                ImageBuffer::from_raw(img.w as u32, img.h as u32, img.buf)
                    .context("raster size does not match its dimensions")?;
            // 拡張子ではなく設定のフォーマットで符号化する
            out.save_with_format(path, ImageFormat::Png)
                .with_context(|| format!("cannot write {}", path.display()))?;
        }
        OutFmt::Ppm => {
            let mut file = fs::File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            write!(file, "P6\n{} {}\n255\n", img.w, img.h)?;
            file.write_all(&img.buf)?;
        }
    }
    log::info!("wrote {} ({}x{})", path.display(), img.w, img.h);
    Ok(())
}

/// 出力画像の画素数。`out_w`/`out_h` が未指定なら内部セル数の
/// `pixels_per_cell` 倍とする。
pub fn image_size(psi: &Field, cfg: &PlotCfg) -> (usize, usize) {
    let (m, n) = psi.interior();
    let ppc = cfg.pixels_per_cell.max(1);
    let w = cfg.out_w.unwrap_or(n * ppc).max(1);
    let h = cfg.out_h.unwrap_or(m * ppc).max(1);
    (w, h)
}

pub fn rasterize(psi: &Field, cfg: &PlotCfg) -> Raster {
    let (m, n) = psi.interior();
    let (w, h) = image_size(psi, cfg);
    let mut buf: Vec<u8> = vec![255; w * h * 3];
    if m == 0 || n == 0 {
        return Raster { w, h, buf };
    }

    let speed = VelocityField::from_psi(psi).speeds();
    let mut interior_psi = vec![0.0; m * n];
    for i in 1..=m {
        for j in 1..=n {
            interior_psi[idx(i - 1, j - 1, n)] = psi.get(i, j);
        }
    }

    let (vmin, vmax) = match cfg.scale {
        ScaleCfg::Fixed { min, max } => (min, max),
        ScaleCfg::Auto => auto_range(&speed),
    };
    let (pmin, pmax) = auto_range(&interior_psi);

    // 各画素の等値線レベル。右隣・下隣と比較して線を引く
    let mut level = vec![0i64; w * h];

    for py in 0..h {
        // 画像上端から数えた格子の行位置
        let gy = (py as f64 + 0.5) * (m as f64) / (h as f64) - 0.5;
        let gy = if cfg.flip_y { (m as f64 - 1.0) - gy } else { gy };
        for px in 0..w {
            let gx = (px as f64 + 0.5) * (n as f64) / (w as f64) - 0.5;
            let val = sample(&speed, m, n, gy, gx, cfg.interp);
            let norm = ((val - vmin) / (vmax - vmin)).clamp(0.0, 1.0);
            let (r, g, b) = colormap_rgb(cfg.colormap, norm);
            let p = (py * w + px) * 3;
            buf[p] = r;
            buf[p + 1] = g;
            buf[p + 2] = b;

            if cfg.contours > 0 {
                let s = sample(&interior_psi, m, n, gy, gx, Interp::Bilinear);
                let t = (s - pmin) / (pmax - pmin);
                level[py * w + px] = (t * cfg.contours as f64).floor() as i64;
            }
        }
    }

    if cfg.contours > 0 {
        for py in 0..h {
            for px in 0..w {
                let l = level[py * w + px];
                let right = px + 1 < w && level[py * w + px + 1] != l;
                let below = py + 1 < h && level[(py + 1) * w + px] != l;
                if right || below {
                    set_px(&mut buf, w, h, px, py, CONTOUR_COLOR);
                }
            }
        }
    }

    if cfg.colorbar {
        draw_colorbar(&mut buf, w, h, cfg.colormap);
    }
    draw_rect(&mut buf, w, h, 0, 0, w - 1, h - 1, 1, FRAME_COLOR);

    Raster { w, h, buf }
}

/// データの最小・最大。幅が 0 のときは ±0.5 広げる。
fn auto_range(q: &[f64]) -> (f64, f64) {
    let mut mn = q[0];
    let mut mx = q[0];
    for &v in q.iter() {
        if v < mn {
            mn = v
        };
        if v > mx {
            mx = v
        };
    }
    if (mx - mn).abs() < 1e-14 {
        (mn - 0.5, mx + 0.5)
    } else {
        (mn, mx)
    }
}

/// `m x n` 配列を実数位置 `(gy, gx)` で標本化する。端はクランプ。
fn sample(q: &[f64], m: usize, n: usize, gy: f64, gx: f64, interp: Interp) -> f64 {
    let clampi = |v: isize, len: usize| v.clamp(0, len as isize - 1) as usize;
    match interp {
        Interp::Nearest => {
            let i = clampi(gy.round() as isize, m);
            let j = clampi(gx.round() as isize, n);
            q[idx(i, j, n)]
        }
        Interp::Bilinear => {
            let (i0, ti) = (gy.floor() as isize, gy - gy.floor());
            let (j0, tj) = (gx.floor() as isize, gx - gx.floor());
            let i0u = clampi(i0, m);
            let i1u = clampi(i0 + 1, m);
            let j0u = clampi(j0, n);
            let j1u = clampi(j0 + 1, n);
            let q00 = q[idx(i0u, j0u, n)];
            let q01 = q[idx(i0u, j1u, n)];
            let q10 = q[idx(i1u, j0u, n)];
            let q11 = q[idx(i1u, j1u, n)];
            (1.0 - ti) * ((1.0 - tj) * q00 + tj * q01) + ti * ((1.0 - tj) * q10 + tj * q11)
        }
    }
}

fn draw_rect(
    buf: &mut [u8],
    w: usize,
    h: usize,
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
    thick: usize,
    color: [u8; 3],
) {
    for t in 0..thick {
        for x in x0..=x1 {
            set_px(buf, w, h, x, y0.saturating_add(t).min(h - 1), color);
            set_px(buf, w, h, x, y1.saturating_sub(t), color);
        }
        for y in y0..=y1 {
            set_px(buf, w, h, x0.saturating_add(t).min(w - 1), y, color);
            set_px(buf, w, h, x1.saturating_sub(t), y, color);
        }
    }
}

#[inline]
fn set_px(buf: &mut [u8], w: usize, h: usize, x: usize, y: usize, c: [u8; 3]) {
    if x < w && y < h {
        let p = (y * w + x) * 3;
        buf[p] = c[0];
        buf[p + 1] = c[1];
        buf[p + 2] = c[2];
    }
}

fn draw_colorbar(buf: &mut [u8], w: usize, h: usize, cmap: Colormap) {
    let cbw = ((w as f64 * 0.04).round() as usize).max(1);
    let x0 = w.saturating_sub(cbw);
    for y in 0..h {
        let t = 1.0 - (y as f64 + 0.5) / (h as f64);
        let (r, g, b) = colormap_rgb(cmap, t);
        for x in x0..w {
            set_px(buf, w, h, x, y, [r, g, b]);
        }
    }
    // 図とカラーバーの境界線
    if x0 > 0 {
        for y in 0..h {
            set_px(buf, w, h, x0 - 1, y, FRAME_COLOR);
        }
    }
}

pub fn colormap_rgb(cmap: Colormap, t: f64) -> (u8, u8, u8) {
    match cmap {
        Colormap::Gray => {
            let c = (255.0 * t.clamp(0.0, 1.0)) as u8;
            (c, c, c)
        }
        Colormap::Turbo => turbo_rgb(t),
        Colormap::Jet => jet_rgb(t),
    }
}

fn jet_rgb(t: f64) -> (u8, u8, u8) {
    let x = t.clamp(0.0, 1.0);
    let ch = |c: f64| -> u8 { (255.0 * (1.5 - (4.0 * x - c).abs()).clamp(0.0, 1.0)).round() as u8 };
    (ch(3.0), ch(2.0), ch(1.0))
}

fn turbo_rgb(t: f64) -> (u8, u8, u8) {
    let x = t.clamp(0.0, 1.0);
    let r =
        34.61 + x * (1172.33 + x * (-10793.56 + x * (33300.12 + x * (-38394.49 + x * 14825.05))));
    let g = 23.31 + x * (557.33 + x * (1225.33 + x * (-3574.96 + x * (4520.31 + x * (-1974.13)))));
    let b = 27.2 + x * (321.15 + x * (1537.82 + x * (-4579.07 + x * (5496.05 + x * (-2163.56)))));
    let to8 = |v: f64| -> u8 { v.round().clamp(0.0, 255.0) as u8 };
    (to8(r), to8(g), to8(b))
}
