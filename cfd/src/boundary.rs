use crate::config::GeometryCfg;
use crate::grid::Field;

/// 倍率を掛けた後のダクト形状パラメータ。
///
/// - `m`, `n`: 内部セル数
/// - `b`: 流入口の位置（下辺でのオフセット）
/// - `h`: 流出口の位置（右辺でのオフセット）
/// - `w`: 流入口・流出口の幅
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuctGeometry {
    pub m: usize,
    pub n: usize,
    pub b: usize,
    pub h: usize,
    pub w: usize,
}

impl DuctGeometry {
    pub fn scaled(base: &GeometryCfg, scale: usize) -> Self {
        Self {
            m: base.m_base * scale,
            n: base.n_base * scale,
            b: base.b_base * scale,
            h: base.h_base * scale,
            w: base.w_base * scale,
        }
    }

    /// 境界セルを含めた場の形状 `(m+2, n+2)`。
    pub fn shape(&self) -> (usize, usize) {
        (self.m + 2, self.n + 2)
    }
}

/// 境界条件を設定した流れ関数の初期場を生成する。
///
/// 下辺（列 0）には流入口，右辺（行 `m+1`）には流出口の値を与え，
/// それ以外は 0 とする。内部セルはすべて 0 から始まる。
pub fn init_field(geom: &DuctGeometry) -> Field {
    let DuctGeometry { m, b, h, w, .. } = *geom;
    let (rows, cols) = geom.shape();
    let mut psi = Field::zeros(rows, cols);

    // 下辺: 流入口では線形に増加し，その先は一定
    for i in b + 1..b + w {
        psi.set(i, 0, (i - b) as f64);
    }
    for i in b + w..=m {
        psi.set(i, 0, w as f64);
    }

    // 右辺: 流出口までは一定，流出口で線形に減少
    for j in 1..=h {
        psi.set(m + 1, j, w as f64);
    }
    for j in h + 1..h + w {
        psi.set(m + 1, j, (w + h - j) as f64);
    }

    psi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_multiplies_every_parameter() {
        let g = DuctGeometry::scaled(&GeometryCfg::default(), 3);
        assert_eq!(
            g,
            DuctGeometry {
                m: 96,
                n: 96,
                b: 30,
                h: 45,
                w: 15
            }
        );
        assert_eq!(g.shape(), (98, 98));
    }

    #[test]
    fn edges_without_inlet_or_outlet_stay_zero() {
        let g = DuctGeometry::scaled(&GeometryCfg::default(), 1);
        let psi = init_field(&g);
        for j in 0..psi.cols() {
            assert_eq!(psi.get(0, j), 0.0);
        }
        for i in 0..psi.rows() {
            assert_eq!(psi.get(i, g.n + 1), 0.0);
        }
    }
}
