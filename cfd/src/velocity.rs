use crate::grid::{idx, Field};

/// カラーマップ出力で低速域を明るくするための指数。
pub const HUE_EXPONENT: f64 = 0.6;

/// 流れ関数の中心差分から求めた内部セルの速度場。
///
/// `ux = (psi[i][j+1] - psi[i][j-1]) / 2`,
/// `uy = -(psi[i+1][j] - psi[i-1][j]) / 2`。
/// 配列は `m x n` の行優先で，`(i-1, j-1)` の位置にセル `(i, j)` の値を持つ。
#[derive(Debug, Clone)]
pub struct VelocityField {
    pub m: usize,
    pub n: usize,
    pub ux: Vec<f64>,
    pub uy: Vec<f64>,
}

impl VelocityField {
    pub fn from_psi(psi: &Field) -> Self {
        let (m, n) = psi.interior();
        let mut ux = vec![0.0; m * n];
        let mut uy = vec![0.0; m * n];
        for i in 1..=m {
            for j in 1..=n {
                let k = idx(i - 1, j - 1, n);
                ux[k] = (psi.get(i, j + 1) - psi.get(i, j - 1)) / 2.0;
                uy[k] = -(psi.get(i + 1, j) - psi.get(i - 1, j)) / 2.0;
            }
        }
        Self { m, n, ux, uy }
    }

    /// 内部セル `(i, j)` の速度成分 `(ux, uy)`。添字は `psi` と同じ 1 始まり。
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> (f64, f64) {
        let k = idx(i - 1, j - 1, self.n);
        (self.ux[k], self.uy[k])
    }

    /// 速さ `|u|`。
    #[inline]
    pub fn speed(&self, i: usize, j: usize) -> f64 {
        let (ux, uy) = self.at(i, j);
        (ux * ux + uy * uy).sqrt()
    }

    /// 全内部セルの速さ。`m x n` の行優先。
    pub fn speeds(&self) -> Vec<f64> {
        self.ux
            .iter()
            .zip(self.uy.iter())
            .map(|(ux, uy)| (ux * ux + uy * uy).sqrt())
            .collect()
    }
}

pub fn hue(umod: f64) -> f64 {
    umod.powf(HUE_EXPONENT)
}
