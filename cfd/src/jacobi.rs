//! 固定反復回数のヤコビ緩和。
//!
//! 各スイープでは内部セルを上下左右 4 点の平均で置き換える。読み出しは
//! 前スイープの値のみから行うため，2 つのバッファを持ち，スイープごとに
//! 入れ替える（同一配列の上書きはガウス・ザイデル法になってしまう）。
//! 収束判定は行わず，指定回数だけ必ず反復する。

use crate::grid::{idx, Field};

/// 進捗コールバックの既定の間隔。
pub const DEFAULT_PROGRESS_EVERY: usize = 1000;

/// `src` から `dst` へ 1 回分のヤコビスイープを行う。
///
/// `dst` の内部セルのみを書き換え，境界セルには触れない。
/// 戻り値は内部セルにおける変化量の二乗和。
pub fn sweep(src: &Field, dst: &mut Field) -> f64 {
    debug_assert_eq!(src.rows(), dst.rows());
    debug_assert_eq!(src.cols(), dst.cols());
    let (m, n) = src.interior();
    let cols = src.cols();
    let s = src.as_slice();
    let d = dst.as_mut_slice();
    let mut dsq = 0.0;
    for i in 1..=m {
        for j in 1..=n {
            let k = idx(i, j, cols);
            let v = 0.25 * (s[k - cols] + s[k + cols] + s[k - 1] + s[k + 1]);
            let diff = v - s[k];
            dsq += diff * diff;
            d[k] = v;
        }
    }
    dsq
}

/// ダブルバッファによるヤコビ反復器。
pub struct Jacobi {
    psi: Field,
    tmp: Field,
    progress_every: usize,
    iterations: usize,
    delta_sq: f64,
}

impl Jacobi {
    /// 初期場を受け取る。作業用バッファは初期場の複製なので，
    /// 境界値は両方のバッファに常に存在する。
    pub fn new(psi: Field) -> Self {
        let tmp = psi.clone();
        Self {
            psi,
            tmp,
            progress_every: DEFAULT_PROGRESS_EVERY,
            iterations: 0,
            delta_sq: 0.0,
        }
    }

    /// [`Jacobi::run`] の進捗コールバックの間隔。0 なら呼ばない。
    pub fn with_progress_every(mut self, every: usize) -> Self {
        self.progress_every = every;
        self
    }

    /// 1 スイープ進める。
    pub fn step(&mut self) {
        self.delta_sq = sweep(&self.psi, &mut self.tmp);
        std::mem::swap(&mut self.psi, &mut self.tmp);
        self.iterations += 1;
    }

    /// ちょうど `niter` 回スイープする。`progress_every` 回ごとに
    /// `on_progress(iter, rms_delta)` を呼ぶ。
    pub fn run<F>(&mut self, niter: usize, mut on_progress: F)
    where
        F: FnMut(usize, f64),
    {
        for iter in 1..=niter {
            self.step();
            if self.progress_every > 0 && iter % self.progress_every == 0 {
                on_progress(iter, self.rms_delta());
            }
        }
    }

    pub fn into_field(self) -> Field {
        self.psi
    }

    /// 実行済みスイープ数。
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// 直前のスイープでの変化量の二乗和（スイープ前は 0）。
    pub fn delta_sq(&self) -> f64 {
        self.delta_sq
    }

    pub fn rms_delta(&self) -> f64 {
        let (m, n) = self.psi.interior();
        if m * n == 0 {
            return 0.0;
        }
        (self.delta_sq / (m * n) as f64).sqrt()
    }
}

/// `niter` 回のスイープを行い，最終的な場を返す簡易関数。
pub fn relax(psi: Field, niter: usize) -> Field {
    let mut solver = Jacobi::new(psi).with_progress_every(0);
    solver.run(niter, |_, _| {});
    solver.into_field()
}
