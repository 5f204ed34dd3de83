/// 2 次元インデックス `(i, j)` を 1 次元インデックスに変換する。
/// 配列は `cols` を幅とする行優先で格納されていると仮定する。
#[inline]
pub fn idx(i: usize, j: usize, cols: usize) -> usize {
    i * cols + j
}

/// 流れ関数 `psi` を保持する 2 次元配列。
///
/// 形状は `(m+2) x (n+2)` で，行・列 0 と `m+1`/`n+1` が境界セル，
/// `1..=m`, `1..=n` が内部セルとなる。
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Field {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// 境界セルを除いた内部セル数 `(m, n)`。
    pub fn interior(&self) -> (usize, usize) {
        (self.rows.saturating_sub(2), self.cols.saturating_sub(2))
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[idx(i, j, self.cols)]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, v: f64) {
        let k = idx(i, j, self.cols);
        self.data[k] = v;
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// 全セルの最小値と最大値。空の配列では `(0, 0)` を返す。
    pub fn min_max(&self) -> (f64, f64) {
        let Some(&first) = self.data.first() else {
            return (0.0, 0.0);
        };
        let mut mn = first;
        let mut mx = first;
        for &v in self.data.iter() {
            if v < mn {
                mn = v;
            }
            if v > mx {
                mx = v;
            }
        }
        (mn, mx)
    }

    /// 外周 4 辺の値を，行 0・行 `rows-1`・列 0・列 `cols-1` の順に並べて返す。
    pub fn boundary_values(&self) -> Vec<f64> {
        let last_row = self.rows - 1;
        let last_col = self.cols - 1;
        let mut out = Vec::with_capacity(2 * (self.rows + self.cols));
        for j in 0..self.cols {
            out.push(self.get(0, j));
        }
        for j in 0..self.cols {
            out.push(self.get(last_row, j));
        }
        for i in 0..self.rows {
            out.push(self.get(i, 0));
        }
        for i in 0..self.rows {
            out.push(self.get(i, last_col));
        }
        out
    }
}
