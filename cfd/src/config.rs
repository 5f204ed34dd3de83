use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::jacobi::DEFAULT_PROGRESS_EVERY;

/// シミュレーション全体の設定を保持するトップレベル構造体。
///
/// `config.yaml` から読み込まれ，各モジュールへ設定値を渡す。
/// すべての項目に既定値があるため，空のファイルでも有効な設定となる。
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
    /// 倍率と反復回数
    pub simulation: SimulationCfg,
    /// 倍率を掛ける前のダクト形状
    pub geometry: GeometryCfg,
    /// データファイルと画像の出力設定
    pub output: OutputCfg,
}

impl Config {
    /// YAML ファイルから `Config` を生成するユーティリティ。
    pub fn from_path<P: AsRef<Path>>(p: P) -> Result<Self> {
        let s = fs::read_to_string(&p)
            .with_context(|| format!("failed to read {}", p.as_ref().display()))?;
        Self::from_yaml(&s).with_context(|| format!("YAML parse error in {}", p.as_ref().display()))
    }

    pub fn from_yaml(s: &str) -> Result<Self> {
        // 空の文書や `~` は None になるので既定値を使う
        let cfg: Option<Config> = serde_yaml::from_str(s)?;
        Ok(cfg.unwrap_or_default())
    }

    /// ログ出力用の簡易サマリを返す。
    pub fn summary(&self) -> String {
        format!(
            "scale={} iterations={} progress_every={} base=({}x{} b={} h={} w={}) out_dir={} plot={}",
            self.simulation.scale_factor,
            self.simulation.iterations,
            self.simulation.progress_every,
            self.geometry.m_base,
            self.geometry.n_base,
            self.geometry.b_base,
            self.geometry.h_base,
            self.geometry.w_base,
            self.output.dir,
            if self.output.plot.enable {
                self.output.plot.file.as_str()
            } else {
                "off"
            }
        )
    }
}

/// 倍率と反復回数。コマンドライン引数で上書きされる。
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "snake_case", default)]
pub struct SimulationCfg {
    pub scale_factor: usize,
    pub iterations: usize,
    /// 進捗表示の間隔。0 なら表示しない
    pub progress_every: usize,
}

impl Default for SimulationCfg {
    fn default() -> Self {
        Self {
            scale_factor: 1,
            iterations: 1000,
            progress_every: DEFAULT_PROGRESS_EVERY,
        }
    }
}

/// 倍率を掛ける前のダクト形状。各値に倍率が掛けられる。
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case", default)]
pub struct GeometryCfg {
    pub m_base: usize,
    pub n_base: usize,
    /// 下辺における流入口のオフセット
    pub b_base: usize,
    /// 右辺における流出口のオフセット
    pub h_base: usize,
    /// 流入口・流出口の幅
    pub w_base: usize,
}

impl Default for GeometryCfg {
    fn default() -> Self {
        Self {
            m_base: 32,
            n_base: 32,
            b_base: 10,
            h_base: 15,
            w_base: 5,
        }
    }
}

/// データファイル出力に関する設定。
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "snake_case", default)]
pub struct OutputCfg {
    pub enable: bool,
    pub dir: String,
    pub velocity_file: String,
    pub colourmap_file: String,
    pub plot: PlotCfg,
}

impl Default for OutputCfg {
    fn default() -> Self {
        Self {
            enable: true,
            dir: ".".to_string(),
            velocity_file: "velocity.dat".to_string(),
            colourmap_file: "colourmap.dat".to_string(),
            plot: PlotCfg::default(),
        }
    }
}

/// 流れ場の画像出力に関する設定。
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "snake_case", default)]
pub struct PlotCfg {
    pub enable: bool,
    pub file: String,
    pub format: OutFmt,
    /// `out_w`/`out_h` が未指定のときの 1 セルあたりの画素数
    pub pixels_per_cell: usize,
    pub out_w: Option<usize>,
    pub out_h: Option<usize>,
    pub interp: Interp,
    pub colormap: Colormap,
    pub scale: ScaleCfg,
    /// 流線として描く psi の等値線の本数
    pub contours: usize,
    pub colorbar: bool,
    pub flip_y: bool,
}

impl Default for PlotCfg {
    fn default() -> Self {
        Self {
            enable: true,
            file: "visual.png".to_string(),
            format: OutFmt::Png,
            pixels_per_cell: 8,
            out_w: None,
            out_h: None,
            interp: Interp::Bilinear,
            colormap: Colormap::Jet,
            scale: ScaleCfg::Auto,
            contours: 20,
            colorbar: true,
            flip_y: true,
        }
    }
}

/// カラーマップのスケーリング方法。
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum ScaleCfg {
    /// 最小値と最大値を固定
    Fixed { min: f64, max: f64 },
    /// データに合わせて自動スケーリング
    Auto,
}

/// 出力画像のフォーマット。
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutFmt {
    Png,
    Ppm,
}

/// 出力画像生成時の補間方法。
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Interp {
    Nearest,
    Bilinear,
}

/// 利用可能なカラーマップ。
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Colormap {
    Gray,
    Turbo,
    #[default]
    Jet,
}
