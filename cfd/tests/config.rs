use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;

use cfd::config::{Colormap, Config, GeometryCfg, Interp, OutFmt, ScaleCfg};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn every_fixture_parses() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures");
    let mut checked = 0usize;
    for entry in fs::read_dir(&dir).expect("read fixtures dir") {
        let path = entry.expect("dir entry").path();
        if path.extension() != Some(OsStr::new("yaml")) {
            continue;
        }
        let cfg = Config::from_path(&path)
            .unwrap_or_else(|e| panic!("{}: {:#}", path.display(), e));
        assert!(cfg.simulation.scale_factor >= 1, "{}", path.display());
        checked += 1;
    }
    assert!(checked >= 4, "expected the fixture set, got {}", checked);
}

#[test]
fn shipped_config_matches_defaults() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config.yaml");
    let cfg = Config::from_path(path).expect("load config.yaml");
    let def = Config::default();
    assert_eq!(cfg.geometry, def.geometry);
    assert_eq!(cfg.simulation.iterations, def.simulation.iterations);
    assert_eq!(cfg.output.velocity_file, "velocity.dat");
    assert_eq!(cfg.output.colourmap_file, "colourmap.dat");
    assert_eq!(cfg.output.plot.file, "visual.png");
}

#[test]
fn empty_file_gives_defaults() {
    let cfg = Config::from_path(fixture("empty.yaml")).expect("load");
    assert_eq!(cfg.simulation.scale_factor, 1);
    assert_eq!(cfg.simulation.iterations, 1000);
    assert_eq!(cfg.simulation.progress_every, 1000);
    assert_eq!(cfg.geometry, GeometryCfg::default());
    assert!(cfg.output.enable);
    assert_eq!(cfg.output.dir, ".");
    assert!(cfg.output.plot.enable);
    assert_eq!(cfg.output.plot.format, OutFmt::Png);
    assert_eq!(cfg.output.plot.colormap, Colormap::Jet);
    assert_eq!(cfg.output.plot.scale, ScaleCfg::Auto);
}

#[test]
fn null_documents_give_defaults() {
    for doc in ["", "# only a comment\n", "---\n", "~\n", "null\n"] {
        let cfg = Config::from_yaml(doc).unwrap_or_else(|e| panic!("{:?}: {:#}", doc, e));
        assert_eq!(cfg.geometry, GeometryCfg::default(), "{:?}", doc);
        assert_eq!(cfg.simulation.iterations, 1000, "{:?}", doc);
    }
    let cfg = Config::from_path(fixture("null.yaml")).expect("load");
    assert_eq!(cfg.simulation.scale_factor, 1);
}

#[test]
fn explicit_defaults_equal_implicit() {
    let a = Config::from_path(fixture("default.yaml")).expect("load");
    let b = Config::default();
    assert_eq!(a.geometry, b.geometry);
    assert_eq!(a.simulation.scale_factor, b.simulation.scale_factor);
    assert_eq!(a.simulation.iterations, b.simulation.iterations);
}

#[test]
fn plot_settings_override() {
    let cfg = Config::from_path(fixture("ppm_gray.yaml")).expect("load");
    assert_eq!(cfg.simulation.scale_factor, 2);
    assert_eq!(cfg.simulation.iterations, 50);
    assert_eq!(cfg.simulation.progress_every, 0);
    let p = &cfg.output.plot;
    assert_eq!(p.format, OutFmt::Ppm);
    assert_eq!((p.out_w, p.out_h), (Some(120), Some(90)));
    assert_eq!(p.interp, Interp::Nearest);
    assert_eq!(p.colormap, Colormap::Gray);
    assert_eq!(p.scale, ScaleCfg::Fixed { min: 0.0, max: 1.0 });
    assert_eq!(p.contours, 0);
    assert!(!p.colorbar);
    // untouched fields keep their defaults
    assert!(p.flip_y);
    assert_eq!(p.pixels_per_cell, 8);
}

#[test]
fn unknown_colormap_is_an_error() {
    let err = Config::from_yaml("output:\n  plot:\n    colormap: viridis\n").unwrap_err();
    assert!(format!("{:#}", err).contains("viridis"), "{:#}", err);
}

#[test]
fn missing_file_names_the_path() {
    let err = Config::from_path(fixture("does_not_exist.yaml")).unwrap_err();
    assert!(format!("{:#}", err).contains("does_not_exist.yaml"));
}

#[test]
fn summary_mentions_scale_and_iterations() {
    let mut cfg = Config::default();
    cfg.simulation.scale_factor = 3;
    cfg.simulation.iterations = 42;
    let s = cfg.summary();
    assert!(s.contains("scale=3"), "{}", s);
    assert!(s.contains("iterations=42"), "{}", s);
}
