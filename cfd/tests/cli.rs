use std::process::Command;

fn cfd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cfd"));
    // keep a stray ./config.yaml from changing the run
    cmd.current_dir(std::env::temp_dir());
    cmd
}

#[test]
fn no_arguments_prints_usage_and_exits_1() {
    let out = cfd().output().expect("run cfd");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("Usage: cfd <scalefactor> <iterations>"),
        "stderr: {}",
        stderr
    );
    assert!(out.stdout.is_empty());
}

#[test]
fn one_argument_prints_usage_and_exits_1() {
    let out = cfd().arg("1").output().expect("run cfd");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage: cfd"));
}

#[test]
fn non_integer_argument_exits_1() {
    let out = cfd().args(["two", "10"]).output().expect("run cfd");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage: cfd"));
}

#[test]
fn short_run_reports_progress() {
    let dir = std::env::temp_dir().join(format!("cfd-cli-run-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create dir");
    let cfg = dir.join("run.yaml");
    std::fs::write(
        &cfg,
        format!(
            "output:\n  dir: {:?}\n  plot:\n    enable: false\n",
            dir.to_string_lossy()
        ),
    )
    .expect("write config");

    let out = cfd()
        .args(["1", "2000", "--config"])
        .arg(&cfg)
        .output()
        .expect("run cfd");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Grid size = 32 x 32"), "{}", stdout);
    assert!(stdout.contains("completed iteration 1000"), "{}", stdout);
    assert!(stdout.contains("completed iteration 2000"), "{}", stdout);
    assert!(dir.join("velocity.dat").exists());
    assert!(dir.join("colourmap.dat").exists());
    std::fs::remove_dir_all(&dir).ok();
}
