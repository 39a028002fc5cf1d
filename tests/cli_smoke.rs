use std::path::PathBuf;

fn imago_exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_imago")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) { "imago.exe" } else { "imago" });
            p
        })
}

#[test]
fn cli_validates_and_evaluates_a_scene() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let scene_path = dir.join("scene.json");
    let scene = serde_json::json!({
        "op": "cond",
        "region": { "op": "vertical_stripe", "width": 2.0 },
        "if_true": { "op": "constant", "value": "#ff0000" },
        "if_false": { "op": "constant", "value": "#0000ff" },
    });
    std::fs::write(&scene_path, serde_json::to_string_pretty(&scene).unwrap()).unwrap();

    let scene_arg = scene_path.to_string_lossy().to_string();

    let status = std::process::Command::new(imago_exe())
        .args(["validate", "--in", scene_arg.as_str()])
        .status()
        .unwrap();
    assert!(status.success());

    let out = std::process::Command::new(imago_exe())
        .args([
            "eval",
            "--in",
            scene_arg.as_str(),
            "--at",
            "0,0",
            "--at",
            "3,0",
        ])
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("#ff0000"), "stdout: {stdout}");
    assert!(stdout.contains("#0000ff"), "stdout: {stdout}");
}

#[test]
fn cli_rejects_an_invalid_scene() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let scene_path = dir.join("invalid_scene.json");
    let scene = serde_json::json!({
        "op": "scale",
        "factor": 0.0,
        "inner": { "op": "constant", "value": "#ffffff" },
    });
    std::fs::write(&scene_path, serde_json::to_string_pretty(&scene).unwrap()).unwrap();

    let scene_arg = scene_path.to_string_lossy().to_string();

    let status = std::process::Command::new(imago_exe())
        .args(["validate", "--in", scene_arg.as_str()])
        .status()
        .unwrap();
    assert!(!status.success());
}
