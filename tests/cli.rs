use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn polyscribe_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("polyscribe").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn polyscribe_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    polyscribe_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Click-by-click polyline drawing with undo and redo",
        ));
}

#[test]
fn script_on_stdin_commits_segment() {
    let temp = TempDir::new().unwrap();
    polyscribe_cmd(&temp)
        .write_stdin("click 10 10\nclick 50 50\nkey Return\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Black (10, 10) (50, 50)"))
        .stdout(predicate::str::contains("state: idle"))
        .stdout(predicate::str::contains("can_undo: true"))
        .stdout(predicate::str::contains("can_redo: false"));
}

#[test]
fn recolor_then_undo_reports_redo() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("draw.txt");
    std::fs::write(
        &script,
        "# segment, recolor, undo the recolor\n\
         click 10 10\n\
         click 50 50\n\
         key Return\n\
         key B\n\
         key Ctrl+Z\n",
    )
    .unwrap();

    polyscribe_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Black"))
        .stdout(predicate::str::contains("can_redo: true"));
}

#[test]
fn json_output_lists_shapes_and_history() {
    let temp = TempDir::new().unwrap();
    let output = polyscribe_cmd(&temp)
        .arg("--json")
        .write_stdin("click 0 0\nclick 5 5\nclick 9 0\nkey Return\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let shapes = report["shapes"].as_array().unwrap();
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0]["points"].as_array().unwrap().len(), 3);
    assert_eq!(report["state"], "idle");
    assert_eq!(report["history"]["can_undo"], true);
}

#[test]
fn bad_script_reports_line_number() {
    let temp = TempDir::new().unwrap();
    polyscribe_cmd(&temp)
        .write_stdin("click 1 1\nteleport 2 2\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: unknown command 'teleport'"));
}

#[test]
fn config_file_caps_points_and_remaps_keys() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(
        &config,
        "[drawing]\nmax_points = 3\ndefault_color = \"green\"\n\n[keybindings]\ncommit = [\"Space\"]\n",
    )
    .unwrap();

    polyscribe_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .write_stdin("click 0 0\nclick 1 1\nclick 2 2\nclick 3 3\nclick 4 4\nkey Space\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Green (0, 0) (1, 1) (2, 2)"))
        .stdout(predicate::str::contains("#2 Green (3, 3) (4, 4)"));
}

#[test]
fn duplicate_keybindings_are_rejected() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(&config, "[keybindings]\ncommit = [\"Escape\"]\n").unwrap();

    polyscribe_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate keybinding"));
}

#[test]
fn init_config_writes_default_file() {
    let temp = TempDir::new().unwrap();
    polyscribe_cmd(&temp)
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    assert!(temp.path().join("polyscribe").join("config.toml").exists());

    polyscribe_cmd(&temp)
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
