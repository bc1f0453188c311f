use std::fs;
use std::process::Command;

fn vecta(dir: &std::path::Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_vecta"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn vecta")
}

#[test]
fn e2e_assess_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let out = vecta(dir.path(), &["assess"]);
    assert!(out.status.success(), "vecta assess failed: {out:?}");

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Dengue risk for Woodlands"));
    assert!(stdout.contains("Risk Score: 9/10"));
    assert!(stdout.contains("Danger Level: High"));
}

#[test]
fn e2e_assess_reads_config_and_case_csv() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("vecta.toml"),
        "area = \"Bedok\"\nconstruction = false\n[weather]\nhumidity = 50.0\ntemperature = 20.0\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("dengue_cases.csv"),
        "area,cases,clusters\nBedok,1,0\n",
    )
    .unwrap();

    let out = vecta(dir.path(), &["assess", "--json"]);
    assert!(out.status.success(), "vecta assess --json failed: {out:?}");
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["area"], "Bedok");
    assert_eq!(v["result"]["score"], 0);
    assert_eq!(v["result"]["level"], "Low");
    assert_eq!(
        v["result"]["suggestions"][0],
        "Maintain routine monitoring and public education"
    );
}

#[test]
fn e2e_invalid_manual_entry_exits_with_2() {
    let dir = tempfile::tempdir().unwrap();
    let out = vecta(dir.path(), &["assess", "--humidity", "140"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error: Invalid input for humidity"));
}

#[test]
fn e2e_scan_logs_to_configured_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = vecta(
        dir.path(),
        &[
            "scan",
            "--count",
            "Tire=2",
            "--count",
            "Bottle=1",
            "--log",
            "--user-id",
            "1234",
            "--username",
            "field_team",
        ],
    );
    assert!(out.status.success(), "vecta scan failed: {out:?}");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Risk Score: 7.0"));
    assert!(stdout.contains("Remove or cover old tires"));

    let log = fs::read_to_string(dir.path().join("environment_scans.csv")).unwrap();
    assert!(log.starts_with("timestamp,user_id,username,detections,risk_score,risk_level\n"));
    assert!(log.contains("1234,field_team,"));
    assert!(log.contains("HIGH RISK"));
}

#[test]
fn e2e_empty_scan_is_safe() {
    let dir = tempfile::tempdir().unwrap();
    let out = vecta(dir.path(), &["scan"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).starts_with("No breeding sites detected!"));
}

#[test]
fn e2e_config_init_then_show() {
    let dir = tempfile::tempdir().unwrap();
    let out = vecta(dir.path(), &["config", "init"]);
    assert!(out.status.success(), "vecta config init failed: {out:?}");
    assert!(dir.path().join("vecta.toml").exists());

    let out = vecta(dir.path(), &["config", "show"]);
    assert!(out.status.success());
    let shown = String::from_utf8_lossy(&out.stdout);
    assert!(shown.contains("area = \"Woodlands\""));
    assert!(shown.contains("[cases]"));
}

#[test]
fn e2e_newsletter_add_appends_to_archive() {
    let dir = tempfile::tempdir().unwrap();
    let out = vecta(dir.path(), &["newsletter", "add", "Turn over pails after use."]);
    assert!(out.status.success(), "vecta newsletter add failed: {out:?}");

    let saved = fs::read_to_string(dir.path().join("newsletter.txt")).unwrap();
    assert!(saved.starts_with("\n\n=== "));
    assert!(saved.ends_with(" ===\nTurn over pails after use."));
}
