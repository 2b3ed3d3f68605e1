use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_iso3166")
}

fn run(args: &[&str]) -> Output {
    Command::new(bin())
        .args(args)
        .env("ISO3166_SUBDIVISIONS", "all")
        .env_remove("ISO3166_EXTRA_SUBDIVISIONS")
        .env_remove("ISO3166_LOG")
        .output()
        .expect("iso3166 should run")
}

fn unique_temp_path(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("iso3166-{name}-{stamp}.csv"))
}

#[test]
fn country_command_emits_json() {
    let output = run(&["country", "usa"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value =
        serde_json::from_str(&stdout).expect("country should emit json");
    assert_eq!(payload["alpha2"], "US");
    assert_eq!(payload["numeric"], "840");
}

#[test]
fn country_command_falls_back_to_names() {
    let output = run(&["country", "sweden"]);
    assert_eq!(output.status.code(), Some(0));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("country should emit json");
    assert_eq!(payload["alpha3"], "SWE");
}

#[test]
fn subdivision_command_uses_lenient_lookup() {
    let output = run(&["subdivision", "US-California"]);

    assert_eq!(output.status.code(), Some(0));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("subdivision should emit json");
    assert_eq!(payload["code"], "US-CA");
    assert_eq!(payload["type"], "State");
}

#[test]
fn subdivisions_command_respects_selection() {
    let output = Command::new(bin())
        .args(["subdivisions", "US"])
        .env("ISO3166_SUBDIVISIONS", "se")
        .env_remove("ISO3166_EXTRA_SUBDIVISIONS")
        .output()
        .expect("subdivisions should run");

    assert_eq!(output.status.code(), Some(0));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("subdivisions should emit json");
    assert_eq!(payload.as_array().map(Vec::len), Some(0));

    let output = run(&["subdivisions", "SE"]);
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("subdivisions should emit json");
    assert_eq!(payload.as_array().map(Vec::len), Some(21));
}

#[test]
fn convert_command_prints_code_and_enforces_source_format() {
    let output = run(&["convert", "840", "numeric", "alpha3"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "USA");

    let output = run(&["convert", "USA", "alpha2", "alpha3"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found: USA"));
}

#[test]
fn convert_command_rejects_unknown_format() {
    let output = run(&["convert", "US", "alpha2", "name"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown country code format 'name'"));
}

#[test]
fn detect_command_prints_format_tag() {
    let output = run(&["detect", "Peru"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "name");
}

#[test]
fn unknown_command_prints_usage() {
    let output = run(&["serve"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage: iso3166"));
}

#[test]
fn validate_command_returns_non_zero_on_invalid_data() {
    let path = unique_temp_path("invalid-subdivisions");
    fs::write(&path, "Sweden,NO-03,Oslo,County,SE\n").expect("fixture should be written");

    let output = run(&["validate", path.to_string_lossy().as_ref()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("validation failed: 1 error(s)"));
    assert!(stderr.contains("does not start with 'SE-'"));

    let _ = fs::remove_file(path);
}

#[test]
fn validate_command_passes_clean_data() {
    let path = unique_temp_path("valid-subdivisions");
    fs::write(&path, "Sweden,SE-O,Västra Götalands län,County,SE\n").expect("fixture should be written");

    let output = run(&["validate", path.to_string_lossy().as_ref()]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("validation passed"));

    let _ = fs::remove_file(path);
}
