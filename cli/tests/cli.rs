use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn boundcheck() -> Command {
    Command::cargo_bin("boundcheck").unwrap()
}

#[test]
fn check_reports_valid_and_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(dir.path(), "schema.json", r#"{ "maximum": 3.0 }"#);
    let below = write(dir.path(), "below.json", "2.6");
    let above = write(dir.path(), "above.json", "3.5");

    boundcheck()
        .arg("check")
        .arg("--schema")
        .arg(&schema)
        .arg(&below)
        .assert()
        .success()
        .stdout(predicate::str::contains("below.json: valid"));

    boundcheck()
        .arg("check")
        .arg("--schema")
        .arg(&schema)
        .arg(&above)
        .assert()
        .failure()
        .stdout(predicate::str::contains("above.json: invalid"));
}

#[test]
fn check_ignores_non_numeric_instances() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(dir.path(), "schema.json", r#"{ "maximum": 3.0 }"#);
    let text = write(dir.path(), "text.json", r#""x""#);

    boundcheck()
        .arg("check")
        .arg("--schema")
        .arg(&schema)
        .arg(&text)
        .assert()
        .success()
        .stdout(predicate::str::contains("text.json: valid"));
}

#[test]
fn check_rejects_malformed_schema() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(dir.path(), "schema.json", r#"{ "maximum": "three" }"#);
    let instance = write(dir.path(), "n.json", "1");

    boundcheck()
        .arg("check")
        .arg("--schema")
        .arg(&schema)
        .arg(&instance)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid schema"));
}

#[test]
fn suite_passes_on_shipped_fixtures() {
    boundcheck()
        .arg("suite")
        .arg(concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures/maximum.json"))
        .arg(concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures/minimum.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("0 mismatched"));
}

#[test]
fn suite_reports_mismatch_per_case() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = write(
        dir.path(),
        "broken.json",
        r#"[
            {
                "description": "maximum validation",
                "schema": { "maximum": 3.0 },
                "tests": [
                    { "description": "wrongly expects 3.5 valid", "data": 3.5, "valid": true }
                ]
            }
        ]"#,
    );

    boundcheck()
        .arg("suite")
        .arg(&fixture)
        .assert()
        .failure()
        .stdout(
            predicate::str::contains("maximum validation: wrongly expects 3.5 valid")
                .and(predicate::str::contains("1 mismatched")),
        );
}
