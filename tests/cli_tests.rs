//! End-to-end tests of the hoi binary against fixture datasets

mod utils;

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn hoi() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("hoi")
}

#[test]
fn test_analyze_text_report() {
    let dir = utils::sample_dataset();

    hoi()
        .arg("analyze")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Action co-occurrence summary"))
        .stdout(predicate::str::is_match(r"samples\s+3").unwrap())
        .stdout(predicate::str::is_match(r"total_actions\s+7").unwrap())
        .stdout(predicate::str::is_match(r"total_interactions\s+5").unwrap())
        .stdout(predicate::str::is_match(r"has_instrument\s+1").unwrap());
}

#[test]
fn test_analyze_json_report() {
    let dir = utils::sample_dataset();

    let output = hoi()
        .args(["analyze", "--format", "json", "--list-samples"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["format"], "hoi-cooccurrence-v1");
    assert_eq!(json["append_policy"], "per-verb");
    assert_eq!(json["samples_analyzed"], 3);
    assert_eq!(json["counts"]["total_actions"], 7);
    // grab: target 2 shared, subject 0 repeated; hold: target 2 shared
    assert_eq!(json["counts"]["different_subjects_same_target"], 2);
    assert_eq!(json["counts"]["same_subject_different_targets"], 1);
    assert_eq!(json["counts"]["same_subject_target"], 0);

    // multi_verb stays flagged for the "look" iteration as well
    let dsst = &json["collections"]["dsst_samples"];
    assert_eq!(dsst["len"], 3);
    assert_eq!(dsst["ids"][0], "grab_clip");
    assert_eq!(dsst["ids"][1], "multi_verb");
    assert_eq!(dsst["ids"][2], "multi_verb");
    assert_eq!(json["collections"]["both"]["len"], 1);
}

#[test]
fn test_analyze_per_sample_policy() {
    let dir = utils::sample_dataset();

    let output = hoi()
        .args(["analyze", "--format", "json", "--append-policy", "per-sample"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["append_policy"], "per-sample");
    assert_eq!(json["collections"]["dsst_samples"]["len"], 2);
    assert_eq!(json["collections"]["at_least_one"]["len"], 2);
    assert!(json["collections"]["dsst_samples"].get("ids").is_none());
}

#[test]
fn test_config_file_sets_policy_and_dataset() {
    let dir = utils::sample_dataset();
    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("hoi.toml");
    fs::write(
        &config_path,
        format!(
            "[dataset]\npath = {:?}\n\n[analysis]\nappend_policy = \"per-sample\"\n",
            dir.path().display().to_string()
        ),
    )
    .unwrap();

    hoi()
        .arg("--config")
        .arg(&config_path)
        .args(["analyze", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("metric,value\n"))
        .stdout(predicate::str::contains("len_dsst_samples,2\n"));

    // Flag overrides the file
    hoi()
        .arg("--config")
        .arg(&config_path)
        .args(["analyze", "--format", "csv", "--append-policy", "per-verb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("len_dsst_samples,3\n"));
}

#[test]
fn test_invalid_config_fails() {
    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("hoi.toml");
    fs::write(&config_path, "[analysis]\nappend_policy = 3\n").unwrap();

    hoi()
        .arg("--config")
        .arg(&config_path)
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_analyze_csv_sample_listing() {
    let dir = utils::sample_dataset();

    hoi()
        .args(["analyze", "--format", "csv", "--list-samples"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("collection,position,sample_id\n"))
        .stdout(predicate::str::contains("ssdt_samples,0,grab_clip\n"));
}

#[test]
fn test_missing_dataset_fails_with_path() {
    let dir = TempDir::new().unwrap();

    hoi()
        .arg("analyze")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load H2O dataset"))
        .stderr(predicate::str::contains("categories.json"));
}

#[test]
fn test_info_text() {
    let dir = utils::sample_dataset();

    hoi()
        .arg("info")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Samples: 3"))
        .stdout(predicate::str::is_match(r"train\s+2").unwrap())
        .stdout(predicate::str::is_match(r"test\s+1").unwrap())
        .stdout(predicate::str::contains("Verbs (4): grab, hold, cut, look"));
}

#[test]
fn test_info_json() {
    let dir = utils::sample_dataset();

    let output = hoi()
        .args(["info", "--format", "json"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["samples"], 3);
    assert_eq!(json["categories"][0], "person");
    assert_eq!(json["splits"][1]["name"], "test");
    assert_eq!(json["splits"][1]["samples"], 1);
}

#[test]
fn test_show_sample_text() {
    let dir = utils::sample_dataset();

    hoi()
        .args(["show", "42", "--dataset"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Sample 42 ==="))
        .stdout(predicate::str::contains("42.jpg"))
        .stdout(predicate::str::contains("Splits: test"))
        .stdout(predicate::str::contains("knife"))
        .stdout(predicate::str::contains("subject=0 target=- instrument=1"));
}

#[test]
fn test_show_sample_converts_boxes() {
    let dir = utils::sample_dataset();

    let output = hoi()
        .args([
            "show",
            "grab_clip",
            "--bbox-format",
            "xywh",
            "--image-size",
            "100x200",
            "--format",
            "json",
            "--dataset",
        ])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let bbox = &json["entities"][0]["bbox"];
    assert_eq!(bbox["format"], "xywh");
    assert_eq!(bbox["normalized"], false);

    // [0.1, 0.2, 0.5, 0.6] on 100x200 -> xyxy [10, 40, 50, 120] -> xywh [10, 40, 40, 80]
    let coords: Vec<f64> = bbox["coordinates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_f64().unwrap())
        .collect();
    for (actual, expected) in coords.iter().zip([10.0, 40.0, 40.0, 80.0]) {
        assert!((actual - expected).abs() < 1e-6, "{:?}", coords);
    }
    assert_eq!(json["actions"].as_array().unwrap().len(), 3);
}

#[test]
fn test_show_unknown_sample_fails() {
    let dir = utils::sample_dataset();

    hoi()
        .args(["show", "nope", "--dataset"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Sample 'nope' not found"));
}

#[test]
fn test_debug_flag_logs_to_stderr() {
    let dir = utils::sample_dataset();

    hoi()
        .args(["--debug", "analyze"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Opened H2O dataset"))
        .stdout(predicate::str::contains("Opened H2O dataset").not());
}
