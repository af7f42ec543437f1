use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const LEGACY_PLAN: &str = r#"{
    "version": "1",
    "name": "Legacy Sweet Spot",
    "activityClassification": "indoor_bike",
    "estimatedTss": 65,
    "structure": { "steps": [
        {
            "type": "step",
            "name": "Warm up",
            "duration": { "type": "time", "value": 10, "unit": "min" },
            "targets": [{ "type": "%FTP", "intensity": 55 }],
            "segmentLabel": "warmup"
        },
        {
            "type": "repetition",
            "repeat": 3,
            "steps": [
                {
                    "type": "step",
                    "name": "Interval",
                    "duration": { "type": "time", "value": 10, "unit": "minutes" },
                    "targets": [{ "type": "RelativeToFTP", "min": 88, "max": 94 }]
                },
                {
                    "type": "step",
                    "name": "Recovery",
                    "duration": { "type": "time", "value": 300, "unit": "seconds" }
                }
            ]
        }
    ] }
}"#;

const BROKEN_PLAN: &str = r#"{
    "name": "Broken",
    "activityClassification": "run",
    "structure": { "steps": [
        { "type": "repetition", "repeat": 0, "steps": [
            { "type": "step", "name": "Run", "duration": { "type": "time", "value": 1, "unit": "minutes" } }
        ] },
        {
            "type": "step",
            "name": "Mystery",
            "duration": { "type": "time", "value": 5, "unit": "minutes" },
            "targets": [{ "type": "bogus", "intensity": 3 }]
        }
    ] }
}"#;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

fn write_plan(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write plan fixture");
    path
}

/// Helper function to create a Command with --no-color flag for testing
fn stride_cmd() -> Command {
    let mut cmd = Command::cargo_bin("stride").expect("Failed to find stride binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_normalize_legacy_document() {
    let temp_dir = create_cli_test_environment();
    let plan = write_plan(&temp_dir, "legacy.json", LEGACY_PLAN);

    stride_cmd()
        .arg("normalize")
        .arg(&plan)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Legacy Sweet Spot"))
        .stdout(predicate::str::contains("- Activity: bike (indoor)"))
        .stdout(predicate::str::contains("- Version: 2.0"))
        .stdout(predicate::str::contains("- 3x"))
        .stdout(predicate::str::contains("88-94% FTP"));
}

#[test]
fn test_cli_normalize_json_output_is_canonical() {
    let temp_dir = create_cli_test_environment();
    let plan = write_plan(&temp_dir, "legacy.json", LEGACY_PLAN);

    stride_cmd()
        .args(["--format", "json", "normalize"])
        .arg(&plan)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""version": "2.0""#))
        .stdout(predicate::str::contains(r#""unit": "minutes""#))
        .stdout(predicate::str::contains(r#""type": "relative_to_ftp""#))
        .stdout(predicate::str::contains(r#""estimatedTrainingStress": 65"#));
}

#[test]
fn test_cli_normalize_reports_every_failure_in_batch() {
    let temp_dir = create_cli_test_environment();
    let good = write_plan(&temp_dir, "good.json", LEGACY_PLAN);
    let broken = write_plan(&temp_dir, "broken.json", BROKEN_PLAN);

    stride_cmd()
        .arg("normalize")
        .arg(&broken)
        .arg(&good)
        .assert()
        .failure()
        .stdout(predicate::str::contains("# Legacy Sweet Spot"))
        .stdout(predicate::str::contains("2 malformed node(s)"))
        .stdout(predicate::str::contains("structure.steps[0].repeat"))
        .stdout(predicate::str::contains("structure.steps[1].targets[0]"))
        .stdout(predicate::str::contains(
            "Error: 1 of 2 document(s) failed to normalize",
        ));
}

#[test]
fn test_cli_normalize_missing_file_fails() {
    let temp_dir = create_cli_test_environment();

    stride_cmd()
        .arg("normalize")
        .arg(temp_dir.path().join("missing.json"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("missing.json: unreadable"))
        .stdout(predicate::str::contains("Failed to read"))
        .stderr(predicate::str::contains("1 of 1 document(s) failed"));
}

#[test]
fn test_cli_normalize_continues_past_unparseable_files() {
    let temp_dir = create_cli_test_environment();
    let garbage = write_plan(&temp_dir, "a_garbage.json", "{ not json");
    let missing = temp_dir.path().join("b_missing.json");
    let good = write_plan(&temp_dir, "c_good.json", LEGACY_PLAN);

    stride_cmd()
        .arg("normalize")
        .arg(&garbage)
        .arg(&missing)
        .arg(&good)
        .assert()
        .failure()
        .stdout(predicate::str::contains("# Legacy Sweet Spot"))
        .stdout(predicate::str::contains("a_garbage.json: unreadable"))
        .stdout(predicate::str::contains("Failed to parse"))
        .stdout(predicate::str::contains("b_missing.json: unreadable"))
        .stdout(predicate::str::contains(
            "Error: 2 of 3 document(s) failed to normalize",
        ));
}

#[test]
fn test_cli_normalize_reports_typeless_node_with_other_problems() {
    let temp_dir = create_cli_test_environment();
    let plan = write_plan(
        &temp_dir,
        "typeless.json",
        r#"{
            "name": "Typeless",
            "activityClassification": "run",
            "structure": { "steps": [
                { "name": "No type" },
                { "type": "repetition", "repeat": 0, "steps": [
                    { "type": "step", "name": "Run", "duration": { "type": "time", "value": 1, "unit": "minutes" } }
                ] }
            ] }
        }"#,
    );
    let good = write_plan(&temp_dir, "good.json", LEGACY_PLAN);

    stride_cmd()
        .arg("normalize")
        .arg(&plan)
        .arg(&good)
        .assert()
        .failure()
        .stdout(predicate::str::contains("typeless.json: 2 malformed node(s)"))
        .stdout(predicate::str::contains(
            "- structure.steps[0]: Missing required field 'type'",
        ))
        .stdout(predicate::str::contains("structure.steps[1].repeat"))
        .stdout(predicate::str::contains("# Legacy Sweet Spot"));
}

#[test]
fn test_cli_show_includes_metrics() {
    let temp_dir = create_cli_test_environment();
    let plan = write_plan(&temp_dir, "legacy.json", LEGACY_PLAN);

    stride_cmd()
        .arg("show")
        .arg(&plan)
        .assert()
        .success()
        .stdout(predicate::str::contains("## Structure"))
        .stdout(predicate::str::contains("## Metrics"))
        .stdout(predicate::str::contains("- Computed duration: 55m (3300 s)"))
        .stdout(predicate::str::contains("- Declared training stress: 65"));
}

#[test]
fn test_cli_metrics_json() {
    let temp_dir = create_cli_test_environment();
    let plan = write_plan(&temp_dir, "legacy.json", LEGACY_PLAN);

    stride_cmd()
        .args(["--format", "json", "metrics"])
        .arg(&plan)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""computedDurationSeconds": 3300.0"#))
        .stdout(predicate::str::contains(r#""declaredDurationSeconds": null"#))
        .stdout(predicate::str::contains(r#""leafStepCount": 7"#));
}

#[test]
fn test_cli_metrics_rejects_malformed_plan() {
    let temp_dir = create_cli_test_environment();
    let plan = write_plan(&temp_dir, "broken.json", BROKEN_PLAN);

    stride_cmd()
        .arg("metrics")
        .arg(&plan)
        .assert()
        .failure()
        .stdout(predicate::str::contains("structure.steps[0].repeat"))
        .stderr(predicate::str::contains("is not a valid plan document"));
}

#[test]
fn test_cli_sample_list() {
    stride_cmd()
        .arg("sample")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Sample Plans"))
        .stdout(predicate::str::contains("sweet-spot-intervals"))
        .stdout(predicate::str::contains("track-repeats"));
}

#[test]
fn test_cli_sample_by_slug() {
    stride_cmd()
        .args(["sample", "sweet-spot-intervals"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Sweet Spot Intervals"))
        .stdout(predicate::str::contains("- Estimated duration: 1h 10m"));
}

#[test]
fn test_cli_sample_json_normalizes_back() {
    let temp_dir = create_cli_test_environment();
    let output = stride_cmd()
        .args(["--format", "json", "sample", "easy-run"])
        .output()
        .expect("Failed to run stride");
    assert!(output.status.success());

    let path = temp_dir.path().join("easy-run.json");
    std::fs::write(&path, &output.stdout).expect("Failed to write sample");

    stride_cmd()
        .arg("normalize")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Easy"));
}

#[test]
fn test_cli_unknown_sample_fails() {
    stride_cmd()
        .args(["sample", "marathon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No sample plan named 'marathon'"));
}

#[test]
fn test_cli_schema_describes_plan_document() {
    stride_cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("PlanDocument"))
        .stdout(predicate::str::contains("activityClassification"));
}
