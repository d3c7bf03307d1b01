//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn lazyseq() -> Command {
    let mut cmd = Command::cargo_bin("lazyseq").expect("binary not found");
    for var in ["LAZYSEQ_START", "LAZYSEQ_END", "LAZYSEQ_STEP", "LAZYSEQ_TIMEOUT"] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn help_flag() {
    lazyseq()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--timeout"));
}

#[test]
fn version_flag() {
    lazyseq()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lazyseq"));
}

#[test]
fn prints_a_range() {
    lazyseq()
        .args(["--end", "5"])
        .assert()
        .success()
        .stdout("0\n1\n2\n3\n4\n");
}

#[test]
fn counts_down() {
    lazyseq()
        .args(["--start", "4", "--end", "-1", "--step", "-1"])
        .assert()
        .success()
        .stdout("4\n3\n2\n1\n0\n");
}

#[test]
fn start_from_environment() {
    lazyseq()
        .env("LAZYSEQ_START", "7")
        .args(["--end", "9"])
        .assert()
        .success()
        .stdout("7\n8\n");
}

#[test]
fn window_on_unbounded_range() {
    lazyseq()
        .args(["--start", "10", "--step", "2", "--limit", "5"])
        .assert()
        .success()
        .stdout("10\n12\n14\n16\n18\n");
}

#[test]
fn cycle_and_take() {
    lazyseq()
        .args(["--end", "4", "--cycle", "--take", "12"])
        .assert()
        .success()
        .stdout("0\n1\n2\n3\n0\n1\n2\n3\n0\n1\n2\n3\n");
}

#[test]
fn json_summary() {
    let output = lazyseq()
        .args(["--end", "3", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["values"], serde_json::json!([0, 1, 2]));
    assert_eq!(summary["count"], 3);
    assert_eq!(summary["outcome"], "completed");
}

#[test]
fn timeout_truncates_with_exit_code_2() {
    lazyseq()
        .args(["--interval", "5ms", "--timeout", "100ms", "--format", "json"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\"outcome\":\"timed_out\""));
}

#[test]
fn zero_step_is_a_config_error() {
    lazyseq()
        .args(["--end", "3", "--step", "0"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("--step"));
}

#[test]
fn unbounded_without_timeout_is_a_config_error() {
    lazyseq()
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unbounded"));
}

#[test]
fn bad_duration_is_a_config_error() {
    lazyseq()
        .args(["--end", "3", "--timeout", "soon"])
        .assert()
        .code(4);
}

#[test]
fn completion_bash() {
    lazyseq()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lazyseq"));
}

#[test]
fn verbose_prints_summary_to_stderr() {
    lazyseq()
        .args(["--end", "2", "-v"])
        .assert()
        .success()
        .stdout("0\n1\n")
        .stderr(predicate::str::contains("2 values, completed"));
}
