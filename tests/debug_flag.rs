// Verifies that --debug lists every flip under its row.
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn debug_flag_prints_flips() {
    let output = Command::cargo_bin("pancakes")
        .unwrap()
        .args(["--debug", "--stacks", "+-,+++"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("flip  1 | through  1 | +- -> -+")
                .and(predicate::str::contains("flip  2 | through  0 | -+ -> ++")),
        )
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    // the happy stack gets no flip lines
    assert_eq!(stdout.matches("flip ").count(), 2);
}

#[test]
fn verbose_logs_to_stderr_only() {
    Command::cargo_bin("pancakes")
        .unwrap()
        .env_remove("RUST_LOG")
        .args(["--verbose", "--stacks", "-"])
        .assert()
        .success()
        .stderr(predicate::str::contains("resolved stack"))
        .stdout(predicate::str::contains("resolved stack").not());
}
