use assert_cmd::Command;
use predicates::prelude::*;

fn cargo_bin() -> Command {
    let mut cmd = Command::cargo_bin("pancakes").unwrap();
    cmd.env_remove("PANCAKES_CASES")
        .env_remove("PANCAKES_MAX_LENGTH")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn too_many_cases_is_rejected_before_any_output() {
    cargo_bin()
        .args(["--cases", "150"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("test cases"));
}

#[test]
fn zero_and_negative_cases_are_rejected() {
    for value in ["0", "-4"] {
        cargo_bin()
            .args(["--stacks", "random", "--cases", value])
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty());
    }
}

#[test]
fn max_length_out_of_range_is_rejected() {
    cargo_bin()
        .args(["--max-length", "51"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("max stack length between 1 and 50"));
}

#[test]
fn env_fallback_is_validated() {
    cargo_bin()
        .env("PANCAKES_MAX_LENGTH", "0")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("max stack length"));
}

#[test]
fn non_numeric_cases_is_a_usage_error() {
    cargo_bin()
        .args(["--cases", "lots"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn invalid_pancake_points_at_position() {
    cargo_bin()
        .args(["--stacks", "+-,+x-"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("invalid pancake 'x' in case 2 at position 1")
                .and(predicate::str::contains("  +x-\n   ^")),
        );
}

#[test]
fn empty_stack_segment_is_rejected() {
    cargo_bin()
        .args(["--stacks", "+,,-"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("case 2 is empty"));
}
