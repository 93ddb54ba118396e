//! `propagate!` in a real process: failures reach `main` and end it cleanly.

use crate::common::run;

#[test]
fn test_propagate_success_through_two_levels() {
    let run = run(&["propagate", "--payload", "5"]);
    assert!(run.succeeded());
    assert_eq!(run.stdout(), "value=10\n");
}

#[test]
fn test_propagate_failure_reaches_main() {
    let run = run(&["propagate", "--fail", "--message", "upstream timeout"]);
    assert!(!run.succeeded());
    assert_eq!(run.output.status.code(), Some(1));
    assert!(run.stderr().contains("upstream timeout"));
    assert!(!run.stderr().contains("Aborted execution because"));
    assert!(run.stdout().is_empty());
}

#[test]
fn test_value_reports_failure_without_exiting() {
    let run = run(&["value", "--fail"]);
    assert!(run.succeeded());
    assert_eq!(run.stdout(), "success=false\n");
}

#[test]
fn test_value_reports_success() {
    let run = run(&["value"]);
    assert!(run.succeeded());
    assert_eq!(run.stdout(), "success=true\n");
}
