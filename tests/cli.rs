//! End-to-end tests for the command-line front-end
//!
//! These spawn the real binary and assert on exit status and the
//! stdout/stderr split: the configuration summary and validation
//! diagnostics go to stdout, the usage banner goes to stderr.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ycsb-bench"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run ycsb-bench")
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).expect("stdout is not utf-8")
}

fn stderr(out: &Output) -> String {
    String::from_utf8(out.stderr.clone()).expect("stderr is not utf-8")
}

#[test]
fn no_arguments_prints_default_summary() {
    let out = run(&[]);
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "scale_factor         : 1\n\
         column_count         : 10\n\
         update_ratio         : 0.5\n\
         backend_count        : 2\n\
         transaction_count    : 10000\n"
    );
}

#[test]
fn overrides_apply_and_unset_fields_keep_defaults() {
    let out = run(&["-k", "4", "-u", "0.2"]);
    assert!(out.status.success());

    let summary = stdout(&out);
    assert!(summary.contains("scale_factor         : 4"));
    assert!(summary.contains("update_ratio         : 0.2"));
    assert!(summary.contains("transaction_count    : 10000"));
    assert!(summary.contains("column_count         : 10"));
    assert!(summary.contains("backend_count        : 2"));
}

#[test]
fn long_options_are_recognized() {
    let out = run(&["--transactions", "500", "--backend_count", "8"]);
    assert!(out.status.success());

    let summary = stdout(&out);
    assert!(summary.contains("transaction_count    : 500"));
    assert!(summary.contains("backend_count        : 8"));
}

#[test]
fn invalid_update_ratio_fails_after_earlier_confirmations() {
    let out = run(&["-u", "1.5"]);
    assert!(!out.status.success());

    let summary = stdout(&out);
    // Fields validated before update_ratio are already confirmed.
    assert!(summary.contains("scale_factor         : 1"));
    assert!(summary.contains("column_count         : 10"));
    assert!(summary.contains("Invalid update_ratio :: 1.5"));
    // Validation stops at the first failing field.
    assert!(!summary.contains("backend_count"));
    assert!(!summary.contains("transaction_count"));
}

#[test]
fn non_positive_count_is_rejected() {
    let out = run(&["-b", "0"]);
    assert!(!out.status.success());
    assert!(stdout(&out).contains("Invalid backend_count :: 0"));

    let out = run(&["-t", "-100"]);
    assert!(!out.status.success());
    assert!(stdout(&out).contains("Invalid transaction_count :: -100"));
}

#[test]
fn help_prints_usage_to_stderr_and_fails() {
    for flag in ["--help", "-h"] {
        let out = run(&[flag]);
        assert!(!out.status.success());
        assert!(out.stdout.is_empty());

        let banner = stderr(&out);
        assert!(banner.contains("Command line options"));
        assert!(banner.contains("--scale-factor"));
        assert!(banner.contains("--update_ratio"));
    }
}

#[test]
fn unknown_option_prints_usage_to_stderr_and_fails() {
    let out = run(&["--no-such-flag"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(stderr(&out).contains("Command line options"));
}
