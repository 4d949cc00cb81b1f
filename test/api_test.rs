use std::fs;
use std::path::Path;

use symcompare::run::{run, CompareArgs, OutputFormat};

fn write_inputs(dir: &Path, cli: &str, expected: &str, full: Option<&str>) {
    fs::write(dir.join("cli_labels_raw.txt"), cli).unwrap();
    fs::write(dir.join("expected_labels.txt"), expected).unwrap();
    if let Some(full) = full {
        fs::write(dir.join("cli_output_all.txt"), full).unwrap();
    }
}

fn args_for(dir: &Path) -> CompareArgs {
    CompareArgs {
        dir: Some(dir.to_path_buf()),
        ..Default::default()
    }
}

const CLI: &str = "\
Symbol table contains 4 entries:
1 a b c d e f g foo
x 0000000000401000 0 FUNC GLOBAL DEFAULT 1 .text main
x 0000000000404010 8 OBJECT GLOBAL DEFAULT 3 .data counter
";

const EXPECTED: &str = "\
007 foo
401000 main

00 bar
404010 counter
";

#[test]
fn test_text_report_with_start_found_in_full_output() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_inputs(
        tmp.path(),
        CLI,
        EXPECTED,
        Some("0000000000401000 LOCAL _start\n  0000000000401000 GLOBAL _start\n"),
    );

    let mut out = Vec::new();
    let outcome = run(&args_for(tmp.path()), &mut out).expect("run failed");
    let text = String::from_utf8(out).unwrap();

    let expected_text = "\
Comparison Results:
==================

MISMATCH: foo
  Expected: 007
  CLI:      A

Missing in CLI output:
  00 bar

Note: _start symbol missing from CLI output
Found in full output: 0000000000401000 GLOBAL _start

Summary:
Expected symbols: 4
Found in CLI: 3
";
    assert_eq!(text, expected_text);
    assert!(outcome.has_differences());
    assert!(!outcome.reserved.present);
}

#[test]
fn test_start_present_skips_full_output() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let cli = "x 0000000000401000 0 FUNC GLOBAL DEFAULT 1 .text _start\n";
    // no full output file at all: it must not be opened
    write_inputs(tmp.path(), cli, "401000 _start\n", None);

    let mut out = Vec::new();
    let outcome = run(&args_for(tmp.path()), &mut out).expect("run failed");
    let text = String::from_utf8(out).unwrap();

    assert_eq!(
        text,
        "Comparison Results:\n==================\n\n\nSummary:\nExpected symbols: 1\nFound in CLI: 1\n"
    );
    assert!(!outcome.has_differences());
}

#[test]
fn test_missing_full_output_fails_after_partial_report() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_inputs(tmp.path(), CLI, EXPECTED, None);

    let mut out = Vec::new();
    let err = run(&args_for(tmp.path()), &mut out).unwrap_err();
    assert!(format!("{:#}", err).contains("cli_output_all.txt"));

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("MISMATCH: foo"));
    assert!(text.ends_with("Note: _start symbol missing from CLI output\n"));
}

#[test]
fn test_missing_cli_labels_is_an_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    fs::write(tmp.path().join("expected_labels.txt"), EXPECTED).unwrap();

    let mut out = Vec::new();
    let err = run(&args_for(tmp.path()), &mut out).unwrap_err();
    assert!(format!("{:#}", err).contains("cli_labels_raw.txt"));
    assert!(out.is_empty());
}

#[test]
fn test_custom_reserved_symbol_and_json() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_inputs(
        tmp.path(),
        CLI,
        EXPECTED,
        Some("1 GLOBAL reset_handler\n2 GLOBAL reset_handler_alias\n"),
    );
    let args = CompareArgs {
        reserved: "reset_handler".to_string(),
        format: OutputFormat::Json,
        ..args_for(tmp.path())
    };

    let mut out = Vec::new();
    run(&args, &mut out).expect("run failed");
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(v["mismatches"][0]["name"], "foo");
    assert_eq!(v["mismatches"][0]["cli"], "A");
    assert_eq!(v["missing"], serde_json::json!(["00 bar"]));
    assert_eq!(v["reserved"]["present"], false);
    assert_eq!(
        v["reserved"]["full_output_matches"],
        serde_json::json!(["1 GLOBAL reset_handler", "2 GLOBAL reset_handler_alias"])
    );
    assert_eq!(v["summary"]["expected_symbols"], 4);
    assert_eq!(v["summary"]["found_in_cli"], 3);
}
