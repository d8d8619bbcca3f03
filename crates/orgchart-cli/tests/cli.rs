//! End-to-end tests running the built `orgchart` binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

const STAFF: &str = "Ada\n\tGrace\n\tKen\n\t\tLinus\n";

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_orgchart"))
        .args(args)
        .current_dir(dir)
        .env("ORGCHART_LOG_LEVEL", "off")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run orgchart binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_help_exits_zero() {
    let dir = tempdir().unwrap();
    let output = run(dir.path(), &["-h"]);
    assert!(output.status.success());
    let help = stdout(&output);
    assert!(help.contains("Usage"));
    assert!(help.contains("--format"));
}

#[test]
fn test_tree_format() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("staff.txt"), STAFF).unwrap();

    let output = run(dir.path(), &["staff.txt", "-f", "tree"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Ada\n\tGrace\n\tKen\n\t\tLinus\n");
}

#[test]
fn test_default_filename_is_org_txt() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("org.txt"), "CEO\n  CTO\n").unwrap();

    let output = run(dir.path(), &["-f", "visio"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "CTO reports to CEO\n");
}

#[test]
fn test_visio_delimited_style() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("staff.txt"), STAFF).unwrap();

    let output = run(dir.path(), &["staff.txt", "-f", "visio", "--visio-style", "delimited"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Name\tReports_To\nAda\t\nGrace\tAda\nKen\tAda\nLinus\tKen\n"
    );
}

#[test]
fn test_mermaid_format() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("staff.txt"), STAFF).unwrap();

    let output = run(dir.path(), &["staff.txt", "-f", "mermaid"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("flowchart TD\n"));
    assert_eq!(text.matches("-->").count(), 3);
}

#[test]
fn test_svg_goes_to_default_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("staff.txt"), STAFF).unwrap();

    let output = run(dir.path(), &["staff.txt", "-f", "svg"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());

    let svg = fs::read_to_string(dir.path().join("org_chart.svg")).unwrap();
    assert!(svg.contains("<svg "));
    assert!(svg.contains(">Linus</tspan>"));
}

#[test]
fn test_svg_to_stdout() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("staff.txt"), STAFF).unwrap();

    let output = run(dir.path(), &["staff.txt", "-f", "svg", "-o", "-"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("<?xml"));
    assert!(!dir.path().join("org_chart.svg").exists());
}

#[test]
fn test_all_formats_without_flag() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("staff.txt"), STAFF).unwrap();

    let output = run(dir.path(), &["staff.txt"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.starts_with("Ada\n\tGrace\n"));
    assert!(text.contains("Grace reports to Ada\nKen reports to Ada\nLinus reports to Ken\n"));
    assert!(text.contains("flowchart TD\n"));
    assert!(!text.contains("<svg"));

    let titles = stderr(&output);
    assert!(titles.contains("=== Organization Chart ==="));
    assert!(titles.contains("=== Mermaid Flowchart ==="));
    assert!(dir.path().join("org_chart.svg").exists());
}

#[test]
fn test_failed_svg_write_leaves_stdout_empty() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("staff.txt"), STAFF).unwrap();

    let output = run(dir.path(), &["staff.txt", "-o", "no/such/dir/chart.svg"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Failed to write output file 'no/such/dir/chart.svg'"));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let output = run(dir.path(), &["nobody.txt", "-f", "tree"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let message = stderr(&output);
    assert!(message.starts_with("Error: file not found: nobody.txt"));
    assert_eq!(message.trim_end().lines().count(), 1);
}

#[test]
fn test_unknown_format() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("staff.txt"), STAFF).unwrap();

    let output = run(dir.path(), &["staff.txt", "-f", "png"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("unknown output format 'png'"));
}

#[test]
fn test_malformed_outline() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("staff.txt"), "\n   Ada\n     Grace\n").unwrap();

    let output = run(dir.path(), &["staff.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("malformed hierarchy at line 2"));
    assert!(!dir.path().join("org_chart.svg").exists());
}

#[test]
fn test_missing_graphviz_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("staff.txt"), STAFF).unwrap();

    let output = run(
        dir.path(),
        &[
            "staff.txt",
            "-f",
            "svg",
            "--engine",
            "graphviz",
            "--dot",
            "orgchart-test-no-such-dot-binary",
        ],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("not found"));
    assert!(!dir.path().join("org_chart.svg").exists());
}

#[test]
fn test_comment_only_input_prints_nothing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("staff.txt"), "# vacancies only\n\n").unwrap();

    let output = run(dir.path(), &["staff.txt", "-f", "tree"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}
