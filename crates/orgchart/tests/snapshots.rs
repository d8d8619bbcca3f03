//! Snapshot tests for text rendering output
//!
//! These tests compare rendered output against golden files in tests/fixtures/.
//! To update fixtures after changing a renderer, run the tests with UPDATE_FIXTURES=1

use orgchart::{render_with_config, OutputFormat, RenderConfig, VisioStyle};
use std::fs;
use std::path::Path;

/// Staff list with comments, blank lines, noise and uneven indentation
const STAFF: &str = r#"# Acme staff list
Ada Lovelace
    Grace Hopper
        Linus Torvalds
        Ken Thompson
    Margaret "Maggie" Hamilton

    Barbara Liskov
Updated 2024-03-01
        Dennis Ritchie
"#;

/// Compare rendered output to a fixture file
fn assert_fixture(name: &str, format: OutputFormat, config: &RenderConfig) {
    let output = render_with_config(STAFF, format, config).expect("render should succeed");
    let fixture_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{}.txt", name));

    if std::env::var("UPDATE_FIXTURES").is_ok() {
        fs::write(&fixture_path, &output).expect("failed to write fixture");
        println!("Updated fixture: {}", fixture_path.display());
        return;
    }

    let expected = fs::read_to_string(&fixture_path).unwrap_or_else(|_| {
        panic!(
            "Fixture not found: {}\nRun with UPDATE_FIXTURES=1 to create it.\n\nActual output:\n{}",
            fixture_path.display(),
            output
        )
    });

    if output != expected {
        panic!(
            "Snapshot mismatch for '{}'!\n\n=== Expected ===\n{}\n=== Actual ===\n{}\n=== Diff ===\nRun with UPDATE_FIXTURES=1 to update.",
            name, expected, output
        );
    }
}

#[test]
fn test_staff_tree() {
    assert_fixture("staff_tree", OutputFormat::Tree, &RenderConfig::default());
}

#[test]
fn test_staff_visio() {
    assert_fixture("staff_visio", OutputFormat::Visio, &RenderConfig::default());
}

#[test]
fn test_staff_visio_delimited() {
    assert_fixture(
        "staff_visio_delimited",
        OutputFormat::Visio,
        &RenderConfig::new().with_visio_style(VisioStyle::Delimited),
    );
}

#[test]
fn test_staff_mermaid() {
    assert_fixture("staff_mermaid", OutputFormat::Mermaid, &RenderConfig::default());
}

#[test]
fn test_staff_mermaid_fenced() {
    assert_fixture(
        "staff_mermaid_fenced",
        OutputFormat::Mermaid,
        &RenderConfig::new().with_mermaid_fence(true),
    );
}
