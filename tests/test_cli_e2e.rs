//! End-to-end tests driving the compiled `pageweave` binary.

mod common;

use common::PageweaveCli;
use serde_json::Value;

/// `components list --format json` emits a parseable catalog.
#[test]
fn components_list_json() {
    let output = PageweaveCli::spawn_command(&["components", "list", "--format", "json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let entries: Vec<Value> = serde_json::from_str(&stdout).expect("valid JSON catalog");
    assert!(entries.len() >= 15, "expected full catalog, got {}", entries.len());

    let names: Vec<&str> = entries
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"AsciinemaCast"));
    assert!(names.contains(&"Graph"));
}

/// Kind filtering works end to end.
#[test]
fn components_list_kind_filter() {
    let output = PageweaveCli::spawn_command(&[
        "components", "list", "--kind", "wrapper", "--format", "json",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let entries: Vec<Value> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(entries.len(), 2);
    for entry in &entries {
        assert_eq!(entry["kind"], "wrapper");
    }
}

/// Unknown component names produce a suggestion and a usage exit code.
#[test]
fn components_show_unknown_suggests() {
    let output = PageweaveCli::spawn_command(&["components", "show", "AsciinmaCast"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(64), "expected usage exit code");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Did you mean 'AsciinemaCast'?"),
        "stderr: {stderr}"
    );
}

/// `layout show` reports the declared region ordering.
#[test]
fn layout_show_content_ordering() {
    let output =
        PageweaveCli::spawn_command(&["layout", "show", "content", "--format", "json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["archetype"], "content");

    let left: Vec<&str> = json["regions"]["left"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        left,
        [
            "PageTitle",
            "MobileOnly(Spacer)",
            "Search",
            "Darkmode",
            "DesktopOnly(Explorer)",
        ]
    );
}

/// Rendering from an options file uses the file's explicit id.
#[test]
fn render_cast_from_options_file() {
    let fixture = PageweaveCli::fixture_path("cast_options.yaml");
    let output = PageweaveCli::spawn_command(&[
        "render",
        "cast",
        "--options",
        fixture.to_str().unwrap(),
    ]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#"id="demo-cast""#), "stdout: {stdout}");
    assert!(
        stdout.contains("AsciinemaPlayer.create('/static/demo.cast'"),
        "stdout: {stdout}"
    );
}

/// A minimal options file falls back to the default element id.
#[test]
fn render_cast_minimal_options_defaults_id() {
    let fixture = PageweaveCli::fixture_path("cast_options_minimal.yaml");
    let output = PageweaveCli::spawn_command(&[
        "render",
        "cast",
        "--options",
        fixture.to_str().unwrap(),
        "--format",
        "json",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    let markup = json["markup"].as_str().unwrap();
    assert!(markup.contains(r#"id="asciicast-cast""#), "markup: {markup}");
    let script = json["script"].as_str().unwrap();
    assert!(script.contains("/static/session.cast"), "script: {script}");
}

/// Unknown fields in the options record are rejected with a config error.
#[test]
fn render_cast_unknown_field_rejected() {
    let fixture = PageweaveCli::fixture_path("cast_options_unknown_field.yaml");
    let output = PageweaveCli::spawn_command(&[
        "render",
        "cast",
        "--options",
        fixture.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2), "expected config exit code");
}

/// A missing options file maps to the I/O exit code.
#[test]
fn render_cast_missing_options_file() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let missing = dir.path().join("nope.yaml");
    let output = PageweaveCli::spawn_command(&[
        "render",
        "cast",
        "--options",
        missing.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(3), "expected I/O exit code");
}

/// Inline flags work without an options file.
#[test]
fn render_cast_inline_flags() {
    let output = PageweaveCli::spawn_command(&[
        "render",
        "cast",
        "--cast-path",
        "/inline.cast",
        "--display-class",
        "mobile-only",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(r#"class="mobile-only asciinema-cast""#),
        "stdout: {stdout}"
    );
    assert!(stdout.contains(r#"id="asciicast-cast""#), "stdout: {stdout}");
}

/// `render page --format json` emits every region plus an empty script list.
#[test]
fn render_page_json() {
    let output = PageweaveCli::spawn_command(&[
        "render",
        "page",
        "list",
        "--site-title",
        "Field Notes",
        "--format",
        "json",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert!(json["head"].as_str().unwrap().contains("Field Notes"));
    assert!(json["left"].as_str().unwrap().contains("page-title"));
    assert_eq!(json["scripts"], serde_json::json!([]));
}
