//! CLI integration tests for all subcommands.
//!
//! Uses `assert_cmd` to spawn the `projector-decode` binary and verify
//! exit codes, stdout content, and stderr content.
//!
//! All tests set `current_dir` to the workspace root so that relative
//! paths to the batch fixtures resolve correctly.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FRAME: &str = "crates/cli/tests/fixtures/editor_frame.json";
const BAD_FIELD: &str = "crates/cli/tests/fixtures/bad_field.json";

/// Locate the workspace root by walking up from CARGO_MANIFEST_DIR.
fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // crates/cli -> workspace root is two levels up
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .to_path_buf()
}

/// Helper: create a Command for the `projector-decode` binary, rooted at workspace.
fn projector() -> Command {
    let mut cmd = cargo_bin_cmd!("projector-decode");
    cmd.current_dir(workspace_root());
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("run projector-decode");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    projector()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Inspect Projector remote-UI event batches",
        ));
}

#[test]
fn version_exits_0() {
    projector()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("projector-decode"));
}

#[test]
fn missing_subcommand_exits_nonzero() {
    projector().assert().failure();
}

// ──────────────────────────────────────────────
// 2. Decode subcommand
// ──────────────────────────────────────────────

#[test]
fn decode_text_lists_events_in_order() {
    projector()
        .args(["decode", FRAME])
        .assert()
        .success()
        .stdout(predicate::str::contains("0: WindowSetChanged (1 windows)"))
        .stdout(predicate::str::contains("1: ImageDataReply"))
        .stdout(predicate::str::contains("3: DrawCommands (6 draw events)"))
        .stdout(predicate::str::contains("4: PingReply"));
}

#[test]
fn decode_verbose_prints_debug_form() {
    projector()
        .args(["-v", "decode", FRAME])
        .assert()
        .success()
        .stdout(predicate::str::contains("PingReply(PingReply {"));
}

#[test]
fn verbose_logs_input_to_stderr() {
    projector()
        .args(["-v", "check", FRAME])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("read batch"))
        .stderr(predicate::str::contains("editor_frame.json"));
}

#[test]
fn decode_json_is_array_of_events() {
    let value = stdout_json(projector().args(["--output", "json", "decode", FRAME]));
    let events = value.as_array().expect("array");
    assert_eq!(events.len(), 5);
    assert_eq!(
        events[4]["PingReply"]["client_time_stamp"],
        serde_json::json!(1500)
    );
}

#[test]
fn decode_reads_stdin() {
    projector()
        .args(["decode", "-"])
        .write_stdin(r#"[["c", {"a": "copied"}]]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("0: Clipboard (6 chars)"));
}

#[test]
fn decode_bad_field_exits_1_with_path() {
    projector()
        .args(["decode", BAD_FIELD])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "field '$[1].b[0].d': expected int, found string",
        ));
}

#[test]
fn decode_syntax_error_exits_1() {
    projector()
        .args(["decode", "-"])
        .write_stdin("[[\"c\", {\"a\": ")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("syntax error"));
}

#[test]
fn decode_nonexistent_file_exits_1() {
    projector()
        .args(["decode", "nonexistent_batch.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error reading"));
}

#[test]
fn decode_error_json_output() {
    let output = projector()
        .args(["--output", "json", "decode", BAD_FIELD])
        .output()
        .expect("run projector-decode");
    assert_eq!(output.status.code(), Some(1));
    let err: serde_json::Value =
        serde_json::from_slice(&output.stderr).expect("stderr is JSON");
    let msg = err["error"].as_str().expect("error message");
    assert!(msg.contains("expected int, found string"), "got: {}", msg);
}

// ──────────────────────────────────────────────
// 3. Check subcommand
// ──────────────────────────────────────────────

#[test]
fn check_valid_batch_reports_count() {
    projector()
        .args(["check", FRAME])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 5 events"));
}

#[test]
fn check_quiet_prints_nothing() {
    projector()
        .args(["--quiet", "check", FRAME])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn check_quiet_failure_is_silent_but_exits_1() {
    projector()
        .args(["--quiet", "check", BAD_FIELD])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::is_empty());
}

#[test]
fn check_json_output() {
    let value = stdout_json(projector().args(["--output", "json", "check", FRAME]));
    assert_eq!(value["status"], "ok");
    assert_eq!(value["events"], 5);
}

#[test]
fn check_unknown_tag_exits_1() {
    projector()
        .args(["check", "-"])
        .write_stdin(r#"[["z", {}]]"#)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unsupported Event tag 'z' at '$[0]'"));
}

// ──────────────────────────────────────────────
// 4. Stats subcommand
// ──────────────────────────────────────────────

#[test]
fn stats_text_counts_kinds() {
    projector()
        .args(["stats", FRAME])
        .assert()
        .success()
        .stdout(predicate::str::contains("events: 5"))
        .stdout(predicate::str::contains("  ImageDataReply 2"))
        .stdout(predicate::str::contains("draw commands: 6"))
        .stdout(predicate::str::contains("  DrawString 2"));
}

#[test]
fn stats_json_counts_kinds() {
    let value = stdout_json(projector().args(["--output", "json", "stats", FRAME]));
    assert_eq!(value["total_events"], 5);
    assert_eq!(value["total_draw_commands"], 6);
    assert_eq!(value["events"]["ImageDataReply"], 2);
    assert_eq!(value["draw_commands"]["SetPaint"], 1);
    assert_eq!(value["draw_commands"]["DrawLine"], 1);
}

// ──────────────────────────────────────────────
// 5. Extract-images subcommand
// ──────────────────────────────────────────────

#[test]
fn extract_images_writes_png_payloads() {
    let dir = TempDir::new().expect("tempdir");
    let out = dir.path().join("images");
    projector()
        .args(["extract-images", FRAME, "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote 1 images"));

    let png = fs::read(out.join("buffered-11-3.png")).expect("png written");
    assert_eq!(png, [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    assert!(!out.join("volatile-42.png").exists());
}

#[test]
fn extract_images_json_lists_written_files() {
    let dir = TempDir::new().expect("tempdir");
    let value = stdout_json(
        projector()
            .args(["--output", "json", "extract-images", FRAME, "--out"])
            .arg(dir.path()),
    );
    let written = value["written"].as_array().expect("written list");
    assert_eq!(written.len(), 1);
    assert!(written[0]
        .as_str()
        .expect("path string")
        .ends_with("buffered-11-3.png"));
}

#[test]
fn extract_images_invalid_base64_exits_1() {
    let dir = TempDir::new().expect("tempdir");
    projector()
        .args(["extract-images", "-", "--out"])
        .arg(dir.path())
        .write_stdin(r#"[["a", {"a": ["b", {"a": 7}], "b": ["a", {"a": "not base64!"}]}]]"#)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("image volatile-7: invalid base64 payload"));
}

#[test]
fn extract_images_sanitizes_and_keeps_duplicates() {
    let dir = TempDir::new().expect("tempdir");
    projector()
        .args(["extract-images", "-", "--out"])
        .arg(dir.path())
        .write_stdin(
            r#"[
                ["a", {"a": ["c", {"a": "a/b"}], "b": ["a", {"a": "iVBORw0KGgo="}]}],
                ["a", {"a": ["c", {"a": "a/b"}], "b": ["a", {"a": "iVBORw0KGgo="}]}]
            ]"#,
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote 2 images"));

    assert!(dir.path().join("unknown-a_b.png").is_file());
    assert!(dir.path().join("unknown-a_b-2.png").is_file());
    assert!(!dir.path().join("unknown-a").exists());
}
