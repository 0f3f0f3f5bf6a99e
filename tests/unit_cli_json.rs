#![allow(missing_docs)]

use std::process::{Command, Output};

use serde_json::json;
use valtree_testkit::{fixture_path, stdout_json};

#[test]
fn convert_single_value_prints_tree() {
	let json = stdout_json(&run(&["convert", &fixture_arg("shapes.json"), "--value", "point"]));
	assert_eq!(json, json!({ "x": "0x3", "y": "-0x1" }));
}

#[test]
fn convert_all_values_keys_trees_by_name_in_order() {
	let json = stdout_json(&run(&["convert", &fixture_arg("shapes.json"), "--compact"]));

	let object = json.as_object().expect("top-level object");
	assert_eq!(object.keys().map(String::as_str).collect::<Vec<_>>(), ["point", "shape", "complex", "polygon"]);
	assert_eq!(json["shape"]["center::struct"], json!({ "x": "0xa", "y": "0x14" }));
	assert_eq!(json["polygon"]["points::array"][1], json!({ "x": "0x3", "y": "0x4" }));
}

#[test]
fn convert_output_preserves_field_order() {
	let output = run(&["convert", &fixture_arg("shapes.json"), "--value", "shape", "--compact"]);
	let json = stdout_json(&output);

	let keys: Vec<_> = json.as_object().expect("object").keys().cloned().collect();
	assert_eq!(keys, ["id", "color", "::unnamed_field_2::union", "center::struct", "data::union"]);
	assert!(String::from_utf8_lossy(&output.stdout).starts_with(r#"{"id":"0x1","color":"GREEN","#));
}

#[test]
fn compressed_snapshot_converts_like_plain() {
	let plain = stdout_json(&run(&["convert", &fixture_arg("shapes.json")]));
	let packed = stdout_json(&run(&["convert", &fixture_arg("shapes.json.zst")]));
	assert_eq!(plain, packed);
}

#[test]
fn unknown_value_fails_with_error_message() {
	let output = run(&["convert", &fixture_arg("shapes.json"), "--value", "missing"]);
	assert!(!output.status.success(), "command should fail");
	assert!(String::from_utf8_lossy(&output.stderr).contains("error: unknown value: missing"));
}

#[test]
fn types_lists_resolved_fields() {
	let output = run(&["types", &fixture_arg("shapes.json.zst"), "--type", "Point"]);
	assert!(output.status.success(), "command should succeed");

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("compression: zstd"));
	assert!(stdout.contains("kind: struct"));
	assert!(stdout.contains("field_count: 2"));
	assert!(stdout.contains("  int x"));
}

#[test]
fn types_reports_inline_members() {
	let output = run(&["types", &fixture_arg("shapes.json"), "--type", "struct Shape"]);
	assert!(output.status.success(), "command should succeed");

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("  <inline union> <anonymous>"));
	assert!(stdout.contains("  <inline struct> center"));
	assert!(stdout.contains("  union Data data"));
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_valtree")).args(args).output().expect("command executes")
}

fn fixture_arg(name: &str) -> String {
	fixture_path(name).display().to_string()
}
