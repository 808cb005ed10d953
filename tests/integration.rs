use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_compdoc")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn stdout_json(assert: &assert_cmd::assert::Assert) -> serde_json::Value {
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    serde_json::from_str(&output).unwrap()
}

// -- stdin mode --

#[test]
fn stdin_markdown_matches_expected() {
    let input = std::fs::read_to_string(fixture_path("button.md")).unwrap();
    let expected = std::fs::read_to_string(fixture_path("button.expected.json")).unwrap();

    let assert = cmd().args(["-e", "md"]).write_stdin(input).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn stdin_defaults_to_source_mode() {
    // Without an extension the markdown has no comments, so nothing is found
    let input = std::fs::read_to_string(fixture_path("button.md")).unwrap();
    cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn stdin_source_comments() {
    let input = std::fs::read_to_string(fixture_path("modal.css")).unwrap();
    let assert = cmd().args(["-e", "css"]).write_stdin(input).assert().success();
    let value = stdout_json(&assert);

    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["name"], "Modal");
    assert_eq!(entries[1]["name"], "Tooltip");
    assert_eq!(entries[1]["description"], "Small hint text.");
}

// -- example handling --

#[test]
fn modal_examples_and_description() {
    let assert = cmd().arg(fixture_path("modal.css")).assert().success();
    let value = stdout_json(&assert);
    let modal = &value[0];

    let meta: Vec<(String, String)> = modal["meta"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| {
            (
                m["key"].as_str().unwrap().to_string(),
                m["value"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        meta,
        vec![
            ("status".to_string(), "beta".to_string()),
            ("states".to_string(), "open".to_string()),
            ("states".to_string(), "closed".to_string()),
        ]
    );

    let demo = &modal["examples"][0];
    assert_eq!(demo["name"], "demo");
    assert_eq!(demo["options"]["height"], "400");
    let blocks = demo["blocks"].as_array().unwrap();
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0]["extension"], "html");
    assert_eq!(blocks[0]["height"], "400");
    assert_eq!(blocks[1]["extension"], "js");
    assert_eq!(blocks[1]["hidden"], true);
    assert_eq!(blocks[2]["extension"], "css");
    assert_eq!(blocks[2]["hidden"], false);

    let description = modal["description"].as_str().unwrap();
    assert_eq!(
        description,
        concat!(
            "Dialog shown above the page.\n\n",
            "<example name=\"demo\" height=\"400\"></example>\n",
            "```html height=400\n<div class=\"modal\">Content</div>\n```\n\n\n",
            "```css\n.modal { padding: 1rem; }\n```",
        )
    );
    assert!(!description.contains("showModal"));
}

// -- file mode --

#[test]
fn file_mode_merges_across_files() {
    let assert = cmd()
        .arg(fixture_path("button.md"))
        .arg(fixture_path("button.js"))
        .assert()
        .success();
    let value = stdout_json(&assert);

    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    let button = &entries[0];
    assert_eq!(button["category"], "Forms");
    // button.js sorts before button.md
    let description = button["description"].as_str().unwrap();
    assert!(description.starts_with("Keyboard handling."));
    assert!(description.contains("<example name=\"demo\"></example>"));
    let blocks = button["examples"][0]["blocks"].as_array().unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0]["extension"], "js");
    assert_eq!(blocks[1]["extension"], "html");
}

#[test]
fn file_mode_scans_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::copy(fixture_path("button.md"), dir.path().join("button.md")).unwrap();
    std::fs::write(dir.path().join("notes.txt"), "---\nname: Ignored\n---\n").unwrap();

    let assert = cmd()
        .arg(dir.path().to_str().unwrap())
        .assert()
        .success();
    let value = stdout_json(&assert);
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["name"], "Button");
}

#[test]
fn file_mode_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("nested").join("docs.json");

    cmd()
        .args(["-o", out.to_str().unwrap()])
        .arg(fixture_path("button.md"))
        .assert()
        .success()
        .stdout("");

    let output = std::fs::read_to_string(&out).unwrap();
    let expected = std::fs::read_to_string(fixture_path("button.expected.json")).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn unmatched_glob_warns() {
    let dir = TempDir::new().unwrap();
    let pattern = format!("{}/*.scss", dir.path().display());

    cmd()
        .arg(pattern)
        .assert()
        .success()
        .stdout("[]\n")
        .stderr(predicate::str::contains("no files matched"));
}

#[test]
fn category_filter() {
    let assert = cmd()
        .args(["-c", "Forms"])
        .arg(fixture_path("button.md"))
        .arg(fixture_path("modal.css"))
        .assert()
        .success();
    let value = stdout_json(&assert);
    let names: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Button"]);
}

// -- output formats --

#[test]
fn yaml_format() {
    let mut input = NamedTempFile::with_suffix(".md").unwrap();
    input
        .write_all(b"---\nname: Badge\ncategory: Status\n---\nSmall label.\n")
        .unwrap();

    cmd()
        .args(["-f", "yaml"])
        .arg(input.path().to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("name: Badge"))
        .stdout(predicate::str::contains("category: Status"));
}

#[test]
fn unknown_format_fails() {
    cmd()
        .args(["-f", "html"])
        .arg(fixture_path("button.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format: html"));
}

#[test]
fn verbose_logs_dropped_blocks() {
    cmd()
        .args(["-v", "-e", "css"])
        .write_stdin("/* just a comment */")
        .assert()
        .success()
        .stdout("[]\n")
        .stderr(predicate::str::contains("dropping block without a name"));
}
