//! Command handlers driven the way the binary drives them.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::fs;

use pretty_assertions::assert_eq;
use tinct::commands::{list_languages, run_classify};
use tinct::config::parse_classify_args;
use tinct_grammars::builtin_registry;

#[test]
fn languages_lists_ids_with_aliases() {
    let registry = builtin_registry().unwrap();
    let out = list_languages(&registry);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "c          cpp, go, java, javascript, js, swift");
    assert_eq!(lines[1], "dart");
    assert_eq!(lines[4], "python     py");
}

#[test]
fn classify_yaml_as_json() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("ci.yml");
    fs::write(&path, "name: build # ci\n").unwrap();

    let args = vec![path.display().to_string(), "--format=json".to_string()];
    let (config, paths) = parse_classify_args(&args).unwrap();
    let out = run_classify(&paths, &config).unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let tokens = value[0]["tokens"].as_array().unwrap();
    let categories: Vec<&str> = tokens
        .iter()
        .map(|t| t["category"].as_str().unwrap())
        .collect();
    assert_eq!(value[0]["language"], "yaml");
    assert_eq!(categories, vec!["type", "plain", "string", "comment", "comment"]);
}

#[test]
fn classify_text_dump() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("main.c");
    fs::write(&path, "int main() {}\n// done").unwrap();

    let (config, paths) = parse_classify_args(&[path.display().to_string()]).unwrap();
    let out = run_classify(&paths, &config).unwrap();
    let mut lines = out.lines();
    assert!(lines.next().unwrap().ends_with("main.c (c, 8 tokens)"));
    assert!(lines.next().unwrap().contains("keyword"));
    assert!(lines.last().unwrap().trim_end().ends_with("comment        done"));
}
