#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests use unwrap for brevity")]

use std::path::Path;

use pretty_assertions::assert_eq;
use tinct_core::Category;

use super::*;

#[test]
fn registers_every_builtin() {
    let registry = builtin_registry().unwrap();
    assert_eq!(
        registry.languages(),
        vec!["c", "dart", "kotlin", "plain", "python", "yaml"]
    );
    assert_eq!(registry.aliases_of("plain"), vec!["none", "text"]);
    assert_eq!(registry.aliases_of("kotlin"), vec!["kt", "kts"]);
    assert_eq!(registry.aliases_of("c"), vec!["cpp", "go", "java", "javascript", "js", "swift"]);
}

#[test]
fn aliases_resolve_case_insensitively() {
    let registry = builtin_registry().unwrap();
    assert_eq!(registry.grammar_for("PY").name(), "python");
    assert_eq!(registry.grammar_for("JavaScript").name(), "c");
    assert_eq!(registry.grammar_for("yml").name(), "yaml");
    assert_eq!(registry.grammar_for("brainfuck").name(), "plain");
}

#[test]
fn plain_grammar_leaves_everything_plain() {
    let registry = builtin_registry().unwrap();
    let out = registry.classify("text", "class // \"x\" 42");
    assert_eq!(out.len(), 4);
    assert!(out.iter().all(|t| t.category == Category::Plain));
}

#[test]
fn extensions() {
    assert_eq!(language_for_path(Path::new("src/Main.java")), Some("java"));
    assert_eq!(language_for_path(Path::new("a/b.PY")), Some("python"));
    assert_eq!(language_for_path(Path::new("ci.yml")), Some("yaml"));
    assert_eq!(language_for_path(Path::new("Makefile")), None);
    // Lifetimes (`'a`) read as open character literals, so Rust has no grammar.
    assert_eq!(language_for_path(Path::new("src/main.rs")), None);
    assert_eq!(language_for_path(Path::new("notes.weird")), None);
}

#[test]
fn every_extension_names_a_registered_language() {
    let registry = builtin_registry().unwrap();
    for &(ext, id) in EXTENSIONS {
        assert!(registry.contains(id), "{ext} maps to unknown language {id}");
    }
}
