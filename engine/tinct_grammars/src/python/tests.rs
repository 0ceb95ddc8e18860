#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;
use crate::test_support::{categories_of, texts_in};

#[test]
fn keywords_are_exact() {
    let grammar = grammar().unwrap();
    assert_eq!(
        categories_of(&grammar, "class Foo:\nclassroom = 1"),
        vec![
            ("class", Category::Keyword),
            ("Foo:", Category::Plain),
            ("classroom", Category::Plain),
            ("=", Category::Operator),
            ("1", Category::Number),
        ]
    );
}

#[test]
fn line_comment() {
    let grammar = grammar().unwrap();
    let out = categories_of(&grammar, "x = 1 # note here\ny");
    assert_eq!(texts_in(&out, Category::Comment), vec!["#", "note", "here"]);
    assert_eq!(out.last(), Some(&("y", Category::Plain)));
}

#[test]
fn apostrophe_in_comment_does_not_open_a_string() {
    let grammar = grammar().unwrap();
    let out = categories_of(&grammar, "# don't\nx = 'a'");
    assert_eq!(texts_in(&out, Category::Comment), vec!["#", "don't"]);
    assert_eq!(texts_in(&out, Category::String), vec!["'a'"]);
    assert_eq!(out[2], ("x", Category::Plain));
}

#[test]
fn hash_inside_string_is_not_a_comment() {
    let grammar = grammar().unwrap();
    let out = categories_of(&grammar, "x = \"a # b\" + y");
    assert!(texts_in(&out, Category::Comment).is_empty());
    assert_eq!(texts_in(&out, Category::String), vec!["\"a", "#", "b\""]);
    assert_eq!(out[5], ("+", Category::Operator));
}

#[test]
fn docstring_spans_lines() {
    let grammar = grammar().unwrap();
    let source = "def f():\n    \"\"\"Doc\n    more # not a comment\n    \"\"\"\n    return 1";
    let out = categories_of(&grammar, source);
    assert_eq!(
        texts_in(&out, Category::String),
        vec!["\"\"\"Doc", "more", "#", "not", "a", "comment", "\"\"\""]
    );
    assert_eq!(texts_in(&out, Category::Comment), Vec::<&str>::new());
    assert_eq!(out[out.len() - 2], ("return", Category::Keyword));
    assert_eq!(out[out.len() - 1], ("1", Category::Number));
}

#[test]
fn one_line_docstring_closes_itself() {
    let grammar = grammar().unwrap();
    let out = categories_of(&grammar, "'''a''' x\ny");
    assert_eq!(texts_in(&out, Category::String), vec!["'''a'''"]);
}

#[test]
fn quoted_and_prefixed_strings() {
    let grammar = grammar().unwrap();
    let out = categories_of(&grammar, "s = \"hello big world\" + t\nname = f\"hi {x}\"");
    assert_eq!(
        texts_in(&out, Category::String),
        vec!["\"hello", "big", "world\"", "f\"hi", "{x}\""]
    );
    assert_eq!(out[5], ("+", Category::Operator));
    assert_eq!(out[6], ("t", Category::Plain));
}
