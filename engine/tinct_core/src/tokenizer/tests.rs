use pretty_assertions::assert_eq;

use super::*;
use crate::{CharClass, MergePolicy};

/// Helper: tokenize and return texts only.
fn texts<'a>(source: &'a str, policy: &DelimiterPolicy) -> Vec<&'a str> {
    tokenize(source, policy).iter().map(|t| t.text).collect()
}

/// Helper: tokenize and return `(text, line)` pairs.
fn with_lines<'a>(source: &'a str, policy: &DelimiterPolicy) -> Vec<(&'a str, u32)> {
    tokenize(source, policy)
        .iter()
        .map(|t| (t.text, t.line))
        .collect()
}

#[test]
fn empty_input_yields_empty_stream() {
    assert!(tokenize("", &DelimiterPolicy::whitespace()).is_empty());
    assert!(tokenize("   \n\t\n", &DelimiterPolicy::non_alphanumeric()).is_empty());
}

#[test]
fn whitespace_policy_splits_on_whitespace_only() {
    assert_eq!(
        texts("x=1+2  foo(bar)\tbaz", &DelimiterPolicy::whitespace()),
        vec!["x=1+2", "foo(bar)", "baz"]
    );
}

#[test]
fn trailing_token_is_emitted() {
    assert_eq!(
        texts("alpha beta", &DelimiterPolicy::whitespace()),
        vec!["alpha", "beta"]
    );
}

#[test]
fn delimiter_runs_merge_by_default() {
    assert_eq!(
        texts("a+=b // c", &DelimiterPolicy::non_alphanumeric()),
        vec!["a", "+=", "b", "//", "c"]
    );
}

#[test]
fn never_merge_splits_every_delimiter() {
    let policy = DelimiterPolicy::non_alphanumeric().merging(MergePolicy::Never);
    assert_eq!(texts("a+=b", &policy), vec!["a", "+", "=", "b"]);
}

#[test]
fn pair_table_inserts_boundaries() {
    let policy =
        DelimiterPolicy::non_alphanumeric().merging(MergePolicy::Pairs(&[('/', '/'), ('=', '=')]));
    assert_eq!(texts("(//==)", &policy), vec!["(", "//", "==", ")"]);
}

#[test]
fn excluded_characters_stay_in_words() {
    let policy = DelimiterPolicy::non_alphanumeric().excluding(&['_', '"', '#']);
    assert_eq!(
        texts("snake_case \"quoted\" #tag", &policy),
        vec!["snake_case", "\"quoted\"", "#tag"]
    );
}

#[test]
fn explicit_class_splits_only_on_listed_characters() {
    let policy = DelimiterPolicy::new(CharClass::Chars(&[',']));
    assert_eq!(texts("a.b,c-d", &policy), vec!["a.b", ",", "c-d"]);
}

#[test]
fn newlines_terminate_tokens_and_advance_lines() {
    assert_eq!(
        with_lines("one two\nthree\n\nfour", &DelimiterPolicy::whitespace()),
        vec![("one", 0), ("two", 0), ("three", 1), ("four", 3)]
    );
}

#[test]
fn delimiter_run_does_not_cross_newline() {
    assert_eq!(
        with_lines("a:\n:b", &DelimiterPolicy::non_alphanumeric()),
        vec![("a", 0), (":", 0), (":", 1), ("b", 1)]
    );
}

#[test]
fn crlf_counts_as_one_line_break() {
    assert_eq!(
        with_lines("a\r\nb\r\n", &DelimiterPolicy::whitespace()),
        vec![("a", 0), ("b", 1)]
    );
}

#[test]
fn spans_point_back_into_source() {
    let source = "let µ = 42;";
    let stream = tokenize(source, &DelimiterPolicy::non_alphanumeric());
    for token in &stream {
        assert_eq!(&source[token.span.to_range()], token.text);
    }
    assert_eq!(stream.get(1).map(|t| t.text), Some("µ"));
}

#[test]
fn word_after_delimiter_starts_new_token() {
    assert_eq!(
        texts("x.y", &DelimiterPolicy::non_alphanumeric()),
        vec!["x", ".", "y"]
    );
}
