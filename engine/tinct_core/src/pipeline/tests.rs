#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;
use crate::rules::{NumberRule, WordSetRule};
use crate::{tokenize, DelimiterPolicy, FnRule};

fn categories(tokens: &[ClassifiedToken<'_>]) -> Vec<Category> {
    tokens.iter().map(|t| t.category).collect()
}

#[test]
fn no_rules_means_plain() {
    let stream = tokenize("a b c", &DelimiterPolicy::whitespace());
    let out = classify(&stream, &[]);
    assert_eq!(categories(&out), vec![Category::Plain; 3]);
}

#[test]
fn first_matching_rule_wins() {
    let rules: Vec<BoxedRule> = vec![
        Box::new(FnRule::new("always-keyword", Category::Keyword, |_| true)),
        Box::new(FnRule::new("always-string", Category::String, |_| true)),
    ];
    let stream = tokenize("x 1 \"s\"", &DelimiterPolicy::whitespace());
    assert_eq!(categories(&classify(&stream, &rules)), vec![Category::Keyword; 3]);
}

#[test]
fn later_rules_apply_when_earlier_ones_fail() {
    let rules: Vec<BoxedRule> = vec![
        Box::new(NumberRule::new()),
        Box::new(WordSetRule::keywords(&["if"]).expect("non-empty word set")),
    ];
    let stream = tokenize("if 42 x", &DelimiterPolicy::whitespace());
    assert_eq!(
        categories(&classify(&stream, &rules)),
        vec![Category::Keyword, Category::Number, Category::Plain]
    );
}

#[test]
fn output_keeps_text_lines_and_spans() {
    let stream = tokenize("a\n  b", &DelimiterPolicy::whitespace());
    let out = classify(&stream, &[]);
    assert_eq!(out[1].text, "b");
    assert_eq!(out[1].line, 1);
    assert_eq!(out[1].span, crate::Span::new(4, 5));
}

#[test]
fn out_of_bounds_position_is_plain() {
    let stream = tokenize("a", &DelimiterPolicy::whitespace());
    let rules: Vec<BoxedRule> = vec![Box::new(FnRule::new("any", Category::Keyword, |_| true))];
    assert_eq!(category_at(&stream, 5, &rules), Category::Plain);
}

#[test]
fn parallel_matches_sequential() {
    let source = "if 1 x /* y */ 2.5\n".repeat(2000);
    let stream = tokenize(&source, &DelimiterPolicy::non_alphanumeric());
    assert!(stream.len() > PARALLEL_THRESHOLD);
    let rules: Vec<BoxedRule> = vec![
        Box::new(crate::rules::BlockCommentRule::new("/*", "*/").expect("valid markers")),
        Box::new(NumberRule::with_decimal_split()),
        Box::new(WordSetRule::keywords(&["if"]).expect("non-empty word set")),
    ];
    assert_eq!(classify_parallel(&stream, &rules), classify(&stream, &rules));
}
