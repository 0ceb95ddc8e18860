//! Dart grammar.

use tinct_core::balance::QuoteSyntax;
use tinct_core::rules::{
    BlockCommentRule, DelimitedStringRule, LineCommentRule, NumberRule, PrefixRule,
    QuotedStringRule, WordSetRule,
};
use tinct_core::{Category, DelimiterPolicy, Grammar, GrammarError};

const MULTILINE_MARKERS: &[&str] = &["'''", "\"\"\""];
const LINE_COMMENT: &[&str] = &["//"];

pub const KEYWORDS: &[&str] = &[
    "abstract", "as", "assert", "async", "await", "break", "case", "catch", "class", "const",
    "continue", "default", "deferred", "do", "dynamic", "else", "enum", "export", "extends",
    "extension", "external", "factory", "false", "final", "finally", "for", "Function", "get",
    "hide", "if", "implements", "import", "in", "interface", "is", "library", "mixin", "new",
    "null", "on", "operator", "part", "rethrow", "return", "set", "show", "static", "super",
    "switch", "sync", "this", "throw", "true", "try", "typedef", "var", "void", "while", "with",
    "yield",
];

pub const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "++", "--", "=", "+=", "-=", "*=", "/=", "%=", "==", "!=", ">",
    "<", ">=", "<=", "&&", "||", "!", ".", "..", "...", "?", "?.", "??", "??=", ">>>", ">>",
    "<<", "&", "|", "^", "~", ">>=", "<<=", "&=", "|=", "^=", "~/", "~/=", "=>",
];

fn quotes() -> QuoteSyntax {
    QuoteSyntax::new(&['\'', '"'], '\\').skipping(MULTILINE_MARKERS)
}

pub fn grammar() -> Result<Grammar, GrammarError> {
    Grammar::builder("dart")
        .delimiters(DelimiterPolicy::whitespace())
        .try_rule(BlockCommentRule::new("/*", "*/").map(|r| r.in_code(LINE_COMMENT, quotes())))
        .try_rule(LineCommentRule::new(LINE_COMMENT).map(|r| r.outside_strings(quotes())))
        .try_rule(DelimitedStringRule::new(MULTILINE_MARKERS))
        .try_rule(PrefixRule::new(
            "raw-string",
            Category::String,
            &["r'", "r\""],
        ))
        .try_rule(QuotedStringRule::new(&['\'', '"'], '\\').map(|r| r.skipping(MULTILINE_MARKERS)))
        .rule(NumberRule::new())
        .try_rule(WordSetRule::keywords(KEYWORDS))
        .try_rule(WordSetRule::operators(OPERATORS))
        .build()
}
