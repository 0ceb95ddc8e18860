//! Python grammar.
//!
//! Whitespace-delimited, so a call like `print("a")` stays one token. Rules
//! work on token prefixes and on quote parity across the line.

use tinct_core::balance::QuoteSyntax;
use tinct_core::rules::{
    DelimitedStringRule, LineCommentRule, NumberRule, PrefixRule, QuotedStringRule, WordSetRule,
};
use tinct_core::{Category, DelimiterPolicy, Grammar, GrammarError};

const DOCSTRING_MARKERS: &[&str] = &["\"\"\"", "'''"];

/// String literal prefixes (`f"..."`, `rb'...'`).
const STRING_PREFIXES: &[&str] = &[
    "f\"", "f'", "r\"", "r'", "b\"", "b'", "u\"", "u'", "rb\"", "rb'", "br\"", "br'", "fr\"",
    "fr'", "rf\"", "rf'",
];

pub const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Symbolic operators. Word operators (`and`, `is`) are keywords.
pub const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "//", "%", "**", "@", "<<", ">>", "&", "|", "^", "~", "<", ">", "<=",
    ">=", "==", "!=", "=", "+=", "-=", "*=", "/=", "//=", "%=", "**=", "&=", "|=", "^=", "<<=",
    ">>=", "@=", ":=", "->", "...",
];

pub fn grammar() -> Result<Grammar, GrammarError> {
    Grammar::builder("python")
        .delimiters(DelimiterPolicy::whitespace())
        .try_rule(DelimitedStringRule::new(DOCSTRING_MARKERS))
        .try_rule(LineCommentRule::new(&["#"]).map(|r| {
            r.outside_strings(QuoteSyntax::new(&['"', '\''], '\\').skipping(DOCSTRING_MARKERS))
        }))
        .try_rule(PrefixRule::new(
            "string-prefix",
            Category::String,
            STRING_PREFIXES,
        ))
        .try_rule(QuotedStringRule::new(&['"', '\''], '\\').map(|r| r.skipping(DOCSTRING_MARKERS)))
        .rule(NumberRule::new())
        .try_rule(WordSetRule::keywords(KEYWORDS))
        .try_rule(WordSetRule::operators(OPERATORS))
        .build()
}

#[cfg(test)]
mod tests;
