//! Kotlin grammar.
//!
//! Kotlin separates raw strings (`"""`, multi-line, no escapes) from
//! single-line strings, and both interpolate `$name` and `${expr}`. The
//! interpolated parts get their own category so renderers can show them as
//! code inside the string.

use tinct_core::balance::QuoteSyntax;
use tinct_core::rules::{
    BlockCommentRule, DelimitedStringRule, LineCommentRule, NumberRule, PrefixRule,
    QuotedStringRule, WordSetRule,
};
use tinct_core::{
    Category, DelimiterPolicy, FnRule, Grammar, GrammarError, MergePolicy, RawToken, Segment,
    SyntaxRule,
};

const RAW_STRING: &str = "\"\"\"";
const LINE_COMMENT: &[&str] = &["//"];

const MERGE_PAIRS: &[(char, char)] = &[
    ('/', '/'),
    ('/', '*'),
    ('*', '/'),
    ('=', '='),
    ('!', '='),
    ('!', '!'),
    ('<', '='),
    ('>', '='),
    ('>', '>'),
    ('<', '<'),
    ('+', '='),
    ('-', '='),
    ('*', '='),
    ('/', '='),
    ('%', '='),
    ('&', '&'),
    ('|', '|'),
    ('+', '+'),
    ('-', '-'),
    ('-', '>'),
    (':', ':'),
    ('.', '.'),
    ('.', '<'),
    ('?', '.'),
    ('?', ':'),
];

pub const KEYWORDS: &[&str] = &[
    "abstract", "annotation", "as", "break", "by", "catch", "class", "companion", "const",
    "constructor", "continue", "crossinline", "data", "delegate", "do", "dynamic", "else", "enum",
    "expect", "external", "false", "final", "finally", "for", "fun", "get", "if", "import", "in",
    "infix", "init", "inline", "inner", "interface", "internal", "is", "it", "lateinit",
    "noinline", "null", "object", "open", "operator", "out", "override", "package", "private",
    "protected", "public", "reified", "return", "sealed", "set", "super", "suspend", "tailrec",
    "this", "throw", "true", "try", "typealias", "typeof", "val", "var", "when", "where", "while",
];

pub const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "++", "--", "=", "+=", "-=", "*=", "/=", "%=", "==", "!=", "===",
    "!==", ">", "<", ">=", "<=", "&&", "||", "!", ".", "::", "?.", "?", "?:", "!!", "&", "|",
    "^", "<<", ">>", "~", ">>>", "->", "..", "..<", ":",
];

/// `$name` and `${expr}` inside a raw or single-line string.
pub struct InterpolationRule {
    quoted: QuotedStringRule,
    raw: DelimitedStringRule,
}

impl InterpolationRule {
    pub fn new() -> Result<Self, GrammarError> {
        Ok(InterpolationRule {
            quoted: single_line_strings()?,
            raw: DelimitedStringRule::new(&[RAW_STRING])?,
        })
    }

    fn in_string(&self, segment: &Segment<'_, '_>) -> bool {
        self.raw.matches(segment) || self.quoted.matches(segment)
    }
}

impl SyntaxRule for InterpolationRule {
    fn category(&self) -> Category {
        Category::Custom("interpolation")
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        let current = segment.current();
        let interpolated = current.starts_with('$')
            || (current == "{"
                && segment.is_adjacent_to_previous()
                && segment.previous().is_some_and(|p| p.ends_with('$')))
            || template_depth(segment.preceding_tokens_on_line()) > 0;
        interpolated && self.in_string(segment)
    }

    fn name(&self) -> &'static str {
        "interpolation"
    }
}

/// Open `${` templates left after `tokens`. Braces inside a template nest.
fn template_depth(tokens: &[RawToken<'_>]) -> usize {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate() {
        match token.text {
            "{" => {
                let opens_template = i.checked_sub(1).is_some_and(|p| {
                    let prev = &tokens[p];
                    prev.span.end == token.span.start && prev.text.ends_with('$')
                });
                if opens_template || depth > 0 {
                    depth += 1;
                }
            }
            "}" => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    depth
}

fn quotes() -> QuoteSyntax {
    QuoteSyntax::new(&['"', '\''], '\\').skipping(&[RAW_STRING])
}

fn single_line_strings() -> Result<QuotedStringRule, GrammarError> {
    Ok(QuotedStringRule::new(&['"', '\''], '\\')?.skipping(&[RAW_STRING]))
}

/// `UpperCamel` identifiers. All-caps names are constants, not types.
fn is_type_name(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_uppercase())
        && text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && text.chars().any(|c| c.is_ascii_lowercase())
}

pub fn grammar() -> Result<Grammar, GrammarError> {
    Grammar::builder("kotlin")
        .delimiters(
            DelimiterPolicy::non_alphanumeric()
                .excluding(&['_', '"', '$', '@', '\''])
                .merging(MergePolicy::Pairs(MERGE_PAIRS)),
        )
        .try_rule(BlockCommentRule::new("/*", "*/").map(|r| r.in_code(LINE_COMMENT, quotes())))
        .try_rule(LineCommentRule::new(LINE_COMMENT).map(|r| r.outside_strings(quotes())))
        .try_rule(InterpolationRule::new())
        .try_rule(DelimitedStringRule::new(&[RAW_STRING]))
        .try_rule(single_line_strings())
        .try_rule(PrefixRule::new(
            "annotation",
            Category::Custom("attribute"),
            &["@"],
        ))
        .rule(NumberRule::with_decimal_split())
        .try_rule(WordSetRule::keywords(KEYWORDS))
        .rule(FnRule::new("type", Category::Type, |segment: &Segment<'_, '_>| {
            is_type_name(segment.current())
        }))
        .try_rule(WordSetRule::operators(OPERATORS))
        .build()
}
