//! C-family grammar (C, C++, Java, JavaScript, Go, Swift).
//!
//! One grammar for the brace languages: they share comment and string
//! syntax, and a keyword set that is the union of the family is close enough
//! for highlighting.

use tinct_core::balance::QuoteSyntax;
use tinct_core::rules::{
    BlockCommentRule, LineCommentRule, NumberRule, PrefixRule, QuotedStringRule, WordSetRule,
};
use tinct_core::{Category, DelimiterPolicy, Grammar, GrammarError, MergePolicy};

/// Delimiter pairs that form multi-character operators and comment markers.
/// Everything else (brackets, `;`, `,`) stands alone.
const MERGE_PAIRS: &[(char, char)] = &[
    ('/', '/'),
    ('/', '*'),
    ('*', '/'),
    ('=', '='),
    ('!', '='),
    ('<', '='),
    ('>', '='),
    ('+', '='),
    ('-', '='),
    ('*', '='),
    ('/', '='),
    ('%', '='),
    ('&', '='),
    ('|', '='),
    ('^', '='),
    ('&', '&'),
    ('|', '|'),
    ('+', '+'),
    ('-', '-'),
    ('-', '>'),
    ('=', '>'),
    ('<', '<'),
    ('>', '>'),
    (':', ':'),
    ('.', '.'),
    ('?', '?'),
    ('?', '.'),
];

const LINE_COMMENT: &[&str] = &["//"];

pub const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "auto", "await", "bool", "break", "case", "catch", "char",
    "class", "const", "constexpr", "continue", "default", "defer", "delete", "do", "double",
    "else", "enum", "export", "extends", "extern", "false", "final", "finally", "float", "for",
    "func", "function", "go", "goto", "if", "implements", "import", "in", "inline",
    "instanceof", "int", "interface", "let", "long", "namespace", "new", "nil", "null",
    "nullptr", "package", "private", "protected", "public", "return", "self", "short", "signed",
    "sizeof", "static", "struct", "super", "switch", "template", "this", "throw", "throws",
    "true", "try", "type", "typedef", "typename", "typeof", "union", "unsigned", "using", "var",
    "virtual", "void", "volatile", "where", "while", "yield",
];

pub const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "=", "==", "!=", "<", ">", "<=", ">=", "&&", "||", "!", "&", "|",
    "^", "~", "<<", ">>", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "++", "--", "->",
    "=>", "::", "?", ":", ".", "..", "??", "?.",
];

/// `"` strings and `'` character literals, both escaped with `\\`.
fn quotes() -> QuoteSyntax {
    QuoteSyntax::new(&['"', '\''], '\\')
}

/// Build the C-family grammar.
pub fn grammar() -> Result<Grammar, GrammarError> {
    Grammar::builder("c")
        .delimiters(
            DelimiterPolicy::non_alphanumeric()
                .excluding(&['_', '"', '\'', '#', '@', '$'])
                .merging(MergePolicy::Pairs(MERGE_PAIRS)),
        )
        .try_rule(BlockCommentRule::new("/*", "*/").map(|r| r.in_code(LINE_COMMENT, quotes())))
        .try_rule(LineCommentRule::new(LINE_COMMENT).map(|r| r.outside_strings(quotes())))
        .try_rule(QuotedStringRule::new(&['"', '\''], '\\'))
        .try_rule(PrefixRule::new(
            "preprocessor",
            Category::Custom("preprocessor"),
            &["#"],
        ))
        .rule(NumberRule::with_decimal_split())
        .try_rule(WordSetRule::keywords(KEYWORDS))
        .try_rule(WordSetRule::operators(OPERATORS))
        .build()
}
