//! YAML grammar.
//!
//! Quotes are optional in YAML, so most of the work is positional: a token
//! followed by `:` is a key, and what follows a key on its line is a value.

use tinct_core::rules::{NumberRule, WordSetRule};
use tinct_core::{
    Category, DelimiterPolicy, FnRule, Grammar, GrammarError, MergePolicy, RawToken,
    Segment, SyntaxRule,
};

/// Structural indicators: block scalars, document markers, flow sequences,
/// list items.
pub const INDICATORS: &[&str] = &["|", "---", "...", ">", "[", "]", "-"];

/// Never merge into `:`; keep `://` together so URLs stay values.
fn merges(first: char, second: char) -> bool {
    match (first, second) {
        (_, ':') => false,
        (':', '/') => true,
        (':' | '-' | '#', _) => false,
        _ => true,
    }
}

/// `#` starts a comment only at the start of a line or after whitespace.
fn opens_comment(token: &RawToken<'_>, previous: Option<&RawToken<'_>>) -> bool {
    token.text.starts_with('#')
        && !previous.is_some_and(|prev| prev.span.end == token.span.start)
}

fn in_comment(segment: &Segment<'_, '_>) -> bool {
    let line = segment.preceding_tokens_on_line();
    opens_comment(segment.token(), line.last())
        || line
            .iter()
            .enumerate()
            .any(|(i, token)| opens_comment(token, i.checked_sub(1).map(|p| &line[p])))
}

/// Unquoted scalar values.
///
/// Anything that is not structure is a value. A colon-terminated token is a
/// value only when it follows another key on the same line; a bare mapping
/// key (`parent:` at the end of its line) is not.
pub struct ValueRule;

impl SyntaxRule for ValueRule {
    fn category(&self) -> Category {
        Category::String
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        let current = segment.current();
        if matches!(current, "," | "{" | "}") {
            return false;
        }
        if current.ends_with(':') {
            return segment.preceding_on_line().any(|t| t.ends_with(':'));
        }
        true
    }

    fn name(&self) -> &'static str {
        "value"
    }
}

pub fn grammar() -> Result<Grammar, GrammarError> {
    Grammar::builder("yaml")
        .delimiters(
            DelimiterPolicy::non_alphanumeric()
                .excluding(&['_', '-', '"', '#', '@', '$'])
                .merging(MergePolicy::Custom(merges)),
        )
        .rule(FnRule::new("comment", Category::Comment, in_comment))
        .try_rule(WordSetRule::new("indicator", Category::Keyword, INDICATORS))
        .rule(FnRule::new("key", Category::Type, |segment: &Segment<'_, '_>| {
            segment.next().is_some_and(|next| next.ends_with(':'))
        }))
        .rule(NumberRule::with_decimal_split())
        .rule(ValueRule)
        .build()
}
