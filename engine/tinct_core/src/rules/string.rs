//! String rules.

use smallvec::SmallVec;

use super::check_markers;
use crate::balance::QuoteSyntax;
use crate::{Category, GrammarError, Scope, Segment, SyntaxRule};

/// Single-line quoted strings.
///
/// A token belongs to a string when it starts or ends with a quote, or when
/// scanning its line from the start leaves a quote open before it. Escaped
/// quotes do not open or close anything, including a quote at the start of a
/// token whose adjacent predecessor ends in a live escape.
#[derive(Clone, Debug)]
pub struct QuotedStringRule {
    syntax: QuoteSyntax,
}

impl QuotedStringRule {
    pub fn new(quotes: &[char], escape: char) -> Result<Self, GrammarError> {
        let syntax = QuoteSyntax::new(quotes, escape);
        if syntax.is_empty() {
            return Err(GrammarError::EmptyMarker {
                rule: "quoted-string",
            });
        }
        Ok(QuotedStringRule { syntax })
    }

    /// Step over `markers` when scanning the line, so delimiters owned by a
    /// multi-line string rule do not open or close single-line strings.
    #[must_use]
    pub fn skipping(mut self, markers: &[&'static str]) -> Self {
        self.syntax = self.syntax.skipping(markers);
        self
    }

    /// The quote syntax this rule scans with, for comment rules that must
    /// step around the same strings.
    pub fn syntax(&self) -> &QuoteSyntax {
        &self.syntax
    }

    fn is_quote(&self, c: Option<char>) -> bool {
        c.is_some_and(|c| self.syntax.is_quote(c))
    }
}

impl SyntaxRule for QuotedStringRule {
    fn category(&self) -> Category {
        Category::String
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        let current = segment.current();
        if self.is_quote(current.chars().next()) || self.is_quote(current.chars().next_back()) {
            return true;
        }

        self.syntax.open_after(segment.preceding_tokens_on_line()).is_some()
    }

    fn name(&self) -> &'static str {
        "quoted-string"
    }
}

/// Strings delimited by a symmetric multi-line marker (`"""`, `'''`).
///
/// A token is inside when it carries a marker itself or when an odd number
/// of markers precede it in the document.
#[derive(Clone, Debug)]
pub struct DelimitedStringRule {
    markers: SmallVec<[&'static str; 2]>,
}

impl DelimitedStringRule {
    pub fn new(markers: &[&'static str]) -> Result<Self, GrammarError> {
        check_markers("delimited-string", markers)?;
        Ok(DelimitedStringRule {
            markers: SmallVec::from_slice(markers),
        })
    }
}

impl SyntaxRule for DelimitedStringRule {
    fn category(&self) -> Category {
        Category::String
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        let current = segment.current();
        self.markers.iter().any(|&marker| {
            current.contains(marker) || segment.is_inside(marker, marker, Scope::DocumentBefore)
        })
    }

    fn name(&self) -> &'static str {
        "delimited-string"
    }
}
