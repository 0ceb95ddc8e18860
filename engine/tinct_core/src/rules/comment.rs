//! Comment rules.

use smallvec::SmallVec;

use super::check_markers;
use crate::balance::{CodeScan, QuoteSyntax};
use crate::{Category, GrammarError, Segment, SyntaxRule};

/// Single-line comments: the marker token and everything after it on the line.
///
/// With [`outside_strings`](Self::outside_strings) set, a marker inside a
/// quoted string on its line (`"http://x"`) does not start a comment.
#[derive(Clone, Debug)]
pub struct LineCommentRule {
    markers: SmallVec<[&'static str; 2]>,
    quotes: Option<QuoteSyntax>,
}

impl LineCommentRule {
    pub fn new(markers: &[&'static str]) -> Result<Self, GrammarError> {
        check_markers("line-comment", markers)?;
        Ok(LineCommentRule {
            markers: SmallVec::from_slice(markers),
            quotes: None,
        })
    }

    #[must_use]
    pub fn outside_strings(mut self, quotes: QuoteSyntax) -> Self {
        self.quotes = Some(quotes);
        self
    }

    fn starts_comment(&self, token: &str) -> bool {
        self.markers.iter().any(|m| token.starts_with(m))
    }
}

impl SyntaxRule for LineCommentRule {
    fn category(&self) -> Category {
        Category::Comment
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        if self.quotes.is_none() {
            return self.starts_comment(segment.current())
                || segment.preceding_on_line().any(|t| self.starts_comment(t));
        }

        let mut scan = CodeScan::new(&self.markers, self.quotes.as_ref());
        for token in segment.preceding_tokens_on_line() {
            scan.feed(token);
        }
        scan.in_line_comment() || (scan.in_code() && self.starts_comment(segment.current()))
    }

    fn name(&self) -> &'static str {
        "line-comment"
    }
}

/// Block comments spanning any number of lines.
///
/// A token is inside the comment when it opens or closes one, or when the
/// document before it holds more open markers than close markers. With
/// [`in_code`](Self::in_code) set, markers inside quoted strings or after a
/// line comment marker are not counted.
#[derive(Clone, Debug)]
pub struct BlockCommentRule {
    open: &'static str,
    close: &'static str,
    line_markers: SmallVec<[&'static str; 2]>,
    quotes: Option<QuoteSyntax>,
}

impl BlockCommentRule {
    pub fn new(open: &'static str, close: &'static str) -> Result<Self, GrammarError> {
        check_markers("block-comment", &[open, close])?;
        Ok(BlockCommentRule {
            open,
            close,
            line_markers: SmallVec::new(),
            quotes: None,
        })
    }

    /// Count markers only in code, given the language's line comment markers
    /// and string syntax.
    #[must_use]
    pub fn in_code(mut self, line_markers: &[&'static str], quotes: QuoteSyntax) -> Self {
        self.line_markers = line_markers.iter().copied().filter(|m| !m.is_empty()).collect();
        self.quotes = Some(quotes);
        self
    }
}

impl SyntaxRule for BlockCommentRule {
    fn category(&self) -> Category {
        Category::Comment
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        let mut scan =
            CodeScan::new(&self.line_markers, self.quotes.as_ref()).with_block(self.open, self.close);
        for token in segment.tokens_before() {
            scan.feed(token);
        }
        scan.feed(segment.token())
    }

    fn name(&self) -> &'static str {
        "block-comment"
    }
}
