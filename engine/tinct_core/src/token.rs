//! Token representation.
//!
//! Tokens borrow their text from the source. A [`TokenStream`] is the
//! materialized output of the tokenizer: every token of the document, in
//! order, with line numbers that never decrease. Rules read it through a
//! [`Segment`](crate::Segment); nothing mutates it after construction.

use std::fmt;
use std::ops::Range;

use serde::Serialize;

use crate::Category;

/// Byte range of a token in its source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Span { start, end }
    }

    #[inline]
    pub fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn to_range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// An unclassified token produced by the tokenizer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawToken<'src> {
    pub text: &'src str,
    /// Zero-based line the token starts on.
    pub line: u32,
    pub span: Span,
}

impl fmt::Debug for RawToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}:{}", self.text, self.line, self.span)
    }
}

/// A token with its assigned category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ClassifiedToken<'src> {
    pub text: &'src str,
    pub category: Category,
    pub line: u32,
    pub span: Span,
}

impl<'src> ClassifiedToken<'src> {
    #[inline]
    pub fn new(raw: RawToken<'src>, category: Category) -> Self {
        ClassifiedToken {
            text: raw.text,
            category,
            line: raw.line,
            span: raw.span,
        }
    }
}

/// Ordered tokens of one document.
///
/// # Invariant
///
/// `tokens[i].line <= tokens[i + 1].line` and spans are strictly increasing.
/// [`TokenStream::line_range`] relies on the ordering for binary search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream<'src> {
    tokens: Vec<RawToken<'src>>,
}

impl<'src> TokenStream<'src> {
    /// Build a stream from tokens already in document order.
    pub fn new(tokens: Vec<RawToken<'src>>) -> Self {
        debug_assert!(
            tokens.windows(2).all(|w| w[0].line <= w[1].line),
            "token lines must be non-decreasing"
        );
        TokenStream { tokens }
    }

    /// Build a stream from `(text, line)` pairs with synthetic spans.
    ///
    /// Handy for exercising rules against token shapes a particular
    /// delimiter policy would never produce. Consecutive tokens are treated
    /// as separated by one space.
    pub fn from_parts(parts: &[(&'src str, u32)]) -> Self {
        let mut offset = 0u32;
        let tokens = parts
            .iter()
            .map(|&(text, line)| {
                let len = u32::try_from(text.len()).unwrap_or(u32::MAX);
                let span = Span::new(offset, offset.saturating_add(len));
                offset = span.end.saturating_add(1);
                RawToken { text, line, span }
            })
            .collect();
        Self::new(tokens)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&RawToken<'src>> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[RawToken<'src>] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RawToken<'src>> {
        self.tokens.iter()
    }

    /// Index range of all tokens on `line`.
    ///
    /// Empty (positioned where the line would be) when the line holds no
    /// tokens.
    pub fn line_range(&self, line: u32) -> Range<usize> {
        let start = self.tokens.partition_point(|t| t.line < line);
        let end = start + self.tokens[start..].partition_point(|t| t.line <= line);
        start..end
    }

    /// Texts of the tokens in `range`, in order.
    pub fn texts(&self, range: Range<usize>) -> impl Iterator<Item = &'src str> + '_ {
        self.tokens[range].iter().map(|t| t.text)
    }
}

impl<'a, 'src> IntoIterator for &'a TokenStream<'src> {
    type Item = &'a RawToken<'src>;
    type IntoIter = std::slice::Iter<'a, RawToken<'src>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
