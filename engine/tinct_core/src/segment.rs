//! Read-only context view used by rules.
//!
//! A [`Segment`] is a position in a [`TokenStream`]. It exists only for the
//! duration of one rule evaluation and exposes the neighbourhood of the
//! current token: its immediate neighbours, the other tokens on its line, and
//! counts over larger scopes. All accessors are pure, so positions can be
//! classified in any order or in parallel.

use std::ops::Range;

use crate::balance;
use crate::token::{RawToken, TokenStream};

/// Token range a [`Segment::count`] or [`Segment::is_inside`] query covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Every token on the current line, current included.
    Line,
    /// Tokens on the current line before the current one.
    LineBefore,
    /// Every token from the start of the document up to, not including, current.
    DocumentBefore,
    /// Every token from the start of the document through current.
    DocumentThrough,
    /// The whole document.
    Document,
}

/// A position in a token stream.
#[derive(Clone, Copy, Debug)]
pub struct Segment<'a, 'src> {
    stream: &'a TokenStream<'src>,
    index: usize,
    /// First token index of the current line.
    line_start: usize,
    /// One past the last token index of the current line.
    line_end: usize,
}

impl<'a, 'src> Segment<'a, 'src> {
    /// View `stream` at `index`.
    ///
    /// Returns `None` when `index` is out of bounds.
    pub fn new(stream: &'a TokenStream<'src>, index: usize) -> Option<Self> {
        let token = stream.get(index)?;
        let line = stream.line_range(token.line);
        Some(Segment {
            stream,
            index,
            line_start: line.start,
            line_end: line.end,
        })
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn token(&self) -> &'a RawToken<'src> {
        let stream: &'a TokenStream<'src> = self.stream;
        &stream.as_slice()[self.index]
    }

    /// Text of the token being classified.
    #[inline]
    pub fn current(&self) -> &'src str {
        self.token().text
    }

    /// Zero-based line of the current token.
    #[inline]
    pub fn line(&self) -> u32 {
        self.token().line
    }

    /// Text of the token before current, on any line.
    pub fn previous(&self) -> Option<&'src str> {
        let index = self.index.checked_sub(1)?;
        self.stream.get(index).map(|t| t.text)
    }

    /// Text of the token after current, on any line.
    pub fn next(&self) -> Option<&'src str> {
        self.stream.get(self.index + 1).map(|t| t.text)
    }

    /// Every token on the current line in document order, current included.
    pub fn on_same_line(&self) -> impl DoubleEndedIterator<Item = &'src str> + 'a {
        self.texts(self.line_start..self.line_end)
    }

    /// Tokens on the current line before current.
    pub fn preceding_on_line(&self) -> impl DoubleEndedIterator<Item = &'src str> + 'a {
        self.texts(self.line_start..self.index)
    }

    /// Tokens on the current line before current, with spans.
    pub fn preceding_tokens_on_line(&self) -> &'a [RawToken<'src>] {
        let stream: &'a TokenStream<'src> = self.stream;
        &stream.as_slice()[self.line_start..self.index]
    }

    /// Every token in the document before current.
    pub fn tokens_before(&self) -> &'a [RawToken<'src>] {
        let stream: &'a TokenStream<'src> = self.stream;
        &stream.as_slice()[..self.index]
    }

    /// Tokens on the current line after current.
    pub fn following_on_line(&self) -> impl DoubleEndedIterator<Item = &'src str> + 'a {
        self.texts(self.index + 1..self.line_end)
    }

    #[inline]
    pub fn is_first_on_line(&self) -> bool {
        self.index == self.line_start
    }

    #[inline]
    pub fn is_last_on_line(&self) -> bool {
        self.index + 1 == self.line_end
    }

    /// Whether the previous token ends exactly where current starts.
    pub fn is_adjacent_to_previous(&self) -> bool {
        let Some(index) = self.index.checked_sub(1) else {
            return false;
        };
        self.stream
            .get(index)
            .is_some_and(|prev| prev.span.end == self.token().span.start)
    }

    /// Number of tokens equal to `value` within `scope`.
    pub fn count(&self, value: &str, scope: Scope) -> usize {
        self.texts(self.range(scope)).filter(|&t| t == value).count()
    }

    /// Whether `scope` ends inside an unterminated `open`..`close` construct.
    ///
    /// See [`balance::is_unbalanced`] for how markers are counted.
    pub fn is_inside(&self, open: &str, close: &str, scope: Scope) -> bool {
        balance::is_unbalanced(self.texts(self.range(scope)), open, close)
    }

    fn range(&self, scope: Scope) -> Range<usize> {
        match scope {
            Scope::Line => self.line_start..self.line_end,
            Scope::LineBefore => self.line_start..self.index,
            Scope::DocumentBefore => 0..self.index,
            Scope::DocumentThrough => 0..self.index + 1,
            Scope::Document => 0..self.stream.len(),
        }
    }

    #[inline]
    fn texts(&self, range: Range<usize>) -> impl DoubleEndedIterator<Item = &'src str> + 'a {
        let stream: &'a TokenStream<'src> = self.stream;
        stream.as_slice()[range].iter().map(|t| t.text)
    }
}
