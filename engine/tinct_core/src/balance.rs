//! Balance checks for multi-line constructs.
//!
//! The engine never tracks "inside a block comment" as lexer state. Instead,
//! each query recounts the opening and closing markers over a scope and
//! compares the totals:
//!
//! - symmetric markers (`"""`, `` ` ``): an odd total means the scope ends inside;
//! - asymmetric markers (`/*` .. `*/`): more opens than closes means inside.
//!
//! Nesting of the same marker is indistinguishable from an unterminated
//! construct. `/* /* */` still counts as open, and an unterminated construct
//! stays open through the end of the document.
//!
//! Block comments need one more thing: a `/*` inside a string or after `//`
//! is text, not a marker. [`CodeScan`] walks the tokens before a position
//! and counts markers only where code is.

use smallvec::SmallVec;

use crate::token::RawToken;

/// Number of non-overlapping occurrences of `marker` in `text`.
///
/// An empty marker never occurs.
#[inline]
pub fn occurrences(text: &str, marker: &str) -> usize {
    if marker.is_empty() || text.len() < marker.len() {
        return 0;
    }
    text.matches(marker).count()
}

/// Whether the scope ends inside an unterminated `open`..`close` construct.
pub fn is_unbalanced<'s, I>(scope: I, open: &str, close: &str) -> bool
where
    I: IntoIterator<Item = &'s str>,
{
    if open == close {
        let total: usize = scope.into_iter().map(|t| occurrences(t, open)).sum();
        return total % 2 == 1;
    }

    let (opens, closes) = scope.into_iter().fold((0usize, 0usize), |(o, c), text| {
        (o + occurrences(text, open), c + occurrences(text, close))
    });
    opens > closes
}

/// The quote left open after scanning `tokens` from the start of a line.
///
/// Each item is a token's text plus whether its first character is escaped
/// by the token before it. While no quote is open any character in `quotes`
/// opens one; while one is open only the same character closes it. An escape
/// character escapes only the character right after it, so `\\"` leaves
/// the quote live. Occurrences of a `skip` sequence (say, `"""` handled by
/// a multi-line rule) are stepped over as a whole.
pub fn open_quote<'s, I>(tokens: I, quotes: &[char], escape: char, skip: &[&str]) -> Option<char>
where
    I: IntoIterator<Item = (&'s str, bool)>,
{
    let mut open = None;
    for (text, leading_escaped) in tokens {
        let mut escaped = leading_escaped;
        let mut chars = text.char_indices();
        while let Some((at, c)) = chars.next() {
            if escaped {
                escaped = false;
                continue;
            }
            if c == escape {
                escaped = true;
                continue;
            }
            if let Some(marker) = skip.iter().find(|m| text[at..].starts_with(**m)) {
                for _ in 1..marker.chars().count() {
                    chars.next();
                }
                continue;
            }
            match open {
                Some(q) if c == q => open = None,
                None if quotes.contains(&c) => open = Some(c),
                _ => {}
            }
        }
    }
    open
}

/// Whether `text` ends with an escape character that is itself live.
///
/// `\` escapes what follows; `\\` does not.
pub fn ends_with_live_escape(text: &str, escape: char) -> bool {
    let trailing = text.chars().rev().take_while(|&c| c == escape).count();
    trailing % 2 == 1
}

/// Single-line string syntax: quote characters, the escape character, and
/// sequences (such as `"""`) that belong to a multi-line string instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuoteSyntax {
    quotes: SmallVec<[char; 2]>,
    escape: char,
    skip: SmallVec<[&'static str; 2]>,
}

impl QuoteSyntax {
    pub fn new(quotes: &[char], escape: char) -> Self {
        QuoteSyntax {
            quotes: SmallVec::from_slice(quotes),
            escape,
            skip: SmallVec::new(),
        }
    }

    /// Treat `markers` as multi-line string delimiters, never as quotes.
    #[must_use]
    pub fn skipping(mut self, markers: &[&'static str]) -> Self {
        self.skip.extend(markers.iter().copied().filter(|m| !m.is_empty()));
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    #[inline]
    pub fn is_quote(&self, c: char) -> bool {
        self.quotes.contains(&c)
    }

    /// The quote left open after `tokens`, all on one line in document order.
    ///
    /// A token's first character is escaped when the token right before it
    /// touches it and ends in a live escape.
    pub fn open_after(&self, tokens: &[RawToken<'_>]) -> Option<char> {
        let items = tokens.iter().enumerate().map(|(i, token)| {
            let escaped = i.checked_sub(1).is_some_and(|p| {
                let prev = &tokens[p];
                prev.span.end == token.span.start && ends_with_live_escape(prev.text, self.escape)
            });
            (token.text, escaped)
        });
        open_quote(items, &self.quotes, self.escape, &self.skip)
    }

    fn skipped_at(&self, rest: &str) -> Option<&'static str> {
        self.skip.iter().copied().find(|m| rest.starts_with(m))
    }
}

/// Left-to-right pass that tells code apart from comments and strings.
///
/// Feed it tokens in document order. Comment markers count only in code:
/// a `/*` inside a quoted string or after a line comment marker is text.
/// Inside a block comment every open marker nests and every close marker
/// unnests; a close marker outside one is ignored. Quotes and line comments
/// end with their line. Multi-line string delimiters (the quote syntax's
/// skipped sequences) stay open until the same sequence appears again.
#[derive(Clone, Debug)]
pub struct CodeScan<'r> {
    block: Option<(&'r str, &'r str)>,
    line_markers: &'r [&'static str],
    quotes: Option<&'r QuoteSyntax>,
    depth: usize,
    raw: Option<&'static str>,
    quote: Option<char>,
    line_comment: bool,
    escaped: bool,
    line: Option<u32>,
    prev_end: Option<u32>,
}

impl<'r> CodeScan<'r> {
    pub fn new(line_markers: &'r [&'static str], quotes: Option<&'r QuoteSyntax>) -> Self {
        CodeScan {
            block: None,
            line_markers,
            quotes,
            depth: 0,
            raw: None,
            quote: None,
            line_comment: false,
            escaped: false,
            line: None,
            prev_end: None,
        }
    }

    /// Also track `open`..`close` block comments.
    #[must_use]
    pub fn with_block(mut self, open: &'r str, close: &'r str) -> Self {
        self.block = Some((open, close));
        self
    }

    /// Open block comments at the current point.
    #[inline]
    pub fn block_depth(&self) -> usize {
        self.depth
    }

    /// Whether a line comment started earlier on the current line.
    #[inline]
    pub fn in_line_comment(&self) -> bool {
        self.line_comment
    }

    /// Whether the next character would be read as code.
    pub fn in_code(&self) -> bool {
        self.depth == 0
            && self.raw.is_none()
            && self.quote.is_none()
            && !self.line_comment
            && !self.escaped
    }

    /// Advance over `token`.
    ///
    /// Returns whether any of it is a block comment: a marker read in code,
    /// or text inside an open comment.
    pub fn feed(&mut self, token: &RawToken<'_>) -> bool {
        if self.line != Some(token.line) {
            self.line = Some(token.line);
            self.quote = None;
            self.line_comment = false;
            self.escaped = false;
        } else if self.prev_end != Some(token.span.start) {
            self.escaped = false;
        }
        self.prev_end = Some(token.span.end);

        let text = token.text;
        let mut touched = self.depth > 0;
        let mut at = 0;
        while !self.line_comment {
            let rest = &text[at..];
            let Some(c) = rest.chars().next() else {
                break;
            };
            at += self.step(rest, c, &mut touched);
        }
        touched
    }

    /// Consume the construct at the start of `rest`; returns its byte length.
    fn step(&mut self, rest: &str, c: char, touched: &mut bool) -> usize {
        let single = c.len_utf8();

        if self.depth > 0 {
            if let Some((open, close)) = self.block {
                if rest.starts_with(close) {
                    self.depth -= 1;
                    return close.len();
                }
                if rest.starts_with(open) {
                    self.depth += 1;
                    return open.len();
                }
            }
            return single;
        }

        if let Some(marker) = self.raw {
            if rest.starts_with(marker) {
                self.raw = None;
                return marker.len();
            }
            return single;
        }

        if self.escaped {
            self.escaped = false;
            return single;
        }

        if let Some(quotes) = self.quotes {
            if c == quotes.escape {
                self.escaped = true;
                return single;
            }
            if let Some(marker) = quotes.skipped_at(rest) {
                if self.quote.is_none() {
                    self.raw = Some(marker);
                }
                return marker.len();
            }
            if let Some(open) = self.quote {
                if c == open {
                    self.quote = None;
                }
                return single;
            }
        }

        if let Some((open, close)) = self.block {
            if rest.starts_with(open) {
                self.depth = 1;
                *touched = true;
                return open.len();
            }
            if rest.starts_with(close) {
                *touched = true;
                return close.len();
            }
        }
        if self.line_markers.iter().any(|m| rest.starts_with(m)) {
            self.line_comment = true;
            return single;
        }
        if self.quotes.is_some_and(|q| q.is_quote(c)) {
            self.quote = Some(c);
        }
        single
    }
}

#[cfg(test)]
mod tests;
