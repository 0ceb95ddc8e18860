//! Policy-driven tokenizer.
//!
//! Splits text into word runs and delimiter runs:
//!
//! - whitespace ends the current token and is dropped;
//! - a newline additionally advances the line counter, so no token spans lines;
//! - consecutive word characters form one token;
//! - consecutive delimiter characters form one token while the policy's merge
//!   predicate accepts each adjacent pair;
//! - switching between word and delimiter characters always starts a new token.
//!
//! The tokenizer never fails. Empty input yields an empty stream.

use crate::token::{RawToken, Span, TokenStream};
use crate::DelimiterPolicy;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RunKind {
    Word,
    Delimiter,
}

/// The token currently being accumulated.
#[derive(Clone, Copy, Debug)]
struct OpenRun {
    start: usize,
    kind: RunKind,
    last: char,
}

/// Tokenize `text` under `policy`.
#[tracing::instrument(level = "trace", skip_all, fields(bytes = text.len()))]
pub fn tokenize<'src>(text: &'src str, policy: &DelimiterPolicy) -> TokenStream<'src> {
    let mut tokenizer = Tokenizer::new(text, policy);
    tokenizer.run();
    TokenStream::new(tokenizer.tokens)
}

struct Tokenizer<'src, 'p> {
    text: &'src str,
    policy: &'p DelimiterPolicy,
    tokens: Vec<RawToken<'src>>,
    open: Option<OpenRun>,
    line: u32,
}

impl<'src, 'p> Tokenizer<'src, 'p> {
    fn new(text: &'src str, policy: &'p DelimiterPolicy) -> Self {
        Tokenizer {
            text,
            policy,
            // Rough guess: one token per five bytes of source.
            tokens: Vec::with_capacity(text.len() / 5),
            open: None,
            line: 0,
        }
    }

    fn run(&mut self) {
        for (pos, c) in self.text.char_indices() {
            if c == '\n' {
                self.finish(pos);
                self.line += 1;
                continue;
            }
            if c.is_whitespace() {
                self.finish(pos);
                continue;
            }

            let kind = if self.policy.is_delimiter(c) {
                RunKind::Delimiter
            } else {
                RunKind::Word
            };

            let policy = self.policy;
            match self.open.as_mut() {
                Some(run) if run.kind == kind && continues(policy, run.last, c, kind) => {
                    run.last = c;
                }
                _ => {
                    self.finish(pos);
                    self.open = Some(OpenRun {
                        start: pos,
                        kind,
                        last: c,
                    });
                }
            }
        }
        self.finish(self.text.len());
    }

    /// Emit the open run, if any, ending at byte `end`.
    fn finish(&mut self, end: usize) {
        let Some(run) = self.open.take() else {
            return;
        };
        self.tokens.push(RawToken {
            text: &self.text[run.start..end],
            line: self.line,
            span: Span::new(to_u32(run.start), to_u32(end)),
        });
    }
}

#[inline]
fn continues(policy: &DelimiterPolicy, last: char, c: char, kind: RunKind) -> bool {
    match kind {
        RunKind::Word => true,
        RunKind::Delimiter => policy.merges(last, c),
    }
}

/// Offsets past `u32::MAX` saturate; such documents still tokenize, only
/// their spans lose precision.
#[inline]
fn to_u32(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
