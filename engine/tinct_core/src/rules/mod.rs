//! Reusable rule building blocks.
//!
//! Grammars assemble these with their own data (markers, word sets) and add
//! language-specific rules where none of these fit.

mod comment;
mod number;
mod prefix;
mod string;
mod words;

pub use comment::{BlockCommentRule, LineCommentRule};
pub use number::{is_number, NumberRule};
pub use prefix::PrefixRule;
pub use string::{DelimitedStringRule, QuotedStringRule};
pub use words::WordSetRule;

use crate::GrammarError;

/// Reject empty markers at construction time.
fn check_markers(rule: &'static str, markers: &[&str]) -> Result<(), GrammarError> {
    if markers.is_empty() || markers.iter().any(|m| m.is_empty()) {
        return Err(GrammarError::EmptyMarker { rule });
    }
    Ok(())
}
