//! Grammar construction errors.
//!
//! Classification itself cannot fail; every problem with a grammar surfaces
//! while it is being built or registered.

use thiserror::Error;

/// A grammar or registry was configured inconsistently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// A merge table names a character the policy does not treat as a
    /// delimiter, so the pair could never be consulted.
    #[error("merge pair ({first:?}, {second:?}) contains {offending:?}, which is not a delimiter")]
    MergePairNotDelimiter {
        first: char,
        second: char,
        offending: char,
    },

    /// A character is both listed as a delimiter and excluded from the set.
    #[error("delimiter {0:?} is also listed as excluded")]
    ConflictingDelimiter(char),

    /// A balance or prefix marker was empty.
    #[error("rule `{rule}` has an empty marker")]
    EmptyMarker { rule: &'static str },

    /// A membership rule was given no words.
    #[error("rule `{rule}` has an empty word set")]
    EmptyWordSet { rule: &'static str },

    /// A language id or alias was registered twice.
    #[error("language `{0}` is already registered")]
    DuplicateLanguage(String),

    /// An alias points at a language that was never registered.
    #[error("alias `{alias}` refers to unknown language `{target}`")]
    UnknownAliasTarget { alias: String, target: String },
}
