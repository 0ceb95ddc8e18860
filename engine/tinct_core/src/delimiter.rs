//! Delimiter policies.
//!
//! A policy decides which characters split the text into tokens and which
//! adjacent delimiter characters stay together in one run. Whitespace always
//! separates tokens and is never emitted, whatever the policy says.

use smallvec::SmallVec;

use crate::GrammarError;

/// Base set of delimiter characters, before exclusions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// No delimiters beyond whitespace: each run of non-whitespace is one token.
    Whitespace,
    /// Every character that is neither alphanumeric nor whitespace.
    NonAlphanumeric,
    /// Exactly the listed characters.
    Chars(&'static [char]),
}

impl CharClass {
    fn contains(self, c: char) -> bool {
        match self {
            CharClass::Whitespace => false,
            CharClass::NonAlphanumeric => !c.is_alphanumeric() && !c.is_whitespace(),
            CharClass::Chars(chars) => chars.contains(&c),
        }
    }
}

/// Decides whether two adjacent delimiter characters form one run.
#[derive(Clone, Copy, Debug)]
pub enum MergePolicy {
    /// Every delimiter run is a single token.
    Always,
    /// Every delimiter character is its own token.
    Never,
    /// Only the listed `(left, right)` pairs merge.
    Pairs(&'static [(char, char)]),
    /// Arbitrary pure predicate over `(left, right)`.
    Custom(fn(char, char) -> bool),
}

impl MergePolicy {
    #[inline]
    fn merges(self, left: char, right: char) -> bool {
        match self {
            MergePolicy::Always => true,
            MergePolicy::Never => false,
            MergePolicy::Pairs(pairs) => pairs.contains(&(left, right)),
            MergePolicy::Custom(predicate) => predicate(left, right),
        }
    }
}

/// How a grammar splits text into tokens.
#[derive(Clone, Debug)]
pub struct DelimiterPolicy {
    class: CharClass,
    excluded: SmallVec<[char; 8]>,
    merge: MergePolicy,
}

impl DelimiterPolicy {
    /// Whitespace-only splitting.
    pub fn whitespace() -> Self {
        Self::new(CharClass::Whitespace)
    }

    /// Split on every punctuation or symbol character.
    pub fn non_alphanumeric() -> Self {
        Self::new(CharClass::NonAlphanumeric)
    }

    pub fn new(class: CharClass) -> Self {
        DelimiterPolicy {
            class,
            excluded: SmallVec::new(),
            merge: MergePolicy::Always,
        }
    }

    /// Keep `chars` inside word runs even though the base class lists them.
    #[must_use]
    pub fn excluding(mut self, chars: &[char]) -> Self {
        self.excluded.extend_from_slice(chars);
        self
    }

    #[must_use]
    pub fn merging(mut self, merge: MergePolicy) -> Self {
        self.merge = merge;
        self
    }

    pub fn class(&self) -> CharClass {
        self.class
    }

    pub fn merge_policy(&self) -> MergePolicy {
        self.merge
    }

    /// Whether `c` separates tokens and is itself emitted as a token.
    ///
    /// Always `false` for whitespace; the tokenizer drops whitespace separately.
    #[inline]
    pub fn is_delimiter(&self, c: char) -> bool {
        self.class.contains(c) && !self.excluded.contains(&c)
    }

    /// Whether delimiter `right` continues the run ending in delimiter `left`.
    #[inline]
    pub fn merges(&self, left: char, right: char) -> bool {
        self.merge.merges(left, right)
    }

    /// Check the policy for entries that could never take effect.
    pub fn validate(&self) -> Result<(), GrammarError> {
        if let CharClass::Chars(chars) = self.class {
            if let Some(&c) = chars.iter().find(|c| self.excluded.contains(c)) {
                return Err(GrammarError::ConflictingDelimiter(c));
            }
        }
        if let MergePolicy::Pairs(pairs) = self.merge {
            for &(first, second) in pairs {
                for offending in [first, second] {
                    if !self.is_delimiter(offending) {
                        return Err(GrammarError::MergePairNotDelimiter {
                            first,
                            second,
                            offending,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for DelimiterPolicy {
    fn default() -> Self {
        Self::whitespace()
    }
}
