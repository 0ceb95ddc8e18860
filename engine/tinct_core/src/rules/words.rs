//! Exact membership rules: keywords, operators, indicator symbols.

use rustc_hash::FxHashSet;

use crate::{Category, GrammarError, Segment, SyntaxRule};

/// Matches tokens that are exactly one of a fixed set of words.
#[derive(Clone, Debug)]
pub struct WordSetRule {
    name: &'static str,
    category: Category,
    words: FxHashSet<&'static str>,
}

impl WordSetRule {
    pub fn new(
        name: &'static str,
        category: Category,
        words: &[&'static str],
    ) -> Result<Self, GrammarError> {
        if words.is_empty() {
            return Err(GrammarError::EmptyWordSet { rule: name });
        }
        Ok(WordSetRule {
            name,
            category,
            words: words.iter().copied().collect(),
        })
    }

    pub fn keywords(words: &[&'static str]) -> Result<Self, GrammarError> {
        Self::new("keyword", Category::Keyword, words)
    }

    pub fn operators(words: &[&'static str]) -> Result<Self, GrammarError> {
        Self::new("operator", Category::Operator, words)
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl SyntaxRule for WordSetRule {
    fn category(&self) -> Category {
        self.category
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        self.contains(segment.current())
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
