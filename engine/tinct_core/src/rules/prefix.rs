//! Prefix rules.

use smallvec::SmallVec;

use super::check_markers;
use crate::{Category, GrammarError, Segment, SyntaxRule};

/// Matches tokens starting with any of the listed prefixes.
#[derive(Clone, Debug)]
pub struct PrefixRule {
    name: &'static str,
    category: Category,
    prefixes: SmallVec<[&'static str; 4]>,
}

impl PrefixRule {
    pub fn new(
        name: &'static str,
        category: Category,
        prefixes: &[&'static str],
    ) -> Result<Self, GrammarError> {
        check_markers(name, prefixes)?;
        Ok(PrefixRule {
            name,
            category,
            prefixes: SmallVec::from_slice(prefixes),
        })
    }
}

impl SyntaxRule for PrefixRule {
    fn category(&self) -> Category {
        self.category
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        let current = segment.current();
        self.prefixes.iter().any(|p| current.starts_with(p))
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
