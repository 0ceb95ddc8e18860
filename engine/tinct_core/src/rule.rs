//! The rule abstraction.
//!
//! A grammar is an ordered list of rules. Each rule pairs a [`Category`] with
//! a predicate over a [`Segment`]; the pipeline assigns the category of the
//! first rule whose predicate holds. Rules hold only immutable data, so one
//! grammar can classify many documents concurrently.

use std::fmt;

use crate::{Category, Segment};

/// A classification rule.
pub trait SyntaxRule: Send + Sync {
    /// Category assigned when [`matches`](Self::matches) holds.
    fn category(&self) -> Category;

    /// Whether the token at `segment` belongs to this rule's category.
    fn matches(&self, segment: &Segment<'_, '_>) -> bool;

    /// Short name for logs and configuration errors.
    fn name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}

/// Owned, type-erased rule as stored by a grammar.
pub type BoxedRule = Box<dyn SyntaxRule>;

impl fmt::Debug for dyn SyntaxRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.category())
    }
}

/// A rule defined by a closure.
///
/// Used for one-off predicates that do not warrant their own type.
pub struct FnRule<F> {
    name: &'static str,
    category: Category,
    predicate: F,
}

impl<F> FnRule<F>
where
    F: Fn(&Segment<'_, '_>) -> bool + Send + Sync,
{
    pub fn new(name: &'static str, category: Category, predicate: F) -> Self {
        FnRule {
            name,
            category,
            predicate,
        }
    }
}

impl<F> SyntaxRule for FnRule<F>
where
    F: Fn(&Segment<'_, '_>) -> bool + Send + Sync,
{
    fn category(&self) -> Category {
        self.category
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        (self.predicate)(segment)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
