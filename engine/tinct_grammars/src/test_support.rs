//! Helpers shared by the per-language unit tests.

use tinct_core::{Category, Grammar};

/// `(text, category)` for every token of `source`.
pub fn categories_of<'s>(grammar: &Grammar, source: &'s str) -> Vec<(&'s str, Category)> {
    grammar
        .classify(source)
        .into_iter()
        .map(|t| (t.text, t.category))
        .collect()
}

/// Texts of the tokens classified as `category`, in order.
pub fn texts_in<'s>(tokens: &[(&'s str, Category)], category: Category) -> Vec<&'s str> {
    tokens
        .iter()
        .filter(|(_, c)| *c == category)
        .map(|&(text, _)| text)
        .collect()
}
