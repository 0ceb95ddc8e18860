//! Rule evaluation pipeline.
//!
//! For every position: build a [`Segment`], try the rules in order, take the
//! first match's category, fall back to [`Category::Plain`]. Positions are
//! independent of each other, which is what lets [`classify_parallel`] split
//! the work across threads and still return exactly what [`classify`] does.

use rayon::prelude::*;

use crate::token::{ClassifiedToken, TokenStream};
use crate::{BoxedRule, Category, Segment};

/// Below this many tokens the parallel pipeline runs sequentially; spawning
/// tasks costs more than evaluating the rules.
const PARALLEL_THRESHOLD: usize = 4096;

/// Classify every token of `stream` with `rules`.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = stream.len(), rules = rules.len()))]
pub fn classify<'src>(stream: &TokenStream<'src>, rules: &[BoxedRule]) -> Vec<ClassifiedToken<'src>> {
    (0..stream.len())
        .map(|index| classify_at(stream, index, rules))
        .collect()
}

/// Same output as [`classify`], evaluated on the rayon pool.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = stream.len(), rules = rules.len()))]
pub fn classify_parallel<'src>(
    stream: &TokenStream<'src>,
    rules: &[BoxedRule],
) -> Vec<ClassifiedToken<'src>> {
    if stream.len() < PARALLEL_THRESHOLD {
        return classify(stream, rules);
    }
    (0..stream.len())
        .into_par_iter()
        .map(|index| classify_at(stream, index, rules))
        .collect()
}

/// Category of the token at `index`: first matching rule wins.
pub fn category_at(stream: &TokenStream<'_>, index: usize, rules: &[BoxedRule]) -> Category {
    let Some(segment) = Segment::new(stream, index) else {
        return Category::Plain;
    };
    rules
        .iter()
        .find(|rule| rule.matches(&segment))
        .map_or(Category::Plain, |rule| {
            tracing::trace!(token = segment.current(), rule = rule.name(), "matched");
            rule.category()
        })
}

fn classify_at<'src>(stream: &TokenStream<'src>, index: usize, rules: &[BoxedRule]) -> ClassifiedToken<'src> {
    let raw = stream.as_slice()[index];
    ClassifiedToken::new(raw, category_at(stream, index, rules))
}

#[cfg(test)]
mod tests;
