//! Token classification engine.
//!
//! Turns source text into a sequence of tokens tagged with a semantic
//! [`Category`] (comment, string, number, keyword, ...), driven entirely by a
//! [`Grammar`]: a [`DelimiterPolicy`] deciding where tokens start and end,
//! plus an ordered list of [`SyntaxRule`]s.
//!
//! ```text
//! text ──tokenize──▶ TokenStream ──Segment per position──▶ rules ──▶ Vec<ClassifiedToken>
//! ```
//!
//! There is no lexer state. Rules see the current token through a read-only
//! [`Segment`] and re-derive context (line neighbours, marker balance) on
//! every query, so positions classify independently and in any order.
//!
//! This crate carries no language data; see `tinct_grammars` for the
//! built-in grammars.

pub mod balance;
mod category;
mod delimiter;
mod error;
mod grammar;
mod pipeline;
mod registry;
mod rule;
pub mod rules;
mod segment;
mod token;
mod tokenizer;

pub use category::Category;
pub use delimiter::{CharClass, DelimiterPolicy, MergePolicy};
pub use error::GrammarError;
pub use grammar::{Grammar, GrammarBuilder};
pub use pipeline::{category_at, classify, classify_parallel};
pub use registry::GrammarRegistry;
pub use rule::{BoxedRule, FnRule, SyntaxRule};
pub use segment::{Scope, Segment};
pub use token::{ClassifiedToken, RawToken, Span, TokenStream};
pub use tokenizer::tokenize;
