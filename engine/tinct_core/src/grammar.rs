//! Grammars: a delimiter policy plus an ordered rule list.
//!
//! Grammars are built once, validated at build time, and then shared
//! read-only. Rule order is part of a grammar's behavior: moving a rule
//! changes which category wins for tokens several rules would accept.

use std::fmt;

use crate::pipeline;
use crate::token::{ClassifiedToken, TokenStream};
use crate::{tokenize, BoxedRule, DelimiterPolicy, GrammarError, SyntaxRule};

/// Complete classification configuration for one language.
pub struct Grammar {
    name: String,
    delimiters: DelimiterPolicy,
    rules: Vec<BoxedRule>,
}

impl Grammar {
    pub fn builder(name: impl Into<String>) -> GrammarBuilder {
        GrammarBuilder {
            name: name.into(),
            delimiters: DelimiterPolicy::default(),
            rules: Vec::new(),
            error: None,
        }
    }

    /// The no-op grammar: no delimiters besides whitespace, no rules.
    /// Every token classifies as plain text.
    pub fn plain() -> Self {
        Grammar {
            name: "plain".to_owned(),
            delimiters: DelimiterPolicy::whitespace(),
            rules: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn delimiters(&self) -> &DelimiterPolicy {
        &self.delimiters
    }

    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    pub fn tokenize<'src>(&self, text: &'src str) -> TokenStream<'src> {
        tokenize(text, &self.delimiters)
    }

    /// Tokenize and classify `text`.
    #[tracing::instrument(level = "debug", skip_all, fields(grammar = %self.name))]
    pub fn classify<'src>(&self, text: &'src str) -> Vec<ClassifiedToken<'src>> {
        pipeline::classify(&self.tokenize(text), &self.rules)
    }

    /// Tokenize and classify `text`, evaluating positions in parallel.
    #[tracing::instrument(level = "debug", skip_all, fields(grammar = %self.name))]
    pub fn classify_parallel<'src>(&self, text: &'src str) -> Vec<ClassifiedToken<'src>> {
        pipeline::classify_parallel(&self.tokenize(text), &self.rules)
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("name", &self.name)
            .field("delimiters", &self.delimiters)
            .field("rules", &self.rules)
            .finish()
    }
}

/// Builder for [`Grammar`].
///
/// Fallible rule constructors can be chained through
/// [`try_rule`](Self::try_rule); the first error is reported by
/// [`build`](Self::build).
#[must_use]
pub struct GrammarBuilder {
    name: String,
    delimiters: DelimiterPolicy,
    rules: Vec<BoxedRule>,
    error: Option<GrammarError>,
}

impl GrammarBuilder {
    pub fn delimiters(mut self, delimiters: DelimiterPolicy) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Append a rule. Rules are evaluated in the order they are added.
    pub fn rule(mut self, rule: impl SyntaxRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Append a rule whose construction may have failed.
    pub fn try_rule<R: SyntaxRule + 'static>(mut self, rule: Result<R, GrammarError>) -> Self {
        match rule {
            Ok(rule) => self.rule(rule),
            Err(err) => {
                self.error.get_or_insert(err);
                self
            }
        }
    }

    /// Validate and finish the grammar.
    pub fn build(self) -> Result<Grammar, GrammarError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        self.delimiters.validate()?;
        tracing::debug!(grammar = %self.name, rules = self.rules.len(), "grammar built");
        Ok(Grammar {
            name: self.name,
            delimiters: self.delimiters,
            rules: self.rules,
        })
    }
}
