//! Language id → grammar mapping.
//!
//! A registry is populated once at startup and then only read. It is an
//! ordinary value: callers build one and pass it to whatever classifies
//! text, rather than reaching for a global.
//!
//! Ids and aliases are matched case-insensitively. Unknown ids resolve to
//! the plain grammar through [`GrammarRegistry::grammar_for`].

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::token::ClassifiedToken;
use crate::{Grammar, GrammarError};

/// Registered grammars plus the plain fallback.
#[derive(Debug)]
pub struct GrammarRegistry {
    grammars: FxHashMap<String, Arc<Grammar>>,
    /// Alias → canonical id.
    aliases: FxHashMap<String, String>,
    fallback: Arc<Grammar>,
}

impl GrammarRegistry {
    /// An empty registry whose fallback is [`Grammar::plain`].
    pub fn new() -> Self {
        GrammarRegistry {
            grammars: FxHashMap::default(),
            aliases: FxHashMap::default(),
            fallback: Arc::new(Grammar::plain()),
        }
    }

    /// Register `grammar` under `id`.
    ///
    /// Fails if `id` is already taken by a grammar or an alias.
    pub fn register(&mut self, id: &str, grammar: Grammar) -> Result<Arc<Grammar>, GrammarError> {
        let key = normalize(id);
        if self.is_taken(&key) {
            return Err(GrammarError::DuplicateLanguage(key));
        }
        tracing::debug!(language = %key, grammar = grammar.name(), "registering grammar");
        let grammar = Arc::new(grammar);
        self.grammars.insert(key, Arc::clone(&grammar));
        Ok(grammar)
    }

    /// Make `alias` resolve to the grammar registered as `target`.
    pub fn register_alias(&mut self, alias: &str, target: &str) -> Result<(), GrammarError> {
        let alias = normalize(alias);
        let target = normalize(target);
        if !self.grammars.contains_key(&target) {
            return Err(GrammarError::UnknownAliasTarget { alias, target });
        }
        if self.is_taken(&alias) {
            return Err(GrammarError::DuplicateLanguage(alias));
        }
        self.aliases.insert(alias, target);
        Ok(())
    }

    /// The grammar registered for `id` or one of its aliases.
    pub fn get(&self, id: &str) -> Option<Arc<Grammar>> {
        let key = normalize(id);
        let key = self.aliases.get(&key).unwrap_or(&key);
        self.grammars.get(key).map(Arc::clone)
    }

    /// Like [`get`](Self::get), falling back to the plain grammar.
    pub fn grammar_for(&self, id: &str) -> Arc<Grammar> {
        self.get(id).unwrap_or_else(|| {
            tracing::debug!(language = id, "unknown language, using plain grammar");
            Arc::clone(&self.fallback)
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn fallback(&self) -> &Arc<Grammar> {
        &self.fallback
    }

    /// Canonical language ids, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.grammars.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Aliases of `id`, sorted.
    pub fn aliases_of(&self, id: &str) -> Vec<&str> {
        let key = normalize(id);
        let mut aliases: Vec<&str> = self
            .aliases
            .iter()
            .filter(|(_, target)| **target == key)
            .map(|(alias, _)| alias.as_str())
            .collect();
        aliases.sort_unstable();
        aliases
    }

    /// Classify `text` with the grammar for `language`.
    pub fn classify<'src>(&self, language: &str, text: &'src str) -> Vec<ClassifiedToken<'src>> {
        self.grammar_for(language).classify(text)
    }

    fn is_taken(&self, key: &str) -> bool {
        self.grammars.contains_key(key) || self.aliases.contains_key(key)
    }
}

impl Default for GrammarRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(id: &str) -> String {
    id.trim().to_ascii_lowercase()
}
