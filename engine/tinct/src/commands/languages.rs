//! `tinct languages`: list registered grammars and their aliases.

use std::fmt::Write as _;

use tinct_core::GrammarRegistry;

pub fn list_languages(registry: &GrammarRegistry) -> String {
    let mut out = String::new();
    for language in registry.languages() {
        let aliases = registry.aliases_of(language);
        if aliases.is_empty() {
            let _ = writeln!(out, "{language}");
        } else {
            let _ = writeln!(out, "{language:<10} {}", aliases.join(", "));
        }
    }
    out
}
