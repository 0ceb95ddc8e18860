//! Built-in grammars for tinct.
//!
//! Each language module exposes `grammar()`, which builds its [`Grammar`]
//! from static keyword and operator tables. [`builtin_registry`] registers
//! all of them with their aliases.

use std::path::Path;

use tinct_core::{Grammar, GrammarError, GrammarRegistry};

pub mod c_like;
pub mod dart;
pub mod kotlin;
pub mod python;
pub mod yaml;

type GrammarFn = fn() -> Result<Grammar, GrammarError>;

/// Built-in languages: id, grammar constructor, aliases.
const BUILTINS: &[(&str, GrammarFn, &[&str])] = &[
    (
        "c",
        c_like::grammar,
        &["cpp", "java", "js", "javascript", "go", "swift"],
    ),
    ("python", python::grammar, &["py"]),
    ("dart", dart::grammar, &[]),
    ("kotlin", kotlin::grammar, &["kt", "kts"]),
    ("yaml", yaml::grammar, &["yml"]),
];

/// File extensions mapped to language ids.
const EXTENSIONS: &[(&str, &str)] = &[
    ("c", "c"),
    ("h", "c"),
    ("cc", "cpp"),
    ("cpp", "cpp"),
    ("hpp", "cpp"),
    ("java", "java"),
    ("js", "javascript"),
    ("ts", "javascript"),
    ("go", "go"),
    ("swift", "swift"),
    ("py", "python"),
    ("pyi", "python"),
    ("dart", "dart"),
    ("kt", "kotlin"),
    ("kts", "kotlin"),
    ("yaml", "yaml"),
    ("yml", "yaml"),
    ("txt", "plain"),
];

/// Build a registry holding every built-in grammar.
///
/// The plain grammar is registered as `plain` (aliases `text`, `none`) and
/// doubles as the registry fallback.
#[tracing::instrument(level = "debug")]
pub fn builtin_registry() -> Result<GrammarRegistry, GrammarError> {
    let mut registry = GrammarRegistry::new();
    registry.register("plain", Grammar::plain())?;
    registry.register_alias("text", "plain")?;
    registry.register_alias("none", "plain")?;

    for &(id, build, aliases) in BUILTINS {
        registry.register(id, build()?)?;
        for alias in aliases {
            registry.register_alias(alias, id)?;
        }
    }

    tracing::debug!(languages = registry.languages().len(), "built-in grammars registered");
    Ok(registry)
}

/// Language id for a file, by extension.
pub fn language_for_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?;
    EXTENSIONS
        .iter()
        .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
        .map(|&(_, id)| id)
}

#[cfg(test)]
mod test_support;

#[cfg(test)]
mod tests;
