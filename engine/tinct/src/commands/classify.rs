//! `tinct classify`: classify files and dump their tokens.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tinct_core::{Category, ClassifiedToken, GrammarRegistry, Span};
use tinct_grammars::{builtin_registry, language_for_path};

use super::read_file;
use crate::{ClassifyConfig, CliError, OutputFormat};

/// Classified tokens of one input file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: String,
    /// Canonical name of the grammar that classified the file.
    pub language: String,
    pub tokens: Vec<TokenRecord>,
}

/// Owned copy of a [`ClassifiedToken`], detached from the source buffer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    pub text: String,
    pub category: Category,
    pub line: u32,
    pub span: Span,
}

impl From<ClassifiedToken<'_>> for TokenRecord {
    fn from(token: ClassifiedToken<'_>) -> Self {
        TokenRecord {
            text: token.text.to_owned(),
            category: token.category,
            line: token.line,
            span: token.span,
        }
    }
}

/// Classify `paths` with the built-in grammars and render the result.
pub fn run_classify(paths: &[PathBuf], config: &ClassifyConfig) -> Result<String, CliError> {
    let registry = builtin_registry()?;
    let reports = classify_files(paths, config, &registry)?;
    render(&reports, config.format)
}

/// Classify every file in `paths`, in input order.
///
/// With `config.parallel`, several files are classified on a scoped thread
/// pool; a single file is instead split across positions.
#[tracing::instrument(level = "debug", skip_all, fields(files = paths.len()))]
pub fn classify_files(
    paths: &[PathBuf],
    config: &ClassifyConfig,
    registry: &GrammarRegistry,
) -> Result<Vec<FileReport>, CliError> {
    if !config.parallel || paths.len() < 2 {
        let split_positions = config.parallel;
        return paths
            .iter()
            .map(|path| classify_file(path, config, registry, split_positions))
            .collect();
    }

    rayon::ThreadPoolBuilder::new()
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| {
                paths
                    .par_iter()
                    .map(|path| classify_file(path, config, registry, false))
                    .collect::<Result<Vec<_>, _>>()
            })
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), classifying sequentially");
            paths
                .iter()
                .map(|path| classify_file(path, config, registry, false))
                .collect()
        })
}

fn classify_file(
    path: &Path,
    config: &ClassifyConfig,
    registry: &GrammarRegistry,
    split_positions: bool,
) -> Result<FileReport, CliError> {
    let source = read_file(path)?;
    let language = config
        .language
        .as_deref()
        .or_else(|| language_for_path(path))
        .unwrap_or("plain");
    let grammar = registry.grammar_for(language);
    tracing::debug!(path = %path.display(), language, grammar = grammar.name(), "classifying");

    let tokens = if split_positions {
        grammar.classify_parallel(&source)
    } else {
        grammar.classify(&source)
    };
    Ok(FileReport {
        path: path.display().to_string(),
        language: grammar.name().to_owned(),
        tokens: tokens.into_iter().map(TokenRecord::from).collect(),
    })
}

/// Render reports in `format`.
pub fn render(reports: &[FileReport], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
        OutputFormat::Text => Ok(render_text(reports)),
    }
}

fn render_text(reports: &[FileReport]) -> String {
    let mut out = String::new();
    for report in reports {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{} ({}, {} tokens)",
            report.path,
            report.language,
            report.tokens.len()
        );
        for token in &report.tokens {
            let position = format!("{}:{}", token.line + 1, token.span);
            let _ = writeln!(out, "  {position:<14} {:<14} {}", token.category, token.text);
        }
    }
    out
}
