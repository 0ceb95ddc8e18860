//! Run configuration for `tinct classify`.

use std::path::PathBuf;

use crate::CliError;

/// How classified tokens are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per token: position, category, text.
    #[default]
    Text,
    /// A JSON array of per-file reports.
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Options for `tinct classify`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifyConfig {
    /// Language for every input. `None` picks one per file by extension.
    pub language: Option<String>,
    pub format: OutputFormat,
    /// Classify files on a thread pool.
    pub parallel: bool,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        ClassifyConfig {
            language: None,
            format: OutputFormat::Text,
            parallel: true,
        }
    }
}

/// Split `classify` arguments into options and input paths.
///
/// Flags may appear before or after the paths.
pub fn parse_classify_args(args: &[String]) -> Result<(ClassifyConfig, Vec<PathBuf>), CliError> {
    let mut config = ClassifyConfig::default();
    let mut paths = Vec::new();

    for arg in args {
        if let Some(language) = arg.strip_prefix("--lang=") {
            config.language = Some(language.to_string());
        } else if let Some(format) = arg.strip_prefix("--format=") {
            config.format = OutputFormat::parse(format)
                .ok_or_else(|| CliError::UnknownFormat(format.to_string()))?;
        } else if arg == "--json" {
            config.format = OutputFormat::Json;
        } else if arg == "--no-parallel" {
            config.parallel = false;
        } else if arg.starts_with('-') {
            return Err(CliError::UnknownOption(arg.clone()));
        } else {
            paths.push(PathBuf::from(arg));
        }
    }

    if paths.is_empty() {
        return Err(CliError::NoInput);
    }
    Ok((config, paths))
}
