//! Command handlers for the tinct CLI.
//!
//! Handlers return their output as a `String` and leave printing and exit
//! codes to `main`.

use std::path::Path;

use crate::CliError;

mod classify;
mod languages;

pub use classify::{classify_files, render, run_classify, FileReport, TokenRecord};
pub use languages::list_languages;

/// Read a source file, mapping failures to readable errors.
pub(crate) fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::from_io(path, e))
}
