//! Configuration for a headless join run.
//!
//! Transforms CLI arguments into a validated, normalized configuration that
//! drives the merge. Interactive sessions build their state in
//! [`crate::tui::App`] instead; this type covers the non-interactive path.

use std::path::PathBuf;

use crate::error::{JoinError, Result};
use crate::utils::ensure_pdf_extension;

/// Default output file name when none is given, matching the save prompt.
pub const DEFAULT_OUTPUT_NAME: &str = "Document.pdf";

/// How to handle an existing output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwriteMode {
    /// Ask the user for confirmation before overwriting.
    #[default]
    Prompt,
    /// Overwrite without asking.
    Force,
    /// Error out if the output file already exists.
    NoClobber,
}

/// Validated configuration for a headless join.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input PDF files, in merge order.
    pub inputs: Vec<PathBuf>,

    /// Output file path. Always carries a `.pdf` extension.
    pub output: PathBuf,

    /// How to handle an existing output file.
    pub overwrite_mode: OverwriteMode,

    /// Suppress all non-error output.
    pub quiet: bool,

    /// Show per-file detail while joining.
    pub verbose: bool,

    /// Print a machine-readable JSON summary instead of prose.
    pub json: bool,
}

impl Config {
    /// Build a configuration from raw parts, normalizing the output path.
    pub fn new(inputs: Vec<PathBuf>, output: PathBuf, overwrite_mode: OverwriteMode) -> Self {
        Self {
            inputs,
            output: ensure_pdf_extension(&output),
            overwrite_mode,
            quiet: false,
            verbose: false,
            json: false,
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no inputs or the output path is empty.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(JoinError::NoFilesToJoin);
        }

        if self.output.as_os_str().is_empty() {
            return Err(JoinError::invalid_config("Output path is empty"));
        }

        Ok(())
    }
}
