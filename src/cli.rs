//! CLI argument parsing.
//!
//! With no input files, `pdfjoiner` starts the interactive shell. With input
//! files it joins them directly, in the order given, without entering the
//! shell.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_OUTPUT_NAME, OverwriteMode};
use crate::error::{JoinError, Result};

/// Pick, reorder, and join PDF files into a single document.
///
/// Run without arguments to open the interactive shell: add files, arrange
/// their order, and join them from there. Passing input files on the command
/// line skips the shell and joins them immediately.
#[derive(Parser, Debug)]
#[command(name = "pdfjoiner")]
#[command(version)]
#[command(about = "Pick, reorder, and join PDF files into a single document", long_about = None)]
pub struct Cli {
    /// Input PDF files to join (in order)
    ///
    /// When omitted, the interactive shell opens instead.
    /// Files are joined in the order provided.
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Output PDF file path
    ///
    /// A `.pdf` extension is added when missing.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT_NAME)]
    pub output: PathBuf,

    /// Force overwrite of an existing output file without confirmation
    #[arg(short, long)]
    pub force: bool,

    /// Never overwrite an existing output file
    ///
    /// If the output file already exists, exit with an error instead of
    /// prompting or overwriting.
    #[arg(long, conflicts_with = "force")]
    pub no_clobber: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Show detailed information while joining
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a JSON summary of the join instead of prose
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Whether the interactive shell should run instead of a direct join.
    pub fn is_interactive(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Convert CLI arguments into a validated [`Config`] for a direct join.
    ///
    /// # Errors
    ///
    /// Returns an error when called with no inputs or an empty output path.
    pub fn to_config(&self) -> Result<Config> {
        let overwrite_mode = if self.force {
            OverwriteMode::Force
        } else if self.no_clobber {
            OverwriteMode::NoClobber
        } else {
            OverwriteMode::Prompt
        };

        let mut config = Config::new(self.inputs.clone(), self.output.clone(), overwrite_mode);
        config.quiet = self.quiet;
        config.verbose = self.verbose;
        config.json = self.json;

        config.validate().map_err(|e| {
            JoinError::invalid_config(format!("Configuration validation failed: {e}"))
        })?;

        Ok(config)
    }
}
