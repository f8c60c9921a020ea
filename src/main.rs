//! pdfjoiner binary entry point.
//!
//! No arguments opens the interactive shell; input files on the command line
//! run a direct join.

use std::io::Write;
use std::path::Path;
use std::process;

use anyhow::Context;
use clap::Parser;

use pdfjoiner::cli::Cli;
use pdfjoiner::config::{Config, OverwriteMode};
use pdfjoiner::error::{JoinError, Result};
use pdfjoiner::merge::join_files;
use pdfjoiner::output::{OutputFormatter, format_file_size};
use pdfjoiner::tui;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = if cli.is_interactive() {
        tui::run().await
    } else {
        run_headless(&cli).await
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

/// Join the files given on the command line, without the shell.
async fn run_headless(cli: &Cli) -> Result<()> {
    let config = cli.to_config()?;
    let formatter = OutputFormatter::from_config(&config);

    handle_output_overwrite(&config, &formatter)?;

    if formatter.is_verbose() {
        formatter.info(&format!("Joining {} files:", config.inputs.len()));
        for input in &config.inputs {
            formatter.detail("input", &input.display().to_string());
        }
        formatter.blank_line();
    }

    let summary = join_files(&config.inputs, &config.output).await?;

    if config.json {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| JoinError::other(format!("Failed to encode summary: {e}")))?;
        println!("{json}");
        return Ok(());
    }

    formatter.success(&format!(
        "Joined {} files into {}",
        summary.files_joined,
        summary.output.display()
    ));

    if formatter.is_verbose() {
        formatter.detail("Total pages", &summary.total_pages.to_string());
        formatter.detail("Output size", &format_file_size(summary.output_size));
        formatter.detail("Elapsed", &format!("{} ms", summary.elapsed_ms));
    }

    Ok(())
}

/// Decide what happens when the output file already exists.
///
/// Quiet mode never prompts; an existing output is then an error unless
/// `--force` was given.
fn handle_output_overwrite(config: &Config, formatter: &OutputFormatter) -> Result<()> {
    if !config.output.exists() {
        return Ok(());
    }

    match config.overwrite_mode {
        OverwriteMode::Force => Ok(()),
        OverwriteMode::NoClobber => Err(JoinError::output_exists(config.output.clone())),
        OverwriteMode::Prompt => {
            if formatter.is_quiet() {
                return Err(JoinError::output_exists(config.output.clone()));
            }
            if confirm_overwrite(&config.output)? {
                Ok(())
            } else {
                Err(JoinError::Cancelled)
            }
        }
    }
}

/// Ask for overwrite confirmation on stdin. Defaults to no.
fn confirm_overwrite(path: &Path) -> Result<bool> {
    print!(
        "Output file '{}' already exists. Overwrite? [y/N]: ",
        path.display()
    );
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
