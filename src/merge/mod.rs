//! Merging PDFs and the one-call join operation.

pub mod merger;

pub use merger::{MergeResult, MergeStatistics, Merger};

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::io::PdfWriter;

/// Summary of a completed join, for user notification and `--json` output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinSummary {
    /// Where the merged document was written.
    pub output: PathBuf,

    /// Number of input files joined.
    pub files_joined: usize,

    /// Total pages in the output document.
    pub total_pages: usize,

    /// Size of the output file in bytes.
    pub output_size: u64,

    /// Wall-clock duration of the whole join in milliseconds.
    pub elapsed_ms: u64,
}

/// Load the inputs in order, merge them, and write the result to `output`.
///
/// This is the single entry point shared by the interactive shell and the
/// headless mode: the caller hands over an ordered snapshot of paths and gets
/// back either a [`JoinSummary`] or a typed error to show the user.
///
/// # Errors
///
/// Returns an error if `inputs` is empty, any input fails to load, or the
/// output cannot be written.
pub async fn join_files(inputs: &[PathBuf], output: &Path) -> Result<JoinSummary> {
    let start = std::time::Instant::now();

    let merger = Merger::new();
    let result = merger.merge(inputs).await?;

    let writer = PdfWriter::new();
    let write_stats = writer.save_with_stats(&result.document, output).await?;

    Ok(JoinSummary {
        output: write_stats.output_path,
        files_joined: result.statistics.files_merged,
        total_pages: result.statistics.total_pages,
        output_size: write_stats.file_size,
        elapsed_ms: start.elapsed().as_millis() as u64,
    })
}
