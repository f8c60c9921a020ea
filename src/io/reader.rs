//! PDF loading.
//!
//! `lopdf` parses documents synchronously, so each load runs inside
//! [`tokio::task::spawn_blocking`]; batch loading bounds concurrency with a
//! buffered stream while preserving input order in the results.

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;

use crate::error::{JoinError, Result};

/// A loaded PDF document with metadata about the load.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to load the document.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

/// Result of a single load operation.
pub type LoadResult = Result<LoadedPdf>;

/// PDF reader with configurable loading behavior.
#[derive(Debug, Clone)]
pub struct PdfReader {
    /// Whether to reject documents that load but contain no pages.
    verify: bool,
}

impl PdfReader {
    /// Create a new PDF reader with default settings.
    pub fn new() -> Self {
        Self { verify: true }
    }

    /// Create a reader that skips the empty-document check.
    pub fn without_verification() -> Self {
        Self { verify: false }
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file is not a valid PDF
    /// - The PDF is encrypted
    /// - The PDF has no pages (unless verification is disabled)
    pub async fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let path_buf = path.to_path_buf();

        if !path_buf.exists() {
            return Err(JoinError::file_not_found(path_buf));
        }
        if !path_buf.is_file() {
            return Err(JoinError::failed_to_load_pdf(path_buf, "Not a regular file"));
        }

        let start = Instant::now();

        let load_path = path_buf.clone();
        let doc = task::spawn_blocking(move || Document::load(&load_path))
            .await
            .map_err(|e| JoinError::other(format!("Load task failed: {e}")))?
            .map_err(|e| {
                let err_msg = e.to_string();
                if err_msg.contains("encrypt") || err_msg.contains("password") {
                    JoinError::encrypted_pdf(path_buf.clone())
                } else {
                    JoinError::failed_to_load_pdf(path_buf.clone(), err_msg)
                }
            })?;

        if self.verify && doc.get_pages().is_empty() {
            return Err(JoinError::corrupted_pdf(path_buf, "PDF has no pages"));
        }

        let load_time = start.elapsed();
        let page_count = doc.get_pages().len();
        let file_size = std::fs::metadata(&path_buf).map(|m| m.len()).unwrap_or(0);

        Ok(LoadedPdf {
            document: doc,
            path: path_buf,
            page_count,
            load_time,
            file_size,
        })
    }

    /// Load multiple PDF documents sequentially, in the order provided.
    pub async fn load_sequential(&self, paths: &[PathBuf]) -> Vec<LoadResult> {
        let mut results = Vec::with_capacity(paths.len());
        for path in paths {
            results.push(self.load(path).await);
        }
        results
    }

    /// Load multiple PDF documents concurrently.
    ///
    /// Runs at most `workers` loads at a time. Results come back in the same
    /// order as the input paths regardless of completion order.
    pub async fn load_parallel(&self, paths: &[PathBuf], workers: usize) -> Vec<LoadResult> {
        use futures::stream::{self, StreamExt};

        let workers = workers.max(1);

        let tasks: Vec<_> = paths
            .iter()
            .cloned()
            .enumerate()
            .map(|(idx, path)| {
                let reader = self.clone();
                async move { (idx, reader.load(&path).await) }
            })
            .collect();

        let mut indexed: Vec<(usize, LoadResult)> = stream::iter(tasks)
            .buffer_unordered(workers)
            .collect::<Vec<_>>()
            .await;

        indexed.sort_by_key(|(idx, _)| *idx);
        indexed.into_iter().map(|(_, result)| result).collect()
    }

    /// Load all PDFs with automatic parallelization.
    ///
    /// Sequential loading is used for small batches to reduce overhead.
    pub async fn load_all(&self, paths: &[PathBuf], max_workers: usize) -> Vec<LoadResult> {
        if paths.len() <= 3 {
            self.load_sequential(paths).await
        } else {
            self.load_parallel(paths, max_workers).await
        }
    }
}

impl Default for PdfReader {
    fn default() -> Self {
        Self::new()
    }
}
