//! PDF writing.
//!
//! Writes go to a temporary file that is renamed over the target once the
//! document is fully serialized, so a failed write never leaves a truncated
//! output behind and the file handle is released on every exit path.

use lopdf::Document;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;

use crate::error::{JoinError, Result};

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,

    /// Compress the PDF before writing.
    pub compress: bool,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            compress: true,
            buffer_size: 8192,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,
}

/// PDF writer with configurable behavior.
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self {
            options: WriteOptions::default(),
        }
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Save a PDF document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the output file cannot be created or the write
    /// fails partway through.
    pub async fn save(&self, doc: &Document, path: &Path) -> Result<()> {
        let _stats = self.save_with_stats(doc, path).await?;
        Ok(())
    }

    /// Save a PDF and return statistics about the operation.
    pub async fn save_with_stats(&self, doc: &Document, path: &Path) -> Result<WriteStatistics> {
        let path_buf = path.to_path_buf();
        let options = self.options.clone();

        // Serialization is CPU-bound, so it runs on the blocking pool with
        // its own copy of the document.
        let mut doc_clone = doc.clone();

        let stats = task::spawn_blocking(move || {
            let start = Instant::now();

            if options.compress {
                doc_clone.compress();
            }

            let write_path = if options.atomic {
                path_buf.with_extension("pdf.tmp")
            } else {
                path_buf.clone()
            };

            let file = std::fs::File::create(&write_path).map_err(|e| {
                JoinError::FailedToCreateOutput {
                    path: write_path.clone(),
                    source: e,
                }
            })?;

            let mut writer = std::io::BufWriter::with_capacity(options.buffer_size, file);

            doc_clone
                .save_to(&mut writer)
                .map_err(|e| JoinError::FailedToWrite {
                    path: write_path.clone(),
                    source: std::io::Error::other(e),
                })?;

            writer.flush().map_err(|e| JoinError::FailedToWrite {
                path: write_path.clone(),
                source: e,
            })?;
            drop(writer);

            if options.atomic {
                std::fs::rename(&write_path, &path_buf).map_err(|e| JoinError::FailedToWrite {
                    path: path_buf.clone(),
                    source: e,
                })?;
            }

            let write_time = start.elapsed();
            let file_size = std::fs::metadata(&path_buf).map(|m| m.len()).unwrap_or(0);

            Ok::<_, JoinError>(WriteStatistics {
                write_time,
                file_size,
                output_path: path_buf,
            })
        })
        .await
        .map_err(|e| JoinError::other(format!("Write task failed: {e}")))??;

        Ok(stats)
    }

    /// Check whether the output path's parent directory exists and is
    /// writable, without creating anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory is missing or read-only.
    pub async fn can_write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            if !parent.exists() {
                return Err(JoinError::invalid_config(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )));
            }

            let metadata = tokio::fs::metadata(parent).await?;
            if metadata.permissions().readonly() {
                return Err(JoinError::invalid_config(format!(
                    "Output directory is not writable: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }

    /// Check if the output file already exists.
    pub async fn exists(&self, path: &Path) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::single_page_document;
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_pdf() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("output.pdf");

        let doc = single_page_document(612.0);
        let writer = PdfWriter::new();

        writer.save(&doc, &output_path).await.unwrap();
        assert!(output_path.exists());
    }

    #[tokio::test]
    async fn test_save_with_stats() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("output.pdf");

        let doc = single_page_document(612.0);
        let writer = PdfWriter::new();

        let stats = writer.save_with_stats(&doc, &output_path).await.unwrap();

        assert!(stats.file_size > 0);
        assert_eq!(stats.output_path, output_path);
    }

    #[tokio::test]
    async fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("output.pdf");

        let doc = single_page_document(612.0);
        let writer = PdfWriter::new();
        writer.save(&doc, &output_path).await.unwrap();

        let leftovers: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn test_non_atomic_write() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("output.pdf");

        let doc = single_page_document(612.0);
        let writer = PdfWriter::with_options(WriteOptions {
            atomic: false,
            ..Default::default()
        });

        writer.save(&doc, &output_path).await.unwrap();
        assert!(output_path.exists());
    }

    #[tokio::test]
    async fn test_save_to_nonexistent_directory() {
        let doc = single_page_document(612.0);
        let writer = PdfWriter::new();

        let result = writer
            .save(&doc, Path::new("/nonexistent-dir/output.pdf"))
            .await;
        assert!(matches!(
            result,
            Err(JoinError::FailedToCreateOutput { .. })
        ));
    }

    #[tokio::test]
    async fn test_can_write() {
        let temp_dir = TempDir::new().unwrap();
        let writer = PdfWriter::new();

        assert!(
            writer
                .can_write(&temp_dir.path().join("output.pdf"))
                .await
                .is_ok()
        );
        assert!(
            writer
                .can_write(Path::new("/nonexistent-dir/output.pdf"))
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_exists() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join("existing.pdf");
        std::fs::File::create(&existing).unwrap();

        let writer = PdfWriter::new();
        assert!(writer.exists(&existing).await);
        assert!(!writer.exists(&temp_dir.path().join("missing.pdf")).await);
    }
}
