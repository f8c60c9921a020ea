//! Core PDF merging implementation.
//!
//! Combines multiple loaded documents into one by renumbering each
//! subsequent document past the running object-id high-water mark, moving its
//! objects into the base document, and appending its page references to the
//! base page tree.

use lopdf::{Document, Object, ObjectId};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::error::{JoinError, Result};
use crate::io::reader::{LoadedPdf, PdfReader};

/// Default number of concurrent input loads.
const DEFAULT_LOAD_WORKERS: usize = 4;

/// Statistics about a merge operation.
#[derive(Debug, Clone)]
pub struct MergeStatistics {
    /// Number of PDFs merged.
    pub files_merged: usize,

    /// Total number of pages in the merged document.
    pub total_pages: usize,

    /// Total time taken for the merge, including loading.
    pub merge_time: Duration,

    /// Time taken to load all inputs.
    pub load_time: Duration,

    /// Total size of the input files in bytes.
    pub input_size: u64,
}

/// Result of a merge operation.
pub struct MergeResult {
    /// The merged PDF document, not yet written anywhere.
    pub document: Document,

    /// Statistics about the merge.
    pub statistics: MergeStatistics,

    /// Paths of the files that were merged, in merge order.
    pub merged_files: Vec<PathBuf>,
}

/// PDF merger that combines multiple documents in input order.
pub struct Merger {
    reader: PdfReader,
}

impl Merger {
    /// Create a new merger with default settings.
    pub fn new() -> Self {
        Self {
            reader: PdfReader::new(),
        }
    }

    /// Merge the given PDF files, in order, into one document.
    ///
    /// The first failing input aborts the merge; there is no skip-and-continue
    /// mode, because the output order is exactly what the user arranged.
    ///
    /// # Errors
    ///
    /// Returns an error if `inputs` is empty, any input fails to load, or the
    /// page-tree surgery fails.
    pub async fn merge(&self, inputs: &[PathBuf]) -> Result<MergeResult> {
        if inputs.is_empty() {
            return Err(JoinError::NoFilesToJoin);
        }

        let merge_start = Instant::now();

        let load_start = Instant::now();
        let load_results = self.reader.load_all(inputs, DEFAULT_LOAD_WORKERS).await;
        let load_time = load_start.elapsed();

        let mut loaded = Vec::with_capacity(load_results.len());
        for result in load_results {
            loaded.push(result?);
        }

        let document = merge_documents(&loaded)?;
        let merge_time = merge_start.elapsed();

        let statistics = MergeStatistics {
            files_merged: loaded.len(),
            total_pages: document.get_pages().len(),
            merge_time,
            load_time,
            input_size: loaded.iter().map(|p| p.file_size).sum(),
        };

        let merged_files = loaded.into_iter().map(|p| p.path).collect();

        Ok(MergeResult {
            document,
            statistics,
            merged_files,
        })
    }
}

impl Default for Merger {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge loaded documents into one, first document as base.
fn merge_documents(loaded: &[LoadedPdf]) -> Result<Document> {
    let (base, rest) = loaded
        .split_first()
        .ok_or(JoinError::NoFilesToJoin)?;

    let mut merged = base.document.clone();
    let mut max_id = merged.max_id;

    for input in rest {
        let mut doc = input.document.clone();

        // Renumber objects to avoid ID conflicts with what's already merged.
        doc.renumber_objects_with(max_id + 1);
        max_id = doc.max_id;

        let doc_pages: Vec<ObjectId> = doc.get_pages().into_values().collect();

        merged.objects.extend(doc.objects);

        add_pages_to_tree(&mut merged, &doc_pages)?;
    }

    // Renumber for consistency before writing.
    merged.renumber_objects();

    Ok(merged)
}

/// Append page references to the merged document's page tree.
fn add_pages_to_tree(merged: &mut Document, page_ids: &[ObjectId]) -> Result<()> {
    let catalog = merged
        .catalog_mut()
        .map_err(|e| JoinError::merge_failed(format!("Failed to get catalog: {e}")))?;

    let pages_id = catalog
        .get(b"Pages")
        .and_then(|p| p.as_reference())
        .map_err(|e| JoinError::merge_failed(format!("Failed to get pages reference: {e}")))?;

    let pages_obj = merged
        .get_object_mut(pages_id)
        .map_err(|e| JoinError::merge_failed(format!("Failed to get pages object: {e}")))?;

    let Object::Dictionary(dict) = pages_obj else {
        return Err(JoinError::merge_failed("Pages object is not a dictionary"));
    };

    let kids = dict
        .get_mut(b"Kids")
        .map_err(|_| JoinError::merge_failed("Pages dictionary missing Kids array"))?;

    let Object::Array(kids_array) = kids else {
        return Err(JoinError::merge_failed("Kids is not an array"));
    };

    for &page_id in page_ids {
        kids_array.push(Object::Reference(page_id));
    }

    let current_count = dict.get(b"Count").and_then(|c| c.as_i64()).unwrap_or(0);
    dict.set("Count", Object::Integer(current_count + page_ids.len() as i64));

    Ok(())
}
