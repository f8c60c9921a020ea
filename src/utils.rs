//! Path expansion helpers for the add-files prompt.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::list::is_pdf_path;

/// Expand multiple glob patterns into filesystem paths.
///
/// Accepts anything iterable with items that convert to `&str`, e.g.
/// `&[&str]`, `Vec<String>`, or `Vec<&str>`. Returns a flattened list of
/// resolved paths in glob order.
///
/// Errors:
/// - Propagates `glob` parse errors.
/// - Propagates filesystem errors from the glob iterator.
pub fn resolve_patterns<T>(patterns: T) -> Result<Vec<PathBuf>>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut resolved_paths = Vec::new();

    for pattern in patterns {
        let paths = glob::glob(pattern.as_ref())?;
        for entry in paths {
            resolved_paths.push(entry?);
        }
    }

    Ok(resolved_paths)
}

/// Expand a single pattern and keep only PDF files.
///
/// A literal path with no glob metacharacters resolves to itself when it
/// exists, so plain paths typed into the prompt work unchanged. Non-PDF
/// matches (directories, other extensions) are dropped silently.
pub fn resolve_pdf_paths(pattern: &str) -> Result<Vec<PathBuf>> {
    let resolved = resolve_patterns([pattern])?;
    Ok(resolved
        .into_iter()
        .filter(|p| p.is_file() && is_pdf_path(p))
        .collect())
}

/// Give a path a `.pdf` extension unless it already has one.
///
/// Used on save-prompt input so that typing `Document` produces
/// `Document.pdf`. An existing `.pdf` extension (any case) is kept as-is.
pub fn ensure_pdf_extension(path: &Path) -> PathBuf {
    if is_pdf_path(path) {
        path.to_path_buf()
    } else {
        let mut s = path.as_os_str().to_owned();
        s.push(".pdf");
        PathBuf::from(s)
    }
}
