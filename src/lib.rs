//! pdfjoiner - pick, reorder, and join PDF files into a single document.
//!
//! Run without arguments for the interactive shell: add files, arrange their
//! order, and join them from there. With input files on the command line the
//! join runs directly.
//!
//! The crate is also usable as a library: [`merge::join_files`] loads a list
//! of PDFs, merges their pages in order, and writes the result.
//!
//! # Example
//!
//! ```no_run
//! use pdfjoiner::merge::join_files;
//! use std::path::{Path, PathBuf};
//!
//! # async fn example() -> pdfjoiner::Result<()> {
//! let inputs = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
//! let summary = join_files(&inputs, Path::new("joined.pdf")).await?;
//! println!("{} pages written", summary.total_pages);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod list;
pub mod merge;
pub mod output;
pub mod tui;
pub mod utils;

pub use config::{Config, OverwriteMode};
pub use error::{JoinError, Result};
pub use list::{FileEntry, FileList};
pub use merge::{JoinSummary, join_files};

/// Application name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Application version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
