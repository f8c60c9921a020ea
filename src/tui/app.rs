//! Application state for the interactive shell.
//!
//! Holds the file list, the cursor and mark state, the active dialog, and
//! the in-flight join task. Key handling in the event loop translates into
//! calls on [`App`]; rendering reads from it.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tokio::task::JoinHandle;

use crate::config::DEFAULT_OUTPUT_NAME;
use crate::error::Result;
use crate::list::FileList;
use crate::merge::{JoinSummary, join_files};
use crate::tui::dialog::{DialogKind, InputState};
use crate::utils::{ensure_pdf_extension, resolve_pdf_paths};

/// Interactive shell state.
pub struct App {
    /// Ordered list of files to join.
    pub files: FileList,

    /// Cursor row into the file list.
    pub cursor: usize,

    /// Indices of marked entries. Marks select multiple rows for removal.
    pub marked: BTreeSet<usize>,

    /// Currently open dialog, if any.
    pub dialog: Option<DialogKind>,

    /// Spinner animation frame, advanced while a join runs.
    pub spinner_frame: usize,

    /// In-flight join task.
    join: Option<JoinHandle<Result<JoinSummary>>>,

    /// Directory used to pre-fill the add and save prompts.
    documents_dir: PathBuf,

    should_quit: bool,
}

impl App {
    /// Create the shell state with an empty file list.
    pub fn new() -> Self {
        let documents_dir = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            files: FileList::new(),
            cursor: 0,
            marked: BTreeSet::new(),
            dialog: None,
            spinner_frame: 0,
            join: None,
            documents_dir,
            should_quit: false,
        }
    }

    /// Whether the event loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request exit. Ignored while a join is running.
    pub fn quit(&mut self) {
        if !self.is_joining() {
            self.should_quit = true;
        }
    }

    /// Whether a join task is currently running.
    pub fn is_joining(&self) -> bool {
        self.join.is_some()
    }

    /// Whether a dialog is currently open.
    pub fn is_dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    /// Move the cursor up one row.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down one row.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.files.len() {
            self.cursor += 1;
        }
    }

    /// Toggle the mark on the cursor row, then advance the cursor.
    pub fn toggle_mark(&mut self) {
        if self.files.is_empty() {
            return;
        }
        if !self.marked.remove(&self.cursor) {
            self.marked.insert(self.cursor);
        }
        self.cursor_down();
    }

    /// Open the add-files prompt, pre-filled with the documents directory.
    pub fn open_add_dialog(&mut self) {
        let mut prefill = self.documents_dir.display().to_string();
        if !prefill.ends_with(std::path::MAIN_SEPARATOR) {
            prefill.push(std::path::MAIN_SEPARATOR);
        }
        self.dialog = Some(DialogKind::AddFiles(InputState::new(prefill)));
    }

    /// Remove the marked entries, or the cursor row when nothing is marked.
    pub fn remove_selected(&mut self) {
        if self.files.is_empty() {
            return;
        }

        let indices: Vec<usize> = if self.marked.is_empty() {
            vec![self.cursor]
        } else {
            self.marked.iter().copied().collect()
        };

        self.files.remove_at(&indices);
        self.marked.clear();
        self.clamp_cursor();
    }

    /// Remove every entry from the list.
    pub fn clear_all(&mut self) {
        self.files.clear();
        self.marked.clear();
        self.cursor = 0;
    }

    /// Move the cursor row by `offset` positions; the cursor follows the
    /// entry. Out-of-range moves do nothing.
    pub fn move_item(&mut self, offset: isize) {
        if let Some(new_index) = self.files.move_entry(self.cursor, offset) {
            self.remap_marks_after_move(self.cursor, new_index);
            self.cursor = new_index;
        }
    }

    /// Start the join flow.
    ///
    /// With an empty list this shows a message and touches no files at all.
    /// Otherwise it opens the save prompt; the join itself starts once the
    /// output path is confirmed.
    pub fn request_join(&mut self) {
        if self.is_joining() {
            return;
        }

        if self.files.is_empty() {
            self.dialog = Some(DialogKind::Message {
                title: "No files".to_string(),
                message: "There are no files to join. Add PDF files first.".to_string(),
            });
            return;
        }

        let prefill = self.documents_dir.join(DEFAULT_OUTPUT_NAME);
        self.dialog = Some(DialogKind::SaveOutput(InputState::new(
            prefill.display().to_string(),
        )));
    }

    /// Confirm the active dialog.
    pub fn submit_dialog(&mut self) {
        match self.dialog.take() {
            Some(DialogKind::AddFiles(input)) => {
                let pattern = input.value.trim().to_string();
                if !pattern.is_empty() {
                    self.add_files(&pattern);
                }
            }
            Some(DialogKind::SaveOutput(input)) => {
                let value = input.value.trim().to_string();
                if value.is_empty() {
                    // Nothing to save to; keep the prompt open.
                    self.dialog = Some(DialogKind::SaveOutput(input));
                    return;
                }
                let output = ensure_pdf_extension(Path::new(&value));
                self.begin_join(&output);
            }
            Some(DialogKind::Message { .. }) | Some(DialogKind::Error { .. }) | None => {}
        }
    }

    /// Dismiss the active dialog without acting on it.
    pub fn cancel_dialog(&mut self) {
        self.dialog = None;
    }

    /// Resolve `pattern` and append the matching PDFs to the list.
    fn add_files(&mut self, pattern: &str) {
        match resolve_pdf_paths(pattern) {
            Ok(paths) if paths.is_empty() => {
                self.dialog = Some(DialogKind::Message {
                    title: "No matches".to_string(),
                    message: format!("No PDF files matched '{pattern}'."),
                });
            }
            Ok(paths) => {
                self.files.add_all(paths);
            }
            Err(err) => {
                self.show_error("Add failed", err.to_string());
            }
        }
    }

    /// Spawn the join task for the current list, targeting `output`.
    fn begin_join(&mut self, output: &Path) {
        let paths = self.files.paths();
        let output = output.to_path_buf();
        self.spinner_frame = 0;
        self.join = Some(tokio::spawn(
            async move { join_files(&paths, &output).await },
        ));
    }

    /// Check the join task and absorb its outcome when finished.
    ///
    /// On success the list is cleared and a message names the output
    /// location; on failure the error is shown in a dialog.
    pub async fn poll_join(&mut self) {
        let finished = self.join.as_ref().is_some_and(|h| h.is_finished());
        if !finished {
            if self.join.is_some() {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
            }
            return;
        }

        let Some(handle) = self.join.take() else {
            return;
        };

        match handle.await {
            Ok(Ok(summary)) => {
                self.clear_all();
                self.dialog = Some(DialogKind::Message {
                    title: "File saved".to_string(),
                    message: format!(
                        "Joined {} files ({} pages) into {}",
                        summary.files_joined,
                        summary.total_pages,
                        summary.output.display()
                    ),
                });
            }
            Ok(Err(err)) => {
                self.show_error("Join failed", err.to_string());
            }
            Err(err) => {
                self.show_error("Join failed", format!("join task aborted: {err}"));
            }
        }
    }

    fn show_error(&mut self, title: &str, message: String) {
        self.dialog = Some(DialogKind::Error {
            title: title.to_string(),
            message,
        });
    }

    fn clamp_cursor(&mut self) {
        if self.files.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.files.len() - 1);
        }
    }

    /// Shift marks to keep them pointing at the same entries after a move
    /// from `from` to `to`.
    fn remap_marks_after_move(&mut self, from: usize, to: usize) {
        if from == to || self.marked.is_empty() {
            return;
        }

        self.marked = self
            .marked
            .iter()
            .map(|&m| {
                if m == from {
                    to
                } else if from < to && m > from && m <= to {
                    m - 1
                } else if to < from && m >= to && m < from {
                    m + 1
                } else {
                    m
                }
            })
            .collect();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
