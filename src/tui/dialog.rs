//! Dialog state for the interactive shell.

/// Single-line text input state shared by the add and save prompts.
///
/// The cursor is a character index into `value`; editing operations keep it
/// within bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    /// Current input text.
    pub value: String,
    /// Cursor position, in characters.
    pub cursor: usize,
}

impl InputState {
    /// Create an input pre-filled with `initial`, cursor at the end.
    pub fn new(initial: impl Into<String>) -> Self {
        let value = initial.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// Byte offset of the cursor into the value.
    fn byte_offset(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let offset = self.byte_offset();
        self.value.insert(offset, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let offset = self.byte_offset();
            self.value.remove(offset);
        }
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let offset = self.byte_offset();
            self.value.remove(offset);
        }
    }

    /// Move the cursor one character left.
    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one character right.
    pub fn right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the start of the input.
    pub fn home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end of the input.
    pub fn end(&mut self) {
        self.cursor = self.value.chars().count();
    }
}

/// Kind of dialog currently shown over the file list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogKind {
    /// Prompt for paths or a glob pattern to add to the list.
    AddFiles(InputState),

    /// Prompt for the output path before joining.
    SaveOutput(InputState),

    /// Informational message, dismissed with Enter or Esc.
    Message {
        /// Dialog title.
        title: String,
        /// Message body.
        message: String,
    },

    /// Error message, dismissed with Enter or Esc.
    Error {
        /// Dialog title.
        title: String,
        /// Message body.
        message: String,
    },
}

impl DialogKind {
    /// Mutable access to the input state, when this dialog has one.
    pub fn input_mut(&mut self) -> Option<&mut InputState> {
        match self {
            Self::AddFiles(input) | Self::SaveOutput(input) => Some(input),
            _ => None,
        }
    }
}
