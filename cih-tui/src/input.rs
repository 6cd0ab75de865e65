//! Location bar input state.
//!
//! The cursor is a character index, so multi-byte input is edited safely.

/// Manages the text typed into the location bar.
#[derive(Debug, Default, Clone)]
pub struct LocationInput {
    /// Current input buffer.
    pub buffer: String,
    /// Cursor position, in characters.
    pub cursor: usize,
    /// Current completion candidates.
    pub completions: Vec<String>,
    /// Selected completion index (None = no selection).
    pub completion_idx: Option<usize>,
}

impl LocationInput {
    /// Creates an input pre-filled with `text`, cursor at the end.
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: text.to_string(),
            cursor: text.chars().count(),
            ..Self::default()
        }
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map_or(self.buffer.len(), |(idx, _)| idx)
    }

    fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.buffer.insert(idx, c);
        self.cursor += 1;
        self.reset_completions();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.buffer.remove(idx);
            self.reset_completions();
        }
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let idx = self.byte_index(self.cursor);
            self.buffer.remove(idx);
            self.reset_completions();
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.len();
    }

    /// Clear all input state.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.reset_completions();
    }

    fn reset_completions(&mut self) {
        self.completions.clear();
        self.completion_idx = None;
    }

    /// Cycles through `candidates` that start with the typed prefix.
    ///
    /// The first call filters candidates against the buffer; later calls
    /// cycle through that same set until the buffer is edited again. The
    /// selected completion replaces the buffer.
    pub fn complete<'a>(&mut self, candidates: impl IntoIterator<Item = &'a str>) {
        if self.completions.is_empty() {
            let prefix = self.buffer.clone();
            self.completions = candidates
                .into_iter()
                .filter(|candidate| candidate.starts_with(&prefix))
                .map(str::to_string)
                .collect();
            self.completion_idx = None;
        }

        if self.completions.is_empty() {
            return;
        }

        let next = match self.completion_idx {
            None => 0,
            Some(idx) => (idx + 1) % self.completions.len(),
        };
        self.completion_idx = Some(next);
        self.buffer = self.completions[next].clone();
        self.cursor = self.len();
    }
}
