/// Notes live for the lifetime of the screen value; there is no store
/// behind them and nothing survives dismissing the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub name: String,
    pub notes: Vec<String>,
}

#[derive(Debug)]
pub struct NotesScreen {
    pub subjects: Vec<Subject>,
    pub selected_index: usize,
    pub adding_subject: bool,
    pub subject_input: String,
    pub subject_cursor: usize,
    pub status_message: Option<String>,
}

impl NotesScreen {
    pub fn new() -> Self {
        Self {
            subjects: Vec::new(),
            selected_index: 0,
            adding_subject: false,
            subject_input: String::new(),
            subject_cursor: 0,
            status_message: None,
        }
    }

    /// Create the subject if it does not exist yet and return its index.
    /// Blank names are refused.
    pub fn add_subject(&mut self, name: &str) -> Option<usize> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        if let Some(index) = self.subjects.iter().position(|s| s.name == name) {
            return Some(index);
        }
        self.subjects.push(Subject {
            name: name.to_string(),
            notes: Vec::new(),
        });
        Some(self.subjects.len() - 1)
    }

    pub fn add_note(&mut self, subject_index: usize, text: String) -> bool {
        match self.subjects.get_mut(subject_index) {
            Some(subject) => {
                subject.notes.push(text);
                true
            }
            None => false,
        }
    }

    // The subject input keeps a byte cursor, same as the note editor.
    pub fn subject_insert_char(&mut self, c: char) {
        self.subject_input.insert(self.subject_cursor, c);
        self.subject_cursor += c.len_utf8();
    }

    pub fn subject_backspace(&mut self) {
        if self.subject_cursor > 0 {
            let prev = self.subject_input[..self.subject_cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.subject_cursor -= prev;
            self.subject_input.remove(self.subject_cursor);
        }
    }

    pub fn subject_move_left(&mut self) {
        if self.subject_cursor > 0 {
            let prev = self.subject_input[..self.subject_cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.subject_cursor -= prev;
        }
    }

    pub fn subject_move_right(&mut self) {
        if self.subject_cursor < self.subject_input.len() {
            let next = self.subject_input[self.subject_cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.subject_cursor += next;
        }
    }
}

impl Default for NotesScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Multiline note input with an insertion cursor, same buffer idiom as the
/// subject input but scoped to one subject.
#[derive(Debug)]
pub struct NoteEditor {
    pub subject_index: usize,
    pub subject_name: String,
    pub buffer: String,
    pub cursor: usize,
}

impl NoteEditor {
    pub fn new(subject_index: usize, subject_name: String) -> Self {
        Self {
            subject_index,
            subject_name,
            buffer: String::new(),
            cursor: 0,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.buffer[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev;
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            let prev = self.buffer[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            let next = self.buffer[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor += next;
        }
    }

    /// Take the buffered note if it has any non-whitespace content, clearing
    /// the editor either way the save succeeds.
    pub fn take_note(&mut self) -> Option<String> {
        if self.buffer.trim().is_empty() {
            return None;
        }
        self.cursor = 0;
        Some(std::mem::take(&mut self.buffer))
    }
}
