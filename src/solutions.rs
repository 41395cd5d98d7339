use crate::exams::UploadSource;

/// A question/answer pair kept on the screen's recent list.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentQuestion {
    pub question: String,
    pub answer: String,
}

/// The recent list never grows past this; older entries fall off the end.
pub const MAX_RECENT_QUESTIONS: usize = 5;

/// A submitted question waiting on the worker's answer. The task id ties the
/// eventual response to this submission; any other id is stale and ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAsk {
    pub task_id: u64,
    pub question: String,
}

/// Ask-a-question screen: type a question or upload a photo of one, get an
/// answer back, and keep the last few exchanges on screen.
#[derive(Debug)]
pub struct SolutionScreen {
    pub question_input: String,
    pub input_cursor: usize,
    pub answer: Option<String>,
    pub recent: Vec<RecentQuestion>,
    pub pending: Option<PendingAsk>,
    pub next_task_id: u64,
    pub status_message: Option<String>,
    pub focused_panel: usize,
}

impl SolutionScreen {
    pub fn new() -> Self {
        Self {
            question_input: String::new(),
            input_cursor: 0,
            answer: None,
            recent: Vec::new(),
            pending: None,
            next_task_id: 1,
            status_message: None,
            focused_panel: 0,
        }
    }

    // Byte-cursor input ops, same idiom as the note editor.
    pub fn input_insert_char(&mut self, c: char) {
        self.question_input.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
    }

    pub fn input_backspace(&mut self) {
        if self.input_cursor > 0 {
            let prev = self.question_input[..self.input_cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.input_cursor -= prev;
            self.question_input.remove(self.input_cursor);
        }
    }

    pub fn input_move_left(&mut self) {
        if self.input_cursor > 0 {
            let prev = self.question_input[..self.input_cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.input_cursor -= prev;
        }
    }

    pub fn input_move_right(&mut self) {
        if self.input_cursor < self.question_input.len() {
            let next = self.question_input[self.input_cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.input_cursor += next;
        }
    }

    /// Take the typed question for submission, clearing the input. A blank
    /// input or an ask already in flight is refused.
    pub fn begin_ask(&mut self) -> Option<(u64, String)> {
        if self.pending.is_some() {
            return None;
        }
        let question = self.question_input.trim().to_string();
        if question.is_empty() {
            self.status_message = Some("Please enter a question first".to_string());
            return None;
        }
        self.question_input.clear();
        self.input_cursor = 0;
        Some(self.start_task(question))
    }

    /// Ask about an uploaded photo; the source label stands in for the
    /// question text, as there is no OCR behind it.
    pub fn begin_photo_ask(&mut self, source: UploadSource) -> Option<(u64, String)> {
        if self.pending.is_some() {
            return None;
        }
        self.status_message = Some(format!("Photo uploaded from {}!", source.as_str()));
        Some(self.start_task(format!("Image from {}", source.as_str())))
    }

    fn start_task(&mut self, question: String) -> (u64, String) {
        let task_id = self.next_task_id;
        self.next_task_id += 1;
        self.pending = Some(PendingAsk {
            task_id,
            question: question.clone(),
        });
        (task_id, question)
    }

    /// Apply the worker's answer for the pending ask. The newest exchange
    /// leads the recent list. An answer that does not match the pending task
    /// id is discarded.
    pub fn complete_ask(&mut self, task_id: u64, answer: String) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        if pending.task_id != task_id {
            self.pending = Some(pending);
            return;
        }

        self.recent.insert(
            0,
            RecentQuestion {
                question: pending.question,
                answer: answer.clone(),
            },
        );
        self.recent.truncate(MAX_RECENT_QUESTIONS);
        self.answer = Some(answer);
    }

    pub fn fail_ask(&mut self, task_id: u64, error: String) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        if pending.task_id != task_id {
            self.pending = Some(pending);
            return;
        }
        self.status_message = Some(format!("Failed to answer the question: {}", error));
    }
}

impl Default for SolutionScreen {
    fn default() -> Self {
        Self::new()
    }
}
