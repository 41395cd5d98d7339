use chrono::Local;

#[derive(Debug, Clone, PartialEq)]
pub struct ExamRecord {
    pub id: String,
    pub title: String,
    pub score: Option<String>,
    pub date: String,
    pub feedback: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadSource {
    Camera,
    Gallery,
}

impl UploadSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadSource::Camera => "Camera",
            UploadSource::Gallery => "Gallery",
        }
    }
}

/// An upload that is waiting on the worker's completion message. The task id
/// ties the eventual response to this upload; a response with any other id
/// is stale and ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpload {
    pub task_id: u64,
    pub title: String,
    pub source: UploadSource,
}

#[derive(Debug)]
pub struct ExamScreen {
    pub exams: Vec<ExamRecord>,
    pub pending: Option<PendingUpload>,
    pub next_task_id: u64,
    pub status_message: Option<String>,
}

impl ExamScreen {
    pub fn new() -> Self {
        Self {
            exams: Vec::new(),
            pending: None,
            next_task_id: 1,
            status_message: None,
        }
    }

    pub fn with_sample_history() -> Self {
        let mut screen = Self::new();
        screen.exams = vec![
            ExamRecord {
                id: "1".to_string(),
                title: "Math Exam 1".to_string(),
                score: Some("85%".to_string()),
                date: "2023-01-01".to_string(),
                feedback: "Good performance overall.".to_string(),
            },
            ExamRecord {
                id: "2".to_string(),
                title: "Science Quiz".to_string(),
                score: Some("90%".to_string()),
                date: "2023-01-10".to_string(),
                feedback: "Excellent understanding of topics.".to_string(),
            },
        ];
        screen
    }

    /// Start an upload unless one is already in flight. Returns the task id
    /// and exam title the caller should hand to the worker.
    pub fn begin_upload(&mut self, source: UploadSource) -> Option<(u64, String)> {
        if self.pending.is_some() {
            return None;
        }

        let task_id = self.next_task_id;
        self.next_task_id += 1;
        let title = format!("New Exam {}", self.exams.len() + 1);
        self.status_message = Some(format!("Uploading photo from {}...", source.as_str()));
        self.pending = Some(PendingUpload {
            task_id,
            title: title.clone(),
            source,
        });
        Some((task_id, title))
    }

    /// Apply the worker's completion for a pending upload. A completion that
    /// does not match the pending task id is discarded.
    pub fn complete_upload(&mut self, task_id: u64, feedback: String) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        if pending.task_id != task_id {
            self.pending = Some(pending);
            return;
        }

        let record = ExamRecord {
            id: (self.exams.len() + 1).to_string(),
            title: pending.title,
            score: None,
            date: Local::now().format("%Y-%m-%d").to_string(),
            feedback,
        };
        self.exams.insert(0, record);
        self.status_message = Some("Exam uploaded and evaluated successfully!".to_string());
    }

    pub fn fail_upload(&mut self, task_id: u64, error: String) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        if pending.task_id != task_id {
            self.pending = Some(pending);
            return;
        }
        self.status_message = Some(format!("Exam evaluation failed: {}", error));
    }
}

impl Default for ExamScreen {
    fn default() -> Self {
        Self::with_sample_history()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_upload_is_single_flight() {
        let mut screen = ExamScreen::new();
        let first = screen.begin_upload(UploadSource::Camera);
        assert!(first.is_some());
        assert!(screen.begin_upload(UploadSource::Gallery).is_none());
    }

    #[test]
    fn test_complete_upload_prepends_record() {
        let mut screen = ExamScreen::with_sample_history();
        let (task_id, title) = screen.begin_upload(UploadSource::Gallery).unwrap();
        assert_eq!(title, "New Exam 3");

        screen.complete_upload(task_id, "Solid work.".to_string());

        assert!(screen.pending.is_none());
        assert_eq!(screen.exams.len(), 3);
        assert_eq!(screen.exams[0].title, "New Exam 3");
        assert_eq!(screen.exams[0].feedback, "Solid work.");
        assert_eq!(screen.exams[0].score, None);
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut screen = ExamScreen::new();
        let (task_id, _) = screen.begin_upload(UploadSource::Camera).unwrap();

        screen.complete_upload(task_id + 99, "stale".to_string());

        assert!(screen.pending.is_some());
        assert!(screen.exams.is_empty());
    }

    #[test]
    fn test_completion_without_pending_is_ignored() {
        let mut screen = ExamScreen::new();
        screen.complete_upload(1, "ghost".to_string());
        assert!(screen.exams.is_empty());
    }

    #[test]
    fn test_failed_upload_keeps_history_untouched() {
        let mut screen = ExamScreen::with_sample_history();
        let (task_id, _) = screen.begin_upload(UploadSource::Camera).unwrap();

        screen.fail_upload(task_id, "network down".to_string());

        assert!(screen.pending.is_none());
        assert_eq!(screen.exams.len(), 2);
        assert!(screen
            .status_message
            .as_deref()
            .unwrap()
            .contains("network down"));
    }
}
