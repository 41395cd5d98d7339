use crate::extract::{ExtractionOutcome, PdfTextPolicy};
use std::path::PathBuf;

/// One named unit of extracted document content, the subject of a
/// generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub content: SectionContent,
}

/// Extracted content is either raw text (txt, pdf pages) or an ordered
/// key-value row (csv). Kept tagged so callers never have to sniff strings.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    RawText(String),
    StructuredRow(Vec<(String, String)>),
}

impl SectionContent {
    pub fn as_display_text(&self) -> String {
        match self {
            SectionContent::RawText(text) => text.clone(),
            SectionContent::StructuredRow(fields) => fields
                .iter()
                .map(|(key, value)| format!("{}: {}", key, value))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn next(&self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const MIN_QUESTION_COUNT: u32 = 5;
pub const MAX_QUESTION_COUNT: u32 = 50;

/// Generation settings held by the create-question screen. The slider-style
/// controls keep `question_count` inside [5, 50]; the request boundary
/// validates it again instead of trusting the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub question_count: u32,
    pub difficulty: Difficulty,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            question_count: MIN_QUESTION_COUNT,
            difficulty: Difficulty::Easy,
        }
    }
}

/// One generation cycle: Idle until the user triggers a request, Requesting
/// while it is in flight, then Rendered or Failed. The next trigger returns
/// to Requesting directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    Idle,
    Requesting,
    Rendered,
    Failed,
}

#[derive(Debug)]
pub struct CreateQuestionScreen {
    pub files: Vec<PathBuf>,
    pub selected_file_index: usize,
    pub sections: Vec<Section>,
    pub selected_section: Option<usize>,
    pub config: GenerationConfig,
    pub generated_questions: Vec<String>,
    pub phase: GenerationPhase,
    /// Bumped on every request and every new extraction; a worker response
    /// carrying an older epoch is stale and must be discarded.
    pub generation_epoch: u64,
    /// Same guard for uploads: only the reply to the latest one applies.
    pub upload_epoch: u64,
    pub is_uploading: bool,
    pub status_message: Option<String>,
    pub last_error: Option<String>,
    pub focused_panel: usize,
}

impl CreateQuestionScreen {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self {
            files,
            selected_file_index: 0,
            sections: Vec::new(),
            selected_section: None,
            config: GenerationConfig::default(),
            generated_questions: Vec::new(),
            phase: GenerationPhase::Idle,
            generation_epoch: 0,
            upload_epoch: 0,
            is_uploading: false,
            status_message: None,
            last_error: None,
            focused_panel: 0,
        }
    }

    /// Install a fresh extraction result. The old section list is replaced
    /// wholesale and any prior selection is cleared, so a selection can never
    /// point into a previous upload. An in-flight generation is invalidated
    /// by bumping the epoch.
    pub fn apply_extraction(&mut self, outcome: ExtractionOutcome) {
        self.generation_epoch += 1;
        self.selected_section = None;
        self.phase = GenerationPhase::Idle;
        match outcome {
            ExtractionOutcome::Sections(sections) => {
                self.status_message = Some(format!("Extracted {} section(s)", sections.len()));
                self.sections = sections;
            }
            ExtractionOutcome::Empty => {
                self.sections = Vec::new();
                self.status_message = Some("No sections found in the uploaded file".to_string());
            }
        }
        self.last_error = None;
    }

    pub fn selected_section(&self) -> Option<&Section> {
        self.selected_section.and_then(|i| self.sections.get(i))
    }
}

/// Requests handed to the worker thread. Epoch/task ids are echoed back
/// verbatim in the matching response.
#[derive(Debug)]
pub enum AiRequest {
    ExtractDocument {
        epoch: u64,
        path: PathBuf,
        policy: PdfTextPolicy,
    },
    GenerateQuestions {
        epoch: u64,
        model: String,
        section: Section,
        config: GenerationConfig,
    },
    AnswerQuestion {
        task_id: u64,
        model: String,
        question: String,
    },
    EvaluateExam {
        task_id: u64,
        model: String,
        title: String,
    },
}

#[derive(Debug)]
pub enum AiResponse {
    Extracted {
        epoch: u64,
        outcome: ExtractionOutcome,
    },
    ExtractionFailed {
        epoch: u64,
        error: String,
        /// Unsupported extensions only warn; everything else clears the
        /// section list.
        unsupported: bool,
    },
    Questions {
        epoch: u64,
        questions: Vec<String>,
    },
    GenerationFailed {
        epoch: u64,
        error: String,
    },
    QuestionAnswered {
        task_id: u64,
        answer: String,
    },
    AnswerFailed {
        task_id: u64,
        error: String,
    },
    ExamEvaluated {
        task_id: u64,
        feedback: String,
    },
    ExamFailed {
        task_id: u64,
        error: String,
    },
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Menu,
    CreateQuestion,
    Notes,
    NoteEditor,
    Solutions,
    Exams,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, title: &str) -> Section {
        Section {
            id: id.to_string(),
            title: title.to_string(),
            content: SectionContent::RawText("body".to_string()),
        }
    }

    #[test]
    fn test_difficulty_cycle_covers_all_levels() {
        assert_eq!(Difficulty::Easy.next(), Difficulty::Medium);
        assert_eq!(Difficulty::Medium.next(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
    }

    #[test]
    fn test_difficulty_display_strings() {
        assert_eq!(Difficulty::Easy.to_string(), "Easy");
        assert_eq!(Difficulty::Medium.to_string(), "Medium");
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
    }

    #[test]
    fn test_structured_row_display_text() {
        let content = SectionContent::StructuredRow(vec![
            ("title".to_string(), "Algebra".to_string()),
            ("pages".to_string(), "12".to_string()),
        ]);
        assert_eq!(content.as_display_text(), "title: Algebra\npages: 12");
    }

    #[test]
    fn test_apply_extraction_replaces_sections_and_clears_selection() {
        let mut screen = CreateQuestionScreen::new(Vec::new());
        screen.sections = vec![section("0", "Old Page 1"), section("1", "Old Page 2")];
        screen.selected_section = Some(1);

        screen.apply_extraction(ExtractionOutcome::Sections(vec![section("0", "New Page 1")]));

        assert_eq!(screen.sections.len(), 1);
        assert_eq!(screen.sections[0].title, "New Page 1");
        assert_eq!(screen.selected_section, None);
    }

    #[test]
    fn test_apply_extraction_bumps_epoch() {
        let mut screen = CreateQuestionScreen::new(Vec::new());
        let before = screen.generation_epoch;
        screen.apply_extraction(ExtractionOutcome::Empty);
        assert!(screen.generation_epoch > before);
        assert!(screen.sections.is_empty());
    }

    #[test]
    fn test_selected_section_out_of_range_is_none() {
        let mut screen = CreateQuestionScreen::new(Vec::new());
        screen.sections = vec![section("0", "Page 1")];
        screen.selected_section = Some(5);
        assert!(screen.selected_section().is_none());
    }
}
