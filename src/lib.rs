pub mod ai;
pub mod ai_worker;
pub mod exams;
pub mod extract;
pub mod logger;
pub mod models;
pub mod notes;
pub mod picker;
pub mod session;
pub mod solutions;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use ai::{
    answer_question, build_prompt, generate_questions, split_questions, GenAiClient,
    GenerateError, API_KEY_ENV, DEFAULT_MODEL,
};
pub use ai_worker::spawn_ai_worker;
pub use exams::{ExamRecord, ExamScreen, UploadSource};
pub use extract::{extract_sections, ExtractError, ExtractionOutcome, PdfTextPolicy};
pub use models::{
    AiRequest, AiResponse, AppState, CreateQuestionScreen, Difficulty, GenerationConfig,
    GenerationPhase, Section, SectionContent,
};
pub use notes::{NoteEditor, NotesScreen};
pub use picker::get_document_files;
pub use session::{
    apply_extraction_failure, apply_extraction_outcome, apply_generation_response,
    handle_create_question_input, handle_exams_input, handle_note_editor_input,
    handle_notes_input, handle_solutions_input, trigger_generation, upload_selected_file,
};
pub use solutions::{RecentQuestion, SolutionScreen};
pub use ui::{
    draw_create_question, draw_exams, draw_menu, draw_note_editor, draw_notes, draw_solutions,
};
pub use utils::{calculate_wrapped_cursor_position, cursor_column};
