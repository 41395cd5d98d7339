use crate::ai::{generator, DEFAULT_MODEL};
use crate::exams::{ExamScreen, UploadSource};
use crate::extract::{ExtractionOutcome, PdfTextPolicy};
use crate::logger;
use crate::models::{
    AiRequest, AppState, CreateQuestionScreen, GenerationPhase, MAX_QUESTION_COUNT,
    MIN_QUESTION_COUNT,
};
use crate::notes::{NoteEditor, NotesScreen};
use crate::solutions::SolutionScreen;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::mpsc::Sender;

pub fn handle_create_question_input(
    screen: &mut CreateQuestionScreen,
    key: KeyEvent,
    app_state: &mut AppState,
    ai_tx: &Sender<AiRequest>,
) {
    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::Menu;
        }
        KeyCode::Char('1') => {
            screen.focused_panel = 0;
        }
        KeyCode::Char('2') => {
            screen.focused_panel = 1;
        }
        KeyCode::Tab => {
            screen.focused_panel = (screen.focused_panel + 1) % 2;
        }
        KeyCode::Up => {
            if screen.focused_panel == 0 {
                if screen.selected_file_index > 0 {
                    screen.selected_file_index -= 1;
                }
            } else if let Some(index) = screen.selected_section
                && index > 0
            {
                screen.selected_section = Some(index - 1);
            }
        }
        KeyCode::Down => {
            if screen.focused_panel == 0 {
                if screen.selected_file_index < screen.files.len().saturating_sub(1) {
                    screen.selected_file_index += 1;
                }
            } else if !screen.sections.is_empty() {
                let next = match screen.selected_section {
                    Some(index) => (index + 1).min(screen.sections.len() - 1),
                    None => 0,
                };
                screen.selected_section = Some(next);
            }
        }
        KeyCode::Enter => {
            if screen.focused_panel == 0 {
                upload_selected_file(screen, ai_tx);
            } else if screen.selected_section.is_none() && !screen.sections.is_empty() {
                screen.selected_section = Some(0);
            }
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            adjust_question_count(screen, 1);
        }
        KeyCode::Char('-') => {
            adjust_question_count(screen, -1);
        }
        KeyCode::Char('d') => {
            screen.config.difficulty = screen.config.difficulty.next();
        }
        KeyCode::Char('g') => {
            trigger_generation(screen, ai_tx);
        }
        _ => {}
    }
}

/// Slider semantics: the control clamps, it never wraps or errors.
pub fn adjust_question_count(screen: &mut CreateQuestionScreen, delta: i64) {
    let count = screen.config.question_count as i64 + delta;
    screen.config.question_count =
        count.clamp(MIN_QUESTION_COUNT as i64, MAX_QUESTION_COUNT as i64) as u32;
}

/// Hand the highlighted file to the worker for extraction so the upload
/// indicator stays visible while it runs. The reply lands in
/// `apply_extraction_outcome` or `apply_extraction_failure`.
pub fn upload_selected_file(screen: &mut CreateQuestionScreen, ai_tx: &Sender<AiRequest>) {
    let Some(path) = screen.files.get(screen.selected_file_index).cloned() else {
        screen.status_message = Some("No documents found to upload".to_string());
        return;
    };

    logger::log(&format!("Uploading {}", path.display()));
    screen.upload_epoch += 1;
    let request = AiRequest::ExtractDocument {
        epoch: screen.upload_epoch,
        path,
        policy: PdfTextPolicy::Placeholder,
    };

    if ai_tx.send(request).is_ok() {
        screen.is_uploading = true;
        screen.last_error = None;
    } else {
        screen.last_error = Some("AI worker is not running".to_string());
    }
}

/// Install the worker's extraction result. A reply older than the latest
/// upload is discarded.
pub fn apply_extraction_outcome(
    screen: &mut CreateQuestionScreen,
    epoch: u64,
    outcome: ExtractionOutcome,
) {
    if epoch != screen.upload_epoch {
        logger::log(&format!(
            "Dropping stale extraction (epoch {} != {})",
            epoch, screen.upload_epoch
        ));
        return;
    }
    screen.is_uploading = false;
    screen.apply_extraction(outcome);
}

/// A failed extraction. An unsupported extension only warns and leaves the
/// current sections alone; hard failures clear them (never a partial
/// result).
pub fn apply_extraction_failure(
    screen: &mut CreateQuestionScreen,
    epoch: u64,
    error: String,
    unsupported: bool,
) {
    if epoch != screen.upload_epoch {
        logger::log(&format!(
            "Dropping stale extraction failure (epoch {} != {})",
            epoch, screen.upload_epoch
        ));
        return;
    }
    screen.is_uploading = false;

    if unsupported {
        screen.last_error = Some(error);
        return;
    }
    screen.generation_epoch += 1;
    screen.sections.clear();
    screen.selected_section = None;
    screen.phase = GenerationPhase::Idle;
    screen.last_error = Some(error);
}

/// The generation trigger: refused without a selection, refused while a
/// request is in flight, validated before anything is sent.
pub fn trigger_generation(screen: &mut CreateQuestionScreen, ai_tx: &Sender<AiRequest>) {
    if screen.phase == GenerationPhase::Requesting {
        screen.status_message = Some("A generation request is already in flight".to_string());
        return;
    }

    let Some(section) = screen.selected_section().cloned() else {
        screen.last_error = Some("Please select a section to generate questions".to_string());
        return;
    };

    if let Err(e) = generator::validate_config(&screen.config) {
        screen.last_error = Some(e.to_string());
        return;
    }

    screen.generation_epoch += 1;
    let request = AiRequest::GenerateQuestions {
        epoch: screen.generation_epoch,
        model: DEFAULT_MODEL.to_string(),
        section,
        config: screen.config.clone(),
    };

    if ai_tx.send(request).is_ok() {
        screen.phase = GenerationPhase::Requesting;
        screen.status_message = Some("Fine-tuning with AI...".to_string());
        screen.last_error = None;
    } else {
        screen.last_error = Some("AI worker is not running".to_string());
    }
}

/// Apply a worker reply to the screen. Replies from an earlier epoch (a
/// previous request, or one outlived by a new upload) are discarded so they
/// can never clobber current state. A failure leaves the previously rendered
/// questions untouched.
pub fn apply_generation_response(
    screen: &mut CreateQuestionScreen,
    epoch: u64,
    result: Result<Vec<String>, String>,
) {
    if epoch != screen.generation_epoch {
        logger::log(&format!(
            "Dropping stale generation response (epoch {} != {})",
            epoch, screen.generation_epoch
        ));
        return;
    }

    match result {
        Ok(questions) => {
            screen.status_message = Some(format!("Generated {} question(s)", questions.len()));
            screen.generated_questions = questions;
            screen.phase = GenerationPhase::Rendered;
            screen.last_error = None;
        }
        Err(error) => {
            screen.phase = GenerationPhase::Failed;
            screen.last_error = Some(format!(
                "Failed to generate questions. Please try again. ({})",
                error
            ));
        }
    }
}

pub fn handle_notes_input(
    screen: &mut NotesScreen,
    key: KeyEvent,
    app_state: &mut AppState,
    editor: &mut Option<NoteEditor>,
) {
    if screen.adding_subject {
        match key.code {
            KeyCode::Esc => {
                screen.adding_subject = false;
                screen.subject_input.clear();
                screen.subject_cursor = 0;
            }
            KeyCode::Enter => {
                let name = screen.subject_input.clone();
                if let Some(index) = screen.add_subject(&name) {
                    screen.adding_subject = false;
                    screen.subject_input.clear();
                    screen.subject_cursor = 0;
                    screen.selected_index = index;
                    *editor = Some(NoteEditor::new(index, screen.subjects[index].name.clone()));
                    *app_state = AppState::NoteEditor;
                } else {
                    screen.status_message = Some("Please enter a subject name".to_string());
                }
            }
            KeyCode::Backspace => {
                screen.subject_backspace();
            }
            KeyCode::Left => {
                screen.subject_move_left();
            }
            KeyCode::Right => {
                screen.subject_move_right();
            }
            KeyCode::Char(c) => {
                screen.subject_insert_char(c);
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::Menu;
        }
        KeyCode::Up => {
            if screen.selected_index > 0 {
                screen.selected_index -= 1;
            }
        }
        KeyCode::Down => {
            if screen.selected_index < screen.subjects.len().saturating_sub(1) {
                screen.selected_index += 1;
            }
        }
        KeyCode::Enter => {
            if let Some(subject) = screen.subjects.get(screen.selected_index) {
                *editor = Some(NoteEditor::new(screen.selected_index, subject.name.clone()));
                *app_state = AppState::NoteEditor;
            }
        }
        KeyCode::Char('a') => {
            screen.adding_subject = true;
            screen.status_message = None;
        }
        _ => {}
    }
}

pub fn handle_note_editor_input(
    editor: &mut NoteEditor,
    screen: &mut NotesScreen,
    key: KeyEvent,
    app_state: &mut AppState,
) {
    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::Notes;
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            match editor.take_note() {
                Some(note) => {
                    if screen.add_note(editor.subject_index, note) {
                        screen.status_message = Some("Note added successfully!".to_string());
                    }
                    *app_state = AppState::Notes;
                }
                None => {
                    screen.status_message =
                        Some("Please enter some text for your note".to_string());
                }
            }
        }
        KeyCode::Enter => {
            editor.insert_char('\n');
        }
        KeyCode::Backspace => {
            editor.backspace();
        }
        KeyCode::Left => {
            editor.move_left();
        }
        KeyCode::Right => {
            editor.move_right();
        }
        KeyCode::Char(c) => {
            editor.insert_char(c);
        }
        _ => {}
    }
}

/// The question-solution screen: the input panel takes free text, the upload
/// panel takes the camera/gallery keys. Tab switches between them.
pub fn handle_solutions_input(
    screen: &mut SolutionScreen,
    key: KeyEvent,
    app_state: &mut AppState,
    ai_tx: &Sender<AiRequest>,
) {
    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::Menu;
            return;
        }
        KeyCode::Tab => {
            screen.focused_panel = (screen.focused_panel + 1) % 2;
            return;
        }
        _ => {}
    }

    if screen.focused_panel == 0 {
        match key.code {
            KeyCode::Enter => {
                if let Some((task_id, question)) = screen.begin_ask() {
                    send_answer_request(screen, task_id, question, ai_tx);
                }
            }
            KeyCode::Backspace => {
                screen.input_backspace();
            }
            KeyCode::Left => {
                screen.input_move_left();
            }
            KeyCode::Right => {
                screen.input_move_right();
            }
            KeyCode::Char(c) => {
                screen.input_insert_char(c);
            }
            _ => {}
        }
    } else {
        match key.code {
            KeyCode::Char('c') => {
                if let Some((task_id, question)) = screen.begin_photo_ask(UploadSource::Camera) {
                    send_answer_request(screen, task_id, question, ai_tx);
                }
            }
            KeyCode::Char('g') => {
                if let Some((task_id, question)) = screen.begin_photo_ask(UploadSource::Gallery) {
                    send_answer_request(screen, task_id, question, ai_tx);
                }
            }
            _ => {}
        }
    }
}

fn send_answer_request(
    screen: &mut SolutionScreen,
    task_id: u64,
    question: String,
    ai_tx: &Sender<AiRequest>,
) {
    let request = AiRequest::AnswerQuestion {
        task_id,
        model: DEFAULT_MODEL.to_string(),
        question,
    };
    if ai_tx.send(request).is_err() {
        screen.fail_ask(task_id, "AI worker is not running".to_string());
    }
}

pub fn handle_exams_input(
    screen: &mut ExamScreen,
    key: KeyEvent,
    app_state: &mut AppState,
    ai_tx: &Sender<AiRequest>,
) {
    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::Menu;
        }
        KeyCode::Char('c') => {
            start_exam_upload(screen, UploadSource::Camera, ai_tx);
        }
        KeyCode::Char('g') => {
            start_exam_upload(screen, UploadSource::Gallery, ai_tx);
        }
        _ => {}
    }
}

fn start_exam_upload(screen: &mut ExamScreen, source: UploadSource, ai_tx: &Sender<AiRequest>) {
    let Some((task_id, title)) = screen.begin_upload(source) else {
        return;
    };
    let request = AiRequest::EvaluateExam {
        task_id,
        model: DEFAULT_MODEL.to_string(),
        title,
    };
    if ai_tx.send(request).is_err() {
        screen.fail_upload(task_id, "AI worker is not running".to_string());
    }
}
