use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::mpsc;
use std::time::Duration;

use studymate::models::{AiResponse, AppState, CreateQuestionScreen};
use studymate::notes::{NoteEditor, NotesScreen};
use studymate::session::{
    apply_extraction_failure, apply_extraction_outcome, apply_generation_response,
    handle_create_question_input, handle_exams_input, handle_note_editor_input,
    handle_notes_input, handle_solutions_input,
};
use studymate::solutions::SolutionScreen;
use studymate::ui::{
    draw_create_question, draw_exams, draw_menu, draw_note_editor, draw_notes, draw_solutions,
    MENU_ITEMS,
};
use studymate::{get_document_files, logger, spawn_ai_worker, ExamScreen, API_KEY_ENV};

fn main() -> io::Result<()> {
    logger::init();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (req_tx, req_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let _worker = spawn_ai_worker(resp_tx, req_rx);
    let ai_enabled = std::env::var(API_KEY_ENV).is_ok();

    let mut app_state = AppState::Menu;
    let mut menu_index: usize = 0;

    // Screen state lives only while its screen is mounted; leaving a screen
    // drops the state, and any worker reply that arrives afterwards finds no
    // screen to apply to.
    let mut create_screen: Option<CreateQuestionScreen> = None;
    let mut notes_screen: Option<NotesScreen> = None;
    let mut note_editor: Option<NoteEditor> = None;
    let mut solution_screen: Option<SolutionScreen> = None;
    let mut exam_screen: Option<ExamScreen> = None;

    loop {
        while let Ok(response) = resp_rx.try_recv() {
            match response {
                AiResponse::Extracted { epoch, outcome } => {
                    if let Some(screen) = create_screen.as_mut() {
                        apply_extraction_outcome(screen, epoch, outcome);
                    }
                }
                AiResponse::ExtractionFailed {
                    epoch,
                    error,
                    unsupported,
                } => {
                    if let Some(screen) = create_screen.as_mut() {
                        apply_extraction_failure(screen, epoch, error, unsupported);
                    }
                }
                AiResponse::Questions { epoch, questions } => {
                    if let Some(screen) = create_screen.as_mut() {
                        apply_generation_response(screen, epoch, Ok(questions));
                    }
                }
                AiResponse::GenerationFailed { epoch, error } => {
                    if let Some(screen) = create_screen.as_mut() {
                        apply_generation_response(screen, epoch, Err(error));
                    }
                }
                AiResponse::QuestionAnswered { task_id, answer } => {
                    if let Some(screen) = solution_screen.as_mut() {
                        screen.complete_ask(task_id, answer);
                    }
                }
                AiResponse::AnswerFailed { task_id, error } => {
                    if let Some(screen) = solution_screen.as_mut() {
                        screen.fail_ask(task_id, error);
                    }
                }
                AiResponse::ExamEvaluated { task_id, feedback } => {
                    if let Some(screen) = exam_screen.as_mut() {
                        screen.complete_upload(task_id, feedback);
                    }
                }
                AiResponse::ExamFailed { task_id, error } => {
                    if let Some(screen) = exam_screen.as_mut() {
                        screen.fail_upload(task_id, error);
                    }
                }
            }
        }

        terminal.draw(|f| match app_state {
            AppState::Menu => draw_menu(f, menu_index, ai_enabled),
            AppState::CreateQuestion => {
                if let Some(screen) = &create_screen {
                    draw_create_question(f, screen);
                }
            }
            AppState::Notes => {
                if let Some(screen) = &notes_screen {
                    draw_notes(f, screen);
                }
            }
            AppState::NoteEditor => {
                if let (Some(editor), Some(screen)) = (&note_editor, &notes_screen) {
                    draw_note_editor(f, editor, screen);
                }
            }
            AppState::Solutions => {
                if let Some(screen) = &solution_screen {
                    draw_solutions(f, screen);
                }
            }
            AppState::Exams => {
                if let Some(screen) = &exam_screen {
                    draw_exams(f, screen);
                }
            }
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            match app_state {
                AppState::Menu => match key.code {
                    KeyCode::Up => {
                        if menu_index > 0 {
                            menu_index -= 1;
                        }
                    }
                    KeyCode::Down => {
                        if menu_index < MENU_ITEMS.len() - 1 {
                            menu_index += 1;
                        }
                    }
                    KeyCode::Enter => match menu_index {
                        0 => {
                            create_screen =
                                Some(CreateQuestionScreen::new(get_document_files()));
                            app_state = AppState::CreateQuestion;
                        }
                        1 => {
                            solution_screen = Some(SolutionScreen::new());
                            app_state = AppState::Solutions;
                        }
                        2 => {
                            notes_screen = Some(NotesScreen::new());
                            app_state = AppState::Notes;
                        }
                        _ => {
                            exam_screen = Some(ExamScreen::with_sample_history());
                            app_state = AppState::Exams;
                        }
                    },
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    _ => {}
                },
                AppState::CreateQuestion => {
                    if let Some(screen) = create_screen.as_mut() {
                        handle_create_question_input(screen, key, &mut app_state, &req_tx);
                    }
                    if app_state != AppState::CreateQuestion {
                        create_screen = None;
                    }
                }
                AppState::Notes => {
                    if let Some(screen) = notes_screen.as_mut() {
                        handle_notes_input(screen, key, &mut app_state, &mut note_editor);
                    }
                    if app_state == AppState::Menu {
                        notes_screen = None;
                        note_editor = None;
                    }
                }
                AppState::NoteEditor => {
                    if let (Some(editor), Some(screen)) =
                        (note_editor.as_mut(), notes_screen.as_mut())
                    {
                        handle_note_editor_input(editor, screen, key, &mut app_state);
                    }
                    if app_state != AppState::NoteEditor {
                        note_editor = None;
                    }
                }
                AppState::Solutions => {
                    if let Some(screen) = solution_screen.as_mut() {
                        handle_solutions_input(screen, key, &mut app_state, &req_tx);
                    }
                    if app_state != AppState::Solutions {
                        solution_screen = None;
                    }
                }
                AppState::Exams => {
                    if let Some(screen) = exam_screen.as_mut() {
                        handle_exams_input(screen, key, &mut app_state, &req_tx);
                    }
                    if app_state != AppState::Exams {
                        exam_screen = None;
                    }
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
