use crate::notes::{NoteEditor, NotesScreen};
use crate::ui::layout::centered_rect;
use crate::utils::{calculate_wrapped_cursor_position, cursor_column};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw_notes(f: &mut Frame, screen: &NotesScreen) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Paragraph::new("Notes")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = if screen.subjects.is_empty() {
        vec![ListItem::new("No subjects yet - press 'a' to add one").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        screen
            .subjects
            .iter()
            .enumerate()
            .map(|(i, subject)| {
                let text = format!("{} ({} notes)", subject.name, subject.notes.len());
                let style = if i == screen.selected_index {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(text).style(style)
            })
            .collect()
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Subjects"));
    f.render_widget(list, chunks[1]);

    let help = screen
        .status_message
        .clone()
        .unwrap_or_else(|| "a: add subject  Enter: open editor  Esc: back".to_string());
    let footer = Paragraph::new(help)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[2]);

    if screen.adding_subject {
        draw_subject_modal(f, screen);
    }
}

fn draw_subject_modal(f: &mut Frame, screen: &NotesScreen) {
    let modal = centered_rect(60, 20, f.area());
    f.render_widget(Clear, modal);

    let input = Paragraph::new(screen.subject_input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Select or Enter a Subject")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(input, modal);
    let column = cursor_column(&screen.subject_input, screen.subject_cursor);
    f.set_cursor_position(Position::new(modal.x + 1 + column as u16, modal.y + 1));
}

pub fn draw_note_editor(f: &mut Frame, editor: &NoteEditor, screen: &NotesScreen) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Paragraph::new(format!("Add Note - {}", editor.subject_name))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let input_area = chunks[1];
    let input = Paragraph::new(editor.buffer.as_str())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Note"));
    f.render_widget(input, input_area);

    let inner_width = input_area.width.saturating_sub(2) as usize;
    let (line, column) =
        calculate_wrapped_cursor_position(&editor.buffer, editor.cursor, inner_width.max(1));
    f.set_cursor_position(Position::new(
        input_area.x + 1 + column as u16,
        input_area.y + 1 + line as u16,
    ));

    let help = screen
        .status_message
        .clone()
        .unwrap_or_else(|| "Ctrl+S: save note  Esc: back".to_string());
    let footer = Paragraph::new(help)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[2]);
}
