use crate::exams::ExamScreen;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_exams(f: &mut Frame, screen: &ExamScreen) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Paragraph::new("Exam Control")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let upload_lines = if screen.pending.is_some() {
        vec![Line::from(ratatui::text::Span::styled(
            "Uploading and evaluating...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))]
    } else {
        vec![
            Line::from("c: Upload photo from Camera"),
            Line::from("g: Upload photo from Gallery"),
        ]
    };
    let upload = Paragraph::new(upload_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Upload New Exam"),
    );
    f.render_widget(upload, chunks[1]);

    let mut text = Text::default();
    for exam in &screen.exams {
        text.push_line(Line::from(ratatui::text::Span::styled(
            exam.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(format!("Date: {}", exam.date)));
        if let Some(score) = &exam.score {
            text.push_line(Line::from(format!("Score: {}", score)));
        }
        text.push_line(Line::from(exam.feedback.clone()));
        text.push_line(Line::from(""));
    }
    let history = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Previous Exams"),
    );
    f.render_widget(history, chunks[2]);

    let footer_text = screen
        .status_message
        .clone()
        .unwrap_or_else(|| "Esc: back".to_string());
    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[3]);
}
