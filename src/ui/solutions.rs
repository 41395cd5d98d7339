use crate::solutions::SolutionScreen;
use crate::utils::cursor_column;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_solutions(f: &mut Frame, screen: &SolutionScreen) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Paragraph::new("Ask a Question")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let input_focused = screen.focused_panel == 0;
    let input = Paragraph::new(screen.question_input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Paste your question here (Enter to submit)")
            .border_style(panel_border(input_focused)),
    );
    f.render_widget(input, chunks[1]);
    if input_focused {
        let column = cursor_column(&screen.question_input, screen.input_cursor);
        f.set_cursor_position(Position::new(
            chunks[1].x + 1 + column as u16,
            chunks[1].y + 1,
        ));
    }

    let upload_lines = if screen.pending.is_some() {
        vec![Line::from(Span::styled(
            "Waiting for an answer...",
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
            .title("Or Upload an Image of Your Question")
            .border_style(panel_border(!input_focused)),
    );
    f.render_widget(upload, chunks[2]);

    let answer = Paragraph::new(screen.answer.as_deref().unwrap_or(""))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Answer"));
    f.render_widget(answer, chunks[3]);

    let mut text = Text::default();
    for entry in &screen.recent {
        text.push_line(Line::from(Span::styled(
            format!("Q: {}", entry.question),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(format!("A: {}", entry.answer)));
        text.push_line(Line::from(""));
    }
    let recent = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Recent Questions"),
    );
    f.render_widget(recent, chunks[4]);

    let footer_text = screen
        .status_message
        .clone()
        .unwrap_or_else(|| "Tab: switch panel  Esc: back".to_string());
    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[5]);
}

fn panel_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
