use crate::models::{CreateQuestionScreen, GenerationPhase};
use crate::ui::layout::calculate_create_question_chunks;
use crate::utils::truncate_string;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw_create_question(f: &mut Frame, screen: &CreateQuestionScreen) {
    let chunks = calculate_create_question_chunks(f.area());

    let header = Paragraph::new("Create Question")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks.header_area);

    draw_file_panel(f, screen, &chunks);
    draw_section_panel(f, screen, &chunks);
    draw_config_panel(f, screen, &chunks);
    draw_question_panel(f, screen, &chunks);
    draw_status_line(f, screen, &chunks);
}

fn panel_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_file_panel(
    f: &mut Frame,
    screen: &CreateQuestionScreen,
    chunks: &crate::ui::layout::CreateQuestionChunks,
) {
    let items: Vec<ListItem> = if screen.files.is_empty() {
        vec![ListItem::new("No documents found").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        screen
            .files
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                let style = if i == screen.selected_file_index && screen.focused_panel == 0 {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(name).style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("[1] Upload/Scan Book")
            .border_style(panel_border(screen.focused_panel == 0)),
    );
    f.render_widget(list, chunks.files_area);
}

fn draw_section_panel(
    f: &mut Frame,
    screen: &CreateQuestionScreen,
    chunks: &crate::ui::layout::CreateQuestionChunks,
) {
    let items: Vec<ListItem> = if screen.sections.is_empty() {
        vec![ListItem::new("Upload a file to extract sections").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        screen
            .sections
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let style = if Some(i) == screen.selected_section {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(truncate_string(&section.title, 40)).style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("[2] Select a Section")
            .border_style(panel_border(screen.focused_panel == 1)),
    );
    f.render_widget(list, chunks.sections_area);
}

fn draw_config_panel(
    f: &mut Frame,
    screen: &CreateQuestionScreen,
    chunks: &crate::ui::layout::CreateQuestionChunks,
) {
    let lines = vec![
        Line::from(format!(
            "Number of Questions: {}  (+/- to adjust)",
            screen.config.question_count
        )),
        Line::from(format!(
            "Difficulty Level: {}  (d to cycle)",
            screen.config.difficulty
        )),
        Line::from(""),
        Line::from(Span::styled(
            if screen.selected_section.is_some() {
                "g: Generate Questions"
            } else {
                "Select a section to enable generation"
            },
            Style::default().fg(if screen.selected_section.is_some() {
                Color::Green
            } else {
                Color::DarkGray
            }),
        )),
    ];

    let config = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Configure Questions"),
    );
    f.render_widget(config, chunks.config_area);
}

fn draw_question_panel(
    f: &mut Frame,
    screen: &CreateQuestionScreen,
    chunks: &crate::ui::layout::CreateQuestionChunks,
) {
    let mut text = Text::default();
    for (i, question) in screen.generated_questions.iter().enumerate() {
        text.push_line(Line::from(format!("{}. {}", i + 1, question)));
    }

    let questions = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Generated Questions"),
    );
    f.render_widget(questions, chunks.questions_area);
}

fn draw_status_line(
    f: &mut Frame,
    screen: &CreateQuestionScreen,
    chunks: &crate::ui::layout::CreateQuestionChunks,
) {
    let (message, color) = if screen.is_uploading {
        ("Uploading...".to_string(), Color::Yellow)
    } else if screen.phase == GenerationPhase::Requesting {
        ("Fine-tuning with AI...".to_string(), Color::Yellow)
    } else if let Some(error) = &screen.last_error {
        (error.clone(), Color::Red)
    } else if let Some(status) = &screen.status_message {
        (status.clone(), Color::Green)
    } else {
        (
            "Tab: switch panel  Enter: upload/select  Esc: back".to_string(),
            Color::DarkGray,
        )
    };

    let status = Paragraph::new(message)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks.status_area);
}
