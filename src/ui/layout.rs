use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct CreateQuestionChunks {
    pub header_area: Rect,
    pub files_area: Rect,
    pub sections_area: Rect,
    pub config_area: Rect,
    pub questions_area: Rect,
    pub status_area: Rect,
}

pub fn calculate_create_question_chunks(area: Rect) -> CreateQuestionChunks {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(4)])
        .split(columns[1]);

    CreateQuestionChunks {
        header_area: rows[0],
        files_area: left[0],
        sections_area: left[1],
        config_area: right[0],
        questions_area: right[1],
        status_area: rows[2],
    }
}

/// A centered modal rectangle, used by the subject prompt on the notes
/// screen.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunks_fit_inside_area() {
        let area = Rect::new(0, 0, 120, 40);
        let chunks = calculate_create_question_chunks(area);
        for rect in [
            chunks.header_area,
            chunks.files_area,
            chunks.sections_area,
            chunks.config_area,
            chunks.questions_area,
            chunks.status_area,
        ] {
            assert!(rect.right() <= area.right());
            assert!(rect.bottom() <= area.bottom());
        }
    }

    #[test]
    fn test_centered_rect_is_contained() {
        let area = Rect::new(0, 0, 100, 30);
        let modal = centered_rect(60, 40, area);
        assert!(modal.width <= 60);
        assert!(modal.x >= area.x && modal.right() <= area.right());
    }
}
