//! Field rendering utilities for forms

use crate::state::{FieldName, FieldStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus the message line
pub const FIELD_HEIGHT: u16 = 4;

const MASK_CHAR: char = '•';

/// Everything needed to draw one field
pub struct FieldView<'a> {
    pub field: FieldName,
    pub value: &'a str,
    pub status: &'a FieldStatus,
    pub is_active: bool,
    pub mask: bool,
}

/// Border color for a field's validation status
pub fn status_color(status: &FieldStatus) -> Color {
    match status {
        FieldStatus::Untouched => Color::DarkGray,
        FieldStatus::Valid => Color::Green,
        FieldStatus::Invalid(_) => Color::Red,
    }
}

/// Text shown inside the input box; `None` means show the placeholder
pub fn display_value(field: FieldName, value: &str, mask: bool) -> Option<String> {
    if value.is_empty() {
        None
    } else if mask && field.is_secret() {
        Some(MASK_CHAR.to_string().repeat(value.chars().count()))
    } else {
        Some(value.to_string())
    }
}

/// Draw a form field with its validation styling and inline message
pub fn draw_field(frame: &mut Frame, area: Rect, view: FieldView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    // Untouched fields still need a visible focus ring
    let border_color = match (view.is_active, view.status) {
        (true, FieldStatus::Untouched) => Color::Cyan,
        (_, status) => status_color(status),
    };
    let title_style = if view.is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let cursor = if view.is_active { "▌" } else { "" };
    let content = match display_value(view.field, view.value, view.mask) {
        Some(text) => Span::styled(text, Style::default().fg(Color::White)),
        None => Span::styled(
            view.field.placeholder(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ),
    };
    let line = if view.value.is_empty() && view.is_active {
        // Cursor sits before the placeholder
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            content,
        ])
    } else {
        Line::from(vec![
            content,
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ", view.field.label()), title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(Paragraph::new(line).block(block), chunks[0]);

    if let FieldStatus::Invalid(message) = view.status {
        let message = Paragraph::new(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(message, chunks[1]);
    }
}

/// Draw dimmed help text lines
pub fn draw_help_text(frame: &mut Frame, area: Rect, lines: &[&str]) {
    let help: Vec<Line> = lines
        .iter()
        .map(|l| Line::from(Span::styled(*l, Style::default().fg(Color::DarkGray))))
        .collect();
    frame.render_widget(Paragraph::new(help), area);
}
