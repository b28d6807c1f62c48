//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Key hints for the current focus
fn hints(app: &App) -> String {
    if app.state.show_submission_dialog {
        return "Enter/Esc: close".to_string();
    }
    if app.state.form.is_buttons_row_active() {
        format!("←/→: choose | Enter: press | {SUBMIT_SHORTCUT}: submit | Esc: quit")
    } else {
        format!("Tab: next | {SUBMIT_SHORTCUT}: submit | {RESET_SHORTCUT}: reset | Esc: quit")
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let mut spans = vec![];

    // Form validity
    let validity = if form.is_valid() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(validity);

    spans.push(Span::styled(hints(app), Style::default().fg(Color::Gray)));

    if let Some(count) = app.state.rejected_field_count {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{count} field(s) invalid"),
            Style::default().fg(Color::Red),
        ));
    }

    // Status message
    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    if form.submit_count() > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("attempts: {}", form.submit_count()),
            Style::default().fg(Color::Blue),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
