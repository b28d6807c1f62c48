//! Signup form rendering

use super::field_renderer::{draw_field, draw_help_text, FieldView, FIELD_HEIGHT};
use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{FieldName, FormButton};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Maximum width of the form column
const FORM_WIDTH: u16 = 64;

/// Draw the signup form centered in `area`
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form_area = centered_column(area, FORM_WIDTH);
    let form = &app.state.form;

    let block = Block::default()
        .title(" Sign up ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let mut constraints: Vec<Constraint> = FieldName::ALL
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Buttons
    constraints.push(Constraint::Length(2)); // Help text
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    for field in FieldName::ALL {
        let status = form.field_status(field);
        draw_field(
            frame,
            chunks[field.index()],
            FieldView {
                field,
                value: form.values().get(field),
                status: &status,
                is_active: form.active_field_name() == Some(field),
                mask: app.state.mask_passwords,
            },
        );
    }

    draw_buttons(frame, chunks[FieldName::ALL.len()], app);

    let submit_hint = format!("{SUBMIT_SHORTCUT} submits from any field, {RESET_SHORTCUT} clears.");
    draw_help_text(
        frame,
        chunks[FieldName::ALL.len() + 1],
        &["Tab/Shift+Tab move between fields.", submit_hint.as_str()],
    );
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let on_buttons = form.is_buttons_row_active();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    for (button, chunk, color) in [
        (FormButton::Submit, chunks[0], Color::Blue),
        (FormButton::Reset, chunks[1], Color::Gray),
    ] {
        render_button(
            frame,
            chunk,
            button.label(),
            on_buttons && form.selected_button == button,
            Some(color),
        );
    }
}

/// Horizontally centered column of at most `max_width`
fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_column_narrow_terminal_uses_full_width() {
        let area = Rect::new(0, 0, 40, 30);
        assert_eq!(centered_column(area, 64), area);
    }

    #[test]
    fn test_centered_column_wide_terminal() {
        let column = centered_column(Rect::new(0, 0, 100, 30), 64);
        assert_eq!(column.x, 18);
        assert_eq!(column.width, 64);
        assert_eq!(column.height, 30);
    }
}
