//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use components::{render_error_dialog, render_submission_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_signup(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Modal overlays, errors on top
    if app.state.show_submission_dialog {
        if let Some(submission) = &app.state.last_submission {
            render_submission_dialog(frame, submission);
        }
    }
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::state::FieldName;
    use crate::submission::{PreviewSink, Submission};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn new_app() -> App {
        App::new(TuiConfig::default(), Box::new(PreviewSink))
    }

    #[test]
    fn test_renders_every_field_label() {
        let screen = render(&new_app());
        for field in FieldName::ALL {
            assert!(screen.contains(field.label()), "missing {}", field.label());
        }
        assert!(screen.contains("Submit"));
    }

    #[test]
    fn test_untouched_errors_are_hidden() {
        let screen = render(&new_app());
        assert!(!screen.contains("Required"));
    }

    #[test]
    fn test_touched_errors_are_shown() {
        let mut app = new_app();
        app.state.form.mark_touched(FieldName::Email);
        app.state.form.set_field_value(FieldName::Email, "nope");
        let screen = render(&app);
        assert!(screen.contains("Invalid email"));
    }

    #[test]
    fn test_password_is_masked() {
        let mut app = new_app();
        app.state.form.set_field_value(FieldName::Password, "Secret123!");
        let screen = render(&app);
        assert!(!screen.contains("Secret123!"));
        assert!(screen.contains("••••••••••"));
    }

    #[test]
    fn test_error_dialog_overlays_form() {
        let mut app = new_app();
        app.push_error("Submission failed");
        let screen = render(&app);
        assert!(screen.contains("Submission failed"));
        assert!(screen.contains("to dismiss"));
    }

    #[test]
    fn test_submission_dialog_shows_payload() {
        let mut app = new_app();
        let values = app
            .state
            .form
            .values()
            .clone()
            .with(FieldName::FirstName, "Jane");
        app.state.show_submission(Submission::new(values).unwrap());
        let screen = render(&app);
        assert!(screen.contains("\"firstName\": \"Jane\""));
    }
}
