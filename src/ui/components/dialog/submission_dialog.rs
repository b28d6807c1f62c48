//! Submitted payload dialog

use super::base::{render_dialog, DialogConfig};
use crate::platform::COPY_SHORTCUT;
use crate::submission::Submission;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Show the JSON payload handed to the submission collaborator
pub fn render_submission_dialog(frame: &mut Frame, submission: &Submission) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::styled(COPY_SHORTCUT, key_style),
        Span::raw(" copy  "),
        Span::styled("Enter", key_style),
        Span::raw("/"),
        Span::styled("Esc", key_style),
        Span::raw(" close"),
    ];

    let message = format!(
        "{}\n\nSubmitted at {}",
        submission.payload,
        submission.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    render_dialog(
        frame,
        DialogConfig {
            title: "Submitted",
            title_color: Color::Green,
            border_color: Color::Green,
            message: &message,
            preformatted: true,
            hint: Some(hint),
            max_width: 72,
        },
    );
}
