//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform;
use crate::state::{AppState, Form, FormButton, SubmitOutcome};
use crate::submission::SubmissionSink;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Collaborator that receives validated records
    sink: Box<dyn SubmissionSink>,
    config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Transient status bar message, cleared on the next key press
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig, sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            state: AppState::from_config(&config),
            sink,
            config,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Handle submission dialog (modal)
        if self.state.show_submission_dialog {
            self.handle_submission_dialog_key(key);
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        self.handle_form_key(key).await
    }

    /// Handle keys while the signup form has focus
    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_buttons = self.state.form.is_buttons_row_active();
        let command = platform::is_command(key.modifiers);

        match key.code {
            KeyCode::Esc => {
                self.quit = true;
            }
            KeyCode::Char('s') if command => {
                self.submit_form().await;
            }
            KeyCode::Char('r') if command => {
                self.reset_form();
            }
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left | KeyCode::Right if on_buttons => {
                self.state.form.selected_button.toggle();
            }
            KeyCode::Enter if on_buttons => match self.state.form.selected_button {
                FormButton::Submit => self.submit_form().await,
                FormButton::Reset => self.reset_form(),
            },
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Char(c) if !command => {
                self.state.form.push_char(c);
                self.state.rejected_field_count = None;
            }
            KeyCode::Backspace => {
                self.state.form.pop_char();
                self.state.rejected_field_count = None;
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the submitted payload dialog
    fn handle_submission_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.state.dismiss_submission(),
            _ if platform::is_copy_key(&key) => self.copy_payload(),
            _ => {}
        }
    }

    /// Validate and, when every field passes, hand the record to the sink.
    /// A refused submit only reveals the errors.
    pub async fn submit_form(&mut self) {
        let outcome = self.state.form.submit();
        self.state.note_submit_outcome(&outcome);

        match outcome {
            SubmitOutcome::Accepted(values) => match self.sink.submit(&values).await {
                Ok(submission) => {
                    tracing::info!("Signup form submitted");
                    if self.config.copy_payload_on_submit() {
                        match self.copy_to_clipboard(&submission.payload) {
                            Ok(()) => self.status_message = Some("Payload copied".to_string()),
                            Err(e) => self.push_error(format!("Failed to copy payload: {e}")),
                        }
                    }
                    self.state.show_submission(submission);
                }
                Err(e) => {
                    tracing::warn!("Submission failed: {e:?}");
                    self.push_error(format!("Submission failed: {e}"));
                }
            },
            SubmitOutcome::Rejected(errors) => {
                tracing::debug!(invalid = errors.len(), "Submit refused");
                for error in errors.to_field_errors() {
                    tracing::trace!("{error}");
                }
                self.status_message = Some(format!(
                    "{} field(s) need attention",
                    errors.len()
                ));
            }
        }
    }

    /// Discard the session and start over
    pub fn reset_form(&mut self) {
        if !self.state.form.is_dirty() {
            self.status_message = Some("Nothing to clear".to_string());
            return;
        }
        tracing::debug!("Form reset");
        self.state.reset_form();
        self.status_message = Some("Form cleared".to_string());
    }

    /// Copy the last submitted payload to the clipboard
    fn copy_payload(&mut self) {
        let Some(payload) = self
            .state
            .last_submission
            .as_ref()
            .map(|s| s.payload.clone())
        else {
            return;
        };
        match self.copy_to_clipboard(&payload) {
            Ok(()) => self.status_message = Some(format!("Copied {} chars", payload.len())),
            Err(e) => self.push_error(format!("Failed to copy payload: {e}")),
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
