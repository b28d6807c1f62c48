//! Application state definitions

use super::forms::{SignupForm, SubmitOutcome};
use crate::config::TuiConfig;
use crate::submission::Submission;
use std::collections::VecDeque;

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    // Form session
    pub form: SignupForm,

    // Submission
    pub last_submission: Option<Submission>,
    pub show_submission_dialog: bool,
    /// Invalid field count of the last refused submit, cleared on the next edit
    pub rejected_field_count: Option<usize>,

    // Display
    pub mask_passwords: bool,

    // Modal error queue, oldest first
    errors: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: SignupForm::new(),
            last_submission: None,
            show_submission_dialog: false,
            rejected_field_count: None,
            mask_passwords: true,
            errors: VecDeque::new(),
        }
    }
}

impl AppState {
    pub fn from_config(config: &TuiConfig) -> Self {
        Self {
            mask_passwords: config.mask_passwords(),
            ..Default::default()
        }
    }

    /// Record what a submit attempt produced, before the sink is called
    pub fn note_submit_outcome(&mut self, outcome: &SubmitOutcome) {
        self.rejected_field_count = match outcome {
            SubmitOutcome::Accepted(_) => None,
            SubmitOutcome::Rejected(errors) => Some(errors.len()),
        };
    }

    /// Show the payload dialog for an accepted submission
    pub fn show_submission(&mut self, submission: Submission) {
        self.last_submission = Some(submission);
        self.show_submission_dialog = true;
    }

    pub fn dismiss_submission(&mut self) {
        self.show_submission_dialog = false;
    }

    /// Start a fresh form session, keeping display preferences
    pub fn reset_form(&mut self) {
        self.form.reset();
        self.rejected_field_count = None;
        self.show_submission_dialog = false;
    }

    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
