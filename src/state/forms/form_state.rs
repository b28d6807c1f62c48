//! Form session state: values, touched flags, focus and submission gating

use super::error::ValidationErrors;
use super::field::FieldName;
use super::schema;
use super::values::FormValues;
use std::collections::BTreeSet;

/// Trait for common form navigation
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    /// Called when focus leaves the active row
    fn on_blur(&mut self) {}
    fn next_field(&mut self) {
        self.on_blur();
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        self.on_blur();
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Visual classification of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStatus {
    /// Not interacted with yet, neutral styling
    Untouched,
    /// Touched and passing, green styling
    Valid,
    /// Touched and failing, red styling with the message shown
    Invalid(String),
}

/// Derived per-field state, recomputed on every read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub touched: bool,
    pub error: Option<String>,
}

impl FieldState {
    pub fn status(&self) -> FieldStatus {
        match (self.touched, &self.error) {
            (false, _) => FieldStatus::Untouched,
            (true, None) => FieldStatus::Valid,
            (true, Some(message)) => FieldStatus::Invalid(message.clone()),
        }
    }
}

/// Buttons below the fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Reset,
}

impl FormButton {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Submit => "Submit",
            Self::Reset => "Reset",
        }
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Submit => Self::Reset,
            Self::Reset => Self::Submit,
        };
    }
}

/// What a submit attempt produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; hand these values to the submission collaborator
    Accepted(FormValues),
    /// At least one field failed; nothing is submitted
    Rejected(ValidationErrors),
}

/// The signup form session
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    values: FormValues,
    touched: BTreeSet<FieldName>,
    submit_count: u32,
    pub active_field_index: usize,
    pub selected_button: FormButton,
}

impl SignupForm {
    /// Row index of the Submit/Reset buttons
    pub const BUTTONS_ROW: usize = FieldName::ALL.len();

    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Update a field's value. Does not mark it touched.
    pub fn set_field_value(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.set(field, value);
    }

    /// Mark a field as interacted with; flags only accumulate until reset
    pub fn mark_touched(&mut self, field: FieldName) {
        self.touched.insert(field);
    }

    pub fn mark_all_touched(&mut self) {
        self.touched.extend(FieldName::ALL);
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(&field)
    }

    /// Run a validation pass over the current values
    pub fn errors(&self) -> ValidationErrors {
        schema::validate(&self.values)
    }

    pub fn field_state(&self, field: FieldName) -> FieldState {
        FieldState {
            touched: self.is_touched(field),
            error: self.errors().get(field).map(str::to_string),
        }
    }

    pub fn field_status(&self, field: FieldName) -> FieldStatus {
        self.field_state(field).status()
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// True once any field was touched or edited
    pub fn is_dirty(&self) -> bool {
        !self.touched.is_empty() || !self.values.is_blank()
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Reveal every field's state and gate submission on validity
    pub fn submit(&mut self) -> SubmitOutcome {
        self.submit_count += 1;
        self.mark_all_touched();
        let errors = self.errors();
        if errors.is_empty() {
            SubmitOutcome::Accepted(self.values.clone())
        } else {
            SubmitOutcome::Rejected(errors)
        }
    }

    /// Back to the pristine state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Field under focus, `None` on the buttons row
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_field_index)
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == Self::BUTTONS_ROW
    }

    /// Append a character to the active field
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.active_field_name() {
            let mut value = self.values.get(field).to_string();
            value.push(c);
            self.set_field_value(field, value);
        }
    }

    /// Remove the last character of the active field
    pub fn pop_char(&mut self) {
        if let Some(field) = self.active_field_name() {
            let mut value = self.values.get(field).to_string();
            if value.pop().is_some() {
                self.set_field_value(field, value);
            }
        }
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        Self::BUTTONS_ROW + 1 // six fields, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTONS_ROW);
    }
    fn on_blur(&mut self) {
        if let Some(field) = self.active_field_name() {
            self.mark_touched(field);
        }
    }
}
