//! Field validation errors

use super::field::FieldName;
use std::collections::BTreeMap;

/// A user-correctable input error attached to one field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    pub field: FieldName,
    pub message: String,
}

/// Result of one validation pass: field -> first failing rule's message.
/// A field with no entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FieldName, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Entries in display order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub fn to_field_errors(&self) -> Vec<FieldValidationError> {
        self.iter()
            .map(|(field, message)| FieldValidationError {
                field,
                message: message.to_string(),
            })
            .collect()
    }
}
