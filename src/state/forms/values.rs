//! The signup form's value record

use super::field::FieldName;
use serde::{Deserialize, Serialize};

/// Current text of every signup field. Empty text means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub password: String,
    pub password_confirmation: String,
}

impl FormValues {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Address => &self.address,
            FieldName::Password => &self.password,
            FieldName::PasswordConfirmation => &self.password_confirmation,
        }
    }

    pub fn get_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
            FieldName::Address => &mut self.address,
            FieldName::Password => &mut self.password,
            FieldName::PasswordConfirmation => &mut self.password_confirmation,
        }
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// Builder-style setter
    #[cfg(test)]
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// True when every field is still empty
    pub fn is_blank(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Pretty JSON payload with camelCase keys
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
