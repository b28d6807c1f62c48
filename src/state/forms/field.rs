//! Form field identifiers and their display metadata

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six fields of the signup form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Address,
    Password,
    PasswordConfirmation,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 6] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Address,
        FieldName::Password,
        FieldName::PasswordConfirmation,
    ];

    /// Field for a row index, `None` past the last field
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this field in display order
    pub fn index(&self) -> usize {
        match self {
            Self::FirstName => 0,
            Self::LastName => 1,
            Self::Email => 2,
            Self::Address => 3,
            Self::Password => 4,
            Self::PasswordConfirmation => 5,
        }
    }

    /// Stable key used in the serialized payload
    pub fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Address => "address",
            Self::Password => "password",
            Self::PasswordConfirmation => "passwordConfirmation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Address => "Address",
            Self::Password => "Password",
            Self::PasswordConfirmation => "Password Confirmation",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::FirstName => "Jane",
            Self::LastName => "Doe",
            Self::Email => "jane@acme.com",
            Self::Address => "Nino Bixio 36",
            Self::Password | Self::PasswordConfirmation => "password",
        }
    }

    /// Secret fields are masked when rendered
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::PasswordConfirmation)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
