//! Form domain layer
//!
//! Values, touched bookkeeping and the declarative validation schema for the
//! signup form. Everything here is synchronous and free of I/O; the app and
//! UI layers drive it.

mod error;
mod field;
mod form_state;
mod schema;
mod values;

#[cfg(test)]
pub use error::ValidationErrors;
pub use field::FieldName;
pub use form_state::{Form, FieldStatus, FormButton, SignupForm, SubmitOutcome};
pub use values::FormValues;
