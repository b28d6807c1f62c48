//! Declarative validation schema for the signup form
//!
//! Each field owns an ordered list of rules. A validation pass walks every
//! field and reports the message of the first rule that fails, so a field
//! carries at most one error at a time.
//!
//! The empty string counts as an absent value: length and pattern rules skip
//! it and only `Required` rejects it.

use super::error::ValidationErrors;
use super::field::FieldName;
use super::values::FormValues;
use regex::Regex;
use std::sync::LazyLock;

pub const REQUIRED: &str = "Required";
pub const TOO_SHORT: &str = "Too Short!";
pub const TOO_LONG: &str = "Too Long!";
pub const INVALID_EMAIL: &str = "Invalid email";
pub const WEAK_PASSWORD: &str =
    "Must Contain 10 Characters, One Uppercase, One Lowercase, One Number and One Special Case Character";
pub const PASSWORDS_MUST_MATCH: &str = "Passwords must match";

/// Characters accepted as the password's special character
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*";
pub const PASSWORD_MIN_LENGTH: usize = 10;

/// WHATWG "valid e-mail address" grammar
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

/// A single predicate + message pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required(&'static str),
    MinLength(usize, &'static str),
    MaxLength(usize, &'static str),
    Email(&'static str),
    StrongPassword(&'static str),
    /// Value must equal the current value of another field
    Matches(FieldName, &'static str),
}

impl Rule {
    pub fn message(&self) -> &'static str {
        match self {
            Rule::Required(m)
            | Rule::MinLength(_, m)
            | Rule::MaxLength(_, m)
            | Rule::Email(m)
            | Rule::StrongPassword(m)
            | Rule::Matches(_, m) => m,
        }
    }

    /// Whether `value` satisfies this rule, given the whole record for
    /// cross-field rules
    pub fn passes(&self, value: &str, values: &FormValues) -> bool {
        if value.is_empty() {
            return !matches!(self, Rule::Required(_));
        }
        match self {
            Rule::Required(_) => true,
            Rule::MinLength(min, _) => value.chars().count() >= *min,
            Rule::MaxLength(max, _) => value.chars().count() <= *max,
            Rule::Email(_) => EMAIL_RE.is_match(value),
            Rule::StrongPassword(_) => is_strong_password(value),
            Rule::Matches(other, _) => value == values.get(*other),
        }
    }
}

/// Lowercase, uppercase, digit, special character and minimum length
pub fn is_strong_password(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SPECIALS.contains(c))
        && value.chars().count() >= PASSWORD_MIN_LENGTH
}

const FIRST_NAME_RULES: &[Rule] = &[
    Rule::MinLength(3, TOO_SHORT),
    Rule::MaxLength(50, TOO_LONG),
    Rule::Required(REQUIRED),
];

const LAST_NAME_RULES: &[Rule] = &[
    Rule::MinLength(3, TOO_SHORT),
    Rule::MaxLength(50, TOO_LONG),
    Rule::Required(REQUIRED),
];

const EMAIL_RULES: &[Rule] = &[Rule::Email(INVALID_EMAIL), Rule::Required(REQUIRED)];

const ADDRESS_RULES: &[Rule] = &[Rule::MinLength(10, TOO_SHORT), Rule::MaxLength(50, TOO_LONG)];

const PASSWORD_RULES: &[Rule] = &[Rule::Required(REQUIRED), Rule::StrongPassword(WEAK_PASSWORD)];

const PASSWORD_CONFIRMATION_RULES: &[Rule] = &[
    Rule::Required(REQUIRED),
    Rule::Matches(FieldName::Password, PASSWORDS_MUST_MATCH),
];

/// Static, immutable set of per-field rules
#[derive(Debug, Clone, Copy)]
pub struct ValidationSchema {
    fields: &'static [(FieldName, &'static [Rule])],
}

/// The signup form's rule set
pub static SIGNUP_SCHEMA: ValidationSchema = ValidationSchema {
    fields: &[
        (FieldName::FirstName, FIRST_NAME_RULES),
        (FieldName::LastName, LAST_NAME_RULES),
        (FieldName::Email, EMAIL_RULES),
        (FieldName::Address, ADDRESS_RULES),
        (FieldName::Password, PASSWORD_RULES),
        (FieldName::PasswordConfirmation, PASSWORD_CONFIRMATION_RULES),
    ],
};

impl ValidationSchema {
    pub fn rules(&self, field: FieldName) -> &'static [Rule] {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, rules)| *rules)
            .unwrap_or(&[])
    }

    /// First failing rule's message for one field
    pub fn validate_field(&self, field: FieldName, values: &FormValues) -> Option<&'static str> {
        let value = values.get(field);
        self.rules(field)
            .iter()
            .find(|rule| !rule.passes(value, values))
            .map(Rule::message)
    }

    /// One validation pass over every field
    pub fn validate(&self, values: &FormValues) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (field, _) in self.fields {
            if let Some(message) = self.validate_field(*field, values) {
                errors.insert(*field, message);
            }
        }
        errors
    }
}

/// Validate `values` against the signup schema
pub fn validate(values: &FormValues) -> ValidationErrors {
    SIGNUP_SCHEMA.validate(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn valid_values() -> FormValues {
        FormValues::default()
            .with(FieldName::FirstName, "Jane")
            .with(FieldName::LastName, "Doe")
            .with(FieldName::Email, "jane@acme.com")
            .with(FieldName::Address, "Nino Bixio 36")
            .with(FieldName::Password, "Abcdef123!")
            .with(FieldName::PasswordConfirmation, "Abcdef123!")
    }

    fn error_for(field: FieldName, value: &str) -> Option<String> {
        let values = valid_values().with(field, value);
        validate(&values).get(field).map(str::to_string)
    }

    #[test]
    fn test_valid_record_has_no_errors() {
        assert!(validate(&valid_values()).is_empty());
    }

    #[test]
    fn test_blank_record_reports_required_fields_only() {
        let errors = validate(&FormValues::default());
        assert_eq!(errors.get(FieldName::FirstName), Some(REQUIRED));
        assert_eq!(errors.get(FieldName::LastName), Some(REQUIRED));
        assert_eq!(errors.get(FieldName::Email), Some(REQUIRED));
        assert_eq!(errors.get(FieldName::Password), Some(REQUIRED));
        assert_eq!(errors.get(FieldName::PasswordConfirmation), Some(REQUIRED));
        assert_eq!(errors.get(FieldName::Address), None);
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_schema_covers_every_field() {
        for field in FieldName::ALL {
            assert!(!SIGNUP_SCHEMA.rules(field).is_empty(), "{field} has no rules");
        }
    }

    mod names {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_first_name_bounds() {
            assert_eq!(error_for(FieldName::FirstName, "Jo").as_deref(), Some(TOO_SHORT));
            assert_eq!(error_for(FieldName::FirstName, "Joe"), None);
            assert_eq!(error_for(FieldName::FirstName, &"a".repeat(50)), None);
            assert_eq!(
                error_for(FieldName::FirstName, &"a".repeat(51)).as_deref(),
                Some(TOO_LONG)
            );
        }

        #[test]
        fn test_first_name_required_then_cleared() {
            assert_eq!(error_for(FieldName::FirstName, "").as_deref(), Some(REQUIRED));
            assert_eq!(error_for(FieldName::FirstName, "Jane"), None);
        }

        #[test]
        fn test_last_name_uses_same_required_message() {
            assert_eq!(error_for(FieldName::LastName, "").as_deref(), Some(REQUIRED));
            assert_eq!(error_for(FieldName::LastName, "Do").as_deref(), Some(TOO_SHORT));
        }

        #[test]
        fn test_length_counts_characters_not_bytes() {
            // three chars, six bytes
            assert_eq!(error_for(FieldName::FirstName, "Łéö"), None);
            assert_eq!(
                error_for(FieldName::FirstName, &"é".repeat(50)),
                None
            );
        }

        #[test]
        fn test_whitespace_is_a_present_value() {
            assert_eq!(error_for(FieldName::FirstName, " ").as_deref(), Some(TOO_SHORT));
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_email() {
            assert_eq!(
                error_for(FieldName::Email, "not-an-email").as_deref(),
                Some(INVALID_EMAIL)
            );
            assert_eq!(error_for(FieldName::Email, "a@").as_deref(), Some(INVALID_EMAIL));
            assert_eq!(error_for(FieldName::Email, "@b.com").as_deref(), Some(INVALID_EMAIL));
            assert_eq!(
                error_for(FieldName::Email, "a b@c.com").as_deref(),
                Some(INVALID_EMAIL)
            );
        }

        #[test]
        fn test_valid_email() {
            assert_eq!(error_for(FieldName::Email, "a@b.com"), None);
            assert_eq!(error_for(FieldName::Email, "jane.doe+news@acme.co.uk"), None);
        }

        #[test]
        fn test_empty_email_is_required() {
            assert_eq!(error_for(FieldName::Email, "").as_deref(), Some(REQUIRED));
        }
    }

    mod address {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_address_is_optional() {
            assert_eq!(error_for(FieldName::Address, ""), None);
        }

        #[test]
        fn test_address_bounds() {
            assert_eq!(error_for(FieldName::Address, "Via 1").as_deref(), Some(TOO_SHORT));
            assert_eq!(error_for(FieldName::Address, &"x".repeat(10)), None);
            assert_eq!(error_for(FieldName::Address, &"x".repeat(50)), None);
            assert_eq!(
                error_for(FieldName::Address, &"x".repeat(51)).as_deref(),
                Some(TOO_LONG)
            );
        }
    }

    mod password {
        use super::*;
        use pretty_assertions::assert_eq;

        fn password_error(password: &str) -> Option<String> {
            let values = valid_values()
                .with(FieldName::Password, password)
                .with(FieldName::PasswordConfirmation, password);
            validate(&values).get(FieldName::Password).map(str::to_string)
        }

        #[test]
        fn test_weak_password_lists_requirements() {
            assert_eq!(password_error("abc").as_deref(), Some(WEAK_PASSWORD));
        }

        #[test]
        fn test_strong_password() {
            assert_eq!(password_error("Abcdef123!"), None);
        }

        #[test]
        fn test_each_requirement_is_enforced() {
            assert_eq!(password_error("abcdef123!").as_deref(), Some(WEAK_PASSWORD));
            assert_eq!(password_error("ABCDEF123!").as_deref(), Some(WEAK_PASSWORD));
            assert_eq!(password_error("Abcdefghi!").as_deref(), Some(WEAK_PASSWORD));
            assert_eq!(password_error("Abcdef1234").as_deref(), Some(WEAK_PASSWORD));
            assert_eq!(password_error("Abcde123!").as_deref(), Some(WEAK_PASSWORD));
        }

        #[test]
        fn test_only_listed_specials_count() {
            assert_eq!(password_error("Abcdef123?").as_deref(), Some(WEAK_PASSWORD));
            for special in PASSWORD_SPECIALS.chars() {
                assert_eq!(password_error(&format!("Abcdef123{special}")), None);
            }
        }

        #[test]
        fn test_empty_password_is_required() {
            assert_eq!(password_error("").as_deref(), Some(REQUIRED));
        }
    }

    mod confirmation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_mismatch() {
            let values = valid_values()
                .with(FieldName::Password, "Abcdef123!")
                .with(FieldName::PasswordConfirmation, "Abcdef123");
            assert_eq!(
                validate(&values).get(FieldName::PasswordConfirmation),
                Some(PASSWORDS_MUST_MATCH)
            );
        }

        #[test]
        fn test_exact_match() {
            let values = valid_values()
                .with(FieldName::Password, "Abcdef123!")
                .with(FieldName::PasswordConfirmation, "Abcdef123!");
            assert_eq!(validate(&values).get(FieldName::PasswordConfirmation), None);
        }

        #[test]
        fn test_empty_confirmation_is_required() {
            let values = valid_values().with(FieldName::PasswordConfirmation, "");
            assert_eq!(
                validate(&values).get(FieldName::PasswordConfirmation),
                Some(REQUIRED)
            );
        }

        #[test]
        fn test_confirmation_tracks_current_password() {
            let mut values = valid_values();
            values.set(FieldName::Password, "Zyxwvu987#");
            assert_eq!(
                validate(&values).get(FieldName::PasswordConfirmation),
                Some(PASSWORDS_MUST_MATCH)
            );
        }
    }

    proptest! {
        #[test]
        fn first_name_shorter_than_three_is_too_short(name in "[a-zA-Z]{1,2}") {
            let error = error_for(FieldName::FirstName, &name);
            prop_assert_eq!(error.as_deref(), Some(TOO_SHORT));
        }

        #[test]
        fn first_name_longer_than_fifty_is_too_long(name in "[a-zA-Z]{51,80}") {
            let error = error_for(FieldName::FirstName, &name);
            prop_assert_eq!(error.as_deref(), Some(TOO_LONG));
        }

        #[test]
        fn first_name_within_bounds_is_valid(name in "[a-zA-Z]{3,50}") {
            prop_assert_eq!(error_for(FieldName::FirstName, &name), None);
        }

        #[test]
        fn validation_is_deterministic(email in ".{0,20}", password in ".{0,20}") {
            let values = valid_values()
                .with(FieldName::Email, email)
                .with(FieldName::Password, password);
            prop_assert_eq!(validate(&values), validate(&values));
        }
    }
}
