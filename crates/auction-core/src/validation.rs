//! Validation utilities.

use crate::{AuctionError, FieldError};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns an `AuctionError` on failure.
    fn validate_request(&self) -> Result<(), AuctionError> {
        self.validate().map_err(validation_errors_to_auction_error)
    }

    /// Plain pass/fail validation result.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl<T: Validate> ValidateExt for T {}

/// Flattens `validator::ValidationErrors` into field errors.
///
/// Nested struct errors are reported with a dotted path (`seller.first_name`)
/// and list errors with an index (`items[2].name`). Struct-level (schema)
/// errors keep validator's `__all__` key.
#[must_use]
pub fn collect_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    collect_into(errors, "", &mut out);
    out.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
    out
}

fn collect_into(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|error| FieldError {
                    field: path.clone(),
                    message: error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                    code: error.code.to_string(),
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect_into(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_into(nested, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

/// Converts `validator::ValidationErrors` to `AuctionError`.
#[must_use]
pub fn validation_errors_to_auction_error(errors: ValidationErrors) -> AuctionError {
    let message = collect_field_errors(&errors)
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    AuctionError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use regex::Regex;
    use std::sync::LazyLock;
    use validator::ValidationError;

    static CAPITALIZED_WORD: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z'\- ]*$").expect("valid regex"));

    static PHONE_NUMBER: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^\+?[0-9 ().\-]+$").expect("valid regex"));

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates a personal name: starts with an uppercase letter, then
    /// letters, apostrophes, hyphens, or spaces.
    pub fn capitalized_word(value: &str) -> Result<(), ValidationError> {
        if !CAPITALIZED_WORD.is_match(value) {
            let mut error = ValidationError::new("capitalized_word");
            error.message = Some("must start with an uppercase letter".into());
            return Err(error);
        }
        Ok(())
    }

    /// Validates a phone number: optional leading `+`, digits separated by
    /// spaces, dots, dashes, or parentheses, with 7 to 15 digits in total.
    pub fn phone_number(value: &str) -> Result<(), ValidationError> {
        if !PHONE_NUMBER.is_match(value) {
            return Err(ValidationError::new("phone_number"));
        }

        let digits = value.chars().filter(char::is_ascii_digit).count();
        if !(7..=15).contains(&digits) {
            return Err(ValidationError::new("phone_number_digits"));
        }
        Ok(())
    }
}
