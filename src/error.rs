use thiserror::Error;

/// Reason why a raw string was rejected by one of the validators.
///
/// Every parser in this crate reports failures through this type and never
/// yields a partially built value.
#[derive(Debug, Clone, PartialEq, Eq, Error, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ValidationError {
    /// The cleaned value (or one of its parts) has the wrong number of characters.
    #[error("{field} is {actual} characters long. Expected {expected}")]
    InvalidLength {
        field: &'static str,
        actual: usize,
        expected: &'static str,
    },

    /// A part that must be made of digits contains something else.
    #[error("{field} contains invalid character(s)")]
    NonNumericInput { field: &'static str },

    /// The check digit(s) do not match the computed value.
    #[error("Invalid checksum ({scheme})")]
    InvalidChecksum { scheme: &'static str },

    /// The clearing number could not be matched to a known bank.
    #[error("Unknown clearing number {clearing_number}. Could not match it to a known bank")]
    UnknownIssuer { clearing_number: String },

    /// The embedded date does not exist or is out of the accepted range.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Finnish civic numbers carry a century marker that must be one of `-`, `+`, `A`.
    #[error("Invalid century marker '{0}'. Must be one of '+', '-', 'A'")]
    InvalidMarker(char),

    /// A Swedish account was accepted with both a 4 and a 5 digit clearing number
    /// for a bank where only one reading can be right. This points at a defect in
    /// the clearing table or the parsing rules rather than at bad user input.
    #[error("Bank account '{0}' seems to be valid both with 4 and 5 clearing digits")]
    AmbiguousParse(String),
}

impl ValidationError {
    /// Stable snake_case name of the failure kind, suitable for metric labels.
    pub fn reason_code(&self) -> &'static str {
        self.into()
    }

    pub(crate) fn length(field: &'static str, actual: usize, expected: &'static str) -> Self {
        ValidationError::InvalidLength {
            field,
            actual,
            expected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgeError {
    /// Some valid identifiers (e.g. Norwegian numbers issued with synthetic dates)
    /// have no birth date to compute an age from.
    #[error("Birth date is not valid")]
    UnknownBirthDate,

    #[error("The reference date {reference} is before the birth year {birth_year}")]
    ReferenceBeforeBirth {
        reference: chrono::NaiveDate,
        birth_year: i32,
    },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reason_codes_are_snake_case() {
        assert_eq!(
            ValidationError::length("value", 3, "10").reason_code(),
            "invalid_length"
        );
        assert_eq!(
            ValidationError::NonNumericInput { field: "value" }.reason_code(),
            "non_numeric_input"
        );
        assert_eq!(
            ValidationError::UnknownIssuer {
                clearing_number: "0000".to_string()
            }
            .reason_code(),
            "unknown_issuer"
        );
        assert_eq!(
            ValidationError::AmbiguousParse("1234".to_string()).reason_code(),
            "ambiguous_parse"
        );
    }

    #[test]
    fn messages_carry_context() {
        assert_eq!(
            ValidationError::length("accountNumber", 12, "7").to_string(),
            "accountNumber is 12 characters long. Expected 7"
        );
        assert_eq!(
            ValidationError::InvalidMarker('B').to_string(),
            "Invalid century marker 'B'. Must be one of '+', '-', 'A'"
        );
        assert_eq!(
            ValidationError::InvalidChecksum { scheme: "Type 4" }.to_string(),
            "Invalid checksum (Type 4)"
        );
    }
}
