use crate::checksum::{norwegian_civic_check_digits, norwegian_organisation_control_digit};
use crate::config::ParseOptions;
use crate::dates::{age_of, parse_date_parts};
use crate::error::{AgeError, ValidationError};
use crate::kind::IdentifierKind;
use crate::national_id::{normal_form_value, NationalIdentifier};
use crate::observability::metrics::record_outcome;
use crate::str_utils::{digits_only, to_digits};
use chrono::NaiveDate;
use serde::Deserialize;
use std::str::FromStr;

const CIVIC_NUMBER_LENGTH: usize = 11;
const ORGANISATION_NUMBER_LENGTH: usize = 9;

/// Individual number ranges and the century they were issued in. Ranges
/// overlap, so they are tried in order and the first match wins.
const CENTURY_RANGES: &[(u32, u32, &str)] = &[
    (0, 499, "19"),
    (500, 749, "18"),
    (900, 999, "19"),
    (500, 999, "20"),
];

/// Norwegian national identity number (fødselsnummer): `DDMMYYIIICC`.
///
/// Some numbers were issued with dates that do not exist (D-numbers, and
/// synthetic dates when a day's serials ran out), so the birth date is
/// optional unless [`ParseOptions::strict_birth_date`] is set.
#[derive(Deserialize, Clone, Debug)]
#[serde(try_from = "String")]
pub struct CivicNumberNo {
    number: String,
    birth_date: Option<NaiveDate>,
}

impl CivicNumberNo {
    pub fn parse(raw: &str, options: &ParseOptions) -> Result<Self, ValidationError> {
        record_outcome(IdentifierKind::CivicNumberNo, Self::validate(raw, options))
    }

    pub fn is_valid(raw: &str, options: &ParseOptions) -> bool {
        Self::parse(raw, options).is_ok()
    }

    fn validate(raw: &str, options: &ParseOptions) -> Result<Self, ValidationError> {
        let number = digits_only(raw);
        if number.len() != CIVIC_NUMBER_LENGTH {
            return Err(ValidationError::length(
                "civic number",
                number.len(),
                "11",
            ));
        }

        let birth_date = birth_date_of(&number);
        if options.strict_birth_date && birth_date.is_none() {
            return Err(ValidationError::InvalidDate(format!(
                "{} has no valid birth date",
                &number[..6]
            )));
        }

        let digits = to_digits(&number).ok_or(ValidationError::NonNumericInput {
            field: "civic number",
        })?;
        match norwegian_civic_check_digits(&digits[..9]) {
            Some((k1, k2)) if k1 == digits[9] && k2 == digits[10] => {
                Ok(Self { number, birth_date })
            }
            _ => Err(ValidationError::InvalidChecksum {
                scheme: "mod 11 (k1, k2)",
            }),
        }
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    /// Fails with [`AgeError::UnknownBirthDate`] for numbers without a real date.
    pub fn age_in_years(&self, reference: NaiveDate) -> Result<i32, AgeError> {
        age_of(self.birth_date, reference)
    }
}

fn century_of(individual_number: u32) -> Option<&'static str> {
    CENTURY_RANGES
        .iter()
        .find(|(start, end, _)| (*start..=*end).contains(&individual_number))
        .map(|(_, _, century)| *century)
}

/// `number` must be eleven ASCII digits.
fn birth_date_of(number: &str) -> Option<NaiveDate> {
    let individual_number = number[6..9].parse().ok()?;
    let century = century_of(individual_number)?;
    let year = format!("{century}{}", &number[4..6]);
    parse_date_parts(&year, &number[2..4], &number[..2])
}

impl NationalIdentifier for CivicNumberNo {
    fn normal_form(&self) -> &str {
        &self.number
    }

    fn is_company(&self) -> bool {
        false
    }

    fn kind(&self) -> IdentifierKind {
        IdentifierKind::CivicNumberNo
    }
}

impl FromStr for CivicNumberNo {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &ParseOptions::default())
    }
}

normal_form_value!(CivicNumberNo);

/// Norwegian organisation number (organisasjonsnummer), nine digits.
#[derive(Deserialize, Clone, Debug)]
#[serde(try_from = "String")]
pub struct OrganisationNumberNo {
    number: String,
}

impl OrganisationNumberNo {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        record_outcome(IdentifierKind::OrganisationNumberNo, Self::validate(raw))
    }

    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    fn validate(raw: &str) -> Result<Self, ValidationError> {
        let number = digits_only(raw);
        if number.len() != ORGANISATION_NUMBER_LENGTH {
            return Err(ValidationError::length(
                "organisation number",
                number.len(),
                "9",
            ));
        }
        let digits = to_digits(&number).ok_or(ValidationError::NonNumericInput {
            field: "organisation number",
        })?;
        let (body, control) = digits.split_at(ORGANISATION_NUMBER_LENGTH - 1);
        if norwegian_organisation_control_digit(body) != Some(control[0]) {
            return Err(ValidationError::InvalidChecksum {
                scheme: "mod 11 (weights 2-7)",
            });
        }
        Ok(Self { number })
    }
}

impl NationalIdentifier for OrganisationNumberNo {
    fn normal_form(&self) -> &str {
        &self.number
    }

    fn is_company(&self) -> bool {
        true
    }

    fn kind(&self) -> IdentifierKind {
        IdentifierKind::OrganisationNumberNo
    }
}

impl FromStr for OrganisationNumberNo {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

normal_form_value!(OrganisationNumberNo);
