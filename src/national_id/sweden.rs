use crate::checksum::{Mod10Checksum, Validator};
use crate::config::ParseOptions;
use crate::dates::{age_in_years, parse_date_parts};
use crate::error::{AgeError, ValidationError};
use crate::kind::IdentifierKind;
use crate::national_id::{normal_form_value, NationalIdentifier};
use crate::observability::metrics::record_outcome;
use crate::str_utils::{is_numeric, remove_all, ID_SEPARATORS};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::str::FromStr;

const MIN_YEAR: i32 = 1900;
const MAX_YEAR: i32 = 2100;
const MOD10: &str = "mod 10";

/// Swedish civic registration number (personnummer), stored with its century
/// as twelve digits: `YYYYMMDDNNNC`.
#[derive(Deserialize, Clone, Debug)]
#[serde(try_from = "String")]
pub struct CivicNumberSe {
    number: String,
    birth_date: NaiveDate,
}

impl CivicNumberSe {
    pub fn parse(raw: &str, options: &ParseOptions) -> Result<Self, ValidationError> {
        record_outcome(IdentifierKind::CivicNumberSe, Self::validate(raw, options))
    }

    pub fn is_valid(raw: &str, options: &ParseOptions) -> bool {
        Self::parse(raw, options).is_ok()
    }

    pub(crate) fn validate(raw: &str, options: &ParseOptions) -> Result<Self, ValidationError> {
        let cleaned = remove_all(raw, ID_SEPARATORS);
        let length = cleaned.chars().count();
        let guess = options.guess_year_when_ten_digits;
        if !(length == 12 || (guess && length == 10)) {
            let expected = if guess { "10 or 12" } else { "12" };
            return Err(ValidationError::length("civic number", length, expected));
        }
        if !is_numeric(&cleaned) {
            return Err(ValidationError::NonNumericInput {
                field: "civic number",
            });
        }

        // The century is not part of the checksum.
        if !Mod10Checksum.is_valid_match(&cleaned[length - 10..]) {
            return Err(ValidationError::InvalidChecksum { scheme: MOD10 });
        }

        if length == 12 {
            let birth_date = parse_date_parts(&cleaned[..4], &cleaned[4..6], &cleaned[6..8])
                .ok_or_else(|| {
                    ValidationError::InvalidDate(format!("{} is not a date", &cleaned[..8]))
                })?;
            if !(MIN_YEAR..=MAX_YEAR).contains(&birth_date.year()) {
                return Err(ValidationError::InvalidDate(format!(
                    "year {} is outside {MIN_YEAR}-{MAX_YEAR}",
                    birth_date.year()
                )));
            }
            Ok(Self {
                number: cleaned,
                birth_date,
            })
        } else {
            let birth_date = guess_century(&cleaned[..6], options.today())?;
            Ok(Self {
                number: format!("{}{cleaned}", birth_date.year() / 100),
                birth_date,
            })
        }
    }

    /// `YYMMDDNNNC`
    pub fn ten_digit_normal_form(&self) -> &str {
        &self.number[2..]
    }

    /// `YYYYMMDDNNNC`
    pub fn twelve_digit_normal_form(&self) -> &str {
        &self.number
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn age_in_years(&self, reference: NaiveDate) -> Result<i32, AgeError> {
        age_in_years(self.birth_date, reference)
    }
}

/// Picks the century of a `YYMMDD` date. When both 19xx and 20xx are real
/// dates, 20xx is used unless it is after `today`.
fn guess_century(date_part: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let (year, month, day) = (&date_part[..2], &date_part[2..4], &date_part[4..6]);
    let in_1900s = parse_date_parts(&format!("19{year}"), month, day);
    let in_2000s = parse_date_parts(&format!("20{year}"), month, day);

    match (in_1900s, in_2000s) {
        (Some(in_1900s), Some(in_2000s)) => Ok(if in_2000s > today {
            in_1900s
        } else {
            in_2000s
        }),
        (Some(date), None) | (None, Some(date)) => Ok(date),
        (None, None) => Err(ValidationError::InvalidDate(format!(
            "{date_part} is not a date"
        ))),
    }
}

impl NationalIdentifier for CivicNumberSe {
    fn normal_form(&self) -> &str {
        self.twelve_digit_normal_form()
    }

    fn is_company(&self) -> bool {
        false
    }

    fn kind(&self) -> IdentifierKind {
        IdentifierKind::CivicNumberSe
    }
}

impl FromStr for CivicNumberSe {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &ParseOptions::default())
    }
}

normal_form_value!(CivicNumberSe);

/// Swedish organisation number. Sole proprietors use their civic number, so
/// the digits are not required to look like anything but a checksummed value.
#[derive(Deserialize, Clone, Debug)]
#[serde(try_from = "String")]
pub struct OrganisationNumberSe {
    number: String,
}

impl OrganisationNumberSe {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        record_outcome(IdentifierKind::OrganisationNumberSe, Self::validate(raw))
    }

    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    fn validate(raw: &str) -> Result<Self, ValidationError> {
        let cleaned = remove_all(raw, ID_SEPARATORS);
        let length = cleaned.chars().count();
        if length != 10 {
            return Err(ValidationError::length("organisation number", length, "10"));
        }
        if !is_numeric(&cleaned) {
            return Err(ValidationError::NonNumericInput {
                field: "organisation number",
            });
        }
        if !Mod10Checksum.is_valid_match(&cleaned) {
            return Err(ValidationError::InvalidChecksum { scheme: MOD10 });
        }
        Ok(Self { number: cleaned })
    }

    pub fn ten_digit_normal_form(&self) -> &str {
        &self.number
    }

    /// Form used when organisation numbers share storage with twelve digit
    /// civic numbers: the "century" is always `16`.
    pub fn tax_office_normal_form(&self) -> String {
        format!("16{}", self.number)
    }
}

impl NationalIdentifier for OrganisationNumberSe {
    fn normal_form(&self) -> &str {
        self.ten_digit_normal_form()
    }

    fn is_company(&self) -> bool {
        true
    }

    fn kind(&self) -> IdentifierKind {
        IdentifierKind::OrganisationNumberSe
    }
}

impl FromStr for OrganisationNumberSe {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

normal_form_value!(OrganisationNumberSe);

/// Six digit date of birth (`YYMMDD`) of an individual without a civic number.
#[derive(Deserialize, Clone, Debug)]
#[serde(try_from = "String")]
pub struct DateOfBirthSe {
    number: String,
}

impl DateOfBirthSe {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        record_outcome(IdentifierKind::DateOfBirthSe, Self::validate(raw))
    }

    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    fn validate(raw: &str) -> Result<Self, ValidationError> {
        let cleaned = remove_all(raw, ID_SEPARATORS);
        let length = cleaned.chars().count();
        if length != 6 {
            return Err(ValidationError::length("date of birth", length, "6"));
        }
        if !is_numeric(&cleaned) {
            return Err(ValidationError::NonNumericInput {
                field: "date of birth",
            });
        }
        Ok(Self { number: cleaned })
    }

    pub fn six_digit_date_of_birth(&self) -> &str {
        &self.number
    }
}

impl NationalIdentifier for DateOfBirthSe {
    fn normal_form(&self) -> &str {
        self.six_digit_date_of_birth()
    }

    fn is_company(&self) -> bool {
        false
    }

    fn kind(&self) -> IdentifierKind {
        IdentifierKind::DateOfBirthSe
    }
}

impl FromStr for DateOfBirthSe {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

normal_form_value!(DateOfBirthSe);
