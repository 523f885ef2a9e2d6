use crate::checksum::{finnish_check_character, finnish_organisation_check_digit};
use crate::dates::{age_in_years, parse_date_parts};
use crate::error::{AgeError, ValidationError};
use crate::kind::IdentifierKind;
use crate::national_id::{normal_form_value, NationalIdentifier};
use crate::observability::metrics::record_outcome;
use crate::str_utils::{digits_only, is_numeric, remove_all, to_digits};
use chrono::NaiveDate;
use serde::Deserialize;
use std::str::FromStr;

const CIVIC_NUMBER_LENGTH: usize = 11;
const ORGANISATION_NUMBER_LENGTH: usize = 8;

fn century_of_marker(marker: char) -> Option<&'static str> {
    match marker {
        '+' => Some("18"),
        '-' => Some("19"),
        'A' => Some("20"),
        _ => None,
    }
}

/// Finnish personal identity code (henkilötunnus): `DDMMYY`, a century
/// marker, a three digit individual number and a check character.
#[derive(Deserialize, Clone, Debug)]
#[serde(try_from = "String")]
pub struct CivicNumberFi {
    number: String,
    birth_date: NaiveDate,
}

impl CivicNumberFi {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        record_outcome(IdentifierKind::CivicNumberFi, Self::validate(raw))
    }

    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    fn validate(raw: &str) -> Result<Self, ValidationError> {
        let number = remove_all(raw, &[' ']);
        let chars: Vec<char> = number.chars().collect();
        if chars.len() != CIVIC_NUMBER_LENGTH {
            return Err(ValidationError::length("civic number", chars.len(), "11"));
        }

        let date_part: String = chars[..6].iter().collect();
        let marker = chars[6];
        let individual_number: String = chars[7..10].iter().collect();
        let check_character = chars[10];

        let century = century_of_marker(marker).ok_or(ValidationError::InvalidMarker(marker))?;

        let birth_date = parse_date_parts(
            &format!("{century}{}", date_part.get(4..).unwrap_or_default()),
            date_part.get(2..4).unwrap_or_default(),
            date_part.get(..2).unwrap_or_default(),
        )
        .ok_or_else(|| {
            ValidationError::InvalidDate(format!("{date_part} in {century}00s is not a date"))
        })?;

        if !is_numeric(&individual_number) {
            return Err(ValidationError::NonNumericInput {
                field: "individual number",
            });
        }

        if finnish_check_character(&date_part, &individual_number) != Some(check_character) {
            return Err(ValidationError::InvalidChecksum { scheme: "mod 31" });
        }

        Ok(Self { number, birth_date })
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn age_in_years(&self, reference: NaiveDate) -> Result<i32, AgeError> {
        age_in_years(self.birth_date, reference)
    }
}

impl NationalIdentifier for CivicNumberFi {
    fn normal_form(&self) -> &str {
        &self.number
    }

    fn is_company(&self) -> bool {
        false
    }

    fn kind(&self) -> IdentifierKind {
        IdentifierKind::CivicNumberFi
    }
}

impl FromStr for CivicNumberFi {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

normal_form_value!(CivicNumberFi);

/// Finnish business id (Y-tunnus), normalised as `1234567-8`.
#[derive(Deserialize, Clone, Debug)]
#[serde(try_from = "String")]
pub struct OrganisationNumberFi {
    number: String,
}

impl OrganisationNumberFi {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        record_outcome(IdentifierKind::OrganisationNumberFi, Self::validate(raw))
    }

    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    fn validate(raw: &str) -> Result<Self, ValidationError> {
        let digits = digits_only(raw);
        if digits.len() != ORGANISATION_NUMBER_LENGTH {
            return Err(ValidationError::length(
                "organisation number",
                digits.len(),
                "8",
            ));
        }
        let values = to_digits(&digits).ok_or(ValidationError::NonNumericInput {
            field: "organisation number",
        })?;
        if finnish_organisation_check_digit(&values[..7]) != values[7] {
            return Err(ValidationError::InvalidChecksum {
                scheme: "mod 11 (weights 7, 9, 10, 5, 8, 4, 2)",
            });
        }
        Ok(Self {
            number: format!("{}-{}", &digits[..7], &digits[7..]),
        })
    }

    /// `1234567-8`
    pub fn database_normal_form(&self) -> &str {
        &self.number
    }

    /// Digits only: `12345678`
    pub fn comparison_form(&self) -> String {
        digits_only(&self.number)
    }
}

impl NationalIdentifier for OrganisationNumberFi {
    fn normal_form(&self) -> &str {
        self.database_normal_form()
    }

    fn is_company(&self) -> bool {
        true
    }

    fn kind(&self) -> IdentifierKind {
        IdentifierKind::OrganisationNumberFi
    }
}

impl FromStr for OrganisationNumberFi {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

normal_form_value!(OrganisationNumberFi);

#[cfg(test)]
mod test {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn valid_civic_numbers() {
        let cases = vec![
            ("131052-308T", date(1952, 10, 13)),
            ("131052A308T", date(2052, 10, 13)),
            ("131052+308T", date(1852, 10, 13)),
            ("010101-0101", date(1901, 1, 1)),
            (" 131052-308T ", date(1952, 10, 13)),
        ];
        for (raw, birth_date) in cases {
            let number = CivicNumberFi::parse(raw).unwrap();
            assert_eq!(number.birth_date(), birth_date, "{raw}");
        }

        let number: CivicNumberFi = "131052-308T".parse().unwrap();
        assert_eq!(number.age_in_years(date(2015, 10, 12)), Ok(62));
        assert_eq!(number.normal_form(), "131052-308T");
    }

    #[test]
    fn checks_run_in_order() {
        let cases = vec![
            ("131052-308", "invalid_length"),
            ("131052B308T", "invalid_marker"),
            ("290200-308T", "invalid_date"),
            ("131352-308T", "invalid_date"),
            ("131052-3a8T", "non_numeric_input"),
            ("131052-308U", "invalid_checksum"),
            ("131052-308t", "invalid_checksum"),
        ];
        for (raw, reason) in cases {
            assert_eq!(
                CivicNumberFi::parse(raw).unwrap_err().reason_code(),
                reason,
                "{raw}"
            );
        }
        assert_eq!(
            CivicNumberFi::parse("131052B308T").unwrap_err(),
            ValidationError::InvalidMarker('B')
        );
    }

    #[test]
    fn non_ascii_input_does_not_panic() {
        assert!(!CivicNumberFi::is_valid("ÅÄÖ052-308T"));
        assert!(!CivicNumberFi::is_valid("131052-30ØT"));
    }

    #[test]
    fn organisation_numbers() {
        let number: OrganisationNumberFi = "0112038-9".parse().unwrap();
        assert_eq!(number.database_normal_form(), "0112038-9");
        assert_eq!(number.comparison_form(), "01120389");
        assert!(number.is_company());

        let number: OrganisationNumberFi = "07375462".parse().unwrap();
        assert_eq!(number.normal_form(), "0737546-2");

        assert_eq!(
            OrganisationNumberFi::parse("0112038-8")
                .unwrap_err()
                .reason_code(),
            "invalid_checksum"
        );
        assert!(!OrganisationNumberFi::is_valid("112038-9"));
    }
}
