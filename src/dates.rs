use crate::error::AgeError;
use chrono::{Datelike, NaiveDate};

/// Builds a date from its decimal string parts (`yyyy`, `MM`, `dd`), or `None`
/// if any part is not numeric or the date does not exist.
pub fn parse_date_parts(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let all_digits = [year, month, day]
        .iter()
        .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()));
    if !all_digits {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Age in whole years at `reference`.
///
/// Errors if `reference` falls in a year before the birth year. A reference
/// date earlier in the birth year itself yields -1.
pub fn age_in_years(birth_date: NaiveDate, reference: NaiveDate) -> Result<i32, AgeError> {
    if reference.year() < birth_date.year() {
        return Err(AgeError::ReferenceBeforeBirth {
            reference,
            birth_year: birth_date.year(),
        });
    }

    let mut age = reference.year() - birth_date.year();
    if reference.month() < birth_date.month()
        || (reference.month() == birth_date.month() && reference.day() < birth_date.day())
    {
        age -= 1;
    }
    Ok(age)
}

/// Shared by the civic number types that may not have a birth date.
pub(crate) fn age_of(
    birth_date: Option<NaiveDate>,
    reference: NaiveDate,
) -> Result<i32, AgeError> {
    birth_date
        .ok_or(AgeError::UnknownBirthDate)
        .and_then(|birth_date| age_in_years(birth_date, reference))
}
